use std::rc::Rc;

use custom_assert::checks;
use custom_assert::{AssertionFailure, DefaultComparer};

fn err(result: Result<(), AssertionFailure>) -> AssertionFailure {
    result.expect_err("check should fail")
}

#[test]
fn is_true_passes_and_fails_with_code() {
    assert!(checks::is_true(true, 3, format_args!("unused")).is_ok());

    let failure = err(checks::is_true(false, 3, format_args!("spawn {} failed", "orc")));
    assert_eq!(failure.code(), 3);
    assert_eq!(failure.to_string(), "Code:3 Message:spawn orc failed");
}

#[test]
fn empty_message_keeps_prefix() {
    let failure = err(checks::is_true(false, 9, format_args!("")));
    assert_eq!(failure.to_string(), "Code:9 Message:");
}

#[test]
fn is_false_is_complement_of_is_true() {
    for condition in [true, false] {
        assert_eq!(
            checks::is_false(condition, 1, format_args!("")).is_err(),
            condition
        );
    }
}

#[test]
fn positional_arguments_are_substituted() {
    let failure = err(checks::fail(5, format_args!("{1} before {0}", "b", "a")));
    assert_eq!(failure.message(), "a before b");
}

#[test]
fn null_checks() {
    let none: Option<u32> = None;
    assert!(checks::is_null(&none, 1, format_args!("")).is_ok());
    assert!(checks::is_null(&Some(1), 1, format_args!("")).is_err());
    assert!(checks::is_not_null(&Some(1), 1, format_args!("")).is_ok());
    assert!(checks::is_not_null(&none, 1, format_args!("")).is_err());

    let null: *const u8 = std::ptr::null();
    assert!(checks::is_null(&null, 1, format_args!("")).is_ok());
}

#[test]
fn destroyed_handle_counts_as_null() {
    let entity = Rc::new("goblin");
    let handle = Rc::downgrade(&entity);
    assert!(checks::is_not_null(&handle, 4, format_args!("")).is_ok());

    drop(entity);
    let failure = err(checks::is_not_null(&handle, 4, format_args!("entity gone")));
    assert_eq!(failure.code(), 4);
    assert!(checks::is_null(&handle, 4, format_args!("")).is_ok());
}

#[test]
fn equality_checks() {
    assert!(checks::are_equal(&5, &5, 1, format_args!("")).is_ok());
    assert!(checks::are_equal(&5, &6, 1, format_args!("")).is_err());
    assert!(checks::are_not_equal(&5, &6, 1, format_args!("")).is_ok());
    assert!(checks::are_not_equal(&5, &5, 1, format_args!("")).is_err());

    // Mixed types through PartialEq<U>.
    let name = String::from("orc");
    assert!(checks::are_equal(&name, "orc", 1, format_args!("")).is_ok());
}

#[test]
fn equality_with_comparer() {
    let same_decade = |a: &u32, b: &u32| a / 10 == b / 10;
    assert!(checks::are_equal_by(&21, &29, &same_decade, 2, format_args!("")).is_ok());
    assert!(checks::are_equal_by(&21, &31, &same_decade, 2, format_args!("")).is_err());
    assert!(checks::are_not_equal_by(&21, &31, &same_decade, 2, format_args!("")).is_ok());
    assert!(checks::are_not_equal_by(&21, &29, &same_decade, 2, format_args!("")).is_err());

    assert!(checks::are_equal_by(&7, &7, &DefaultComparer, 2, format_args!("")).is_ok());
}

#[test]
fn approximate_default_tolerance() {
    assert!(checks::are_approximately_equal(1.0f32, 1.000_001, None, 1, format_args!("")).is_ok());
    assert!(checks::are_approximately_equal(1.0f32, 1.1, None, 1, format_args!("")).is_err());
    assert!(checks::are_not_approximately_equal(1.0f64, 1.1, None, 1, format_args!("")).is_ok());
    assert!(
        checks::are_not_approximately_equal(1.0f64, 1.000_001, None, 1, format_args!("")).is_err()
    );
}

#[test]
fn approximate_boundary_has_no_gap_or_overlap() {
    let tol = 0.5f32;
    assert!(checks::are_approximately_equal(0.0, tol, Some(tol), 1, format_args!("")).is_err());
    assert!(checks::are_not_approximately_equal(0.0, tol, Some(tol), 1, format_args!("")).is_ok());
}

#[test]
fn nan_fails_both_approximate_checks() {
    assert!(checks::are_approximately_equal(f32::NAN, 0.0, None, 1, format_args!("")).is_err());
    assert!(checks::are_not_approximately_equal(f32::NAN, 0.0, None, 1, format_args!("")).is_err());
}

#[test]
fn fail_always_fails_with_code_and_message() {
    let failure = err(checks::fail(77, format_args!("oops")));
    let rendered = failure.to_string();
    assert!(rendered.contains("77"));
    assert!(rendered.contains("oops"));
}
