//! The predicates behind the assertion macros.
//!
//! These are always compiled and never unwind: a violated check comes back as
//! `Err(AssertionFailure)`. Every check reduces to [`is_true`], which is the only place a failure
//! is built. The message is rendered only on the failing path.

use std::fmt;

use crate::compare::{self, EqualityComparer, Real};
use crate::{AssertionFailure, Nullable};

pub type CheckResult = Result<(), AssertionFailure>;

pub fn is_true(condition: bool, code: i32, message: fmt::Arguments<'_>) -> CheckResult {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailure::new(code, message))
    }
}

pub fn is_false(condition: bool, code: i32, message: fmt::Arguments<'_>) -> CheckResult {
    is_true(!condition, code, message)
}

pub fn is_null<V: Nullable + ?Sized>(value: &V, code: i32, message: fmt::Arguments<'_>) -> CheckResult {
    is_true(value.is_null(), code, message)
}

pub fn is_not_null<V: Nullable + ?Sized>(
    value: &V,
    code: i32,
    message: fmt::Arguments<'_>,
) -> CheckResult {
    is_false(value.is_null(), code, message)
}

pub fn are_equal<T, U>(expected: &T, actual: &U, code: i32, message: fmt::Arguments<'_>) -> CheckResult
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    is_true(expected == actual, code, message)
}

pub fn are_equal_by<T, C>(
    expected: &T,
    actual: &T,
    comparer: &C,
    code: i32,
    message: fmt::Arguments<'_>,
) -> CheckResult
where
    T: ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    is_true(comparer.equals(expected, actual), code, message)
}

pub fn are_not_equal<T, U>(
    expected: &T,
    actual: &U,
    code: i32,
    message: fmt::Arguments<'_>,
) -> CheckResult
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    is_false(expected == actual, code, message)
}

pub fn are_not_equal_by<T, C>(
    expected: &T,
    actual: &T,
    comparer: &C,
    code: i32,
    message: fmt::Arguments<'_>,
) -> CheckResult
where
    T: ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    is_false(comparer.equals(expected, actual), code, message)
}

/// Fails unless `|expected - actual| < tolerance`; `None` means [`Real::DEFAULT_TOLERANCE`].
pub fn are_approximately_equal<F: Real>(
    expected: F,
    actual: F,
    tolerance: Option<F>,
    code: i32,
    message: fmt::Arguments<'_>,
) -> CheckResult {
    let tolerance = tolerance.unwrap_or(F::DEFAULT_TOLERANCE);
    is_true(
        compare::approximately_equal(expected, actual, tolerance),
        code,
        message,
    )
}

/// Fails unless `|expected - actual| >= tolerance`; `None` means [`Real::DEFAULT_TOLERANCE`].
pub fn are_not_approximately_equal<F: Real>(
    expected: F,
    actual: F,
    tolerance: Option<F>,
    code: i32,
    message: fmt::Arguments<'_>,
) -> CheckResult {
    let tolerance = tolerance.unwrap_or(F::DEFAULT_TOLERANCE);
    is_true(
        compare::not_approximately_equal(expected, actual, tolerance),
        code,
        message,
    )
}

pub fn fail(code: i32, message: fmt::Arguments<'_>) -> CheckResult {
    is_true(false, code, message)
}
