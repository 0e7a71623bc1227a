//! Call-site macros.
//!
//! Every macro wraps its check in `if $crate::ENABLED`, so with the `enabled` feature off the
//! arguments are type-checked but never evaluated. Messages take `format!` syntax; an omitted
//! message is empty.

#[doc(hidden)]
#[macro_export]
macro_rules! __check {
    ($check:expr) => {
        if $crate::ENABLED {
            $crate::enforce($check);
        }
    };
}

/// Raises unless `condition` holds.
///
/// ```rust
/// let spawned = 4;
/// custom_assert::is_true!(spawned <= 8, 12, "spawned {} of at most {}", spawned, 8);
/// ```
#[macro_export]
macro_rules! is_true {
    ($condition:expr, $code:expr $(,)?) => {
        $crate::is_true!($condition, $code, "")
    };
    ($condition:expr, $code:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::is_true(
            $condition,
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
}

/// Raises if `condition` holds.
#[macro_export]
macro_rules! is_false {
    ($condition:expr, $code:expr $(,)?) => {
        $crate::is_false!($condition, $code, "")
    };
    ($condition:expr, $code:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::is_false(
            $condition,
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
}

/// Raises unless `value` is [`Nullable::is_null`](crate::Nullable::is_null).
#[macro_export]
macro_rules! is_null {
    ($value:expr, $code:expr $(,)?) => {
        $crate::is_null!($value, $code, "")
    };
    ($value:expr, $code:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::is_null(
            &$value,
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
}

/// Raises if `value` is null. Without a code, uses [`codes::NOT_NULL`](crate::codes::NOT_NULL).
#[macro_export]
macro_rules! is_not_null {
    ($value:expr $(,)?) => {
        $crate::is_not_null!($value, $crate::codes::NOT_NULL, "")
    };
    ($value:expr, $code:expr $(,)?) => {
        $crate::is_not_null!($value, $code, "")
    };
    ($value:expr, $code:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::is_not_null(
            &$value,
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
}

/// Raises unless `expected == actual`.
///
/// `using = comparer` swaps `PartialEq` for an [`EqualityComparer`](crate::EqualityComparer).
/// Closure comparers need annotated parameter types, e.g. `|a: &u32, b: &u32| a / 10 == b / 10`.
#[macro_export]
macro_rules! are_equal {
    ($expected:expr, $actual:expr, $code:expr $(,)?) => {
        $crate::are_equal!($expected, $actual, $code, "")
    };
    ($expected:expr, $actual:expr, $code:expr, using = $comparer:expr $(,)?) => {
        $crate::are_equal!($expected, $actual, $code, using = $comparer, "")
    };
    ($expected:expr, $actual:expr, $code:expr, using = $comparer:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::are_equal_by(
            &$expected,
            &$actual,
            &$comparer,
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
    ($expected:expr, $actual:expr, $code:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::are_equal(
            &$expected,
            &$actual,
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
}

/// Raises if `expected == actual`. Accepts `using = comparer` like [`are_equal!`].
#[macro_export]
macro_rules! are_not_equal {
    ($expected:expr, $actual:expr, $code:expr $(,)?) => {
        $crate::are_not_equal!($expected, $actual, $code, "")
    };
    ($expected:expr, $actual:expr, $code:expr, using = $comparer:expr $(,)?) => {
        $crate::are_not_equal!($expected, $actual, $code, using = $comparer, "")
    };
    ($expected:expr, $actual:expr, $code:expr, using = $comparer:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::are_not_equal_by(
            &$expected,
            &$actual,
            &$comparer,
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
    ($expected:expr, $actual:expr, $code:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::are_not_equal(
            &$expected,
            &$actual,
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
}

/// Raises unless `|expected - actual| < tolerance` (default `1e-5`, or `tolerance = t`).
#[macro_export]
macro_rules! are_approximately_equal {
    ($expected:expr, $actual:expr, $code:expr $(,)?) => {
        $crate::are_approximately_equal!($expected, $actual, $code, "")
    };
    ($expected:expr, $actual:expr, $code:expr, tolerance = $tolerance:expr $(,)?) => {
        $crate::are_approximately_equal!($expected, $actual, $code, tolerance = $tolerance, "")
    };
    ($expected:expr, $actual:expr, $code:expr, tolerance = $tolerance:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::are_approximately_equal(
            $expected,
            $actual,
            ::core::option::Option::Some($tolerance),
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
    ($expected:expr, $actual:expr, $code:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::are_approximately_equal(
            $expected,
            $actual,
            ::core::option::Option::None,
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
}

/// Raises unless `|expected - actual| >= tolerance` (default `1e-5`, or `tolerance = t`).
#[macro_export]
macro_rules! are_not_approximately_equal {
    ($expected:expr, $actual:expr, $code:expr $(,)?) => {
        $crate::are_not_approximately_equal!($expected, $actual, $code, "")
    };
    ($expected:expr, $actual:expr, $code:expr, tolerance = $tolerance:expr $(,)?) => {
        $crate::are_not_approximately_equal!($expected, $actual, $code, tolerance = $tolerance, "")
    };
    ($expected:expr, $actual:expr, $code:expr, tolerance = $tolerance:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::are_not_approximately_equal(
            $expected,
            $actual,
            ::core::option::Option::Some($tolerance),
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
    ($expected:expr, $actual:expr, $code:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::are_not_approximately_equal(
            $expected,
            $actual,
            ::core::option::Option::None,
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
}

/// Raises unconditionally. Without a code, uses [`codes::FAIL`](crate::codes::FAIL).
#[macro_export]
macro_rules! fail {
    () => {
        $crate::fail!($crate::codes::FAIL, "")
    };
    ($code:expr $(,)?) => {
        $crate::fail!($code, "")
    };
    ($code:expr, $($message:tt)+) => {
        $crate::__check!($crate::checks::fail(
            $crate::ErrorCode::code($code),
            ::core::format_args!($($message)+),
        ))
    };
}
