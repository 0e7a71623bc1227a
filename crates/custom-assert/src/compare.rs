/// Equality used by `are_equal!(.., using = comparer)` and friends.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// The type's own `PartialEq`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultComparer;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultComparer {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> EqualityComparer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Floating point types accepted by the approximate checks.
pub trait Real: Copy + PartialOrd {
    /// Tolerance used when a check does not name one.
    const DEFAULT_TOLERANCE: Self;

    fn abs_diff(self, other: Self) -> Self;
}

impl Real for f32 {
    const DEFAULT_TOLERANCE: Self = 1e-5;

    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }
}

impl Real for f64 {
    const DEFAULT_TOLERANCE: Self = 1e-5;

    fn abs_diff(self, other: Self) -> Self {
        (self - other).abs()
    }
}

/// `|expected - actual| < tolerance`.
///
/// A difference of exactly `tolerance` is *not* approximately equal, so this and
/// [`not_approximately_equal`] partition every non-NaN input. NaN satisfies neither.
pub fn approximately_equal<F: Real>(expected: F, actual: F, tolerance: F) -> bool {
    expected.abs_diff(actual) < tolerance
}

/// `|expected - actual| >= tolerance`.
pub fn not_approximately_equal<F: Real>(expected: F, actual: F, tolerance: F) -> bool {
    expected.abs_diff(actual) >= tolerance
}
