/// Caller-assigned identifier for a category of assertion.
///
/// The crate does not enumerate codes. Projects either pass integers directly or implement this
/// for their own enum:
///
/// ```rust
/// use custom_assert::ErrorCode;
///
/// #[derive(Clone, Copy)]
/// #[repr(i32)]
/// enum GameError {
///     MissingPrefab = 10,
///     BadSpawnCount = 11,
/// }
///
/// impl ErrorCode for GameError {
///     fn code(self) -> i32 {
///         self as i32
///     }
/// }
///
/// assert_eq!(GameError::BadSpawnCount.code(), 11);
/// ```
pub trait ErrorCode: Copy {
    fn code(self) -> i32;
}

impl ErrorCode for i32 {
    fn code(self) -> i32 {
        self
    }
}

macro_rules! lossless_code {
    ($($ty:ty),*) => {
        $(
            impl ErrorCode for $ty {
                fn code(self) -> i32 {
                    i32::from(self)
                }
            }
        )*
    };
}

lossless_code!(i8, i16, u8, u16);

/// Codes used by the short macro forms that omit an explicit code.
pub mod codes {
    /// `is_not_null!(value)`.
    pub const NOT_NULL: i32 = 1;
    /// `fail!()`.
    pub const FAIL: i32 = 2;
}
