use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe, Location};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A violated assertion.
///
/// Raised assertions unwind with the rendered `Code:{code} Message:{message}` text as the panic
/// payload, so the default panic hook and `#[should_panic(expected = ..)]` both see it. [`catch`]
/// and [`AssertionFailure::from_panic`] parse the structured failure back out of that text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("Code:{code} Message:{message}")]
pub struct AssertionFailure {
    code: i32,
    message: String,
}

impl AssertionFailure {
    /// Renders `message` into a fresh buffer owned by the failure.
    pub fn new(code: i32, message: fmt::Arguments<'_>) -> Self {
        Self {
            code,
            message: message.to_string(),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    /// The formatted caller message, without the `Code:` prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parses the `Code:{code} Message:{message}` rendering back into a failure.
    pub fn parse(rendered: &str) -> Option<Self> {
        let (code, message) = rendered.strip_prefix("Code:")?.split_once(" Message:")?;
        Some(Self {
            code: code.parse().ok()?,
            message: message.to_string(),
        })
    }

    /// Recovers a failure from a panic payload raised by [`raise`].
    ///
    /// Any string panic in the `Code:{code} Message:{message}` shape is accepted.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Option<Self> {
        if let Some(rendered) = payload.downcast_ref::<String>() {
            return Self::parse(rendered);
        }
        payload
            .downcast_ref::<&'static str>()
            .and_then(|rendered| Self::parse(rendered))
    }
}

/// Logs `failure` and panics with its rendering as the message.
#[cold]
#[inline(never)]
#[track_caller]
pub fn raise(failure: AssertionFailure) -> ! {
    let location = Location::caller();
    tracing::error!(
        code = failure.code,
        detail = %failure.message,
        file = location.file(),
        line = location.line(),
        "assertion failed"
    );
    panic!("{failure}")
}

/// Raises the failure held by `result`, if any.
#[inline]
#[track_caller]
pub fn enforce(result: Result<(), AssertionFailure>) {
    if let Err(failure) = result {
        raise(failure);
    }
}

/// Runs `f`, returning the assertion it raised instead of unwinding.
///
/// Panics that are not assertion failures keep unwinding.
pub fn catch<R>(f: impl FnOnce() -> R) -> Result<R, AssertionFailure> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match AssertionFailure::from_panic(payload.as_ref()) {
            Some(failure) => Err(failure),
            None => panic::resume_unwind(payload),
        },
    }
}
