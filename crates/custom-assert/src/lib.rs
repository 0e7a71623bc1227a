//! Conditionally compiled assertions carrying numeric error codes.
//!
//! Each project defines its own set of error codes (plain integers or a `#[repr(i32)]` enum
//! implementing [`ErrorCode`]) and uses the macros exported here instead of `assert!`:
//!
//! ```rust
//! use custom_assert::{are_equal, is_true};
//!
//! const BAD_HEALTH: i32 = 100;
//!
//! let health = 10;
//! is_true!(health > 0, BAD_HEALTH, "health must be positive, got {}", health);
//! are_equal!(10, health, BAD_HEALTH);
//! ```
//!
//! The macros are live only when the `enabled` feature of this crate is on. Otherwise they expand
//! to a constant-false branch: arguments are still type-checked but never evaluated.
//!
//! A failing macro panics with the message `Code:{code} Message:{message}`, the `Display` of the
//! [`AssertionFailure`] it raised; [`catch`] turns that panic back into the structured value. The
//! plain predicates live in [`checks`] and return `Result<(), AssertionFailure>` regardless of the
//! feature.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod checks;
pub mod code;
pub mod compare;
pub mod failure;
mod macros;
pub mod nullable;

pub use code::{codes, ErrorCode};
pub use compare::{DefaultComparer, EqualityComparer, Real};
pub use failure::{catch, enforce, raise, AssertionFailure};
pub use nullable::Nullable;

/// Whether assertion macros are compiled in (the `enabled` feature).
pub const ENABLED: bool = cfg!(feature = "enabled");
