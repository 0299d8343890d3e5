//! `coverline-core` is the diagnostic value type shared by every backend module.
//!
//! This crate contains **pure values** (no IO, no HTTP). An [`Error`] is built once
//! at the point a failure is detected and handed to whatever transport or
//! presentation layer sits above it.

pub mod code;
pub mod data;
pub mod error;
pub mod status;

pub use code::{ErrorCode, MalformedErrorCode};
pub use data::{Data, Value, data_value};
pub use error::{BlankErrorText, Error};
pub use status::Status;
