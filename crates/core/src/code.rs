//! Stable machine-readable error codes.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dot-delimited, lowercase identifier of one failure condition
/// (e.g. `"policy.already.issued"`).
///
/// Codes are a durable contract: clients may match on them, so a code is never
/// reused for a different condition and never localized. Catalog codes are
/// declared as constants so a malformed literal fails to compile:
///
/// ```
/// use coverline_core::ErrorCode;
///
/// const ISSUED: ErrorCode = ErrorCode::new("policy.already.issued");
/// assert_eq!(ISSUED.category(), "policy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ErrorCode(Cow<'static, str>);

/// A string that does not follow the error-code format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed error code: {0:?}")]
pub struct MalformedErrorCode(pub String);

impl ErrorCode {
    /// Build a code from a static literal.
    ///
    /// Panics on a malformed literal; in a `const` item that panic is a compile error.
    pub const fn new(code: &'static str) -> Self {
        assert!(
            is_well_formed(code),
            "error codes are non-empty, dot-delimited segments of [a-z0-9_-]"
        );
        Self(Cow::Borrowed(code))
    }

    /// Parse a code received at runtime.
    pub fn parse(code: impl Into<String>) -> Result<Self, MalformedErrorCode> {
        let code = code.into();
        if is_well_formed(&code) {
            Ok(Self(Cow::Owned(code)))
        } else {
            Err(MalformedErrorCode(code))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading segment, i.e. the category namespace.
    pub fn category(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// True when the code is `prefix` itself or lives underneath it
    /// (`"automation.providers"` contains `"automation.providers.timeout"`).
    pub fn is_within(&self, prefix: &str) -> bool {
        let prefix = prefix.trim_end_matches('.');
        match self.0.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

/// Format check usable in const context.
pub const fn is_well_formed(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    let mut after_dot = true;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'.' {
            if after_dot {
                return false;
            }
            after_dot = true;
        } else if b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-' {
            after_dot = false;
        } else {
            return false;
        }
        i += 1;
    }

    !after_dot
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ErrorCode {
    type Error = MalformedErrorCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ErrorCode> for String {
    fn from(value: ErrorCode) -> Self {
        value.0.into_owned()
    }
}
