//! The diagnostic value every backend module returns on failure.

use serde::{Deserialize, Serialize};

use crate::code::ErrorCode;
use crate::data::Data;
use crate::status::Status;

/// Structured, user-facing error.
///
/// - `code`: stable machine identifier (see [`ErrorCode`]).
/// - `title` / `message`: shown to end users as-is.
/// - `status`: transport classification for the adapter layer.
/// - `details`: optional supplementary lines, rendered as a list next to `message`.
/// - `data`: optional machine-only context; never displayed directly.
///
/// Values are write-once: fields are private and only the consuming `with_*`
/// builders exist, so an error cannot change after it has been handed out.
/// Construction cannot fail. Deserialization can: a payload with a blank
/// `title` or `message` is rejected with [`BlankErrorText`].
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[error("{title}: {message}")]
#[serde(rename_all = "camelCase", try_from = "ErrorParts")]
pub struct Error {
    code: ErrorCode,
    title: String,
    message: String,
    status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Data>,
}

/// A deserialized error whose user-facing text is blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error {code} has a blank {field}")]
pub struct BlankErrorText {
    pub code: ErrorCode,
    pub field: &'static str,
}

/// Wire shape of [`Error`], checked before it becomes one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorParts {
    code: ErrorCode,
    title: String,
    message: String,
    status: Status,
    #[serde(default)]
    details: Option<Vec<String>>,
    #[serde(default)]
    data: Option<Data>,
}

impl TryFrom<ErrorParts> for Error {
    type Error = BlankErrorText;

    fn try_from(parts: ErrorParts) -> Result<Self, Self::Error> {
        let blank = if parts.title.trim().is_empty() {
            Some("title")
        } else if parts.message.trim().is_empty() {
            Some("message")
        } else {
            None
        };
        if let Some(field) = blank {
            return Err(BlankErrorText {
                code: parts.code,
                field,
            });
        }

        Ok(Self::from_parts(
            parts.code,
            parts.title,
            parts.message,
            parts.status,
            parts.details,
            parts.data,
        ))
    }
}

impl Error {
    pub fn new(
        code: ErrorCode,
        title: impl Into<String>,
        message: impl Into<String>,
        status: Status,
    ) -> Self {
        let title = title.into();
        let message = message.into();
        debug_assert!(!title.is_empty(), "error {code} has an empty title");
        debug_assert!(!message.is_empty(), "error {code} has an empty message");

        Self {
            code,
            title,
            message,
            status,
            details: None,
            data: None,
        }
    }

    /// All six inputs at once; `details` and `data` are kept verbatim.
    pub fn from_parts(
        code: ErrorCode,
        title: impl Into<String>,
        message: impl Into<String>,
        status: Status,
        details: Option<Vec<String>>,
        data: Option<Data>,
    ) -> Self {
        Self {
            details,
            data,
            ..Self::new(code, title, message, status)
        }
    }

    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = Some(details.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_data(mut self, data: Data) -> Self {
        self.data = Some(data);
        self
    }

    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn details(&self) -> Option<&[String]> {
        self.details.as_deref()
    }

    pub fn data(&self) -> Option<&Data> {
        self.data.as_ref()
    }

    pub fn has_code(&self, code: &ErrorCode) -> bool {
        &self.code == code
    }
}
