//! Transport-status classification.

use serde::{Deserialize, Serialize};

/// Status attached to every [`crate::Error`].
///
/// Mirrors HTTP status semantics so an adapter can pick a wire-level status,
/// without this crate depending on any HTTP library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    BadRequest,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    Conflict,
    Gone,
    PreconditionFailed,
    UnprocessableEntity,
    Locked,
    TooManyRequests,
    /// Non-standard 499: the caller gave up before the request finished.
    ClientClosedRequest,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
}

impl Status {
    /// Every recognized status.
    pub const ALL: [Status; 17] = [
        Status::BadRequest,
        Status::Unauthorized,
        Status::PaymentRequired,
        Status::Forbidden,
        Status::NotFound,
        Status::Conflict,
        Status::Gone,
        Status::PreconditionFailed,
        Status::UnprocessableEntity,
        Status::Locked,
        Status::TooManyRequests,
        Status::ClientClosedRequest,
        Status::InternalServerError,
        Status::NotImplemented,
        Status::BadGateway,
        Status::ServiceUnavailable,
        Status::GatewayTimeout,
    ];

    pub const fn as_u16(self) -> u16 {
        match self {
            Status::BadRequest => 400,
            Status::Unauthorized => 401,
            Status::PaymentRequired => 402,
            Status::Forbidden => 403,
            Status::NotFound => 404,
            Status::Conflict => 409,
            Status::Gone => 410,
            Status::PreconditionFailed => 412,
            Status::UnprocessableEntity => 422,
            Status::Locked => 423,
            Status::TooManyRequests => 429,
            Status::ClientClosedRequest => 499,
            Status::InternalServerError => 500,
            Status::NotImplemented => 501,
            Status::BadGateway => 502,
            Status::ServiceUnavailable => 503,
            Status::GatewayTimeout => 504,
        }
    }

    /// Reverse of [`Status::as_u16`]; `None` for codes outside the recognized set.
    pub fn from_u16(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_u16() == code)
    }

    /// Canonical reason phrase.
    pub const fn reason(self) -> &'static str {
        match self {
            Status::BadRequest => "Bad Request",
            Status::Unauthorized => "Unauthorized",
            Status::PaymentRequired => "Payment Required",
            Status::Forbidden => "Forbidden",
            Status::NotFound => "Not Found",
            Status::Conflict => "Conflict",
            Status::Gone => "Gone",
            Status::PreconditionFailed => "Precondition Failed",
            Status::UnprocessableEntity => "Unprocessable Entity",
            Status::Locked => "Locked",
            Status::TooManyRequests => "Too Many Requests",
            Status::ClientClosedRequest => "Client Closed Request",
            Status::InternalServerError => "Internal Server Error",
            Status::NotImplemented => "Not Implemented",
            Status::BadGateway => "Bad Gateway",
            Status::ServiceUnavailable => "Service Unavailable",
            Status::GatewayTimeout => "Gateway Timeout",
        }
    }

    pub const fn is_client_error(self) -> bool {
        matches!(self.as_u16(), 400..=499)
    }

    pub const fn is_server_error(self) -> bool {
        matches!(self.as_u16(), 500..=599)
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_codes_round_trip() {
        for status in Status::ALL {
            assert_eq!(Status::from_u16(status.as_u16()), Some(status));
        }
    }

    #[test]
    fn numeric_codes_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for status in Status::ALL {
            assert!(seen.insert(status.as_u16()), "duplicate code for {status:?}");
        }
    }

    #[test]
    fn unknown_numeric_code_is_none() {
        assert_eq!(Status::from_u16(200), None);
        assert_eq!(Status::from_u16(418), None);
    }

    #[test]
    fn every_status_is_either_client_or_server_class() {
        for status in Status::ALL {
            assert_ne!(status.is_client_error(), status.is_server_error());
        }
        assert!(Status::ClientClosedRequest.is_client_error());
        assert!(Status::GatewayTimeout.is_server_error());
    }

    #[test]
    fn display_includes_code_and_reason() {
        assert_eq!(Status::PreconditionFailed.to_string(), "412 Precondition Failed");
        assert_eq!(Status::ClientClosedRequest.to_string(), "499 Client Closed Request");
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Status::ClientClosedRequest).unwrap();
        assert_eq!(json, "\"client_closed_request\"");
    }
}
