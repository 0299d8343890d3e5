//! User account and access failures.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use coverline_core::{Error, Status, data};

pub mod codes {
    use coverline_core::ErrorCode;

    pub const NOT_FOUND: ErrorCode = ErrorCode::new("user.not.found");
    pub const DISABLED: ErrorCode = ErrorCode::new("user.disabled");
    pub const EMAIL_IN_USE: ErrorCode = ErrorCode::new("user.email.in.use");
    pub const PERMISSION_DENIED: ErrorCode = ErrorCode::new("user.permission.denied");
    pub const INVITATION_EXPIRED: ErrorCode = ErrorCode::new("user.invitation.expired");
    pub const SESSION_EXPIRED: ErrorCode = ErrorCode::new("user.session.expired");

    pub static ALL: [ErrorCode; 6] = [
        NOT_FOUND,
        DISABLED,
        EMAIL_IN_USE,
        PERMISSION_DENIED,
        INVITATION_EXPIRED,
        SESSION_EXPIRED,
    ];
}

pub fn not_found(user_id: Uuid) -> Error {
    Error::new(
        codes::NOT_FOUND,
        "User not found",
        "We couldn't find that user. They may have been removed from the organisation.",
        Status::NotFound,
    )
    .with_data(data! { "userId" => user_id })
}

pub fn disabled(user_id: Uuid) -> Error {
    Error::new(
        codes::DISABLED,
        "Account disabled",
        "This account has been disabled. Contact your organisation's administrator to regain access.",
        Status::Forbidden,
    )
    .with_data(data! { "userId" => user_id })
}

pub fn email_in_use(email: &str) -> Error {
    Error::new(
        codes::EMAIL_IN_USE,
        "Email address already in use",
        format!("An account with the email address {email} already exists. Sign in instead, or use a different address."),
        Status::Conflict,
    )
    .with_data(data! { "email" => email })
}

/// `permission` is the missing permission name (e.g. `"policy.cancel"`).
pub fn permission_denied(user_id: Uuid, permission: &str) -> Error {
    Error::new(
        codes::PERMISSION_DENIED,
        "Permission denied",
        "You don't have permission to do this. Ask an administrator if you think you should.",
        Status::Forbidden,
    )
    .with_details([format!("Required permission: {permission}")])
    .with_data(data! { "userId" => user_id, "permission" => permission })
}

pub fn invitation_expired(email: &str, expired_at: DateTime<Utc>) -> Error {
    Error::new(
        codes::INVITATION_EXPIRED,
        "Invitation expired",
        format!(
            "The invitation sent to {email} expired on {}. Ask the person who invited you to send a new one.",
            expired_at.format("%d %B %Y")
        ),
        Status::Gone,
    )
    .with_data(data! { "email" => email, "expiredAt" => expired_at })
}

pub fn session_expired() -> Error {
    Error::new(
        codes::SESSION_EXPIRED,
        "Session expired",
        "Your session has expired. Please sign in again.",
        Status::Unauthorized,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_lists_the_permission() {
        let err = permission_denied(Uuid::nil(), "policy.cancel");
        assert_eq!(err.status(), Status::Forbidden);
        assert_eq!(err.details().unwrap(), &["Required permission: policy.cancel".to_string()][..]);
    }

    #[test]
    fn session_expired_has_no_payload() {
        let err = session_expired();
        assert_eq!(err.status(), Status::Unauthorized);
        assert_eq!(err.data(), None);
        assert_eq!(err.details(), None);
    }
}
