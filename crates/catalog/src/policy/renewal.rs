//! Renewal failures.

use chrono::NaiveDate;

use coverline_core::{Error, Status, data};

use super::{capitalized, cover_noun};

pub mod codes {
    use coverline_core::ErrorCode;

    pub const NO_POLICY_EXISTS: ErrorCode = ErrorCode::new("policy.renewal.no.policy.exists");
    pub const ALREADY_RENEWED: ErrorCode = ErrorCode::new("policy.renewal.already.renewed");
    pub const WINDOW_NOT_OPEN: ErrorCode = ErrorCode::new("policy.renewal.window.not.open");
    pub const LAPSED: ErrorCode = ErrorCode::new("policy.renewal.lapsed");

    pub static ALL: [ErrorCode; 4] = [NO_POLICY_EXISTS, ALREADY_RENEWED, WINDOW_NOT_OPEN, LAPSED];
}

pub fn no_policy_exists(is_mutual: bool) -> Error {
    let noun = cover_noun(is_mutual);
    Error::new(
        codes::NO_POLICY_EXISTS,
        format!("No {noun} to renew"),
        format!(
            "There is no {noun} to renew. It may have been cancelled or has not been issued yet; start a new quote instead."
        ),
        Status::PreconditionFailed,
    )
}

pub fn already_renewed(policy_number: &str, renewal_number: &str, is_mutual: bool) -> Error {
    let noun = cover_noun(is_mutual);
    Error::new(
        codes::ALREADY_RENEWED,
        format!("{} already renewed", capitalized(noun)),
        format!(
            "This {noun} ({policy_number}) has already been renewed as {renewal_number}. Make any changes on the renewed {noun}."
        ),
        Status::Conflict,
    )
    .with_data(data! { "policyNumber" => policy_number, "renewalNumber" => renewal_number })
}

pub fn window_not_open(policy_number: &str, opens_on: NaiveDate) -> Error {
    Error::new(
        codes::WINDOW_NOT_OPEN,
        "Too early to renew",
        format!(
            "Renewal for {policy_number} opens on {}. Please come back then.",
            opens_on.format("%d %B %Y")
        ),
        Status::PreconditionFailed,
    )
    .with_data(data! { "policyNumber" => policy_number, "opensOn" => opens_on })
}

pub fn lapsed(policy_number: &str, expired_on: NaiveDate, is_mutual: bool) -> Error {
    let noun = cover_noun(is_mutual);
    Error::new(
        codes::LAPSED,
        format!("{} lapsed", capitalized(noun)),
        format!(
            "This {noun} ({policy_number}) ended on {} and can no longer be renewed. A new quote is needed to restart cover.",
            expired_on.format("%d %B %Y")
        ),
        Status::Gone,
    )
    .with_data(data! { "policyNumber" => policy_number, "expiredOn" => expired_on })
}
