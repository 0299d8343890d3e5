//! Policy lifecycle failures.
//!
//! Mutual organisations sell memberships rather than policies; factories taking
//! `is_mutual` word their text accordingly. Codes are the same either way.

use chrono::NaiveDate;
use uuid::Uuid;

use coverline_core::{Error, Status, data};

pub mod renewal;

pub mod codes {
    use coverline_core::ErrorCode;

    pub const NOT_FOUND: ErrorCode = ErrorCode::new("policy.not.found");
    pub const ALREADY_ISSUED: ErrorCode = ErrorCode::new("policy.already.issued");
    pub const ALREADY_CANCELLED: ErrorCode = ErrorCode::new("policy.already.cancelled");
    pub const NOT_ACTIVE: ErrorCode = ErrorCode::new("policy.not.active");
    pub const CANCELLATION_BEFORE_INCEPTION: ErrorCode =
        ErrorCode::new("policy.cancellation.before.inception");
    pub const ADJUSTMENT_LOCKED: ErrorCode = ErrorCode::new("policy.adjustment.locked");

    pub static ALL: [ErrorCode; 6] = [
        NOT_FOUND,
        ALREADY_ISSUED,
        ALREADY_CANCELLED,
        NOT_ACTIVE,
        CANCELLATION_BEFORE_INCEPTION,
        ADJUSTMENT_LOCKED,
    ];
}

/// `"membership"` for mutuals, `"policy"` otherwise.
pub(crate) fn cover_noun(is_mutual: bool) -> &'static str {
    if is_mutual { "membership" } else { "policy" }
}

pub(crate) fn capitalized(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn not_found(policy_id: Uuid, is_mutual: bool) -> Error {
    let noun = cover_noun(is_mutual);
    Error::new(
        codes::NOT_FOUND,
        format!("{} not found", capitalized(noun)),
        format!("We couldn't find the {noun} you were looking for. Check the reference and try again."),
        Status::NotFound,
    )
    .with_data(data! { "policyId" => policy_id })
}

pub fn already_issued(policy_number: &str) -> Error {
    Error::new(
        codes::ALREADY_ISSUED,
        "Policy already issued",
        format!(
            "Policy {policy_number} has already been issued. Changes now need to be made as a mid-term adjustment."
        ),
        Status::Conflict,
    )
    .with_data(data! { "policyNumber" => policy_number })
}

pub fn already_cancelled(policy_number: &str, cancelled_on: NaiveDate, is_mutual: bool) -> Error {
    let noun = cover_noun(is_mutual);
    Error::new(
        codes::ALREADY_CANCELLED,
        format!("{} already cancelled", capitalized(noun)),
        format!(
            "This {noun} ({policy_number}) was cancelled on {} and can't be changed.",
            cancelled_on.format("%d %B %Y")
        ),
        Status::Conflict,
    )
    .with_data(data! { "policyNumber" => policy_number, "cancelledOn" => cancelled_on })
}

pub fn not_active(policy_number: &str, is_mutual: bool) -> Error {
    let noun = cover_noun(is_mutual);
    Error::new(
        codes::NOT_ACTIVE,
        format!("{} not active", capitalized(noun)),
        format!("{} {policy_number} isn't currently active, so this action isn't available.", capitalized(noun)),
        Status::PreconditionFailed,
    )
    .with_data(data! { "policyNumber" => policy_number })
}

pub fn cancellation_before_inception(
    policy_number: &str,
    requested: NaiveDate,
    inception: NaiveDate,
) -> Error {
    Error::new(
        codes::CANCELLATION_BEFORE_INCEPTION,
        "Invalid cancellation date",
        format!(
            "The cancellation date {} is before the policy started on {}. Choose a date on or after the start date.",
            requested.format("%d/%m/%Y"),
            inception.format("%d/%m/%Y")
        ),
        Status::BadRequest,
    )
    .with_data(data! {
        "policyNumber" => policy_number,
        "requestedDate" => requested,
        "inceptionDate" => inception,
    })
}

/// Another adjustment is being priced; `locked_by` is shown as a detail.
pub fn adjustment_locked(policy_number: &str, locked_by: &str) -> Error {
    Error::new(
        codes::ADJUSTMENT_LOCKED,
        "Adjustment in progress",
        format!(
            "Another change to policy {policy_number} is already in progress. Finish or discard it before starting a new one."
        ),
        Status::Locked,
    )
    .with_details([format!("Started by: {locked_by}")])
    .with_data(data! { "policyNumber" => policy_number })
}
