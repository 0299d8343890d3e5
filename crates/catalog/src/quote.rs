//! Quote lifecycle failures.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use coverline_automation::humanize_label;
use coverline_core::{Error, Status, data};

pub mod codes {
    use coverline_core::ErrorCode;

    pub const NOT_FOUND: ErrorCode = ErrorCode::new("quote.not.found");
    pub const ALREADY_SUBMITTED: ErrorCode = ErrorCode::new("quote.already.submitted");
    pub const EXPIRED: ErrorCode = ErrorCode::new("quote.expired");
    pub const REFERRED: ErrorCode = ErrorCode::new("quote.referred.for.underwriting");
    pub const DECLINED: ErrorCode = ErrorCode::new("quote.declined");
    pub const START_DATE_IN_PAST: ErrorCode = ErrorCode::new("quote.start.date.in.past");
    pub const MISSING_RATING_FACTORS: ErrorCode = ErrorCode::new("quote.missing.rating.factors");

    pub static ALL: [ErrorCode; 7] = [
        NOT_FOUND,
        ALREADY_SUBMITTED,
        EXPIRED,
        REFERRED,
        DECLINED,
        START_DATE_IN_PAST,
        MISSING_RATING_FACTORS,
    ];
}

pub fn not_found(quote_id: Uuid) -> Error {
    Error::new(
        codes::NOT_FOUND,
        "Quote not found",
        "We couldn't find the quote you were looking for. It may have been removed, or the link you followed may be out of date.",
        Status::NotFound,
    )
    .with_data(data! { "quoteId" => quote_id })
}

pub fn already_submitted(quote_reference: &str) -> Error {
    Error::new(
        codes::ALREADY_SUBMITTED,
        "Quote already submitted",
        format!(
            "Quote {quote_reference} has already been submitted and can no longer be changed. Create a new quote if the details need to change."
        ),
        Status::Conflict,
    )
    .with_data(data! { "quoteReference" => quote_reference })
}

pub fn expired(quote_reference: &str, expired_at: DateTime<Utc>) -> Error {
    Error::new(
        codes::EXPIRED,
        "Quote expired",
        format!(
            "Quote {quote_reference} expired on {}. Prices are only guaranteed for a limited time, so please requote to continue.",
            expired_at.format("%d %B %Y")
        ),
        Status::Gone,
    )
    .with_data(data! {
        "quoteReference" => quote_reference,
        "expiredAt" => expired_at,
    })
}

/// `reasons` are underwriter-facing referral triggers shown as details.
pub fn referred_for_underwriting(quote_reference: &str, reasons: &[&str]) -> Error {
    Error::new(
        codes::REFERRED,
        "Quote referred",
        format!(
            "Quote {quote_reference} needs to be reviewed by an underwriter before it can be bound. We'll be in touch once the review is complete."
        ),
        Status::UnprocessableEntity,
    )
    .with_details(reasons.iter().copied())
    .with_data(data! { "quoteReference" => quote_reference })
}

pub fn declined(quote_reference: &str) -> Error {
    Error::new(
        codes::DECLINED,
        "Quote declined",
        format!(
            "Unfortunately we're unable to offer cover for quote {quote_reference} based on the information provided."
        ),
        Status::UnprocessableEntity,
    )
    .with_data(data! { "quoteReference" => quote_reference })
}

pub fn start_date_in_past(start_date: NaiveDate, today: NaiveDate) -> Error {
    Error::new(
        codes::START_DATE_IN_PAST,
        "Start date in the past",
        format!(
            "The requested start date of {} is before today ({}). Cover can't be backdated; choose today or a later date.",
            start_date.format("%d/%m/%Y"),
            today.format("%d/%m/%Y")
        ),
        Status::BadRequest,
    )
    .with_data(data! { "startDate" => start_date, "today" => today })
}

/// `missing` holds field identifiers (`dateOfBirth`); details list them readably.
pub fn missing_rating_factors(quote_id: Uuid, missing: &[&str]) -> Error {
    Error::new(
        codes::MISSING_RATING_FACTORS,
        "Missing information",
        "We need a few more details before we can price this quote.",
        Status::BadRequest,
    )
    .with_details(missing.iter().map(|field| humanize_label(field)))
    .with_data(data! { "quoteId" => quote_id, "missingFields" => missing })
}
