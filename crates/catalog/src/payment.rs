//! Payment and refund failures.

use uuid::Uuid;

use coverline_core::{Error, Status, data};

pub mod codes {
    use coverline_core::ErrorCode;

    pub const DECLINED: ErrorCode = ErrorCode::new("payment.declined");
    pub const PROVIDER_UNAVAILABLE: ErrorCode = ErrorCode::new("payment.provider.unavailable");
    pub const AMOUNT_MISMATCH: ErrorCode = ErrorCode::new("payment.amount.mismatch");
    pub const ALREADY_REFUNDED: ErrorCode = ErrorCode::new("payment.already.refunded");
    pub const MANDATE_MISSING: ErrorCode = ErrorCode::new("payment.mandate.missing");

    pub static ALL: [ErrorCode; 5] = [
        DECLINED,
        PROVIDER_UNAVAILABLE,
        AMOUNT_MISMATCH,
        ALREADY_REFUNDED,
        MANDATE_MISSING,
    ];
}

/// `1250, "GBP"` → `"12.50 GBP"`.
fn format_minor(amount: i64, currency: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02} {currency}", abs / 100, abs % 100)
}

/// `reason` comes from the card processor and is kept machine-side only.
pub fn declined(payment_reference: &str, reason: &str) -> Error {
    Error::new(
        codes::DECLINED,
        "Payment declined",
        "Your payment was declined by the card issuer. No money has been taken; please try another card or contact your bank.",
        Status::PaymentRequired,
    )
    .with_data(data! { "paymentReference" => payment_reference, "declineReason" => reason })
}

pub fn provider_unavailable(provider: &str) -> Error {
    Error::new(
        codes::PROVIDER_UNAVAILABLE,
        "Payments temporarily unavailable",
        "We can't take payments right now. Nothing has been charged; please try again in a few minutes.",
        Status::ServiceUnavailable,
    )
    .with_data(data! { "provider" => provider })
}

pub fn amount_mismatch(quote_id: Uuid, expected: i64, received: i64, currency: &str) -> Error {
    Error::new(
        codes::AMOUNT_MISMATCH,
        "Payment amount doesn't match",
        format!(
            "The amount paid ({}) doesn't match the premium due ({}). The price may have changed; refresh the quote and try again.",
            format_minor(received, currency),
            format_minor(expected, currency)
        ),
        Status::Conflict,
    )
    .with_data(data! {
        "quoteId" => quote_id,
        "expectedAmount" => expected,
        "receivedAmount" => received,
        "currency" => currency,
    })
}

pub fn already_refunded(payment_reference: &str) -> Error {
    Error::new(
        codes::ALREADY_REFUNDED,
        "Payment already refunded",
        format!("Payment {payment_reference} has already been refunded in full."),
        Status::Conflict,
    )
    .with_data(data! { "paymentReference" => payment_reference })
}

pub fn mandate_missing(policy_number: &str) -> Error {
    Error::new(
        codes::MANDATE_MISSING,
        "Direct Debit not set up",
        format!(
            "There's no active Direct Debit mandate for policy {policy_number}, so instalments can't be collected. Set up a mandate to continue paying monthly."
        ),
        Status::PreconditionFailed,
    )
    .with_data(data! { "policyNumber" => policy_number })
}
