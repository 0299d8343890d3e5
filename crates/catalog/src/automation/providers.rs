//! Third-party provider calls made by automations (rating engines, address
//! lookup, credit checks).

use std::time::Duration;

use coverline_automation::AutomationError;
use coverline_core::{Status, data};

pub mod codes {
    use coverline_core::ErrorCode;

    pub const TIMEOUT: ErrorCode = ErrorCode::new("automation.providers.timeout");
    pub const REQUEST_FAILED: ErrorCode = ErrorCode::new("automation.providers.request.failed");
    pub const CREDENTIALS_MISSING: ErrorCode =
        ErrorCode::new("automation.providers.credentials.missing");
    pub const RATE_LIMITED: ErrorCode = ErrorCode::new("automation.providers.rate.limited");
    pub const NOT_SUPPORTED: ErrorCode = ErrorCode::new("automation.providers.not.supported");

    pub static ALL: [ErrorCode; 5] = [
        TIMEOUT,
        REQUEST_FAILED,
        CREDENTIALS_MISSING,
        RATE_LIMITED,
        NOT_SUPPORTED,
    ];
}

pub fn timeout(provider: &str, environment: &str, waited: Duration) -> AutomationError {
    AutomationError::generate_error_with_additional_details_from_data(
        codes::TIMEOUT,
        "Provider timed out",
        format!("{provider} didn't respond in time, so the automation was stopped."),
        Status::GatewayTimeout,
        Some(data! {
            "provider" => provider,
            "environment" => environment,
            "timeoutSeconds" => waited.as_secs(),
        }),
        None,
    )
}

/// `response_body` is the provider's raw payload; it stays in data only.
pub fn request_failed(
    provider: &str,
    environment: &str,
    provider_status: u16,
    response_body: Option<&str>,
) -> AutomationError {
    AutomationError::generate_error(
        codes::REQUEST_FAILED,
        "Provider request failed",
        format!("{provider} rejected the request made by this automation."),
        Status::BadGateway,
        Some(data! {
            "provider" => provider,
            "environment" => environment,
            "providerStatus" => provider_status,
            "responseBody" => response_body,
        }),
        Some(vec![format!("{provider} responded with status {provider_status}.")]),
    )
}

pub fn credentials_missing(provider: &str, entity_environment: &str) -> AutomationError {
    AutomationError::generate_error_with_additional_details_from_data(
        codes::CREDENTIALS_MISSING,
        "Provider not connected",
        format!("No credentials are configured for {provider}. Add them in the integrations settings before running this automation."),
        Status::PreconditionFailed,
        Some(data! {
            "provider" => provider,
            "entityEnvironment" => entity_environment,
        }),
        None,
    )
}

pub fn rate_limited(provider: &str, retry_after: Option<Duration>) -> AutomationError {
    AutomationError::generate_error_with_additional_details_from_data(
        codes::RATE_LIMITED,
        "Provider busy",
        format!("{provider} is receiving too many requests. The automation will be retried."),
        Status::TooManyRequests,
        Some(data! {
            "provider" => provider,
            "retryAfterSeconds" => retry_after.map(|d| d.as_secs()),
        }),
        None,
    )
}

pub fn not_supported(provider: &str, feature: &str) -> AutomationError {
    AutomationError::generate_error_with_additional_details_from_data(
        codes::NOT_SUPPORTED,
        "Not supported by provider",
        format!("{provider} can't be used for this step."),
        Status::NotImplemented,
        Some(data! { "provider" => provider, "feature" => feature }),
        Some(vec!["Choose another provider for this step.".to_string()]),
    )
}
