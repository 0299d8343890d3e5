//! Organisation (tenant) failures.

use uuid::Uuid;

use coverline_automation::titleize;
use coverline_core::{Error, Status, data};

pub mod codes {
    use coverline_core::ErrorCode;

    pub const NOT_FOUND: ErrorCode = ErrorCode::new("organisation.not.found");
    pub const DISABLED: ErrorCode = ErrorCode::new("organisation.disabled");
    pub const FEATURE_NOT_ENABLED: ErrorCode = ErrorCode::new("organisation.feature.not.enabled");
    pub const PRODUCT_NOT_CONFIGURED: ErrorCode =
        ErrorCode::new("organisation.product.not.configured");
    pub const SLUG_TAKEN: ErrorCode = ErrorCode::new("organisation.slug.taken");

    pub static ALL: [ErrorCode; 5] = [
        NOT_FOUND,
        DISABLED,
        FEATURE_NOT_ENABLED,
        PRODUCT_NOT_CONFIGURED,
        SLUG_TAKEN,
    ];
}

pub fn not_found(organisation_id: Uuid) -> Error {
    Error::new(
        codes::NOT_FOUND,
        "Organisation not found",
        "We couldn't find that organisation.",
        Status::NotFound,
    )
    .with_data(data! { "organisationId" => organisation_id })
}

pub fn disabled(organisation_id: Uuid, organisation_name: &str) -> Error {
    Error::new(
        codes::DISABLED,
        "Organisation disabled",
        format!(
            "{organisation_name} has been disabled, so quotes and policies can't be managed at the moment. Contact support if you think this is a mistake."
        ),
        Status::Forbidden,
    )
    .with_data(data! {
        "organisationId" => organisation_id,
        "organisationName" => organisation_name,
    })
}

/// `feature` is the feature flag identifier (`"quoteBuilder"`).
pub fn feature_not_enabled(organisation_id: Uuid, feature: &str) -> Error {
    Error::new(
        codes::FEATURE_NOT_ENABLED,
        "Feature not enabled",
        format!(
            "{} isn't enabled for your organisation. Ask your account manager to turn it on.",
            titleize(feature)
        ),
        Status::Forbidden,
    )
    .with_data(data! { "organisationId" => organisation_id, "feature" => feature })
}

pub fn product_not_configured(organisation_id: Uuid, product: &str, environment: &str) -> Error {
    Error::new(
        codes::PRODUCT_NOT_CONFIGURED,
        "Product not configured",
        format!(
            "The {product} product hasn't been set up in the {} environment yet.",
            titleize(environment)
        ),
        Status::PreconditionFailed,
    )
    .with_data(data! {
        "organisationId" => organisation_id,
        "product" => product,
        "environment" => environment,
    })
}

pub fn slug_taken(slug: &str) -> Error {
    Error::new(
        codes::SLUG_TAKEN,
        "Organisation name unavailable",
        format!("The web address \"{slug}\" is already used by another organisation. Choose a different one."),
        Status::Conflict,
    )
    .with_data(data! { "slug" => slug })
}
