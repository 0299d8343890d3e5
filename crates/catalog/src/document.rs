//! Policy document failures.

use uuid::Uuid;

use coverline_core::{Error, Status, data};

pub mod codes {
    use coverline_core::ErrorCode;

    pub const NOT_FOUND: ErrorCode = ErrorCode::new("document.not.found");
    pub const TEMPLATE_MISSING: ErrorCode = ErrorCode::new("document.template.missing");
    pub const GENERATION_FAILED: ErrorCode = ErrorCode::new("document.generation.failed");

    pub static ALL: [ErrorCode; 3] = [NOT_FOUND, TEMPLATE_MISSING, GENERATION_FAILED];
}

pub fn not_found(document_id: Uuid) -> Error {
    Error::new(
        codes::NOT_FOUND,
        "Document not found",
        "We couldn't find that document. It may have been replaced by a newer version.",
        Status::NotFound,
    )
    .with_data(data! { "documentId" => document_id })
}

pub fn template_missing(document_type: &str, product: &str) -> Error {
    Error::new(
        codes::TEMPLATE_MISSING,
        "Document template missing",
        format!("There's no {document_type} template set up for the {product} product."),
        Status::PreconditionFailed,
    )
    .with_data(data! { "documentType" => document_type, "product" => product })
}

pub fn generation_failed(document_type: &str, policy_number: &str) -> Error {
    Error::new(
        codes::GENERATION_FAILED,
        "Document couldn't be created",
        format!(
            "Something went wrong while creating the {document_type} for policy {policy_number}. Your cover isn't affected; we'll try again shortly."
        ),
        Status::InternalServerError,
    )
    .with_data(data! { "documentType" => document_type, "policyNumber" => policy_number })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_failure_is_server_class() {
        let err = generation_failed("schedule", "POL-9");
        assert!(err.status().is_server_error());
        assert!(err.message().contains("schedule for policy POL-9"));
    }
}
