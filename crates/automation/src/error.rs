//! Errors surfaced from automation (rules/workflow) execution.

use serde::{Deserialize, Serialize};

use coverline_core::{Data, Error, ErrorCode, Status};

use crate::derive::DetailDeriver;
use crate::fields::TitleCaseFields;

/// An [`Error`] raised by the automation engine.
///
/// Same fields as the base error; it only differs in how it can be built.
/// Dereferences to [`Error`] and converts into it, so call sites that expect the
/// base type accept it via `?`.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[error(transparent)]
#[serde(transparent)]
pub struct AutomationError(Error);

impl AutomationError {
    /// Details and data are kept exactly as supplied.
    ///
    /// Use this when the bag holds values that should not reach end users
    /// verbatim (raw GUIDs, provider payloads).
    pub fn generate_error(
        code: ErrorCode,
        title: impl Into<String>,
        message: impl Into<String>,
        status: Status,
        data: Option<Data>,
        details: Option<Vec<String>>,
    ) -> Self {
        Self::builder(code, title, message, status)
            .data(data)
            .details(details)
            .build()
    }

    /// Details are derived from `data` (see [`DetailDeriver`]) using the
    /// process-wide [`TitleCaseFields`], followed by any explicit `details`.
    pub fn generate_error_with_additional_details_from_data(
        code: ErrorCode,
        title: impl Into<String>,
        message: impl Into<String>,
        status: Status,
        data: Option<Data>,
        details: Option<Vec<String>>,
    ) -> Self {
        Self::builder(code, title, message, status)
            .data(data)
            .details(details)
            .build_with_details_from_data()
    }

    pub fn builder(
        code: ErrorCode,
        title: impl Into<String>,
        message: impl Into<String>,
        status: Status,
    ) -> AutomationErrorBuilder<'static> {
        AutomationErrorBuilder {
            code,
            title: title.into(),
            message: message.into(),
            status,
            data: None,
            details: None,
            fields: TitleCaseFields::global(),
        }
    }

    pub fn as_error(&self) -> &Error {
        &self.0
    }

    pub fn into_error(self) -> Error {
        self.0
    }
}

impl core::ops::Deref for AutomationError {
    type Target = Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Error> for AutomationError {
    fn as_ref(&self) -> &Error {
        &self.0
    }
}

impl From<AutomationError> for Error {
    fn from(value: AutomationError) -> Self {
        value.0
    }
}

/// Collects the inputs of an [`AutomationError`] before choosing how details
/// are produced.
#[derive(Debug, Clone)]
pub struct AutomationErrorBuilder<'a> {
    code: ErrorCode,
    title: String,
    message: String,
    status: Status,
    data: Option<Data>,
    details: Option<Vec<String>>,
    fields: &'a TitleCaseFields,
}

impl<'a> AutomationErrorBuilder<'a> {
    pub fn data(mut self, data: impl Into<Option<Data>>) -> Self {
        self.data = data.into();
        self
    }

    pub fn details(mut self, details: impl Into<Option<Vec<String>>>) -> Self {
        self.details = details.into();
        self
    }

    /// Use `fields` instead of the process-wide allow-list.
    pub fn title_case_fields<'b>(self, fields: &'b TitleCaseFields) -> AutomationErrorBuilder<'b> {
        AutomationErrorBuilder {
            code: self.code,
            title: self.title,
            message: self.message,
            status: self.status,
            data: self.data,
            details: self.details,
            fields,
        }
    }

    /// Details and data verbatim.
    pub fn build(self) -> AutomationError {
        AutomationError(Error::from_parts(
            self.code,
            self.title,
            self.message,
            self.status,
            self.details,
            self.data,
        ))
    }

    /// Derived lines first, explicit details after.
    pub fn build_with_details_from_data(self) -> AutomationError {
        let details = DetailDeriver::new(self.fields).merge(self.data.as_ref(), self.details);
        tracing::trace!(
            code = %self.code,
            lines = details.as_ref().map_or(0, Vec::len),
            "derived automation error details"
        );

        AutomationError(Error::from_parts(
            self.code,
            self.title,
            self.message,
            self.status,
            details,
            self.data,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverline_core::data;
    use serde_json::json;

    const PROVIDER_TIMEOUT: ErrorCode = ErrorCode::new("automation.providers.timeout");

    fn bag() -> Data {
        data! {
            "providerName" => "Acme Rating",
            "environment" => "production",
            "organisationId" => "org-1",
            "correlationId" => Option::<String>::None,
        }
    }

    #[test]
    fn generate_error_keeps_details_and_data_verbatim() {
        let err = AutomationError::generate_error(
            PROVIDER_TIMEOUT,
            "Provider timed out",
            "The rating provider did not respond in time.",
            Status::GatewayTimeout,
            Some(bag()),
            None,
        );

        assert_eq!(err.details(), None);
        assert_eq!(err.data(), Some(&bag()));
        assert_eq!(err.code(), &PROVIDER_TIMEOUT);
        assert_eq!(err.status(), Status::GatewayTimeout);
    }

    #[test]
    fn derived_details_come_before_explicit_ones() {
        let err = AutomationError::generate_error_with_additional_details_from_data(
            PROVIDER_TIMEOUT,
            "Provider timed out",
            "The rating provider did not respond in time.",
            Status::GatewayTimeout,
            Some(bag()),
            Some(vec!["Try again in a few minutes.".to_string()]),
        );

        assert_eq!(
            err.details().unwrap(),
            &[
                "Provider Name: Acme Rating".to_string(),
                "Environment: Production".to_string(),
                "Organisation ID: org-1".to_string(),
                "Try again in a few minutes.".to_string(),
            ][..]
        );
        assert_eq!(err.data(), Some(&bag()));
    }

    #[test]
    fn without_data_explicit_details_pass_through() {
        let err = AutomationError::generate_error_with_additional_details_from_data(
            PROVIDER_TIMEOUT,
            "Provider timed out",
            "The rating provider did not respond in time.",
            Status::GatewayTimeout,
            None,
            None,
        );
        assert_eq!(err.details(), None);
        assert_eq!(err.data(), None);
    }

    #[test]
    fn builder_accepts_injected_fields() {
        let fields = TitleCaseFields::empty().with_field("providerName").unwrap();
        let err = AutomationError::builder(
            PROVIDER_TIMEOUT,
            "Provider timed out",
            "The rating provider did not respond in time.",
            Status::GatewayTimeout,
        )
        .data(data! { "providerName" => "acme rating", "environment" => "production" })
        .title_case_fields(&fields)
        .build_with_details_from_data();

        assert_eq!(
            err.details().unwrap(),
            &["Provider Name: Acme Rating".to_string(), "Environment: production".to_string()][..]
        );
    }

    #[test]
    fn converts_into_base_error() {
        fn run() -> Result<(), Error> {
            Err::<(), _>(AutomationError::generate_error(
                PROVIDER_TIMEOUT,
                "Provider timed out",
                "The rating provider did not respond in time.",
                Status::GatewayTimeout,
                None,
                None,
            ))?;
            Ok(())
        }

        let err = run().unwrap_err();
        assert_eq!(err.code(), &PROVIDER_TIMEOUT);
        assert_eq!(
            err.to_string(),
            "Provider timed out: The rating provider did not respond in time."
        );
    }

    #[test]
    fn serializes_like_the_base_error() {
        let err = AutomationError::generate_error(
            PROVIDER_TIMEOUT,
            "Provider timed out",
            "The rating provider did not respond in time.",
            Status::GatewayTimeout,
            None,
            Some(vec!["a".to_string()]),
        );
        let body = serde_json::to_value(&err).unwrap();
        assert_eq!(body, serde_json::to_value(err.as_error()).unwrap());
        assert_eq!(body["details"], json!(["a"]));
        assert_eq!(body["status"], json!("gateway_timeout"));
    }
}
