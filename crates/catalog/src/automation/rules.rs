//! Rule and workflow execution failures.

use uuid::Uuid;

use coverline_automation::AutomationError;
use coverline_core::{Status, data};

pub mod codes {
    use coverline_core::ErrorCode;

    pub const EXECUTION_FAILED: ErrorCode = ErrorCode::new("automation.rules.execution.failed");
    pub const CONDITION_INVALID: ErrorCode = ErrorCode::new("automation.rules.condition.invalid");
    pub const ACTION_NOT_SUPPORTED: ErrorCode =
        ErrorCode::new("automation.rules.action.not.supported");
    pub const RUN_CANCELLED: ErrorCode = ErrorCode::new("automation.rules.run.cancelled");

    pub static ALL: [ErrorCode; 4] = [
        EXECUTION_FAILED,
        CONDITION_INVALID,
        ACTION_NOT_SUPPORTED,
        RUN_CANCELLED,
    ];
}

pub fn execution_failed(
    rule_name: &str,
    entity_type: &str,
    entity_id: Uuid,
    entity_environment: &str,
) -> AutomationError {
    AutomationError::generate_error_with_additional_details_from_data(
        codes::EXECUTION_FAILED,
        "Automation failed",
        format!("The automation \"{rule_name}\" couldn't finish. No further steps were run."),
        Status::InternalServerError,
        Some(data! {
            "ruleName" => rule_name,
            "entityType" => entity_type,
            "entityId" => entity_id,
            "entityEnvironment" => entity_environment,
        }),
        None,
    )
}

/// `problems` are the validator's messages, shown as explicit details.
pub fn condition_invalid(rule_id: Uuid, problems: Vec<String>) -> AutomationError {
    AutomationError::generate_error(
        codes::CONDITION_INVALID,
        "Automation condition is invalid",
        "This automation's trigger condition can't be evaluated. Fix the condition and save the automation again.",
        Status::UnprocessableEntity,
        Some(data! { "ruleId" => rule_id }),
        Some(problems),
    )
}

pub fn action_not_supported(action: &str, feature: &str) -> AutomationError {
    AutomationError::generate_error_with_additional_details_from_data(
        codes::ACTION_NOT_SUPPORTED,
        "Action not supported",
        format!("The action \"{action}\" isn't available for this kind of automation."),
        Status::BadRequest,
        Some(data! { "action" => action, "feature" => feature }),
        None,
    )
}

pub fn run_cancelled(run_id: Uuid) -> AutomationError {
    AutomationError::generate_error(
        codes::RUN_CANCELLED,
        "Automation run cancelled",
        "The run was cancelled before it finished. Any completed steps have been kept.",
        Status::ClientClosedRequest,
        Some(data! { "runId" => run_id }),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_failed_derives_labelled_lines() {
        let entity_id = Uuid::nil();
        let err = execution_failed("Renewal reminder", "policy", entity_id, "production");
        assert_eq!(
            err.details().unwrap(),
            &[
                "Rule Name: Renewal reminder".to_string(),
                "Entity Type: policy".to_string(),
                format!("Entity ID: {entity_id}"),
                "Entity Environment: Production".to_string(),
            ][..]
        );
    }

    #[test]
    fn run_cancelled_uses_client_closed_request() {
        let err = run_cancelled(Uuid::nil());
        assert_eq!(err.status().as_u16(), 499);
        assert_eq!(err.details(), None);
    }

    #[test]
    fn condition_problems_are_details_verbatim() {
        let err = condition_invalid(Uuid::nil(), vec!["Unknown field: premiumm".to_string()]);
        assert_eq!(err.details().unwrap(), &["Unknown field: premiumm".to_string()][..]);
    }
}
