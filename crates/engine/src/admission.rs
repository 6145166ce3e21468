//! Rule admission checker: validates a new compatibility rule before it is
//! persisted.
//!
//! Shape checks (rule type, self-reference) run before any storage access;
//! the endpoint lookup and the insert then share the caller's connection
//! handle, so running inside one transaction makes admission atomic with
//! its validation read.

use std::collections::HashMap;

use sqlx::PgConnection;
use tracing::info;
use uuid::Uuid;

use konfig_core::RuleType;
use konfig_store::RuleRow;

use crate::error::EngineError;

/// Validate the storage-independent shape of a rule request.
///
/// Rejects unknown rule types and self-referential rules; both are caller
/// input errors that must never reach the database.
pub fn validate_rule_shape(
    rule_type: &str,
    primary_str_id: &str,
    secondary_str_id: &str,
) -> Result<RuleType, EngineError> {
    let parsed = rule_type
        .parse::<RuleType>()
        .map_err(|_| EngineError::InvalidRuleType(rule_type.to_string()))?;
    if primary_str_id == secondary_str_id {
        return Err(EngineError::SelfReferentialRule(primary_str_id.to_string()));
    }
    Ok(parsed)
}

/// Admit and persist a compatibility rule between two choices of one
/// template.
///
/// The scoped lookup must return exactly two rows, proving both endpoints
/// exist and belong to the template; otherwise the request fails with a
/// reference error and nothing is written.
pub async fn create_compatibility_rule(
    conn: &mut PgConnection,
    template_str_id: &str,
    rule_type: &str,
    primary_str_id: &str,
    secondary_str_id: &str,
) -> Result<RuleRow, EngineError> {
    let parsed = validate_rule_shape(rule_type, primary_str_id, secondary_str_id)?;

    let choices = konfig_store::choices::lookup_choices_for_rule(
        conn,
        template_str_id,
        primary_str_id,
        secondary_str_id,
    )
    .await?;

    let not_found = || EngineError::ChoicesNotFound {
        template: template_str_id.to_string(),
        primary: primary_str_id.to_string(),
        secondary: secondary_str_id.to_string(),
    };

    if choices.len() != 2 {
        return Err(not_found());
    }

    let by_str_id: HashMap<&str, Uuid> = choices
        .iter()
        .map(|c| (c.str_id.as_str(), c.choice_id))
        .collect();
    let primary_id = *by_str_id.get(primary_str_id).ok_or_else(not_found)?;
    let secondary_id = *by_str_id.get(secondary_str_id).ok_or_else(not_found)?;

    let rule = konfig_store::rules::insert_rule(conn, parsed, primary_id, secondary_id).await?;
    info!(
        rule_id = %rule.rule_id,
        rule_type = %rule.rule_type,
        template = template_str_id,
        "compatibility rule created"
    );
    Ok(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    #[test]
    fn accepts_both_rule_types() {
        assert_eq!(
            validate_rule_shape("REQUIRES", "red", "L").unwrap(),
            RuleType::Requires
        );
        assert_eq!(
            validate_rule_shape("INCOMPATIBLE_WITH", "red", "L").unwrap(),
            RuleType::IncompatibleWith
        );
    }

    #[test]
    fn rejects_unknown_rule_type_as_caller_input() {
        let err = validate_rule_shape("EXCLUDES", "red", "L").unwrap_err();
        assert!(matches!(err, EngineError::InvalidRuleType(_)));
        assert_eq!(err.kind(), ErrorKind::CallerInput);
    }

    #[test]
    fn rejects_self_referential_rule_as_caller_input() {
        let err = validate_rule_shape("REQUIRES", "red", "red").unwrap_err();
        assert!(matches!(err, EngineError::SelfReferentialRule(_)));
        assert_eq!(err.kind(), ErrorKind::CallerInput);
    }

    #[test]
    fn rule_type_is_checked_before_self_reference() {
        // Both violations present: the rule type error is reported first.
        let err = validate_rule_shape("EXCLUDES", "red", "red").unwrap_err();
        assert!(matches!(err, EngineError::InvalidRuleType(_)));
    }
}
