//! Insert/lookup operations for compatibility rules.

use sqlx::PgConnection;
use uuid::Uuid;

use konfig_core::RuleType;

use crate::error::StoreError;
use crate::rows::{RuleDetails, RuleEdge, RuleRow};

/// Insert a validated compatibility rule and return the created row.
pub async fn insert_rule(
    conn: &mut PgConnection,
    rule_type: RuleType,
    primary_choice_id: Uuid,
    secondary_choice_id: Uuid,
) -> Result<RuleRow, StoreError> {
    let row = sqlx::query_as::<_, RuleRow>(
        "INSERT INTO compatibility_rules (rule_type, primary_choice_id, secondary_choice_id)
         VALUES ($1, $2, $3)
         RETURNING rule_id, rule_type, primary_choice_id, secondary_choice_id, created_at",
    )
    .bind(rule_type)
    .bind(primary_choice_id)
    .bind(secondary_choice_id)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

/// Look up a rule by canonical id, joined to both endpoints' string ids.
pub async fn find_rule_by_id(
    conn: &mut PgConnection,
    rule_id: Uuid,
) -> Result<Option<RuleDetails>, StoreError> {
    let row = sqlx::query_as::<_, RuleDetails>(
        "SELECT cr.rule_id, cr.rule_type,
                pc.str_id AS primary_choice_str_id,
                sc.str_id AS secondary_choice_str_id
         FROM compatibility_rules cr
         JOIN option_choices pc ON cr.primary_choice_id = pc.choice_id
         JOIN option_choices sc ON cr.secondary_choice_id = sc.choice_id
         WHERE cr.rule_id = $1",
    )
    .bind(rule_id)
    .fetch_optional(conn)
    .await?;
    Ok(row)
}

/// Fetch every rule touching any of the given choice ids, on either
/// endpoint, annotated with the secondary endpoint's category.
///
/// This is the targeted read the rule graph builder materializes from: one
/// hop out from the selected choices, in both edge directions. An empty
/// result is the normal case for an unconstrained template.
pub async fn fetch_rule_edges(
    conn: &mut PgConnection,
    choice_ids: &[Uuid],
) -> Result<Vec<RuleEdge>, StoreError> {
    if choice_ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows = sqlx::query_as::<_, RuleEdge>(
        "SELECT cr.rule_type, cr.primary_choice_id, cr.secondary_choice_id,
                sc.category_id AS secondary_category_id
         FROM compatibility_rules cr
         JOIN option_choices sc ON sc.choice_id = cr.secondary_choice_id
         WHERE cr.primary_choice_id = ANY($1) OR cr.secondary_choice_id = ANY($1)",
    )
    .bind(choice_ids)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}
