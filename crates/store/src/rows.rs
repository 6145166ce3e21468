//! Row types returned by Entity Store queries.
//!
//! Canonical ids are UUIDs assigned by PostgreSQL; string ids are the
//! human-readable identifiers callers use, unique only within their parent
//! scope (template-wide for categories, category-wide for choices).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use konfig_core::RuleType;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TemplateRow {
    pub template_id: Uuid,
    pub str_id: String,
    pub name: String,
    pub base_price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryRow {
    pub category_id: Uuid,
    pub template_id: Uuid,
    pub str_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ChoiceRow {
    pub choice_id: Uuid,
    pub category_id: Uuid,
    pub str_id: String,
    pub name: String,
    pub price_delta: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RuleRow {
    pub rule_id: Uuid,
    pub rule_type: RuleType,
    pub primary_choice_id: Uuid,
    pub secondary_choice_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A rule joined to both endpoints' string ids, for display.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RuleDetails {
    pub rule_id: Uuid,
    pub rule_type: RuleType,
    pub primary_choice_str_id: String,
    pub secondary_choice_str_id: String,
}

/// A compatibility rule edge annotated with the secondary endpoint's
/// category, as consumed by the rule graph builder.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RuleEdge {
    pub rule_type: RuleType,
    pub primary_choice_id: Uuid,
    pub secondary_choice_id: Uuid,
    pub secondary_category_id: Uuid,
}

/// Minimal (canonical id, string id) pair used during rule admission.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChoiceRef {
    pub choice_id: Uuid,
    pub str_id: String,
}
