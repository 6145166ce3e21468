//! Selection resolver: maps the caller's partial selection to canonical
//! choice ids.
//!
//! The selection arrives as category string id → choice string id pairs.
//! Pairs that do not resolve against the template are dropped silently:
//! stale or malformed selections degrade to "no constraint" rather than
//! failing the evaluation.

use std::collections::{HashMap, HashSet};

use sqlx::PgConnection;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineError;

/// Resolve a partial selection against one template.
///
/// Returns only the choice ids of pairs that resolved; an empty set is a
/// normal result, treated downstream exactly like an empty selection.
pub async fn resolve_selection(
    conn: &mut PgConnection,
    template_str_id: &str,
    selections: &HashMap<String, String>,
) -> Result<HashSet<Uuid>, EngineError> {
    if selections.is_empty() {
        return Ok(HashSet::new());
    }

    let pairs: Vec<(String, String)> = selections
        .iter()
        .map(|(category, choice)| (category.clone(), choice.clone()))
        .collect();

    let ids = konfig_store::choices::resolve_selection(conn, template_str_id, &pairs).await?;
    if ids.len() < pairs.len() {
        debug!(
            template = template_str_id,
            requested = pairs.len(),
            resolved = ids.len(),
            "dropped unresolvable selection entries"
        );
    }
    Ok(ids.into_iter().collect())
}
