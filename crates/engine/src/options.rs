//! `get_available_options`: the engine's primary observable operation.

use std::collections::HashMap;

use sqlx::PgConnection;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineError;
use crate::evaluator::{filter_available, AvailableOption};
use crate::graph::RuleGraph;
use crate::resolver::resolve_selection;

/// Compute the choices of a target category that remain valid under the
/// current selection.
///
/// All reads go through the given connection; run inside one transaction
/// for a consistent snapshot of choices and rules. An unknown template or
/// category yields an empty list, indistinguishable from an empty category.
pub async fn get_available_options(
    conn: &mut PgConnection,
    template_str_id: &str,
    target_category_str_id: &str,
    selections: &HashMap<String, String>,
) -> Result<Vec<AvailableOption>, EngineError> {
    let targets = konfig_store::choices::fetch_category_choices(
        conn,
        template_str_id,
        target_category_str_id,
    )
    .await?;
    if targets.is_empty() {
        return Ok(Vec::new());
    }

    let selected = resolve_selection(conn, template_str_id, selections).await?;
    if selected.is_empty() {
        // No selection, or nothing resolved: no constraints apply.
        return Ok(targets.iter().map(AvailableOption::from).collect());
    }

    let selected_ids: Vec<Uuid> = selected.iter().copied().collect();
    let edges = konfig_store::rules::fetch_rule_edges(conn, &selected_ids).await?;
    let graph = RuleGraph::from_edges(edges);
    debug!(
        template = template_str_id,
        category = target_category_str_id,
        selected = selected.len(),
        constrained = !graph.is_empty(),
        "evaluating available options"
    );

    Ok(filter_available(&targets, &selected, &graph))
}
