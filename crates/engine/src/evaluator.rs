//! Constraint evaluator: the core filtering algorithm.
//!
//! Pure function of prefetched inputs: the target category's choices, the
//! resolved selection, and the rule graph. Exclusion order is load-bearing:
//! incompatibility is checked before the requirement whitelist, so a choice
//! that is simultaneously required and incompatible stays excluded.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use konfig_store::ChoiceRow;

use crate::graph::RuleGraph;

/// One choice that survived constraint evaluation, annotated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableOption {
    pub str_id: String,
    pub name: String,
    pub price_delta: Decimal,
}

impl From<&ChoiceRow> for AvailableOption {
    fn from(row: &ChoiceRow) -> Self {
        Self {
            str_id: row.str_id.clone(),
            name: row.name.clone(),
            price_delta: row.price_delta,
        }
    }
}

/// Filter a target category's choices down to the subset compatible with
/// the current selection.
///
/// - Empty `target_choices` stays empty; an absent template/category and a
///   genuinely empty category are deliberately not distinguished.
/// - An empty `selected` set applies no constraints and returns the full
///   category, which is also how an entirely unresolvable selection
///   degrades.
/// - `INCOMPATIBLE_WITH` excludes first. Then, if any satisfied `REQUIRES`
///   rule points into the target category, the category becomes a
///   whitelist: the union of all required choices, nothing else.
///
/// Result order follows `target_choices`.
pub fn filter_available(
    target_choices: &[ChoiceRow],
    selected: &HashSet<Uuid>,
    graph: &RuleGraph,
) -> Vec<AvailableOption> {
    if target_choices.is_empty() {
        return Vec::new();
    }
    if selected.is_empty() {
        return target_choices.iter().map(AvailableOption::from).collect();
    }

    let incompatible = graph.incompatible_with(selected);

    // All target choices share one category.
    let target_category_id = target_choices[0].category_id;
    let required_in_target: HashSet<Uuid> = graph
        .required_targets(selected)
        .into_iter()
        .filter(|(_, category_id)| *category_id == target_category_id)
        .map(|(choice_id, _)| choice_id)
        .collect();

    target_choices
        .iter()
        .filter(|choice| !incompatible.contains(&choice.choice_id))
        .filter(|choice| {
            required_in_target.is_empty() || required_in_target.contains(&choice.choice_id)
        })
        .map(AvailableOption::from)
        .collect()
}
