//! Rule graph builder.
//!
//! Materializes the compatibility rules touching the current selection into
//! a small queryable structure. The store only fetches edges one hop out
//! from the selected choices ([`konfig_store::rules::fetch_rule_edges`]),
//! so the graph is rebuilt per evaluation and never persisted.

use std::collections::HashSet;

use uuid::Uuid;

use konfig_core::RuleType;
use konfig_store::RuleEdge;

/// Directed, typed rule edges between choices, queryable per selection.
#[derive(Debug, Default)]
pub struct RuleGraph {
    edges: Vec<RuleEdge>,
}

impl RuleGraph {
    pub fn from_edges(edges: Vec<RuleEdge>) -> Self {
        Self { edges }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Choices excluded by `INCOMPATIBLE_WITH` edges touching the selection.
    ///
    /// Storage is directed but the relation is symmetric: a selected choice
    /// on either endpoint excludes the opposite endpoint.
    pub fn incompatible_with(&self, selected: &HashSet<Uuid>) -> HashSet<Uuid> {
        let mut out = HashSet::new();
        for edge in &self.edges {
            if edge.rule_type != RuleType::IncompatibleWith {
                continue;
            }
            if selected.contains(&edge.primary_choice_id) {
                out.insert(edge.secondary_choice_id);
            }
            if selected.contains(&edge.secondary_choice_id) {
                out.insert(edge.primary_choice_id);
            }
        }
        out
    }

    /// `(required choice id, its category id)` pairs from `REQUIRES` edges
    /// whose primary endpoint is selected.
    ///
    /// Strictly directional and single-hop: a selected secondary implies
    /// nothing, and requirements of required-but-unselected choices are
    /// never followed.
    pub fn required_targets(&self, selected: &HashSet<Uuid>) -> Vec<(Uuid, Uuid)> {
        self.edges
            .iter()
            .filter(|e| {
                e.rule_type == RuleType::Requires && selected.contains(&e.primary_choice_id)
            })
            .map(|e| (e.secondary_choice_id, e.secondary_category_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(rule_type: RuleType, primary: Uuid, secondary: Uuid, secondary_cat: Uuid) -> RuleEdge {
        RuleEdge {
            rule_type,
            primary_choice_id: primary,
            secondary_choice_id: secondary,
            secondary_category_id: secondary_cat,
        }
    }

    #[test]
    fn incompatibility_is_symmetric() {
        let (a, b, cat) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let graph = RuleGraph::from_edges(vec![edge(RuleType::IncompatibleWith, a, b, cat)]);

        let from_primary = graph.incompatible_with(&HashSet::from([a]));
        assert_eq!(from_primary, HashSet::from([b]));

        let from_secondary = graph.incompatible_with(&HashSet::from([b]));
        assert_eq!(from_secondary, HashSet::from([a]));
    }

    #[test]
    fn requires_is_directional() {
        let (a, b, cat) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let graph = RuleGraph::from_edges(vec![edge(RuleType::Requires, a, b, cat)]);

        assert_eq!(graph.required_targets(&HashSet::from([a])), vec![(b, cat)]);
        // Selecting the secondary implies nothing.
        assert!(graph.required_targets(&HashSet::from([b])).is_empty());
    }

    #[test]
    fn requires_is_single_hop() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let (cat_b, cat_c) = (Uuid::new_v4(), Uuid::new_v4());
        let graph = RuleGraph::from_edges(vec![
            edge(RuleType::Requires, a, b, cat_b),
            edge(RuleType::Requires, b, c, cat_c),
        ]);

        // Selecting only A requires B, never C: the chain is not followed.
        assert_eq!(graph.required_targets(&HashSet::from([a])), vec![(b, cat_b)]);
    }

    #[test]
    fn multiple_selections_union_their_requirements() {
        let (a, b, x, y, cat) = (
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        let graph = RuleGraph::from_edges(vec![
            edge(RuleType::Requires, a, x, cat),
            edge(RuleType::Requires, b, y, cat),
        ]);

        let mut targets = graph.required_targets(&HashSet::from([a, b]));
        targets.sort();
        let mut expected = vec![(x, cat), (y, cat)];
        expected.sort();
        assert_eq!(targets, expected);
    }

    #[test]
    fn empty_graph_constrains_nothing() {
        let graph = RuleGraph::default();
        let selected = HashSet::from([Uuid::new_v4()]);
        assert!(graph.is_empty());
        assert!(graph.incompatible_with(&selected).is_empty());
        assert!(graph.required_targets(&selected).is_empty());
    }
}
