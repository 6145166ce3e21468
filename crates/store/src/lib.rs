//! Entity Store: PostgreSQL persistence for the product configurator.
//!
//! Templates own categories, categories own choices, and compatibility
//! rules are directed edges between choices. Every operation takes an
//! explicit `&mut PgConnection`, so the caller decides transaction scope:
//! pass a transaction handle to get read-consistent snapshots across
//! several fetches, or a plain pool connection for one-shot lookups.

pub mod categories;
pub mod choices;
pub mod db;
pub mod error;
pub mod rows;
pub mod rules;
pub mod templates;

pub use error::StoreError;
pub use rows::{CategoryRow, ChoiceRef, ChoiceRow, RuleDetails, RuleEdge, RuleRow, TemplateRow};
