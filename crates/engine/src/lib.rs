//! Compatibility Rule Resolution Engine.
//!
//! Given a product template's rule set and a partial selection of choices,
//! determines which choices remain valid for a target category. Evaluation
//! is one-hop: only rules anchored directly to the currently selected
//! choices are considered, never chains of implied selections.
//!
//! The engine is a stateless function of its inputs. Every public operation
//! takes an explicit `&mut PgConnection`; run it inside one transaction to
//! get the consistent snapshot the evaluation semantics assume.

pub mod admission;
pub mod error;
pub mod evaluator;
pub mod graph;
pub mod options;
pub mod resolver;

pub use admission::create_compatibility_rule;
pub use error::{EngineError, ErrorKind};
pub use evaluator::AvailableOption;
pub use graph::RuleGraph;
pub use options::get_available_options;
