//! Command-line argument definitions for the `konfig` binary.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "konfig", about = "Product configurator: templates, choices, and compatibility rules")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a product template.
    CreateTemplate {
        /// Template string id (globally unique).
        str_id: String,
        /// Display name.
        name: String,
        #[arg(long, default_value = "0")]
        base_price: Decimal,
    },

    /// Add an option category to a template.
    AddCategory {
        /// Template string id.
        template: String,
        /// Category string id (unique within the template).
        str_id: String,
        /// Display name.
        name: String,
    },

    /// Add an option choice to a category.
    AddChoice {
        /// Template string id.
        template: String,
        /// Category string id.
        category: String,
        /// Choice string id (unique within the category).
        str_id: String,
        /// Display name.
        name: String,
        #[arg(long, default_value = "0")]
        price_delta: Decimal,
    },

    /// Create a compatibility rule between two choices of a template.
    AddRule {
        /// Template string id.
        template: String,
        /// REQUIRES or INCOMPATIBLE_WITH.
        rule_type: String,
        /// Primary choice string id.
        primary: String,
        /// Secondary choice string id.
        secondary: String,
    },

    /// Show a compatibility rule by its id.
    ShowRule {
        rule_id: Uuid,
    },

    /// List the choices of a category that remain valid under a selection.
    AvailableOptions {
        /// Template string id.
        template: String,
        /// Target category string id.
        category: String,
        /// Current selection, repeatable: --select CATEGORY=CHOICE
        #[arg(long = "select", value_parser = parse_selection)]
        selections: Vec<(String, String)>,
    },
}

/// Parse one `CATEGORY=CHOICE` selection pair.
fn parse_selection(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((category, choice)) if !category.is_empty() && !choice.is_empty() => {
            Ok((category.to_string(), choice.to_string()))
        }
        _ => Err(format!("expected CATEGORY=CHOICE, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selection_pairs() {
        assert_eq!(
            parse_selection("COLOR=red").unwrap(),
            ("COLOR".to_string(), "red".to_string())
        );
        assert!(parse_selection("COLOR").is_err());
        assert!(parse_selection("=red").is_err());
        assert!(parse_selection("COLOR=").is_err());
    }
}
