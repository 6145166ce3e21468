//! Shared domain vocabulary for the configurator.
//!
//! The only type that crosses every crate boundary is [`RuleType`]: a closed
//! two-member enum. Rule types arrive as free-form strings at the outermost
//! boundary and are parsed exactly once; everything past that point works
//! with the enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Rule type enum ──────────────────────────────────────────────────

/// The two kinds of compatibility rule between option choices.
///
/// Storage is directed (primary → secondary) for both kinds, but only
/// `Requires` is evaluated directionally; `IncompatibleWith` is treated as
/// symmetric by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    #[sqlx(rename = "REQUIRES")]
    Requires,
    #[sqlx(rename = "INCOMPATIBLE_WITH")]
    IncompatibleWith,
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::Requires => write!(f, "REQUIRES"),
            RuleType::IncompatibleWith => write!(f, "INCOMPATIBLE_WITH"),
        }
    }
}

impl FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "REQUIRES" => Ok(RuleType::Requires),
            "INCOMPATIBLE_WITH" => Ok(RuleType::IncompatibleWith),
            other => Err(format!("unknown rule type: '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_type_roundtrip() {
        for rt in [RuleType::Requires, RuleType::IncompatibleWith] {
            assert_eq!(rt.to_string().parse::<RuleType>().unwrap(), rt);
        }
    }

    #[test]
    fn rule_type_rejects_unknown() {
        assert!("MUTUALLY_EXCLUSIVE".parse::<RuleType>().is_err());
        assert!("requires".parse::<RuleType>().is_err());
        assert!("".parse::<RuleType>().is_err());
    }
}
