use thiserror::Error;

use konfig_store::StoreError;

/// Errors from engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("rule_type must be 'REQUIRES' or 'INCOMPATIBLE_WITH', got '{0}'")]
    InvalidRuleType(String),

    #[error("a choice cannot have a compatibility rule with itself ('{0}')")]
    SelfReferentialRule(String),

    #[error(
        "one or both choices ('{primary}', '{secondary}') are invalid or do not \
         belong to product template '{template}'"
    )]
    ChoicesNotFound {
        template: String,
        primary: String,
        secondary: String,
    },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Coarse classification callers dispatch on: a malformed request, a
/// well-formed request referencing something absent, or a storage failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CallerInput,
    Reference,
    Storage,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidRuleType(_) | EngineError::SelfReferentialRule(_) => {
                ErrorKind::CallerInput
            }
            EngineError::ChoicesNotFound { .. } => ErrorKind::Reference,
            EngineError::Storage(_) => ErrorKind::Storage,
        }
    }
}
