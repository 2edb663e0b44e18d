//! # Decode Error Types
//!
//! Errors raised when conditions stored in a dynamic object do not have the condition shape.

use thiserror::Error;

/// Condition data in a dynamic object could not be decoded (or re-encoded)
#[derive(Debug, Error)]
pub enum DecodeError {
    /// `status` exists but is not an object
    #[error("status of {owner} is not an object")]
    StatusNotAnObject { owner: String },
    /// `status.conditions` exists but is not a list
    #[error("status.conditions of {owner} is not a list")]
    ConditionsNotAList { owner: String },
    /// An entry in `status.conditions` does not decode as a condition
    #[error("failed to decode status.conditions[{index}] of {owner}: {source}")]
    InvalidCondition {
        owner: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    /// The updated condition list could not be written back
    #[error("failed to encode conditions for {owner}: {source}")]
    Encode {
        owner: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Label of the object whose condition data was rejected
    pub fn owner(&self) -> &str {
        match self {
            DecodeError::StatusNotAnObject { owner }
            | DecodeError::ConditionsNotAList { owner }
            | DecodeError::InvalidCondition { owner, .. }
            | DecodeError::Encode { owner, .. } => owner,
        }
    }
}
