//! # Condition Types
//!
//! Status condition record with the same wire shape as Kubernetes `metav1.Condition`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, JsonSchema)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

impl ConditionStatus {
    /// Wire representation ("True", "False", "Unknown")
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
            ConditionStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for ConditionStatus {
    fn from(status: bool) -> Self {
        bool_to_status(status)
    }
}

/// Convert a bool to either [`ConditionStatus::True`] or [`ConditionStatus::False`]
pub fn bool_to_status(status: bool) -> ConditionStatus {
    if status {
        ConditionStatus::True
    } else {
        ConditionStatus::False
    }
}

/// Condition represents one aspect of the observed state of a resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition, unique within an object's condition list
    pub r#type: String,
    /// Status of the condition (True, False, Unknown)
    pub status: ConditionStatus,
    /// Machine-readable reason for the last transition
    #[serde(default)]
    pub reason: String,
    /// Human-readable message with details about the last transition
    #[serde(default)]
    pub message: String,
    /// Last time the condition transitioned from one status to another (RFC3339)
    /// Unset conditions get a timestamp when they are written to an object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub last_transition_time: Option<DateTime<Utc>>,
    /// Generation of the object this condition was set against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

impl Condition {
    /// Create a condition without transition time or observed generation
    pub fn new(
        r#type: impl Into<String>,
        status: ConditionStatus,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            r#type: r#type.into(),
            status,
            reason: reason.into(),
            message: message.into(),
            last_transition_time: None,
            observed_generation: None,
        }
    }

    /// Set the last transition time
    #[must_use]
    pub fn with_last_transition_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_transition_time = Some(time);
        self
    }
}
