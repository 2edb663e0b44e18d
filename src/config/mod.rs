//! # CLI Configuration
//!
//! Settings for `mirrorctl` loaded from environment variables.
//!
//! All configuration has sensible defaults and can be overridden via environment variables.

use crate::constants::{DEFAULT_FIELD_MANAGER, DEFAULT_LOG_FILTER};

/// `mirrorctl` configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Field manager recorded on status patches
    pub field_manager: String,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            field_manager: DEFAULT_FIELD_MANAGER.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            field_manager: var_or_default(&lookup, "MIRROR_FIELD_MANAGER", defaults.field_manager),
            log_filter: var_or_default(&lookup, "MIRROR_LOG_FILTER", defaults.log_filter),
        }
    }
}

/// Read a variable through `lookup` or return the default value
fn var_or_default<F>(lookup: &F, key: &str, default: String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}
