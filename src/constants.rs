//! # Constants
//!
//! Shared constants for condition mirroring and the `mirrorctl` CLI.

/// Reason set on conditions generated when the expected source condition does not exist.
///
/// Used by mirror operations when no fallback is configured.
pub const NOT_YET_REPORTED_REASON: &str = "NotYetReported";

/// Path of the condition list inside a dynamic object, from the object root
pub const CONDITIONS_PATH: [&str; 2] = ["status", "conditions"];

/// Default field manager used when patching target status
pub const DEFAULT_FIELD_MANAGER: &str = "condition-mirror";

/// Default tracing filter for the CLI when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "condition_mirror=info,mirrorctl=info";
