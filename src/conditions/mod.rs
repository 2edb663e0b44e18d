//! # Conditions
//!
//! Status condition model, typed and unstructured accessors, and mirror conditions.
//!
//! ```
//! use condition_mirror::{mirror_condition, ConditionOwnerInfo, ConditionStatus, NOT_YET_REPORTED_REASON};
//!
//! let owner = ConditionOwnerInfo::new("Machine", "m1");
//! let mirror = mirror_condition(&owner, None, "Ready", &[]);
//!
//! assert_eq!(mirror.status, ConditionStatus::Unknown);
//! assert_eq!(mirror.reason, NOT_YET_REPORTED_REASON);
//! assert_eq!(mirror.message, "Condition Ready not yet reported from Machine/m1");
//! ```

mod error;
mod getter;
mod mirror;
mod owner;
mod setter;
mod types;
pub mod unstructured;

pub use crate::constants::NOT_YET_REPORTED_REASON;
pub use error::DecodeError;
pub use getter::{get, is_true, Getter};
pub use mirror::{
    mirror_condition, new_mirror_condition, set_mirror_condition,
    set_mirror_condition_from_unstructured, set_unstructured_mirror_condition,
    FallbackCondition, MirrorOption, MirrorOptions, TargetConditionType,
};
pub use owner::{ConditionOwner, ConditionOwnerInfo};
pub use setter::{set, Setter};
pub use types::{bool_to_status, Condition, ConditionStatus};
