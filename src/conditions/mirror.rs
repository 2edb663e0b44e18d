//! # Mirror Conditions
//!
//! Builds a copy of one object's condition to be set on another object.
//!
//! There are three outcomes:
//! - the source condition exists: status, reason and transition time are copied
//!   and the message is suffixed with the source object's label;
//! - the source condition is missing and a fallback is configured: the fallback
//!   status, reason and message are used verbatim;
//! - otherwise an Unknown condition with reason `NotYetReported` is created.
//!
//! `observedGeneration` is never copied from the source object; it is stamped when
//! the mirror is set on the target. `lastTransitionTime` is only copied when the
//! source condition exists.

use super::error::DecodeError;
use super::getter::{self, Getter};
use super::owner::{ConditionOwner, ConditionOwnerInfo};
use super::setter::{self, Setter};
use super::types::{Condition, ConditionStatus};
use super::unstructured;
use crate::constants::NOT_YET_REPORTED_REASON;
use kube::core::DynamicObject;
use tracing::debug;

/// Configuration that modifies options for a mirror call
pub trait MirrorOption {
    /// Apply this configuration to the given mirror options
    fn apply_to_mirror(&self, opts: &mut MirrorOptions);
}

/// Options for a mirror call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorOptions {
    target_condition_type: String,
    fallback_status: Option<ConditionStatus>,
    fallback_reason: String,
    fallback_message: String,
}

impl MirrorOptions {
    /// Options targeting `target_condition_type` with no fallback
    pub fn new(target_condition_type: impl Into<String>) -> Self {
        Self {
            target_condition_type: target_condition_type.into(),
            ..Self::default()
        }
    }

    /// Apply the given options in order and return self for chaining
    ///
    /// Later options overwrite fields set by earlier ones.
    pub fn apply_options(&mut self, opts: &[&dyn MirrorOption]) -> &mut Self {
        for opt in opts {
            opt.apply_to_mirror(self);
        }
        self
    }

    pub fn target_condition_type(&self) -> &str {
        &self.target_condition_type
    }

    pub fn fallback_status(&self) -> Option<ConditionStatus> {
        self.fallback_status
    }

    pub fn fallback_reason(&self) -> &str {
        &self.fallback_reason
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback_message
    }
}

/// Sets the type of the mirror condition; defaults to the source condition type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConditionType(pub String);

impl MirrorOption for TargetConditionType {
    fn apply_to_mirror(&self, opts: &mut MirrorOptions) {
        opts.target_condition_type.clone_from(&self.0);
    }
}

/// Condition to use when the source condition does not exist
///
/// Replaces the default Unknown / `NotYetReported` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCondition {
    pub status: ConditionStatus,
    pub reason: String,
    pub message: String,
}

impl FallbackCondition {
    pub fn new(
        status: ConditionStatus,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            reason: reason.into(),
            message: message.into(),
        }
    }
}

impl MirrorOption for FallbackCondition {
    fn apply_to_mirror(&self, opts: &mut MirrorOptions) {
        opts.fallback_status = Some(self.status);
        opts.fallback_reason.clone_from(&self.reason);
        opts.fallback_message.clone_from(&self.message);
    }
}

/// Create a mirror of a source object's condition
///
/// If the condition does not exist on the source object, a condition with
/// status Unknown and reason `NotYetReported` is created instead, unless a
/// [`FallbackCondition`] is given.
pub fn new_mirror_condition<S>(
    source: &S,
    source_condition_type: &str,
    opts: &[&dyn MirrorOption],
) -> Condition
where
    S: Getter + ConditionOwner + ?Sized,
{
    mirror_condition(
        &source.owner_info(),
        getter::get(source, source_condition_type),
        source_condition_type,
        opts,
    )
}

/// Build a mirror condition from an already fetched source condition
///
/// `condition` is `None` when the source object has no condition of
/// `source_condition_type`. Pure and deterministic.
pub fn mirror_condition<O>(
    source: &O,
    condition: Option<&Condition>,
    source_condition_type: &str,
    opts: &[&dyn MirrorOption],
) -> Condition
where
    O: ConditionOwner + ?Sized,
{
    let mut mirror_opts = MirrorOptions::new(source_condition_type);
    mirror_opts.apply_options(opts);

    let owner = source.owner_info();
    build(&owner, condition, source_condition_type, mirror_opts)
}

fn build(
    owner: &ConditionOwnerInfo,
    condition: Option<&Condition>,
    source_condition_type: &str,
    opts: MirrorOptions,
) -> Condition {
    if let Some(condition) = condition {
        return Condition {
            r#type: opts.target_condition_type,
            status: condition.status,
            reason: condition.reason.clone(),
            message: format!("{} (from {owner})", condition.message)
                .trim()
                .to_string(),
            // Transition time reflects when the source condition changed
            last_transition_time: condition.last_transition_time,
            observed_generation: None,
        };
    }

    if let Some(status) = opts.fallback_status {
        return Condition::new(
            opts.target_condition_type,
            status,
            opts.fallback_reason,
            opts.fallback_message,
        );
    }

    Condition::new(
        opts.target_condition_type,
        ConditionStatus::Unknown,
        NOT_YET_REPORTED_REASON,
        format!("Condition {source_condition_type} not yet reported from {owner}"),
    )
}

/// Create a mirror condition from the source object and set it on the target object
pub fn set_mirror_condition<S, T>(
    source: &S,
    target: &mut T,
    source_condition_type: &str,
    opts: &[&dyn MirrorOption],
) where
    S: Getter + ConditionOwner + ?Sized,
    T: Setter + ?Sized,
{
    let mirror = new_mirror_condition(source, source_condition_type, opts);
    debug!(
        source = %source.owner_info(),
        source_condition_type,
        target_condition_type = %mirror.r#type,
        "Setting mirror condition"
    );
    setter::set(target, mirror);
}

/// Create a mirror condition from a dynamic source object and set it on the target object
///
/// Fails when the source conditions cannot be decoded; the target is not modified in that case.
pub fn set_mirror_condition_from_unstructured<T>(
    source: &DynamicObject,
    target: &mut T,
    source_condition_type: &str,
    opts: &[&dyn MirrorOption],
) -> Result<(), DecodeError>
where
    T: Setter + ?Sized,
{
    let condition = unstructured::get(source, source_condition_type)?;
    let mirror = mirror_condition(source, condition.as_ref(), source_condition_type, opts);
    debug!(
        source = %source.owner_info(),
        source_condition_type,
        target_condition_type = %mirror.r#type,
        "Setting mirror condition"
    );
    setter::set(target, mirror);
    Ok(())
}

/// Mirror a condition between two dynamic objects
///
/// Both objects are decoded before anything is written, so a decode failure
/// on either side leaves the target untouched.
pub fn set_unstructured_mirror_condition(
    source: &DynamicObject,
    target: &mut DynamicObject,
    source_condition_type: &str,
    opts: &[&dyn MirrorOption],
) -> Result<(), DecodeError> {
    let condition = unstructured::get(source, source_condition_type)?;
    let mirror = mirror_condition(source, condition.as_ref(), source_condition_type, opts);
    debug!(
        source = %source.owner_info(),
        target = %target.owner_info(),
        source_condition_type,
        target_condition_type = %mirror.r#type,
        "Setting mirror condition"
    );
    unstructured::set(target, mirror)
}
