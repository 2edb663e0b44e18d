//! # Condition Setter
//!
//! Write access to the conditions of strongly typed objects.
//!
//! Writing a condition stamps the fields a condition builder leaves unset:
//! `observedGeneration` comes from the target object, and `lastTransitionTime`
//! is set to now unless the status is unchanged or the caller supplied one.

use super::getter::Getter;
use super::types::Condition;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Objects whose condition list can be modified
pub trait Setter: Getter {
    fn conditions_mut(&mut self) -> &mut Vec<Condition>;

    /// Generation stamped on conditions written to this object
    fn generation(&self) -> Option<i64> {
        None
    }
}

/// Set a condition on the object, replacing any existing condition of the same type
pub fn set<T>(obj: &mut T, condition: Condition)
where
    T: Setter + ?Sized,
{
    let generation = obj.generation();
    upsert(obj.conditions_mut(), condition, generation, Utc::now());
}

/// Replace or append `condition` in `conditions`
///
/// An existing condition with the same status keeps its transition time.
pub(crate) fn upsert(
    conditions: &mut Vec<Condition>,
    mut condition: Condition,
    generation: Option<i64>,
    now: DateTime<Utc>,
) {
    if generation.is_some() {
        condition.observed_generation = generation;
    }

    match conditions
        .iter_mut()
        .find(|existing| existing.r#type == condition.r#type)
    {
        Some(existing) => {
            if existing.status == condition.status {
                condition.last_transition_time = existing
                    .last_transition_time
                    .or(condition.last_transition_time)
                    .or(Some(now));
            } else {
                condition.last_transition_time.get_or_insert(now);
            }
            debug!(
                condition_type = %condition.r#type,
                status = %condition.status,
                "Replacing condition"
            );
            *existing = condition;
        }
        None => {
            condition.last_transition_time.get_or_insert(now);
            debug!(
                condition_type = %condition.r#type,
                status = %condition.status,
                "Adding condition"
            );
            conditions.push(condition);
        }
    }
}
