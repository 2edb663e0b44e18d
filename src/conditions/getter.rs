//! # Condition Getter
//!
//! Read access to the conditions of strongly typed objects.

use super::types::{Condition, ConditionStatus};

/// Objects exposing a condition list
pub trait Getter {
    fn conditions(&self) -> &[Condition];
}

/// Get the condition with the given type, if it exists
pub fn get<'a, T>(obj: &'a T, condition_type: &str) -> Option<&'a Condition>
where
    T: Getter + ?Sized,
{
    obj.conditions()
        .iter()
        .find(|condition| condition.r#type == condition_type)
}

/// True when the condition exists and its status is True
pub fn is_true<T>(obj: &T, condition_type: &str) -> bool
where
    T: Getter + ?Sized,
{
    get(obj, condition_type).is_some_and(|c| c.status == ConditionStatus::True)
}
