//! # Unstructured Conditions
//!
//! Reads and writes conditions stored in schema-less objects (`DynamicObject`
//! or a raw JSON tree) under `status.conditions`.
//!
//! Reading is strict: when a condition list is present, every entry must decode
//! as a [`Condition`]. A missing `status` or `conditions` field is not an error.

use super::error::DecodeError;
use super::owner::ConditionOwnerInfo;
use super::setter::upsert;
use super::types::Condition;
use crate::constants::CONDITIONS_PATH;
use chrono::Utc;
use kube::core::DynamicObject;
use serde::Deserialize as _;
use serde_json::{Map, Value};

/// Decode all conditions of a dynamic object
pub fn get_all(obj: &DynamicObject) -> Result<Vec<Condition>, DecodeError> {
    get_all_from_value(&obj.data, &ConditionOwnerInfo::from_dynamic(obj))
}

/// Decode the condition with the given type from a dynamic object
///
/// Returns `Ok(None)` when the object has no such condition.
pub fn get(obj: &DynamicObject, condition_type: &str) -> Result<Option<Condition>, DecodeError> {
    Ok(get_all(obj)?
        .into_iter()
        .find(|condition| condition.r#type == condition_type))
}

/// Decode all conditions from a raw object tree
///
/// `owner` is only used to label errors.
pub fn get_all_from_value(
    value: &Value,
    owner: &ConditionOwnerInfo,
) -> Result<Vec<Condition>, DecodeError> {
    let [status_key, conditions_key] = CONDITIONS_PATH;

    let status = match value.get(status_key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Object(status)) => status,
        Some(_) => {
            return Err(DecodeError::StatusNotAnObject {
                owner: owner.to_string(),
            })
        }
    };

    let entries = match status.get(conditions_key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(DecodeError::ConditionsNotAList {
                owner: owner.to_string(),
            })
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Condition::deserialize(entry).map_err(|source| DecodeError::InvalidCondition {
                owner: owner.to_string(),
                index,
                source,
            })
        })
        .collect()
}

/// Set a condition on a dynamic object, replacing any existing condition of the same type
///
/// Follows the same stamping rules as [`super::setter::set`], with the generation taken
/// from `metadata.generation`. The object is left untouched when decoding fails.
pub fn set(obj: &mut DynamicObject, condition: Condition) -> Result<(), DecodeError> {
    let owner = ConditionOwnerInfo::from_dynamic(obj);
    let mut conditions = get_all_from_value(&obj.data, &owner)?;
    upsert(&mut conditions, condition, obj.metadata.generation, Utc::now());
    write_conditions(&mut obj.data, &conditions, &owner)
}

/// Replace `status.conditions` in a raw object tree
///
/// Creates `status` when it is missing. Other status fields are preserved.
pub fn write_conditions(
    value: &mut Value,
    conditions: &[Condition],
    owner: &ConditionOwnerInfo,
) -> Result<(), DecodeError> {
    let [status_key, conditions_key] = CONDITIONS_PATH;

    let encoded = serde_json::to_value(conditions).map_err(|source| DecodeError::Encode {
        owner: owner.to_string(),
        source,
    })?;

    let status = object_mut(value)
        .and_then(|root| {
            object_mut(
                root.entry(status_key)
                    .or_insert_with(|| Value::Object(Map::new())),
            )
        })
        .ok_or_else(|| DecodeError::StatusNotAnObject {
            owner: owner.to_string(),
        })?;
    status.insert(conditions_key.to_string(), encoded);
    Ok(())
}

/// View a value as an object, turning `null` into an empty object first
fn object_mut(value: &mut Value) -> Option<&mut Map<String, Value>> {
    if value.is_null() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut()
}
