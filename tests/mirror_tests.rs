//! # Mirror Condition Integration Tests
//!
//! These tests verify:
//! - Mirroring between typed resources through the Getter/Setter traits
//! - Mirroring from dynamic objects, including decode failures
//! - Fallback and not-yet-reported placeholders
//! - Transition time and observed generation handling

mod common;

use chrono::{TimeZone, Utc};
use common::{dynamic, machine};
use condition_mirror::{
    get, new_mirror_condition, set_mirror_condition, set_mirror_condition_from_unstructured,
    set_unstructured_mirror_condition, unstructured, Condition, ConditionStatus, DecodeError,
    FallbackCondition, TargetConditionType, NOT_YET_REPORTED_REASON,
};
use serde_json::json;

#[test]
fn test_new_mirror_condition_copies_source() {
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let mut ready = Condition::new(
        "Ready",
        ConditionStatus::False,
        "WaitingForInfra",
        "infra not ready",
    )
    .with_last_transition_time(t0);
    ready.observed_generation = Some(5);
    let source = machine("m1", vec![ready]);

    let mirror = new_mirror_condition(&source, "Ready", &[]);

    assert_eq!(mirror.r#type, "Ready");
    assert_eq!(mirror.status, ConditionStatus::False);
    assert_eq!(mirror.reason, "WaitingForInfra");
    assert_eq!(mirror.message, "infra not ready (from Machine/m1)");
    assert_eq!(mirror.last_transition_time, Some(t0));
    assert_eq!(mirror.observed_generation, None);
}

#[test]
fn test_new_mirror_condition_not_yet_reported() {
    let source = machine("m1", vec![]);

    let mirror = new_mirror_condition(&source, "Ready", &[]);

    assert_eq!(mirror.status, ConditionStatus::Unknown);
    assert_eq!(mirror.reason, NOT_YET_REPORTED_REASON);
    assert_eq!(mirror.message, "Condition Ready not yet reported from Machine/m1");
    assert!(mirror.last_transition_time.is_none());
}

#[test]
fn test_new_mirror_condition_fallback_ignores_source_type() {
    let source = machine("m1", vec![]);

    let mirror = new_mirror_condition(
        &source,
        "SomethingElse",
        &[
            &TargetConditionType("InfraReady".to_string()),
            &FallbackCondition::new(ConditionStatus::True, "Provisioned", "infra is up"),
        ],
    );

    assert_eq!(
        mirror,
        Condition::new("InfraReady", ConditionStatus::True, "Provisioned", "infra is up")
    );
}

#[test]
fn test_set_mirror_condition_stamps_target_generation() {
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let source = machine(
        "m1",
        vec![Condition::new("Ready", ConditionStatus::True, "Ok", "all good").with_last_transition_time(t0)],
    );
    let mut target = machine(
        "m2",
        vec![Condition::new("MachineReady", ConditionStatus::False, "Old", "old")],
    );
    target.metadata.generation = Some(12);

    set_mirror_condition(
        &source,
        &mut target,
        "Ready",
        &[&TargetConditionType("MachineReady".to_string())],
    );

    let mirrored = get(&target, "MachineReady").unwrap();
    assert_eq!(mirrored.status, ConditionStatus::True);
    assert_eq!(mirrored.message, "all good (from Machine/m1)");
    assert_eq!(mirrored.last_transition_time, Some(t0));
    assert_eq!(mirrored.observed_generation, Some(12));
    assert_eq!(target.status.as_ref().unwrap().conditions.len(), 1);
}

#[test]
fn test_set_mirror_condition_placeholder_gets_transition_time() {
    let source = machine("m1", vec![]);
    let mut target = machine("m2", vec![]);

    set_mirror_condition(&source, &mut target, "Ready", &[]);

    let mirrored = get(&target, "Ready").unwrap();
    assert_eq!(mirrored.reason, NOT_YET_REPORTED_REASON);
    assert!(mirrored.last_transition_time.is_some());
}

#[test]
fn test_set_mirror_condition_from_unstructured() {
    let source = dynamic(
        "Machine",
        "m1",
        json!({
            "status": {
                "conditions": [{
                    "type": "Ready",
                    "status": "False",
                    "reason": "WaitingForInfra",
                    "message": "infra not ready",
                    "lastTransitionTime": "2024-05-01T10:00:00Z"
                }]
            }
        }),
    );
    let mut target = machine("m2", vec![]);

    set_mirror_condition_from_unstructured(&source, &mut target, "Ready", &[]).unwrap();

    let mirrored = get(&target, "Ready").unwrap();
    assert_eq!(mirrored.reason, "WaitingForInfra");
    assert_eq!(mirrored.message, "infra not ready (from Machine/m1)");
    assert_eq!(
        mirrored.last_transition_time,
        Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
    );
}

#[test]
fn test_set_mirror_condition_from_unstructured_decode_error_leaves_target() {
    let source = dynamic(
        "Machine",
        "m1",
        json!({"status": {"conditions": [{"type": "Ready", "status": 42}]}}),
    );
    let existing = Condition::new("Ready", ConditionStatus::True, "Ok", "");
    let mut target = machine("m2", vec![existing.clone()]);

    let result = set_mirror_condition_from_unstructured(&source, &mut target, "Ready", &[]);

    match result {
        Err(DecodeError::InvalidCondition { owner, index, .. }) => {
            assert_eq!(owner, "Machine/m1");
            assert_eq!(index, 0);
        }
        other => panic!("Expected InvalidCondition, got {other:?}"),
    }
    assert_eq!(target.status.unwrap().conditions, vec![existing]);
}

#[test]
fn test_set_unstructured_mirror_condition_between_dynamic_objects() {
    let source = dynamic("Machine", "m1", json!({"spec": {}}));
    let mut target = dynamic(
        "Cluster",
        "c1",
        json!({"status": {"phase": "Provisioning"}}),
    );
    target.metadata.generation = Some(3);

    set_unstructured_mirror_condition(
        &source,
        &mut target,
        "Ready",
        &[&TargetConditionType("ControlPlaneReady".to_string())],
    )
    .unwrap();

    let mirrored = unstructured::get(&target, "ControlPlaneReady").unwrap().unwrap();
    assert_eq!(mirrored.status, ConditionStatus::Unknown);
    assert_eq!(mirrored.message, "Condition Ready not yet reported from Machine/m1");
    assert_eq!(mirrored.observed_generation, Some(3));
    assert_eq!(target.data["status"]["phase"], json!("Provisioning"));
}

#[test]
fn test_set_unstructured_mirror_condition_rejects_malformed_target() {
    let source = dynamic("Machine", "m1", json!({}));
    let original = json!({"status": {"conditions": "not-a-list"}});
    let mut target = dynamic("Cluster", "c1", original.clone());

    let result = set_unstructured_mirror_condition(&source, &mut target, "Ready", &[]);

    assert!(matches!(result, Err(DecodeError::ConditionsNotAList { .. })));
    assert_eq!(target.data, original);
}
