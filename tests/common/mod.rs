//! Shared fixtures for integration tests

use condition_mirror::{Condition, ConditionOwner, ConditionOwnerInfo, Getter, Setter};
use kube::core::{DynamicObject, TypeMeta};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimal Machine-like resource carrying conditions in its status
#[derive(CustomResource, Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "Machine",
    group = "cluster.x-k8s.io",
    version = "v1beta2",
    namespaced,
    status = "MachineStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct MachineSpec {
    #[serde(default)]
    pub cluster_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MachineStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl ConditionOwner for Machine {
    fn owner_info(&self) -> ConditionOwnerInfo {
        ConditionOwnerInfo::from_resource(self)
    }
}

impl Getter for Machine {
    fn conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map_or(&[][..], |status| status.conditions.as_slice())
    }
}

impl Setter for Machine {
    fn conditions_mut(&mut self) -> &mut Vec<Condition> {
        &mut self.status.get_or_insert_with(MachineStatus::default).conditions
    }

    fn generation(&self) -> Option<i64> {
        self.metadata.generation
    }
}

pub fn machine(name: &str, conditions: Vec<Condition>) -> Machine {
    let mut machine = Machine::new(name, MachineSpec::default());
    machine.status = Some(MachineStatus { conditions });
    machine
}

pub fn dynamic(kind: &str, name: &str, data: serde_json::Value) -> DynamicObject {
    let mut obj = DynamicObject {
        types: Some(TypeMeta {
            api_version: "cluster.x-k8s.io/v1beta2".to_string(),
            kind: kind.to_string(),
        }),
        metadata: Default::default(),
        data,
    };
    obj.metadata.name = Some(name.to_string());
    obj
}
