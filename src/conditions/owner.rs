//! # Condition Owner
//!
//! Short identity labels for objects, embedded in generated condition messages.

use kube::core::DynamicObject;
use kube::Resource;
use std::fmt;

/// Identity of the object a condition was read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConditionOwnerInfo {
    pub kind: String,
    pub name: String,
}

impl ConditionOwnerInfo {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Owner info for a statically typed Kubernetes resource
    pub fn from_resource<K>(obj: &K) -> Self
    where
        K: Resource<DynamicType = ()>,
    {
        Self {
            kind: K::kind(&()).into_owned(),
            name: obj.meta().name.clone().unwrap_or_default(),
        }
    }

    /// Owner info for a dynamic object; kind comes from its type metadata
    pub fn from_dynamic(obj: &DynamicObject) -> Self {
        Self {
            kind: obj
                .types
                .as_ref()
                .map(|types| types.kind.clone())
                .unwrap_or_default(),
            name: obj.metadata.name.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for ConditionOwnerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}/{}", self.kind, self.name)
        }
    }
}

/// Objects that can describe themselves for condition messages
pub trait ConditionOwner {
    fn owner_info(&self) -> ConditionOwnerInfo;
}

impl ConditionOwner for DynamicObject {
    fn owner_info(&self) -> ConditionOwnerInfo {
        ConditionOwnerInfo::from_dynamic(self)
    }
}

impl ConditionOwner for ConditionOwnerInfo {
    fn owner_info(&self) -> ConditionOwnerInfo {
        self.clone()
    }
}
