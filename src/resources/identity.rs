//! Group/version/resource identity values

use serde::{Deserialize, Serialize};
use std::fmt;

pub use kube::core::{GroupVersion, GroupVersionResource, TypeMeta};

/// A resource within an API group, without a version
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupResource {
    pub group: String,
    pub resource: String,
}

impl GroupResource {
    pub fn new(group: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            resource: resource.into(),
        }
    }

    /// Parse the qualified form produced by `Display`.
    ///
    /// Everything after the first `.` is the group: `deployments.apps`
    /// becomes `{apps, deployments}` and a bare `pods` lands in the core group.
    pub fn parse(qualified: &str) -> Self {
        match qualified.split_once('.') {
            Some((resource, group)) => Self::new(group, resource),
            None => Self::new("", qualified),
        }
    }

    /// Whether this pair lives in the unnamed core group
    pub fn is_core_group(&self) -> bool {
        self.group.is_empty()
    }
}

impl fmt::Display for GroupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}
