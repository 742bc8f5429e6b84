//! Descriptor for a single API resource type

use super::identity::{GroupResource, GroupVersion, GroupVersionResource, TypeMeta};
use super::object::{Object, ObjectFactory};
use crate::error::StatusError;
use kube::core::ApiResource;
use std::fmt;
use std::sync::Arc;

/// Immutable description of one resource type served by an API group.
///
/// Holds the group/version/kind identity, the plural and singular names,
/// and factories for empty instances of the object and its list. All five
/// names are expected to be non-empty; nothing here checks that.
#[derive(Clone)]
pub struct ResourceInfo {
    group: String,
    version: String,
    resource_name: String,
    singular_name: String,
    kind: String,
    new_object: ObjectFactory,
    new_list: ObjectFactory,
}

impl ResourceInfo {
    pub fn new<O, L>(
        group: impl Into<String>,
        version: impl Into<String>,
        resource_name: impl Into<String>,
        singular_name: impl Into<String>,
        kind: impl Into<String>,
        new_object: O,
        new_list: L,
    ) -> Self
    where
        O: Fn() -> Box<dyn Object> + Send + Sync + 'static,
        L: Fn() -> Box<dyn Object> + Send + Sync + 'static,
    {
        Self::from_factories(
            group,
            version,
            resource_name,
            singular_name,
            kind,
            Arc::new(new_object),
            Arc::new(new_list),
        )
    }

    /// Same as [`ResourceInfo::new`] for factories that are already shared
    pub fn from_factories(
        group: impl Into<String>,
        version: impl Into<String>,
        resource_name: impl Into<String>,
        singular_name: impl Into<String>,
        kind: impl Into<String>,
        new_object: ObjectFactory,
        new_list: ObjectFactory,
    ) -> Self {
        let info = Self {
            group: group.into(),
            version: version.into(),
            resource_name: resource_name.into(),
            singular_name: singular_name.into(),
            kind: kind.into(),
            new_object,
            new_list,
        };
        tracing::debug!(
            group = %info.group,
            version = %info.version,
            resource = %info.resource_name,
            kind = %info.kind,
            "resource info created"
        );
        info
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Plural, path-safe name (e.g. "pods")
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn singular_name(&self) -> &str {
        &self.singular_name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Kind and apiVersion for serialized objects.
    ///
    /// `api_version` is always `group + "/" + version`, so the core group
    /// yields `"/v1"` rather than the conventional `"v1"`. Callers that need
    /// the conventional form should use [`ResourceInfo::api_resource`].
    pub fn type_meta(&self) -> TypeMeta {
        TypeMeta {
            api_version: format!("{}/{}", self.group, self.version),
            kind: self.kind.clone(),
        }
    }

    pub fn group_version(&self) -> GroupVersion {
        GroupVersion::gv(&self.group, &self.version)
    }

    /// Group paired with the plural resource name
    pub fn group_resource(&self) -> GroupResource {
        GroupResource::new(&self.group, &self.resource_name)
    }

    /// Group paired with the singular name; the key for not-found errors
    pub fn singular_group_resource(&self) -> GroupResource {
        GroupResource::new(&self.group, &self.singular_name)
    }

    pub fn group_version_resource(&self) -> GroupVersionResource {
        GroupVersionResource::gvr(&self.group, &self.version, &self.resource_name)
    }

    /// Storage key prefix for the resource or one of its subresources.
    ///
    /// # Panics
    ///
    /// Panics when given more than one subresource segment.
    pub fn storage_path(&self, subresources: &[&str]) -> String {
        match subresources {
            [] => self.resource_name.clone(),
            [sub] => format!("{}/{}", self.resource_name, sub),
            _ => panic!(
                "invalid subresource path for {}: {:?}",
                self.resource_name, subresources
            ),
        }
    }

    /// A fresh, empty instance of the resource
    pub fn new_object(&self) -> Box<dyn Object> {
        (self.new_object)()
    }

    /// A fresh, empty list of the resource
    pub fn new_list(&self) -> Box<dyn Object> {
        (self.new_list)()
    }

    /// Not-found error for the named instance, keyed on the singular name
    pub fn new_not_found(&self, name: &str) -> StatusError {
        StatusError::not_found(&self.singular_group_resource(), name)
    }

    /// This descriptor as kube's dynamic resource description
    pub fn api_resource(&self) -> ApiResource {
        let api_version = if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        };
        ApiResource {
            group: self.group.clone(),
            version: self.version.clone(),
            api_version,
            kind: self.kind.clone(),
            plural: self.resource_name.clone(),
        }
    }
}

impl fmt::Debug for ResourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceInfo")
            .field("group", &self.group)
            .field("version", &self.version)
            .field("resource_name", &self.resource_name)
            .field("singular_name", &self.singular_name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
