//! Resource descriptor registry for dynamic lookup

use super::identity::GroupResource;
use super::info::ResourceInfo;
use super::object::{list_factory, object_factory, Object};
use crate::error::{ResError, Result};
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::core::v1::{ConfigMap, Namespace, Node, Pod, Secret, Service};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Global registry of the built-in resource types
pub static RESOURCE_REGISTRY: LazyLock<ResourceRegistry> =
    LazyLock::new(ResourceRegistry::builtin);

/// A registered descriptor and its short names
#[derive(Debug, Clone)]
pub struct RegisteredResource {
    pub info: ResourceInfo,
    pub aliases: Vec<String>,
}

/// Registry for looking up resource descriptors by name or alias
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    entries: Vec<RegisteredResource>,
    by_group_resource: HashMap<GroupResource, usize>,
    by_name: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the core/v1 and apps/v1 workload types
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        // Core resources
        registry.register_builtin::<Pod>("", "pods", "pod", "Pod", &["po"]);
        registry.register_builtin::<Service>("", "services", "service", "Service", &["svc"]);
        registry.register_builtin::<ConfigMap>("", "configmaps", "configmap", "ConfigMap", &["cm"]);
        registry.register_builtin::<Secret>("", "secrets", "secret", "Secret", &[]);
        registry.register_builtin::<Namespace>("", "namespaces", "namespace", "Namespace", &["ns"]);
        registry.register_builtin::<Node>("", "nodes", "node", "Node", &["no"]);

        // Apps resources
        registry.register_builtin::<Deployment>(
            "apps",
            "deployments",
            "deployment",
            "Deployment",
            &["deploy"],
        );
        registry.register_builtin::<StatefulSet>(
            "apps",
            "statefulsets",
            "statefulset",
            "StatefulSet",
            &["sts"],
        );
        registry.register_builtin::<DaemonSet>(
            "apps",
            "daemonsets",
            "daemonset",
            "DaemonSet",
            &["ds"],
        );
        registry.register_builtin::<ReplicaSet>(
            "apps",
            "replicasets",
            "replicaset",
            "ReplicaSet",
            &["rs"],
        );

        registry
    }

    fn register_builtin<K: Object + Default + Serialize>(
        &mut self,
        group: &str,
        plural: &str,
        singular: &str,
        kind: &str,
        aliases: &[&str],
    ) {
        let info = ResourceInfo::from_factories(
            group,
            "v1",
            plural,
            singular,
            kind,
            object_factory::<K>(),
            list_factory::<K>(),
        );
        let aliases = aliases.iter().map(|a| a.to_string()).collect();
        if let Err(e) = self.register(info, aliases) {
            tracing::warn!("skipping built-in resource {}: {}", plural, e);
        }
    }

    /// Add a descriptor.
    ///
    /// Fails if another descriptor already claims the same group/resource pair.
    /// Name and alias collisions across groups resolve to the first registration.
    pub fn register(&mut self, info: ResourceInfo, aliases: Vec<String>) -> Result<()> {
        let group_resource = info.group_resource();
        if self.by_group_resource.contains_key(&group_resource) {
            return Err(ResError::DuplicateResource(group_resource.to_string()));
        }

        let index = self.entries.len();
        self.by_group_resource.insert(group_resource.clone(), index);

        for name in [
            info.resource_name().to_lowercase(),
            info.singular_name().to_lowercase(),
            info.kind().to_lowercase(),
            group_resource.to_string().to_lowercase(),
        ] {
            self.by_name.entry(name).or_insert(index);
        }

        for alias in &aliases {
            self.by_alias.entry(alias.to_lowercase()).or_insert(index);
        }

        tracing::debug!(resource = %group_resource, aliases = ?aliases, "registered resource");
        self.entries.push(RegisteredResource { info, aliases });
        Ok(())
    }

    /// Look up a descriptor by plural, singular, kind, `resource.group` or alias
    pub fn lookup(&self, name: &str) -> Option<&ResourceInfo> {
        self.lookup_entry(name).map(|e| &e.info)
    }

    /// Like [`ResourceRegistry::lookup`], including the aliases
    pub fn lookup_entry(&self, name: &str) -> Option<&RegisteredResource> {
        let name_lower = name.to_lowercase();

        self.by_name
            .get(&name_lower)
            .or_else(|| self.by_alias.get(&name_lower))
            .map(|&i| &self.entries[i])
    }

    /// Look up a descriptor, failing with `UnknownResource` on a miss
    pub fn get(&self, name: &str) -> Result<&ResourceInfo> {
        self.lookup(name)
            .ok_or_else(|| ResError::UnknownResource(name.to_string()))
    }

    pub fn by_group_resource(&self, group_resource: &GroupResource) -> Option<&ResourceInfo> {
        self.by_group_resource
            .get(group_resource)
            .map(|&i| &self.entries[i].info)
    }

    /// All registered descriptors in registration order
    pub fn all(&self) -> impl Iterator<Item = &RegisteredResource> {
        self.entries.iter()
    }

    /// Every accepted lookup name and alias, sorted and deduplicated
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|s| s.as_str()).collect();
        names.extend(self.by_alias.keys().map(|s| s.as_str()));
        names.sort();
        names.dedup();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
