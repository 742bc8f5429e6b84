//! Resource declarations loaded from ~/.resinfo/resources.toml

use crate::error::{ResError, Result};
use crate::resources::{list_factory, Object, ResourceInfo, ResourceRegistry, RESOURCE_REGISTRY};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::DynamicObject;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "RESINFO_CONFIG";

/// Extra resource types declared by the user
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResourceConfig {
    #[serde(default)]
    pub resources: Vec<ResourceDecl>,
}

/// One `[[resources]]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDecl {
    /// API group, empty for the core group
    #[serde(default)]
    pub group: String,

    pub version: String,

    /// Plural name used in paths
    pub plural: String,

    pub singular: String,

    pub kind: String,

    /// Short names accepted by lookups
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl ResourceDecl {
    /// Descriptor whose factories hand out empty `DynamicObject`s
    pub fn into_info(self) -> ResourceInfo {
        ResourceInfo::from_factories(
            self.group,
            self.version,
            self.plural,
            self.singular,
            self.kind,
            std::sync::Arc::new(|| Box::new(empty_dynamic_object()) as Box<dyn Object>),
            list_factory::<DynamicObject>(),
        )
    }
}

fn empty_dynamic_object() -> DynamicObject {
    DynamicObject {
        types: None,
        metadata: ObjectMeta::default(),
        data: serde_json::Value::Null,
    }
}

impl ResourceConfig {
    /// Built-in resources plus everything declared here
    pub fn build_registry(&self) -> Result<ResourceRegistry> {
        let mut registry = RESOURCE_REGISTRY.clone();
        for decl in &self.resources {
            let aliases = decl.aliases.clone();
            registry.register(decl.clone().into_info(), aliases)?;
        }
        Ok(registry)
    }
}

/// Get the resinfo config directory (~/.resinfo)
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".resinfo"))
        .ok_or_else(|| ResError::Config("Could not determine home directory".to_string()))
}

/// Default location of the resource declarations
pub fn default_config_path() -> Result<PathBuf> {
    config_dir().map(|d| d.join("resources.toml"))
}

/// Parse resource declarations from TOML text
pub fn parse_config(content: &str) -> Result<ResourceConfig> {
    Ok(toml::from_str(content)?)
}

/// Load resource declarations.
///
/// An explicit path must exist. Without one the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<ResourceConfig> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (default_config_path()?, false),
    };

    if !explicit && !path.exists() {
        tracing::debug!("no resource config at {}", path.display());
        return Ok(ResourceConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config = parse_config(&content)?;
    tracing::info!(
        "loaded {} resource declaration(s) from {}",
        config.resources.len(),
        path.display()
    );
    Ok(config)
}
