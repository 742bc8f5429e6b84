//! Error types for resinfo

use crate::resources::GroupResource;
use kube::core::ErrorResponse;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason reported by a not-found status
pub const REASON_NOT_FOUND: &str = "NotFound";

/// HTTP code carried by a not-found status
pub const CODE_NOT_FOUND: u16 = 404;

/// Identity of the object a status error refers to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDetails {
    pub name: String,
    pub group: String,
    /// Kubernetes reports the resource under `kind`
    #[serde(rename = "kind")]
    pub resource: String,
}

/// An API status error, shaped like the Kubernetes `Status` object
#[derive(Debug, Error)]
#[error("{}", .status.message)]
pub struct StatusError {
    pub status: ErrorResponse,
    pub details: StatusDetails,
}

impl StatusError {
    /// Build a "not found" status for `name` within `qualified`.
    ///
    /// The message uses the qualified form of the group/resource pair
    /// (`pods "web-0" not found`, `widgets.example.com "w1" not found`).
    pub fn not_found(qualified: &GroupResource, name: &str) -> Self {
        Self {
            status: ErrorResponse {
                status: "Failure".to_string(),
                message: format!("{} {:?} not found", qualified, name),
                reason: REASON_NOT_FOUND.to_string(),
                code: CODE_NOT_FOUND,
            },
            details: StatusDetails {
                group: qualified.group.clone(),
                resource: qualified.resource.clone(),
                name: name.to_string(),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status.reason == REASON_NOT_FOUND && self.status.code == CODE_NOT_FOUND
    }

    /// The group/resource pair the error is keyed on
    pub fn group_resource(&self) -> GroupResource {
        GroupResource::new(&self.details.group, &self.details.resource)
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn code(&self) -> u16 {
        self.status.code
    }

    pub fn reason(&self) -> &str {
        &self.status.reason
    }

    pub fn message(&self) -> &str {
        &self.status.message
    }
}

impl From<StatusError> for kube::Error {
    fn from(e: StatusError) -> Self {
        kube::Error::Api(e.status)
    }
}

/// Main error type for resinfo
#[derive(Debug, Error)]
pub enum ResError {
    #[error("Unknown resource type: {0}")]
    UnknownResource(String),

    #[error("Resource already registered: {0}")]
    DuplicateResource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ResError {
    fn from(e: serde_json::Error) -> Self {
        ResError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for ResError {
    fn from(e: serde_yaml::Error) -> Self {
        ResError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for ResError {
    fn from(e: toml::de::Error) -> Self {
        ResError::Config(e.to_string())
    }
}

/// Result type alias for resinfo
pub type Result<T> = std::result::Result<T, ResError>;
