//! resinfo - descriptors for Kubernetes-style API resources
//!
//! The centre of the crate is [`resources::ResourceInfo`], an immutable
//! description of one resource type: its group/version/kind identity, its
//! plural and singular names, and factories for empty instances.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod resources;

pub use error::{ResError, Result, StatusError};
pub use resources::{GroupResource, ResourceInfo, ResourceRegistry};
