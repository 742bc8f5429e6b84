//! Not-found command implementation

use crate::cli::OutputFormat;
use crate::error::{Result, StatusDetails};
use crate::output::{format_json, format_yaml};
use crate::resources::ResourceRegistry;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use serde::Serialize;

/// Serialized form of a not-found status, as a `meta/v1` `Status` object
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NotFoundStatus<'a> {
    kind: &'static str,
    api_version: &'static str,
    metadata: ListMeta,
    status: &'a str,
    message: &'a str,
    reason: &'a str,
    details: &'a StatusDetails,
    code: u16,
}

/// Render the status a server would return for a missing instance
pub fn not_found_status(
    registry: &ResourceRegistry,
    resource_type: &str,
    name: &str,
    output: OutputFormat,
) -> Result<String> {
    let info = registry.get(resource_type)?;
    let err = info.new_not_found(name);
    let status = NotFoundStatus {
        kind: "Status",
        api_version: "v1",
        metadata: ListMeta::default(),
        status: &err.status.status,
        message: err.message(),
        reason: err.reason(),
        details: &err.details,
        code: err.code(),
    };

    let output_str = match output {
        OutputFormat::Json => format_json(&status, true)?,
        OutputFormat::Yaml => format_yaml(&status)?,
        OutputFormat::Table | OutputFormat::Name => err.to_string(),
    };

    Ok(output_str)
}
