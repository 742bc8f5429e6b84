//! Show command implementation

use crate::cli::OutputFormat;
use crate::error::{ResError, Result};
use crate::output::{format_json, format_summary, format_yaml, ResourceSummary};
use crate::resources::ResourceRegistry;

/// Render all identity views of one resource type
pub fn show_resource(
    registry: &ResourceRegistry,
    resource_type: &str,
    output: OutputFormat,
) -> Result<String> {
    let entry = registry
        .lookup_entry(resource_type)
        .ok_or_else(|| ResError::UnknownResource(resource_type.to_string()))?;
    let summary = ResourceSummary::from(entry);

    let output_str = match output {
        OutputFormat::Table => format_summary(&summary),
        OutputFormat::Json => format_json(&summary, true)?,
        OutputFormat::Yaml => format_yaml(&summary)?,
        OutputFormat::Name => summary.group_resource,
    };

    Ok(output_str)
}
