//! List command implementation

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{format_json, format_resource_table, format_yaml, ResourceSummary};
use crate::resources::ResourceRegistry;

/// Render every registered resource type
pub fn list_resources(registry: &ResourceRegistry, output: OutputFormat) -> Result<String> {
    let summaries: Vec<ResourceSummary> = registry.all().map(ResourceSummary::from).collect();

    let output_str = match output {
        OutputFormat::Table => format_resource_table(&summaries),
        OutputFormat::Json => format_json(&summaries, true)?,
        OutputFormat::Yaml => format_yaml(&summaries)?,
        OutputFormat::Name => summaries
            .iter()
            .map(|s| s.group_resource.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(output_str)
}

/// Every name `show`, `path` and `not-found` accept, one per line
pub fn list_names(registry: &ResourceRegistry) -> String {
    registry.all_names().join("\n")
}
