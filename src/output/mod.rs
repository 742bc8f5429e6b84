//! Output formatting for resinfo

use crate::resources::{RegisteredResource, ResourceInfo};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// Every derived view of one descriptor, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    pub kind: String,
    pub group: String,
    pub version: String,
    pub resource: String,
    pub singular: String,
    pub aliases: Vec<String>,
    /// Literal `group + "/" + version`
    pub type_meta_api_version: String,
    /// Conventional apiVersion (no leading slash for the core group)
    pub api_version: String,
    pub group_resource: String,
    pub singular_group_resource: String,
    pub storage_path: String,
}

impl ResourceSummary {
    pub fn new(info: &ResourceInfo, aliases: &[String]) -> Self {
        Self {
            kind: info.kind().to_string(),
            group: info.group().to_string(),
            version: info.version().to_string(),
            resource: info.resource_name().to_string(),
            singular: info.singular_name().to_string(),
            aliases: aliases.to_vec(),
            type_meta_api_version: info.type_meta().api_version,
            api_version: info.api_resource().api_version,
            group_resource: info.group_resource().to_string(),
            singular_group_resource: info.singular_group_resource().to_string(),
            storage_path: info.storage_path(&[]),
        }
    }
}

impl From<&RegisteredResource> for ResourceSummary {
    fn from(entry: &RegisteredResource) -> Self {
        Self::new(&entry.info, &entry.aliases)
    }
}

const LIST_HEADERS: &[&str] = &["KIND", "GROUP", "VERSION", "RESOURCE", "SINGULAR", "ALIASES"];

/// Format registered resources as a table
pub fn format_resource_table(resources: &[ResourceSummary]) -> String {
    if resources.is_empty() {
        return "No resources found".to_string();
    }

    let rows: Vec<Vec<String>> = resources
        .iter()
        .map(|r| {
            vec![
                r.kind.clone(),
                if r.group.is_empty() { "<core>".to_string() } else { r.group.clone() },
                r.version.clone(),
                r.resource.clone(),
                r.singular.clone(),
                r.aliases.join(","),
            ]
        })
        .collect();

    format_table_raw(LIST_HEADERS, &rows)
}

/// Format one descriptor as a FIELD/VALUE table
pub fn format_summary(summary: &ResourceSummary) -> String {
    let rows = vec![
        vec!["Kind".to_string(), summary.kind.clone()],
        vec!["Group".to_string(), summary.group.clone()],
        vec!["Version".to_string(), summary.version.clone()],
        vec!["Resource".to_string(), summary.resource.clone()],
        vec!["Singular".to_string(), summary.singular.clone()],
        vec!["Aliases".to_string(), summary.aliases.join(",")],
        vec!["TypeMeta apiVersion".to_string(), summary.type_meta_api_version.clone()],
        vec!["apiVersion".to_string(), summary.api_version.clone()],
        vec!["GroupResource".to_string(), summary.group_resource.clone()],
        vec!["SingularGroupResource".to_string(), summary.singular_group_resource.clone()],
        vec!["StoragePath".to_string(), summary.storage_path.clone()],
    ];
    format_table_raw(&["FIELD", "VALUE"], &rows)
}

/// Format raw headers and rows as a table
pub fn format_table_raw(headers: &[&str], rows: &[Vec<String>]) -> String {
    // Calculate column widths
    let num_cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate().take(num_cols) {
            widths[i] = widths[i].max(strip_ansi_codes(cell).len());
        }
    }

    let mut output = String::new();

    let mut header_line = String::new();
    for (i, header) in headers.iter().enumerate() {
        let padding = widths[i].saturating_sub(header.len());
        header_line.push_str(header);
        header_line.push_str(&" ".repeat(padding + 2));
    }
    output.push_str(
        &header_line
            .trim_end()
            .if_supports_color(Stream::Stdout, |h| h.bold())
            .to_string(),
    );
    output.push('\n');

    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate().take(num_cols) {
            let stripped_len = strip_ansi_codes(cell).len();
            let padding = widths[i].saturating_sub(stripped_len);
            line.push_str(cell);
            line.push_str(&" ".repeat(padding + 2));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Strip ANSI escape codes for length calculation
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Format a value as JSON
pub fn format_json<T: Serialize + ?Sized>(
    value: &T,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Format a value as YAML
pub fn format_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(value)
}
