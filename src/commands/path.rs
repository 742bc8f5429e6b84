//! Path command implementation

use crate::error::Result;
use crate::resources::ResourceRegistry;

/// Storage path of a resource type, or of one of its subresources
pub fn storage_path(
    registry: &ResourceRegistry,
    resource_type: &str,
    subresource: Option<&str>,
) -> Result<String> {
    let info = registry.get(resource_type)?;
    let path = match subresource {
        Some(sub) => info.storage_path(&[sub]),
        None => info.storage_path(&[]),
    };
    Ok(path)
}
