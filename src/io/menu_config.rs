//! Menu configuration loading
//!
//! A menu file is a JSON array of menu items or an object with an `items`
//! array. Roles must be one of `admin`, `staff`, `student`, `parent`.

use crate::io::source::open_file;
use crate::io::transaction_format::write_json;
use crate::types::{MenuConfig, MenuItem, PortalError};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Load and validate a menu configuration file
///
/// # Arguments
///
/// * `path` - JSON file holding a list of menu items or `{ "items": [...] }`
///
/// # Errors
///
/// * `PortalError::FileNotFound` if nothing exists at `path`
/// * `PortalError::ParseError` if the file is not valid JSON
/// * `PortalError::InvalidMenuConfig` for unknown roles, missing fields, or
///   empty or duplicate ids
pub fn load_menu_config(path: &Path) -> Result<MenuConfig, PortalError> {
    let file = open_file(path)?;
    let text = std::io::read_to_string(file)?;
    let config = parse_menu_config(&text)?;
    debug!(path = %path.display(), items = config.items.len(), "Loaded menu configuration");
    Ok(config)
}

/// Parse and validate a menu configuration from JSON text
pub fn parse_menu_config(text: &str) -> Result<MenuConfig, PortalError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let items = if value.is_array() {
        serde_json::from_value::<Vec<MenuItem>>(value)
    } else {
        serde_json::from_value::<MenuConfig>(value).map(|config| config.items)
    }
    .map_err(|e| PortalError::invalid_menu_config(&e.to_string()))?;

    validate(&items)?;
    Ok(MenuConfig::new(items))
}

/// Write resolved menu entries as a pretty JSON array
pub fn write_menu_json(items: &[MenuItem], output: &mut dyn Write) -> Result<(), PortalError> {
    write_json(items, output)
}

/// Every entry needs an id, and ids must be unique across the whole tree
fn validate(items: &[MenuItem]) -> Result<(), PortalError> {
    fn walk<'a>(items: &'a [MenuItem], seen: &mut HashSet<&'a str>) -> Result<(), PortalError> {
        for item in items {
            if item.id.trim().is_empty() {
                return Err(PortalError::invalid_menu_config(&format!(
                    "menu item '{}' has an empty id",
                    item.label
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(PortalError::invalid_menu_config(&format!(
                    "duplicate menu id '{}'",
                    item.id
                )));
            }
            walk(&item.children, seen)?;
        }
        Ok(())
    }

    walk(items, &mut HashSet::new())
}
