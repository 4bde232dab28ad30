//! Configuration file upgrades: detect fields missing from an older YAML
//! file and add them with their default values.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys of the current configuration schema, in file order.
fn known_fields() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration file is not a YAML mapping".into())),
    }
}

/// Names of schema fields absent from `content`.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;
    let defaults = known_fields()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing field to the file at `path` with its default value.
/// Existing values are never touched. Returns the names of the added fields.
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let mut current = parse_mapping(&content)?;
    let defaults = known_fields()?;

    let mut added = Vec::new();
    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
