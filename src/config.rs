use crate::error::{PlannerError, Result};
use crate::types::config::PlanConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "golf.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".golf/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/golf-planner/config.toml";

pub fn load_config(root: &Path) -> Result<Option<PlanConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<PlanConfig>> {
    let plan_path = root.join(DEFAULT_CONFIG_FILE);
    if !plan_path.exists() {
        tracing::info!(path = %plan_path.display(), "no plan file, using defaults");
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &plan_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: PlanConfig = merged.try_into()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging plan layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PlannerError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

/// Writes the default plan file into `root`, returning its path.
pub fn write_default_plan(root: &Path, overwrite: bool) -> Result<PathBuf> {
    if !root.exists() {
        return Err(PlannerError::PathNotFound(root.display().to_string()));
    }
    let path = root.join(DEFAULT_CONFIG_FILE);
    if path.exists() && !overwrite {
        return Err(PlannerError::AlreadyExists(path.display().to_string()));
    }
    std::fs::write(&path, crate::types::config::DEFAULT_PLAN_TEMPLATE)?;
    tracing::info!(path = %path.display(), "wrote default plan");
    Ok(path)
}
