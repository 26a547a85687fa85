// integrity_sim/src/scenario/mod.rs

//! This module handles finding and loading scenario files from disk.

mod records;

pub use records::{EntityRecord, ScenarioConfig, UpdateRecord};

use crate::error::ScenarioError;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use log::info;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Loads one scenario file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ScenarioError> {
    // Figment treats a missing file as an empty source, so check first.
    if !path.is_file() {
        return Err(ScenarioError::NotFound(path.to_path_buf()));
    }
    info!("Loading scenario from: {:?}", path);

    let mut config: ScenarioConfig = Figment::new().merge(Toml::file(path)).extract()?;
    if config.name.is_none() {
        config.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }
    Ok(config)
}

/// Parses a scenario from TOML text.
pub fn parse_scenario(toml: &str) -> Result<ScenarioConfig, ScenarioError> {
    Ok(Figment::new().merge(Toml::string(toml)).extract()?)
}

/// Resolves `path` to the scenario files it names: the file itself, or every
/// `.toml` file below a directory in a stable order.
pub fn discover_scenarios(path: &Path) -> Result<Vec<PathBuf>, ScenarioError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(ScenarioError::NotFound(path.to_path_buf()));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().map_or(false, |ext| ext == "toml")
        {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}
