#![deny(missing_docs)]

//! # Snapshot IO
//!
//! Reads snapshot documents and writes plan documents in the two supported
//! formats. JSON is the default; YAML is selected per file extension or
//! with `--format yaml`.

use crate::error::{CliError, CliResult};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::Path;
use swaggen_core::{Entity, Plan};

/// Document format for snapshots and plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl Format {
    /// Format implied by a file extension. Anything but `.yaml`/`.yml`
    /// counts as JSON.
    pub fn for_path(path: &Path) -> Format {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Loads a snapshot file, format chosen by extension.
pub fn load_entity(path: &Path) -> CliResult<Entity> {
    if !path.exists() {
        return Err(CliError::General(format!("Snapshot not found: {:?}", path)));
    }
    let content = fs::read_to_string(path)?;
    parse_entity(&content, Format::for_path(path))
}

/// Parses snapshot text in the given format.
pub fn parse_entity(content: &str, format: Format) -> CliResult<Entity> {
    match format {
        Format::Json => serde_json::from_str(content)
            .map_err(|e| CliError::Parse(format!("invalid JSON snapshot: {}", e))),
        Format::Yaml => serde_yaml::from_str(content)
            .map_err(|e| CliError::Parse(format!("invalid YAML snapshot: {}", e))),
    }
}

/// Serializes a plan document.
pub fn render_plan(plan: &Plan, format: Format) -> CliResult<String> {
    render(plan, format)
}

/// Serializes a snapshot document.
pub fn render_entity(entity: &Entity, format: Format) -> CliResult<String> {
    render(entity, format)
}

fn render<T: Serialize>(value: &T, format: Format) -> CliResult<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::General(format!("JSON serialization failed: {}", e))),
        Format::Yaml => serde_yaml::to_string(value)
            .map_err(|e| CliError::General(format!("YAML serialization failed: {}", e))),
    }
}
