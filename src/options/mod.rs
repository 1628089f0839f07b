//! Centralized widget options with TOML preset support.
//!
//! All tweakable settings (animation tuning, viewport scaling, input
//! ranges, shape styling) are consolidated here. Options serialize
//! to/from TOML for presets; a JSON Schema export describes the
//! UI-exposed subset.

mod animation;
mod colors;
mod controls;
mod viewport;

use std::path::Path;

pub use animation::AnimationOptions;
pub use colors::ColorOptions;
pub use controls::ControlOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewport::ViewportOptions;

use crate::error::RondelError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[animation]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Radius transition tuning.
    pub animation: AnimationOptions,
    /// Plot-limit auto-scaling parameters.
    pub viewport: ViewportOptions,
    /// Input ranges and startup state.
    pub controls: ControlOptions,
    /// Shape styling.
    #[schemars(skip)]
    pub colors: ColorOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RondelError> {
        let content = std::fs::read_to_string(path).map_err(RondelError::Io)?;
        toml::from_str(&content)
            .map_err(|e| RondelError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RondelError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RondelError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RondelError::Io)?;
        }
        std::fs::write(path, content).map_err(RondelError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
