//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera control, display, lighting) are
//! consolidated here. Options serialize to/from TOML; every sub-struct
//! uses `#[serde(default)]` so partial files (e.g. only overriding
//! `[camera]`) work correctly.

mod camera;
mod display;
mod lighting;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use lighting::LightingOptions;
use serde::{Deserialize, Serialize};

use crate::error::SylvaError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Window clearing and frame pacing.
    pub display: DisplayOptions,
    /// Light placement and intensity parameters.
    pub lighting: LightingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SylvaError> {
        let content = std::fs::read_to_string(path).map_err(SylvaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SylvaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SylvaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SylvaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SylvaError::Io)?;
        }
        std::fs::write(path, content).map_err(SylvaError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_uses_defaults_elsewhere() {
        let parsed: Options =
            toml::from_str("[camera]\nmove_speed = 12.5\n").unwrap();
        assert_eq!(parsed.camera.move_speed, 12.5);
        assert_eq!(parsed.display, DisplayOptions::default());
        assert_eq!(parsed.lighting, LightingOptions::default());
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let parsed: Options = toml::from_str("").unwrap();
        assert_eq!(parsed, Options::default());
    }
}
