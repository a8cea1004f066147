//! Serializable scene description.
//!
//! A scene file is TOML: `[[model]]` entries describing the table and
//! `[[placement]]` entries describing instances. The built-in demo spec
//! is used when no file is given.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Material;
use crate::error::SylvaError;

/// Flat material as written in a scene file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MaterialSpec {
    /// Diffuse base color, linear RGB.
    pub color: [f32; 3],
    /// Specular reflectance, linear RGB.
    pub specular: [f32; 3],
    /// Specular shininess exponent.
    pub shininess: f32,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        let m = Material::default();
        Self {
            color: m.base_color,
            specular: m.specular,
            shininess: m.shininess,
        }
    }
}

impl MaterialSpec {
    /// Convert to the runtime material type.
    #[must_use]
    pub fn to_material(&self) -> Material {
        Material {
            base_color: self.color,
            specular: self.specular,
            shininess: self.shininess,
        }
    }
}

/// One model table entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelSpec {
    /// Table key referenced by placements.
    pub name: String,
    /// OBJ path, relative to the scene file's directory.
    pub path: String,
    /// Uniform scale applied to every placement.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Flat material.
    #[serde(default)]
    pub material: MaterialSpec,
}

fn default_scale() -> f32 {
    1.0
}

/// One instance entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacementSpec {
    /// Name of a model table entry.
    pub model: String,
    /// World-space position.
    #[serde(default)]
    pub position: [f32; 3],
    /// Rotation about +Y, degrees.
    #[serde(default)]
    pub yaw_deg: f32,
}

/// A whole scene description: model table plus placement list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SceneSpec {
    /// The model table.
    pub model: Vec<ModelSpec>,
    /// The placement list, in draw order.
    pub placement: Vec<PlacementSpec>,
}

impl SceneSpec {
    /// Parse a scene file.
    pub fn load(path: &Path) -> Result<Self, SylvaError> {
        let content = std::fs::read_to_string(path).map_err(SylvaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SylvaError::SceneParse(e.to_string()))
    }

    /// The built-in demo: a ground plane and a few props around the
    /// origin. Paths resolve against `assets/models/`.
    #[must_use]
    pub fn demo() -> Self {
        let table = [
            ("ground", "plane.obj", 40.0, [0.33, 0.42, 0.18]),
            ("crate", "cube.obj", 1.0, [0.55, 0.38, 0.2]),
            ("monolith", "cube.obj", 0.6, [0.3, 0.3, 0.35]),
            ("marker", "pyramid.obj", 1.5, [0.75, 0.2, 0.15]),
        ];
        let placements = [
            ("ground", [0.0, 0.0, 0.0], 0.0),
            ("crate", [-3.0, 1.0, -6.0], 0.0),
            ("crate", [-1.0, 1.0, -8.5], 30.0),
            ("monolith", [4.0, 0.6, -7.0], 15.0),
            ("marker", [0.0, 0.0, -12.0], 45.0),
            ("marker", [6.0, 0.0, -3.0], -15.0),
        ];
        Self {
            model: table
                .into_iter()
                .map(|(name, path, scale, color)| ModelSpec {
                    name: name.to_owned(),
                    path: path.to_owned(),
                    scale,
                    material: MaterialSpec {
                        color,
                        ..MaterialSpec::default()
                    },
                })
                .collect(),
            placement: placements
                .into_iter()
                .map(|(model, position, yaw_deg)| PlacementSpec {
                    model: model.to_owned(),
                    position,
                    yaw_deg,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_placements_all_reference_table_entries() {
        let spec = SceneSpec::demo();
        for p in &spec.placement {
            assert!(
                spec.model.iter().any(|m| m.name == p.model),
                "placement references missing model '{}'",
                p.model
            );
        }
    }

    #[test]
    fn spec_round_trips_through_toml() {
        let spec = SceneSpec::demo();
        let text = toml::to_string_pretty(&spec).unwrap();
        let parsed: SceneSpec = toml::from_str(&text).unwrap();
        assert_eq!(spec, parsed);
    }

    #[test]
    fn minimal_scene_file_parses() {
        let text = "\
[[model]]
name = \"rock\"
path = \"rock.obj\"

[[placement]]
model = \"rock\"
position = [1.0, 0.0, -2.0]
";
        let spec: SceneSpec = toml::from_str(text).unwrap();
        assert_eq!(spec.model.len(), 1);
        assert_eq!(spec.model[0].scale, 1.0);
        assert_eq!(spec.placement[0].yaw_deg, 0.0);
    }
}
