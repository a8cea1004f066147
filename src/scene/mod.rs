//! The scene: a data-driven model table plus a placement list.
//!
//! One parameterized table replaces per-demo setup code: a
//! [`SceneSpec`] names each model (OBJ path, uniform scale, flat
//! material) and lists where instances go. [`Scene::from_spec`] loads
//! every mesh up front, logging and skipping assets that fail so one bad
//! file never takes the session down. Draw order is placement order; no
//! culling, no batching.

mod spec;

use std::path::Path;

use glam::{Mat4, Quat, Vec3};
use rustc_hash::FxHashMap;

pub use spec::{MaterialSpec, ModelSpec, PlacementSpec, SceneSpec};

use crate::mesh::Mesh;

/// Flat surface material for one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse base color, linear RGB.
    pub base_color: [f32; 3],
    /// Specular reflectance, linear RGB.
    pub specular: [f32; 3],
    /// Specular shininess exponent.
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: [0.7, 0.7, 0.7],
            specular: [0.8, 0.8, 0.8],
            shininess: 32.0,
        }
    }
}

/// A loaded model: mesh geometry, its uniform scale, and material.
pub struct SceneModel {
    /// The loaded triangle soup.
    pub mesh: Mesh,
    /// Per-model scale baked into every placement's model matrix.
    pub scale: Vec3,
    /// Flat material handed to the shading stage.
    pub material: Material,
}

/// One instance of a model in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Name of the model in the scene's table.
    pub model: String,
    /// World-space position.
    pub position: Vec3,
    /// Rotation about +Y, degrees.
    pub yaw_deg: f32,
}

/// The model table and placement list.
#[derive(Default)]
pub struct Scene {
    models: FxHashMap<String, SceneModel>,
    placements: Vec<Placement>,
}

impl Scene {
    /// An empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every model in `spec`, resolving paths against `base_dir`.
    ///
    /// Assets that fail to load are logged and skipped, along with their
    /// placements; the rest of the scene remains usable.
    #[must_use]
    pub fn from_spec(spec: &SceneSpec, base_dir: &Path) -> Self {
        let mut models = FxHashMap::default();
        for model_spec in &spec.model {
            let mut mesh = Mesh::new();
            let path = base_dir.join(&model_spec.path);
            match mesh.load_obj(&path) {
                Ok(()) => {
                    let inserted = models.insert(
                        model_spec.name.clone(),
                        SceneModel {
                            mesh,
                            scale: Vec3::splat(model_spec.scale),
                            material: model_spec.material.to_material(),
                        },
                    );
                    if inserted.is_some() {
                        log::warn!(
                            "duplicate model name '{}' replaces earlier entry",
                            model_spec.name
                        );
                    }
                }
                Err(e) => {
                    log::error!(
                        "skipping model '{}': {e}",
                        model_spec.name
                    );
                }
            }
        }

        let placements = spec
            .placement
            .iter()
            .filter(|p| {
                let known = models.contains_key(&p.model);
                if !known {
                    log::warn!(
                        "dropping placement of unknown model '{}'",
                        p.model
                    );
                }
                known
            })
            .map(|p| Placement {
                model: p.model.clone(),
                position: Vec3::from_array(p.position),
                yaw_deg: p.yaw_deg,
            })
            .collect();

        Self { models, placements }
    }

    /// Look up a model by name.
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&SceneModel> {
        self.models.get(name)
    }

    /// Mutable access to every loaded model, for GPU upload.
    pub fn models_mut(
        &mut self,
    ) -> impl Iterator<Item = (&str, &mut SceneModel)> {
        self.models.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of models that loaded successfully.
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// The placement list, in draw order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placements paired with their models, in draw order.
    pub fn draws(&self) -> impl Iterator<Item = (&Placement, &SceneModel)> {
        self.placements
            .iter()
            .filter_map(|p| self.models.get(&p.model).map(|m| (p, m)))
    }

    /// Model matrix for one placement: translate, rotate about +Y,
    /// scale.
    #[must_use]
    pub fn model_matrix(placement: &Placement, model: &SceneModel) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            model.scale,
            Quat::from_rotation_y(placement.yaw_deg.to_radians()),
            placement.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;

    fn triangle_model(scale: f32) -> SceneModel {
        let mut mesh = Mesh::new();
        mesh.load_obj_source("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")
            .unwrap();
        SceneModel {
            mesh,
            scale: Vec3::splat(scale),
            material: Material::default(),
        }
    }

    #[test]
    fn model_matrix_composes_translate_rotate_scale() {
        let model = triangle_model(2.0);
        let placement = Placement {
            model: "tri".into(),
            position: Vec3::new(10.0, 0.0, 0.0),
            yaw_deg: 90.0,
        };
        let m = Scene::model_matrix(&placement, &model);
        // +X in object space: scaled to 2, yawed 90 degrees onto -Z,
        // then translated.
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::new(10.0, 0.0, -2.0)).length() < 1e-5);
    }

    #[test]
    fn identity_placement_keeps_points() {
        let model = triangle_model(1.0);
        let placement = Placement {
            model: "tri".into(),
            position: Vec3::ZERO,
            yaw_deg: 0.0,
        };
        let m = Scene::model_matrix(&placement, &model);
        let p = m.transform_point3(Vec3::new(1.0, 2.0, 3.0));
        assert!((p - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn draws_skip_unknown_models() {
        let mut scene = Scene::new();
        let _ = scene.models.insert("tri".into(), triangle_model(1.0));
        scene.placements = vec![
            Placement {
                model: "tri".into(),
                position: Vec3::ZERO,
                yaw_deg: 0.0,
            },
            Placement {
                model: "ghost".into(),
                position: Vec3::ZERO,
                yaw_deg: 0.0,
            },
        ];
        assert_eq!(scene.draws().count(), 1);
    }
}
