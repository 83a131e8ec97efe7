//! Stand-in scene graph for each vehicle.
//!
//! Real assets are not streamed, so each model is approximated by a set of
//! named box parts. Part names follow the same convention an exported asset
//! uses ("Roof", "Mirror_L", "Hood", "Door_Front_R"), which means the
//! resolver sees exactly the tags a real model would produce.

use crate::constants::{MODEL_OFFSET_Y, MODEL_SCALE, MODEL_YAW};
use crate::mesh::MeshDescriptor;
use crate::options::{Configuration, VehicleModel};
use crate::resolver::{resolve, resolve_traced, Appearance, RuleTrace};
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;

/// One drawable surface: an axis-aligned box in model space.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenePart {
    pub mesh: MeshDescriptor,
    pub center: Vec3,
    pub half_extents: Vec3,
}

pub type PartList = SmallVec<[ScenePart; 16]>;

#[derive(Clone, Debug)]
pub struct Scene {
    model: VehicleModel,
    parts: PartList,
    by_name: FnvHashMap<String, usize>,
}

/// Body dimensions (model-space units, +X forward, +Y up).
#[derive(Clone, Copy, Debug)]
struct Proportions {
    length: f32,
    width: f32,
    body_height: f32,
    ride_height: f32,
    cabin_length: f32,
    cabin_height: f32,
    cabin_offset: f32,
    wheel_radius: f32,
}

fn proportions(model: VehicleModel) -> Proportions {
    match model {
        VehicleModel::FerrariF8 => Proportions {
            length: 2.2,
            width: 0.95,
            body_height: 0.32,
            ride_height: 0.12,
            cabin_length: 0.9,
            cabin_height: 0.26,
            cabin_offset: -0.1,
            wheel_radius: 0.17,
        },
        VehicleModel::LamborghiniHuracan => Proportions {
            length: 2.25,
            width: 1.0,
            body_height: 0.28,
            ride_height: 0.1,
            cabin_length: 0.85,
            cabin_height: 0.24,
            cabin_offset: 0.0,
            wheel_radius: 0.17,
        },
        VehicleModel::Porsche911 => Proportions {
            length: 2.0,
            width: 0.9,
            body_height: 0.34,
            ride_height: 0.13,
            cabin_length: 1.0,
            cabin_height: 0.3,
            cabin_offset: -0.2,
            wheel_radius: 0.16,
        },
    }
}

impl Scene {
    pub fn new(model: VehicleModel, parts: PartList) -> Self {
        let by_name = parts
            .iter()
            .enumerate()
            .map(|(i, p)| (p.mesh.name.clone(), i))
            .collect();
        Self {
            model,
            parts,
            by_name,
        }
    }

    pub fn for_model(model: VehicleModel) -> Self {
        let scene = Self::new(model, build_parts(proportions(model)));
        log::debug!(
            "[scene] built {} ({}) with {} parts",
            model.display_name(),
            model.asset_path(),
            scene.parts.len()
        );
        scene
    }

    pub fn model(&self) -> VehicleModel {
        self.model
    }

    pub fn parts(&self) -> &[ScenePart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn part_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn part(&self, name: &str) -> Option<&ScenePart> {
        self.part_index(name).map(|i| &self.parts[i])
    }

    /// Resolve every part against `config`, in part order.
    pub fn resolve_all(&self, config: &Configuration) -> Vec<Appearance> {
        self.parts.iter().map(|p| resolve(config, &p.mesh)).collect()
    }

    pub fn resolve_all_traced(&self, config: &Configuration) -> Vec<(Appearance, RuleTrace)> {
        self.parts
            .iter()
            .map(|p| resolve_traced(config, &p.mesh))
            .collect()
    }
}

/// World placement applied to every vehicle.
pub fn model_matrix() -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(MODEL_SCALE),
        Quat::from_rotation_y(MODEL_YAW),
        Vec3::new(0.0, MODEL_OFFSET_Y, 0.0),
    )
}

fn build_parts(p: Proportions) -> PartList {
    let half_len = p.length / 2.0;
    let half_w = p.width / 2.0;
    let deck_y = p.ride_height + p.body_height;
    let cabin_front = p.cabin_offset + p.cabin_length / 2.0;
    let cabin_rear = p.cabin_offset - p.cabin_length / 2.0;

    let mut parts = PartList::new();
    let mut push = |name: &str, center: Vec3, half_extents: Vec3| {
        parts.push(ScenePart {
            mesh: MeshDescriptor::from_name(name),
            center,
            half_extents,
        });
    };

    push(
        "Body",
        Vec3::new(0.0, p.ride_height + p.body_height / 2.0, 0.0),
        Vec3::new(half_len, p.body_height / 2.0, half_w),
    );
    push(
        "Hood",
        Vec3::new((cabin_front + half_len) / 2.0, deck_y + 0.02, 0.0),
        Vec3::new((half_len - cabin_front) / 2.0, 0.02, half_w * 0.95),
    );
    push(
        "Trunk",
        Vec3::new((cabin_rear - half_len) / 2.0, deck_y + 0.02, 0.0),
        Vec3::new((cabin_rear + half_len) / 2.0, 0.02, half_w * 0.95),
    );
    push(
        "Cabin",
        Vec3::new(p.cabin_offset, deck_y + p.cabin_height / 2.0, 0.0),
        Vec3::new(p.cabin_length / 2.0, p.cabin_height / 2.0, half_w * 0.85),
    );
    push(
        "Roof",
        Vec3::new(p.cabin_offset, deck_y + p.cabin_height + 0.015, 0.0),
        Vec3::new(p.cabin_length * 0.45, 0.015, half_w * 0.8),
    );
    for (suffix, side) in [("L", 1.0_f32), ("R", -1.0)] {
        push(
            &format!("Door_Front_{suffix}"),
            Vec3::new(
                p.cabin_offset,
                p.ride_height + p.body_height / 2.0,
                side * (half_w + 0.01),
            ),
            Vec3::new(p.cabin_length * 0.4, p.body_height * 0.45, 0.01),
        );
        push(
            &format!("Mirror_{suffix}"),
            Vec3::new(cabin_front - 0.05, deck_y + 0.06, side * (half_w + 0.06)),
            Vec3::new(0.04, 0.03, 0.05),
        );
    }
    for (name, sign) in [("Bumper_Front", 1.0_f32), ("Bumper_Rear", -1.0)] {
        push(
            name,
            Vec3::new(sign * (half_len + 0.02), p.ride_height + p.body_height * 0.3, 0.0),
            Vec3::new(0.03, p.body_height * 0.3, half_w * 0.95),
        );
    }
    for (name, x, z) in [
        ("Wheel_FL", 1.0_f32, 1.0_f32),
        ("Wheel_FR", 1.0, -1.0),
        ("Wheel_RL", -1.0, 1.0),
        ("Wheel_RR", -1.0, -1.0),
    ] {
        push(
            name,
            Vec3::new(
                x * p.length * 0.32,
                p.wheel_radius,
                z * (half_w - 0.02),
            ),
            Vec3::new(p.wheel_radius, p.wheel_radius, 0.08),
        );
    }
    parts
}
