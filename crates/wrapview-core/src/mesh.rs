//! Per-surface descriptors handed to the resolver.
//!
//! Assets communicate surface roles through mesh names ("Roof_L",
//! "Door_Front"). The tags are derived once, when a descriptor is built, so
//! the resolver only ever looks at typed fields.

use crate::constants::{DOOR_NAME_MARKER, HOOD_NAME_MARKER, SECONDARY_NAME_MARKERS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SurfaceRole {
    #[default]
    Primary,
    /// Painted with the fixed secondary color in two-tone mode.
    Secondary,
}

/// Which decal patterns a surface accepts. A name can match both markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DecalTargets {
    pub hood: bool,
    pub door: bool,
}

impl DecalTargets {
    pub const NONE: DecalTargets = DecalTargets {
        hood: false,
        door: false,
    };
    pub const HOOD: DecalTargets = DecalTargets {
        hood: true,
        door: false,
    };
    pub const DOOR: DecalTargets = DecalTargets {
        hood: false,
        door: true,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceParams {
    pub metalness: f32,
    pub roughness: f32,
}

impl SurfaceParams {
    pub const fn new(metalness: f32, roughness: f32) -> Self {
        Self {
            metalness,
            roughness,
        }
    }
}

impl Default for SurfaceParams {
    /// Defaults of an untouched standard PBR material.
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshDescriptor {
    pub name: String,
    pub role: SurfaceRole,
    pub decal_targets: DecalTargets,
    /// Surface parameters the asset was authored with.
    pub authored: SurfaceParams,
}

impl MeshDescriptor {
    /// Derive role and decal targets from the naming convention.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let lower = name.to_lowercase();
        let role = if SECONDARY_NAME_MARKERS.iter().any(|m| lower.contains(m)) {
            SurfaceRole::Secondary
        } else {
            SurfaceRole::Primary
        };
        let decal_targets = DecalTargets {
            hood: lower.contains(HOOD_NAME_MARKER),
            door: lower.contains(DOOR_NAME_MARKER),
        };
        Self {
            name,
            role,
            decal_targets,
            authored: SurfaceParams::default(),
        }
    }

    /// Build a descriptor with explicit tags; the name is informational only.
    pub fn tagged(name: impl Into<String>, role: SurfaceRole, decal_targets: DecalTargets) -> Self {
        Self {
            name: name.into(),
            role,
            decal_targets,
            authored: SurfaceParams::default(),
        }
    }

    pub fn with_authored(mut self, authored: SurfaceParams) -> Self {
        self.authored = authored;
        self
    }

    #[inline]
    pub fn is_secondary(&self) -> bool {
        self.role == SurfaceRole::Secondary
    }
}
