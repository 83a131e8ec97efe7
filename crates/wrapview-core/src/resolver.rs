//! Appearance resolution: configuration + mesh -> color and surface params.
//!
//! Resolution is a fixed, ordered list of rules. Each rule has a predicate
//! and a transform; rules run left to right and a later rule overwrites
//! whatever an earlier one wrote to the same property. The order is part of
//! the visual contract:
//!
//! 1. `base_color`      primary or two-tone secondary color, authored params
//! 2. `finish`          finish table sets metalness/roughness
//! 3. `carbon_override` carbon material replaces the finish pair
//! 4. `decal`           HSL shift on hood (stripe) or door (side) surfaces

use crate::color::Rgb;
use crate::constants::{CARBON_METALNESS, CARBON_ROUGHNESS, SIDE_HSL_SHIFT, STRIPE_HSL_SHIFT};
use crate::mesh::{MeshDescriptor, SurfaceParams};
use crate::options::{Configuration, Decal, Finish, Material};
use smallvec::SmallVec;

/// Resolved visual properties for one mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub color: Rgb,
    pub metalness: f32,
    pub roughness: f32,
}

impl Appearance {
    pub fn params(&self) -> SurfaceParams {
        SurfaceParams::new(self.metalness, self.roughness)
    }

    fn set_params(&mut self, params: SurfaceParams) {
        self.metalness = params.metalness;
        self.roughness = params.roughness;
    }
}

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Configuration, &MeshDescriptor) -> bool,
    pub apply: fn(&Configuration, &MeshDescriptor, &mut Appearance),
}

pub const RULES: [Rule; 4] = [
    Rule {
        name: "base_color",
        applies: always,
        apply: apply_base_color,
    },
    Rule {
        name: "finish",
        applies: has_finish,
        apply: apply_finish,
    },
    Rule {
        name: "carbon_override",
        applies: is_carbon,
        apply: apply_carbon,
    },
    Rule {
        name: "decal",
        applies: has_decal,
        apply: apply_decal,
    },
];

/// Names of the rules that fired during one resolution.
pub type RuleTrace = SmallVec<[&'static str; 4]>;

pub fn resolve(config: &Configuration, mesh: &MeshDescriptor) -> Appearance {
    run_rules(config, mesh, None)
}

/// Same as [`resolve`] but also reports which rules fired.
pub fn resolve_traced(config: &Configuration, mesh: &MeshDescriptor) -> (Appearance, RuleTrace) {
    let mut trace = RuleTrace::new();
    let appearance = run_rules(config, mesh, Some(&mut trace));
    (appearance, trace)
}

fn run_rules(
    config: &Configuration,
    mesh: &MeshDescriptor,
    mut trace: Option<&mut RuleTrace>,
) -> Appearance {
    let mut out = Appearance {
        color: config.primary_color,
        metalness: mesh.authored.metalness,
        roughness: mesh.authored.roughness,
    };
    for rule in RULES.iter() {
        if (rule.applies)(config, mesh) {
            (rule.apply)(config, mesh, &mut out);
            if let Some(t) = trace.as_mut() {
                t.push(rule.name);
            }
        }
    }
    out
}

fn always(_: &Configuration, _: &MeshDescriptor) -> bool {
    true
}

fn has_finish(config: &Configuration, _: &MeshDescriptor) -> bool {
    config.finish.is_some()
}

fn is_carbon(config: &Configuration, _: &MeshDescriptor) -> bool {
    config.material == Material::Carbon
}

fn has_decal(config: &Configuration, _: &MeshDescriptor) -> bool {
    config.decal != Decal::None
}

/// Metalness/roughness pair for a finish.
pub fn finish_params(finish: Finish) -> SurfaceParams {
    match finish {
        Finish::Gloss => SurfaceParams::new(0.8, 0.2),
        Finish::Matte => SurfaceParams::new(0.2, 0.8),
        Finish::Satin => SurfaceParams::new(0.5, 0.5),
    }
}

fn apply_base_color(config: &Configuration, mesh: &MeshDescriptor, out: &mut Appearance) {
    out.color = if config.two_tone && mesh.is_secondary() {
        Configuration::secondary_color()
    } else {
        config.primary_color
    };
    out.set_params(mesh.authored);
}

fn apply_finish(config: &Configuration, _mesh: &MeshDescriptor, out: &mut Appearance) {
    if let Some(finish) = config.finish {
        out.set_params(finish_params(finish));
    }
}

fn apply_carbon(_config: &Configuration, _mesh: &MeshDescriptor, out: &mut Appearance) {
    out.set_params(SurfaceParams::new(CARBON_METALNESS, CARBON_ROUGHNESS));
}

// Stripe is checked before side; at most one shift applies per mesh.
fn apply_decal(config: &Configuration, mesh: &MeshDescriptor, out: &mut Appearance) {
    let shift = match config.decal {
        Decal::Stripe if mesh.decal_targets.hood => STRIPE_HSL_SHIFT,
        Decal::Side if mesh.decal_targets.door => SIDE_HSL_SHIFT,
        _ => return,
    };
    out.color = out.color.offset_hsl(shift[0], shift[1], shift[2]);
}
