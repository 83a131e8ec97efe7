//! Session state shared with the web frontend.
//!
//! These types avoid platform-specific APIs so they can be exercised on the
//! host. The frontend owns one `ConfigurationStore` and one `ApplyNotice`
//! per page and drives them from DOM events.

use crate::color::Rgb;
use crate::constants::{
    apply_notice_duration, camera_start_eye, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR,
    ORBIT_DISTANCE_MAX, ORBIT_DISTANCE_MIN, ORBIT_PITCH_LIMIT,
};
use crate::error::ConfigError;
use crate::options::{Configuration, Decal, Finish, Material, VehicleModel};
use glam::{Mat4, Vec3};
use instant::Instant;
use std::time::Duration;

/// A single-field change coming from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection {
    Model(VehicleModel),
    PrimaryColor(Rgb),
    TwoTone(bool),
    Finish(Option<Finish>),
    Material(Material),
    Decal(Decal),
}

impl Selection {
    /// Build a selection from the `data-field` / `data-value` strings the
    /// option buttons carry.
    pub fn parse(field: &str, value: &str) -> Result<Self, ConfigError> {
        match field.trim().to_ascii_lowercase().as_str() {
            "model" => Ok(Selection::Model(value.parse()?)),
            "color" | "primary-color" => Ok(Selection::PrimaryColor(value.parse()?)),
            "two-tone" | "twotone" => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "enabled" => Ok(Selection::TwoTone(true)),
                "false" | "off" | "disabled" => Ok(Selection::TwoTone(false)),
                _ => Err(ConfigError::UnknownOption {
                    field: "two-tone",
                    value: value.to_string(),
                }),
            },
            "finish" => Ok(Selection::Finish(Some(value.parse()?))),
            "material" => Ok(Selection::Material(value.parse()?)),
            "decal" => Ok(Selection::Decal(value.parse()?)),
            _ => Err(ConfigError::UnknownField(field.to_string())),
        }
    }

    /// Whether `config` already holds this selection's value.
    pub fn is_current(&self, config: &Configuration) -> bool {
        match *self {
            Selection::Model(m) => config.model == m,
            // compare quantized so swatch hex strings match parsed colors
            Selection::PrimaryColor(c) => config.primary_color.to_bytes() == c.to_bytes(),
            Selection::TwoTone(t) => config.two_tone == t,
            Selection::Finish(f) => config.finish == f,
            Selection::Material(m) => config.material == m,
            Selection::Decal(d) => config.decal == d,
        }
    }
}

/// Owns the live configuration. Setters are the only way fields change;
/// every effective change bumps `revision` so renderers know to re-resolve.
#[derive(Clone, Debug, Default)]
pub struct ConfigurationStore {
    config: Configuration,
    revision: u64,
}

impl ConfigurationStore {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            revision: 0,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_model(&mut self, model: VehicleModel) -> bool {
        let changed = replace(&mut self.config.model, model);
        self.bump(changed, "model")
    }

    pub fn set_primary_color(&mut self, color: Rgb) -> bool {
        let changed = replace(&mut self.config.primary_color, color);
        self.bump(changed, "primary_color")
    }

    pub fn set_two_tone(&mut self, two_tone: bool) -> bool {
        let changed = replace(&mut self.config.two_tone, two_tone);
        self.bump(changed, "two_tone")
    }

    pub fn toggle_two_tone(&mut self) -> bool {
        let next = !self.config.two_tone;
        self.set_two_tone(next);
        next
    }

    pub fn set_finish(&mut self, finish: Option<Finish>) -> bool {
        let changed = replace(&mut self.config.finish, finish);
        self.bump(changed, "finish")
    }

    pub fn set_material(&mut self, material: Material) -> bool {
        let changed = replace(&mut self.config.material, material);
        self.bump(changed, "material")
    }

    pub fn set_decal(&mut self, decal: Decal) -> bool {
        let changed = replace(&mut self.config.decal, decal);
        self.bump(changed, "decal")
    }

    /// Dispatch one selection event. Returns whether anything changed.
    pub fn apply(&mut self, selection: Selection) -> bool {
        match selection {
            Selection::Model(m) => self.set_model(m),
            Selection::PrimaryColor(c) => self.set_primary_color(c),
            Selection::TwoTone(t) => self.set_two_tone(t),
            Selection::Finish(f) => self.set_finish(f),
            Selection::Material(m) => self.set_material(m),
            Selection::Decal(d) => self.set_decal(d),
        }
    }

    fn bump(&mut self, changed: bool, field: &str) -> bool {
        if changed {
            self.revision += 1;
            log::debug!("[config] {} changed, revision={}", field, self.revision);
        }
        changed
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Identifies one trigger of the apply notice. Only the latest ticket can
/// dismiss it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeTicket(u64);

/// Transient "changes applied" flag with a fixed display window.
///
/// Triggering again while visible restarts the window and invalidates the
/// previous ticket, so an older dismissal never hides a newer notice.
#[derive(Clone, Debug)]
pub struct ApplyNotice {
    duration: Duration,
    visible_until: Option<Instant>,
    generation: u64,
}

impl Default for ApplyNotice {
    fn default() -> Self {
        Self::new(apply_notice_duration())
    }
}

impl ApplyNotice {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            visible_until: None,
            generation: 0,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn trigger(&mut self, now: Instant) -> NoticeTicket {
        self.generation += 1;
        self.visible_until = Some(now + self.duration);
        NoticeTicket(self.generation)
    }

    pub fn is_visible(&self) -> bool {
        self.visible_until.is_some()
    }

    /// Hide the notice if `ticket` belongs to the latest trigger.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 != self.generation || self.visible_until.is_none() {
            return false;
        }
        self.visible_until = None;
        true
    }

    /// Hide the notice once its window has elapsed. Returns visibility.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.visible_until {
            if now >= deadline {
                self.visible_until = None;
            }
        }
        self.is_visible()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.visible_until.map(|deadline| {
            if deadline > now {
                deadline.duration_since(now)
            } else {
                Duration::ZERO
            }
        })
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Orbit-style camera rig: spherical coordinates around a target.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(camera_start_eye(), Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset
            .length()
            .clamp(ORBIT_DISTANCE_MIN, ORBIT_DISTANCE_MAX);
        let yaw = offset.x.atan2(offset.z);
        let horizontal = (offset.x * offset.x + offset.z * offset.z).sqrt();
        let pitch = offset
            .y
            .atan2(horizontal)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        Self {
            target,
            yaw,
            pitch,
            distance,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(sy * cp, sp, cy * cp) * self.distance
    }

    /// Rotate by the given angles (radians).
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = (self.yaw + d_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + d_pitch).clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Scale the orbit distance; factors below 1 move closer.
    pub fn zoom(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.distance = (self.distance * factor).clamp(ORBIT_DISTANCE_MIN, ORBIT_DISTANCE_MAX);
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
