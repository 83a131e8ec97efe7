//! The closed option sets offered by the configurator and the record that
//! holds one value of each.

use crate::color::Rgb;
use crate::constants::{DEFAULT_PRIMARY_RGB, SECONDARY_RGB};
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VehicleModel {
    #[default]
    FerrariF8,
    LamborghiniHuracan,
    Porsche911,
}

impl VehicleModel {
    pub const ALL: [VehicleModel; 3] = [
        VehicleModel::FerrariF8,
        VehicleModel::LamborghiniHuracan,
        VehicleModel::Porsche911,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            VehicleModel::FerrariF8 => "Ferrari F8",
            VehicleModel::LamborghiniHuracan => "Lamborghini Huracan",
            VehicleModel::Porsche911 => "Porsche 911",
        }
    }

    /// Asset path the model would be fetched from.
    pub fn asset_path(self) -> &'static str {
        match self {
            VehicleModel::FerrariF8 => "/models/ferrari.glb",
            VehicleModel::LamborghiniHuracan => "/models/lamborghini.glb",
            VehicleModel::Porsche911 => "/models/porsche.glb",
        }
    }

    fn key(self) -> &'static str {
        match self {
            VehicleModel::FerrariF8 => "ferrari",
            VehicleModel::LamborghiniHuracan => "lamborghini",
            VehicleModel::Porsche911 => "porsche",
        }
    }
}

impl FromStr for VehicleModel {
    type Err = ConfigError;

    /// Accepts the short key (`ferrari`), the display name or the asset path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        VehicleModel::ALL
            .into_iter()
            .find(|m| {
                needle.eq_ignore_ascii_case(m.key())
                    || needle.eq_ignore_ascii_case(m.display_name())
                    || needle == m.asset_path()
            })
            .ok_or_else(|| unknown("model", s))
    }
}

/// Reflectance preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finish {
    Gloss,
    Matte,
    Satin,
}

impl Finish {
    pub const ALL: [Finish; 3] = [Finish::Gloss, Finish::Matte, Finish::Satin];

    pub fn label(self) -> &'static str {
        match self {
            Finish::Gloss => "Gloss",
            Finish::Matte => "Matte",
            Finish::Satin => "Satin",
        }
    }
}

impl FromStr for Finish {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // "glossy" is the spelling used by the older viewer page
            "gloss" | "glossy" => Ok(Finish::Gloss),
            "matte" => Ok(Finish::Matte),
            "satin" => Ok(Finish::Satin),
            _ => Err(unknown("finish", s)),
        }
    }
}

/// Surface substance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Material {
    #[default]
    Vinyl,
    Tpu,
    Carbon,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Vinyl, Material::Tpu, Material::Carbon];

    pub fn label(self) -> &'static str {
        match self {
            Material::Vinyl => "Vinyl",
            Material::Tpu => "TPU",
            Material::Carbon => "Carbon",
        }
    }
}

impl FromStr for Material {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vinyl" => Ok(Material::Vinyl),
            "tpu" => Ok(Material::Tpu),
            "carbon" => Ok(Material::Carbon),
            _ => Err(unknown("material", s)),
        }
    }
}

/// Decal pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Decal {
    #[default]
    None,
    Stripe,
    Side,
}

impl Decal {
    pub const ALL: [Decal; 3] = [Decal::None, Decal::Stripe, Decal::Side];

    pub fn label(self) -> &'static str {
        match self {
            Decal::None => "None",
            Decal::Stripe => "Stripe",
            Decal::Side => "Side",
        }
    }
}

impl FromStr for Decal {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Decal::None),
            "stripe" => Ok(Decal::Stripe),
            "side" => Ok(Decal::Side),
            _ => Err(unknown("decal", s)),
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty => $f:ident),* $(,)?) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.$f())
            }
        })*
    };
}

display_via_label!(
    VehicleModel => display_name,
    Finish => label,
    Material => label,
    Decal => label,
);

/// One live customization. Every combination of values is valid.
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    pub model: VehicleModel,
    pub primary_color: Rgb,
    pub two_tone: bool,
    /// `None` leaves the mesh's authored surface parameters in place.
    pub finish: Option<Finish>,
    pub material: Material,
    pub decal: Decal,
}

impl Configuration {
    /// Color painted on secondary surfaces when two-tone is on.
    pub fn secondary_color() -> Rgb {
        Rgb::from_bytes(SECONDARY_RGB)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            model: VehicleModel::default(),
            primary_color: Rgb::from_bytes(DEFAULT_PRIMARY_RGB),
            two_tone: false,
            finish: Some(Finish::Gloss),
            material: Material::default(),
            decal: Decal::default(),
        }
    }
}

fn unknown(field: &'static str, value: &str) -> ConfigError {
    ConfigError::UnknownOption {
        field,
        value: value.to_string(),
    }
}
