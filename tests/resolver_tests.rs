use wrapview_core::{
    finish_params, resolve, resolve_traced, Configuration, Decal, DecalTargets, Finish, Material,
    MeshDescriptor, Rgb, SurfaceParams, SurfaceRole, VehicleModel, CARBON_METALNESS,
    CARBON_ROUGHNESS,
};

fn red() -> Rgb {
    Rgb::from_hex("#d62828").unwrap()
}

fn config() -> Configuration {
    Configuration {
        primary_color: red(),
        finish: Some(Finish::Gloss),
        material: Material::Vinyl,
        decal: Decal::None,
        two_tone: false,
        ..Configuration::default()
    }
}

fn assert_color_close(a: Rgb, b: Rgb) {
    let d = (a.r - b.r).abs().max((a.g - b.g).abs()).max((a.b - b.b).abs());
    assert!(d < 1e-5, "{a:?} != {b:?}");
}

#[test]
fn hood_with_stripe_end_to_end() {
    let cfg = Configuration {
        decal: Decal::Stripe,
        ..config()
    };
    let out = resolve(&cfg, &MeshDescriptor::from_name("Hood"));
    assert_eq!(out.metalness, 0.8);
    assert_eq!(out.roughness, 0.2);
    assert_color_close(out.color, red().offset_hsl(0.1, 0.0, 0.1));
}

#[test]
fn finish_table_is_independent_of_color_decal_and_model() {
    let meshes = ["Body", "Hood", "Door_Front_L", "Roof", "Mirror_R"];
    let expected = [
        (Finish::Gloss, 0.8, 0.2),
        (Finish::Matte, 0.2, 0.8),
        (Finish::Satin, 0.5, 0.5),
    ];
    for (finish, metal, rough) in expected {
        assert_eq!(finish_params(finish), SurfaceParams::new(metal, rough));
        for model in VehicleModel::ALL {
            for decal in Decal::ALL {
                for color in ["#000000", "#ffffff", "#0055ff"] {
                    let cfg = Configuration {
                        model,
                        decal,
                        finish: Some(finish),
                        primary_color: color.parse().unwrap(),
                        two_tone: true,
                        ..config()
                    };
                    for name in meshes {
                        let out = resolve(&cfg, &MeshDescriptor::from_name(name));
                        assert_eq!((out.metalness, out.roughness), (metal, rough), "{name}");
                    }
                }
            }
        }
    }
}

#[test]
fn carbon_overrides_every_finish() {
    for finish in [None, Some(Finish::Gloss), Some(Finish::Matte), Some(Finish::Satin)] {
        let cfg = Configuration {
            material: Material::Carbon,
            finish,
            ..config()
        };
        let out = resolve(&cfg, &MeshDescriptor::from_name("Body"));
        assert_eq!(out.metalness, CARBON_METALNESS);
        assert_eq!(out.roughness, CARBON_ROUGHNESS);
        assert_eq!(out.params(), SurfaceParams::new(1.0, 0.4));
    }
}

#[test]
fn non_carbon_materials_leave_finish_alone() {
    for material in [Material::Vinyl, Material::Tpu] {
        let cfg = Configuration {
            material,
            finish: Some(Finish::Matte),
            ..config()
        };
        let out = resolve(&cfg, &MeshDescriptor::from_name("Body"));
        assert_eq!(out.params(), SurfaceParams::new(0.2, 0.8));
    }
}

#[test]
fn two_tone_paints_secondary_surfaces_black() {
    for color in ["#d62828", "#ffffff", "#22c55e"] {
        let cfg = Configuration {
            two_tone: true,
            primary_color: color.parse().unwrap(),
            ..config()
        };
        let roof = resolve(&cfg, &MeshDescriptor::from_name("Roof_L"));
        assert_eq!(roof.color, Rgb::BLACK);
        let mirror = resolve(&cfg, &MeshDescriptor::from_name("mirror_right"));
        assert_eq!(mirror.color, Rgb::BLACK);
        let body = resolve(&cfg, &MeshDescriptor::from_name("Body"));
        assert_eq!(body.color, cfg.primary_color);
    }
}

#[test]
fn secondary_surfaces_use_primary_without_two_tone() {
    let out = resolve(&config(), &MeshDescriptor::from_name("Roof_L"));
    assert_eq!(out.color, red());
}

#[test]
fn side_decal_shifts_doors_only() {
    let cfg = Configuration {
        decal: Decal::Side,
        ..config()
    };
    let door = resolve(&cfg, &MeshDescriptor::from_name("Door_Front"));
    assert_color_close(door.color, red().offset_hsl(-0.1, 0.1, 0.1));
    assert_ne!(door.color, red());

    let hood = resolve(&cfg, &MeshDescriptor::from_name("Hood"));
    assert_eq!(hood.color, red());
}

#[test]
fn stripe_decal_skips_doors() {
    let cfg = Configuration {
        decal: Decal::Stripe,
        ..config()
    };
    let door = resolve(&cfg, &MeshDescriptor::from_name("Door_Front_L"));
    assert_eq!(door.color, red());
}

#[test]
fn no_decal_keeps_exact_base_color() {
    for name in ["Hood", "Door_Front", "Body", "HoodDoor"] {
        let out = resolve(&config(), &MeshDescriptor::from_name(name));
        assert_eq!(out.color, red(), "{name}");
    }
}

#[test]
fn decal_shift_applies_on_top_of_two_tone_color() {
    let cfg = Configuration {
        two_tone: true,
        decal: Decal::Stripe,
        ..config()
    };
    let mesh = MeshDescriptor::tagged("roof_hood", SurfaceRole::Secondary, DecalTargets::HOOD);
    let out = resolve(&cfg, &mesh);
    assert_color_close(out.color, Rgb::BLACK.offset_hsl(0.1, 0.0, 0.1));
}

#[test]
fn name_matching_is_case_insensitive() {
    let cfg = Configuration {
        decal: Decal::Stripe,
        two_tone: true,
        ..config()
    };
    let lower = resolve(&cfg, &MeshDescriptor::from_name("hood"));
    let upper = resolve(&cfg, &MeshDescriptor::from_name("HOOD"));
    assert_eq!(lower, upper);
    assert_eq!(
        resolve(&cfg, &MeshDescriptor::from_name("ROOF")).color,
        Rgb::BLACK
    );
}

#[test]
fn hood_and_door_name_takes_side_shift_when_side_selected() {
    let mesh = MeshDescriptor::from_name("Hood_Door_Panel");
    assert_eq!(
        mesh.decal_targets,
        DecalTargets {
            hood: true,
            door: true
        }
    );
    let side = resolve(
        &Configuration {
            decal: Decal::Side,
            ..config()
        },
        &mesh,
    );
    assert_color_close(side.color, red().offset_hsl(-0.1, 0.1, 0.1));
    let stripe = resolve(
        &Configuration {
            decal: Decal::Stripe,
            ..config()
        },
        &mesh,
    );
    assert_color_close(stripe.color, red().offset_hsl(0.1, 0.0, 0.1));
}

#[test]
fn unset_finish_keeps_authored_params() {
    let cfg = Configuration {
        finish: None,
        ..config()
    };
    let authored = SurfaceParams::new(0.35, 0.65);
    let out = resolve(&cfg, &MeshDescriptor::from_name("Body").with_authored(authored));
    assert_eq!(out.params(), authored);

    let plain = resolve(&cfg, &MeshDescriptor::from_name("Body"));
    assert_eq!(plain.params(), SurfaceParams::default());
}

#[test]
fn resolution_is_idempotent() {
    let cfg = Configuration {
        decal: Decal::Side,
        two_tone: true,
        material: Material::Carbon,
        ..config()
    };
    let mesh = MeshDescriptor::from_name("Door_Front_R");
    let a = resolve(&cfg, &mesh);
    let b = resolve(&cfg, &mesh);
    assert_eq!(a.color.r.to_bits(), b.color.r.to_bits());
    assert_eq!(a.color.g.to_bits(), b.color.g.to_bits());
    assert_eq!(a.color.b.to_bits(), b.color.b.to_bits());
    assert_eq!(a.metalness.to_bits(), b.metalness.to_bits());
    assert_eq!(a.roughness.to_bits(), b.roughness.to_bits());
}

#[test]
fn trace_lists_rules_in_pipeline_order() {
    let cfg = Configuration {
        material: Material::Carbon,
        decal: Decal::Stripe,
        ..config()
    };
    let (out, trace) = resolve_traced(&cfg, &MeshDescriptor::from_name("Hood"));
    assert_eq!(
        trace.as_slice(),
        &["base_color", "finish", "carbon_override", "decal"]
    );
    assert_eq!(out, resolve(&cfg, &MeshDescriptor::from_name("Hood")));

    let (_, trace) = resolve_traced(
        &Configuration {
            finish: None,
            ..config()
        },
        &MeshDescriptor::from_name("Body"),
    );
    assert_eq!(trace.as_slice(), &["base_color"]);
}
