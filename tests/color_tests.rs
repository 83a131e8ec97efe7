use wrapview_core::{ConfigError, Hsl, Rgb, COLOR_SWATCHES, DEFAULT_PRIMARY_RGB};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn parses_long_and_short_hex() {
    let c = Rgb::from_hex("#d62828").unwrap();
    assert_eq!(c.to_bytes(), [0xd6, 0x28, 0x28]);
    assert_eq!(Rgb::from_hex("fff").unwrap(), Rgb::WHITE);
    assert_eq!(Rgb::from_hex(" #000 ").unwrap(), Rgb::BLACK);
    assert_eq!("#0055FF".parse::<Rgb>().unwrap().to_hex(), "#0055ff");
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["", "#", "#12345", "#gggggg", "#1234567", "red", "#ééé"] {
        match Rgb::from_hex(bad) {
            Err(ConfigError::InvalidColor(s)) => assert_eq!(s, bad),
            other => panic!("{bad:?} parsed as {other:?}"),
        }
    }
}

#[test]
fn display_prints_hex() {
    let c = Rgb::from_bytes(DEFAULT_PRIMARY_RGB);
    assert_eq!(c.to_string(), "#d62828");
}

#[test]
fn swatches_all_parse() {
    for s in COLOR_SWATCHES {
        let c: Rgb = s.parse().unwrap();
        assert_eq!(c.to_hex(), s);
    }
}

#[test]
fn hsl_of_default_red() {
    let hsl = Rgb::from_hex("#d62828").unwrap().to_hsl();
    assert!(close(hsl.h, 0.0));
    // max 214, min 40 -> l = 254 / 510
    assert!(close(hsl.l, 254.0 / 510.0));
    assert!(close(hsl.s, 174.0 / 254.0));
}

#[test]
fn hsl_conversion_recovers_bytes() {
    for s in ["#d62828", "#0055ff", "#22c55e", "#808080", "#fcbf49"] {
        let c: Rgb = s.parse().unwrap();
        assert_eq!(Rgb::from_hsl(c.to_hsl()).to_bytes(), c.to_bytes(), "{s}");
    }
}

#[test]
fn offset_hue_wraps_around() {
    let red = Rgb::new(1.0, 0.0, 0.0);
    let shifted = red.offset_hsl(-0.1, 0.0, 0.0).to_hsl();
    assert!(close(shifted.h, 0.9));
    let full_turn = red.offset_hsl(1.0, 0.0, 0.0);
    assert!(close(full_turn.r, 1.0) && close(full_turn.g, 0.0) && close(full_turn.b, 0.0));
}

#[test]
fn offset_clamps_saturation_and_lightness() {
    let c = Rgb::new(0.9, 0.2, 0.2).offset_hsl(0.0, 5.0, 5.0);
    assert_eq!(c, Rgb::WHITE);
    let c = Rgb::new(0.9, 0.2, 0.2).offset_hsl(0.0, -5.0, 0.0);
    let hsl = c.to_hsl();
    assert_eq!(hsl.s, 0.0);
    assert!(close(c.r, c.g) && close(c.g, c.b));
}

#[test]
fn stripe_shift_of_default_red_is_lighter_and_orange() {
    let red = Rgb::from_hex("#d62828").unwrap();
    let out = red.offset_hsl(0.1, 0.0, 0.1);
    let Hsl { h, s, l } = out.to_hsl();
    assert!(close(h, 0.1));
    assert!(close(s, red.to_hsl().s));
    assert!(close(l, red.to_hsl().l + 0.1));
    assert!(out.g > red.g);
}

#[test]
fn linear_conversion_darkens_midtones() {
    let lin = Rgb::new(0.5, 0.5, 0.5).to_linear();
    assert!(lin.x > 0.2 && lin.x < 0.22);
    assert!(close(Rgb::new(0.04, 0.0, 0.0).to_linear().x, 0.04 / 12.92));
}
