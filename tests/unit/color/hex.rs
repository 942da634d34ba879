use super::*;
use serde_json::json;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(Rgb8::from_hex("#1e1b4b").unwrap(), Rgb8::new(30, 27, 75));
    assert_eq!(Rgb8::from_hex("831843").unwrap(), Rgb8::new(131, 24, 67));
    assert_eq!(Rgb8::from_hex("  #0F172A ").unwrap(), Rgb8::new(15, 23, 42));
}

#[test]
fn rejects_malformed_hex() {
    for s in ["#zzzzzz", "#fff", "#12345", "#1234567", "", "#", "#ab-def"] {
        assert!(Rgb8::from_hex(s).is_err(), "{s:?} should not parse");
    }
}

#[test]
fn lenient_hex_falls_back_to_black() {
    assert_eq!(Rgb8::from_hex_lenient("#zzzzzz"), Rgb8::new(0, 0, 0));
    assert_eq!(Rgb8::from_hex_lenient("#ff0000"), Rgb8::new(255, 0, 0));
}

#[test]
fn hex_formatting_is_lowercase_and_padded() {
    assert_eq!(Rgb8::new(3, 19, 67).to_hex(), "#031343");
    assert_eq!(Rgb8::new(255, 171, 0).to_string(), "#ffab00");
}

#[test]
fn color_input_accepts_hex_and_channel_arrays() {
    let c: ColorInput = serde_json::from_value(json!("#2563eb")).unwrap();
    assert_eq!(c.to_rgb8().unwrap(), Rgb8::new(37, 99, 235));

    let c: ColorInput = serde_json::from_value(json!([30, 64, 175])).unwrap();
    assert_eq!(c.to_rgb8().unwrap(), Rgb8::new(30, 64, 175));
}

#[test]
fn malformed_color_input_is_black_not_an_error() {
    for v in [json!("#zzzzzz"), json!([1, 2]), json!([0, 300, 0]), json!([0.5, 0, 0]), json!(42)] {
        let c: ColorInput = serde_json::from_value(v.clone()).unwrap();
        assert!(c.to_rgb8().is_err(), "{v} should fail strictly");
        assert_eq!(c.to_slot(), Some(Rgb8::BLACK), "{v} should resolve to black");
    }
}

#[test]
fn null_color_input_is_a_missing_slot() {
    let c: ColorInput = serde_json::from_value(json!(null)).unwrap();
    assert!(c.is_missing());
    assert_eq!(c.to_slot(), None);
}
