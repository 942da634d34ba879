use super::*;

#[test]
fn scroll_midpoint_adds_half_viewport() {
    assert_eq!(ScrollEvent::new(100.0, 800.0).midpoint(), 500.0);
    assert_eq!(ScrollEvent::new(0.0, 0.0).midpoint(), 0.0);
}

#[test]
fn resolve_fills_missing_slots_from_fallback() {
    let fallback = Gradient::from([(1, 1, 1), (2, 2, 2), (3, 3, 3)]);
    let red = Rgb8::new(255, 0, 0);

    let g = Gradient::resolve(&[Some(red)], &fallback);
    assert_eq!(g.0, [red, Rgb8::new(2, 2, 2), Rgb8::new(3, 3, 3)]);

    let g = Gradient::resolve(&[None, Some(red), None], &fallback);
    assert_eq!(g.0, [Rgb8::new(1, 1, 1), red, Rgb8::new(3, 3, 3)]);

    assert_eq!(Gradient::resolve(&[], &fallback), fallback);
}

#[test]
fn resolve_ignores_slots_past_the_third() {
    let red = Rgb8::new(255, 0, 0);
    let g = Gradient::resolve(&[Some(red); 5], &DEFAULT_GRADIENT);
    assert_eq!(g.0, [red; 3]);
}

#[test]
fn gradient_serializes_as_hex_strings() {
    let g = Gradient::from([(48, 4, 88), (42, 160, 214), (3, 19, 67)]);
    let v = serde_json::to_value(g).unwrap();
    assert_eq!(v, serde_json::json!(["#300458", "#2aa0d6", "#031343"]));
    assert_eq!(g, DEFAULT_GRADIENT);
}
