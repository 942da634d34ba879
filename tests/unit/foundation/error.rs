use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GradientError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        GradientError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(GradientError::color("x").to_string().contains("color error:"));
    assert!(
        GradientError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GradientError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
