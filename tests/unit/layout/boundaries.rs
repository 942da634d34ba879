use super::*;
use crate::foundation::core::DEFAULT_GRADIENT;

fn sections() -> Vec<Section> {
    ["home", "projects", "about"]
        .iter()
        .enumerate()
        .map(|(i, id)| Section::new(*id, i as f64 * 100.0, DEFAULT_GRADIENT))
        .collect()
}

#[test]
fn updates_replace_offsets_by_id() {
    let out = apply_boundaries(
        &sections(),
        &[
            SectionBoundary::new("about", 2100.0),
            SectionBoundary::new("projects", 950.0),
        ],
    )
    .unwrap();
    assert_eq!(out, vec![0.0, 950.0, 2100.0]);
}

#[test]
fn unknown_ids_are_skipped() {
    let out = apply_boundaries(&sections(), &[SectionBoundary::new("hobbies", 5.0)]).unwrap();
    assert_eq!(out, vec![0.0, 100.0, 200.0]);
}

#[test]
fn reordering_offsets_is_rejected() {
    let err = apply_boundaries(&sections(), &[SectionBoundary::new("home", 150.0)]).unwrap_err();
    assert!(matches!(err, GradientError::Layout(_)));
    assert!(err.to_string().contains("projects"));
}

#[test]
fn invalid_offsets_are_rejected() {
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let err =
            apply_boundaries(&sections(), &[SectionBoundary::new("about", bad)]).unwrap_err();
        assert!(matches!(err, GradientError::Layout(_)));
    }
}
