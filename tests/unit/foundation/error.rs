use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SheetError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SheetError::font("x").to_string().contains("font error:"));
    assert!(
        SheetError::EmptySequence
            .to_string()
            .contains("empty tile sequence")
    );
}

#[test]
fn label_does_not_fit_names_label_and_tile() {
    let err = SheetError::LabelDoesNotFit {
        label: "8".to_string(),
        tile_width: 1,
        tile_height: 2,
        min_size: 1.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("\"8\""));
    assert!(msg.contains("1x2"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SheetError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
