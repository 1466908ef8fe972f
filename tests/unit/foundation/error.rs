use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LightWaveError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        LightWaveError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        LightWaveError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LightWaveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: LightWaveError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, LightWaveError::Serde(_)));
}
