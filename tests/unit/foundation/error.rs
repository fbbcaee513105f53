use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FadeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FadeError::load("x").to_string().contains("load error:"));
    assert!(FadeError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FadeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_with_question_mark() {
    fn inner() -> FadeResult<()> {
        Err(anyhow::anyhow!("wrapped"))?;
        Ok(())
    }
    let err = inner().unwrap_err();
    assert!(matches!(err, FadeError::Other(_)));
    assert_eq!(err.to_string(), "wrapped");
}
