use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LogoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(LogoError::font("x").to_string().contains("font error:"));
    assert!(LogoError::render("x").to_string().contains("render error:"));
    assert!(LogoError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn io_errors_convert() {
    fn fails() -> LogoResult<()> {
        let r: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        r?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, LogoError::Io(_)));
    assert!(err.to_string().contains("denied"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LogoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
