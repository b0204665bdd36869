//! Error Context Tests

use apus_domain::error::Error;
use apus_infrastructure::error_ext::ErrorContext;

fn missing_file() -> std::io::Result<()> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_io_context() {
    let err = missing_file().io_context("Failed to read frame").unwrap_err();

    match err {
        Error::Io { message, source } => {
            assert_eq!(message, "Failed to read frame: gone");
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let err = missing_file().config_context("Bad config").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert_eq!(err.to_string(), "Configuration error: Bad config: gone");
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let ok: std::io::Result<u8> = Ok(1);
    let value = ok
        .with_context(|| {
            evaluated = true;
            "never"
        })
        .unwrap();

    assert_eq!(value, 1);
    assert!(!evaluated);

    let err = missing_file().with_context(|| "lazy").unwrap_err();
    assert_eq!(err.to_string(), "Internal error: lazy: gone");
}
