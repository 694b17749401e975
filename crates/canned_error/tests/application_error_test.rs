use canned_error::{ApplicationError, ApplicationErrorKind, CannedError, CannedErrorKind};
use std::error::Error;

#[test]
fn constructors_produce_exactly_their_kind() {
    let transport = ApplicationError::transport(400, "failure");
    assert_eq!(
        transport.kind(),
        &ApplicationErrorKind::Transport {
            status: 400,
            message: "failure".to_string()
        }
    );

    let decode = ApplicationError::decode("not json", "JSON parse error");
    assert_eq!(decode.kind().name(), "DecodeError");
    assert_eq!(decode.status(), None);

    let custom = ApplicationError::custom("TypeError", "missing login");
    assert_eq!(custom.kind().name(), "CustomError");
    assert_eq!(custom.message(), "missing login");

    let unknown = ApplicationError::unknown("mystery");
    assert_eq!(unknown.kind().name(), "UnknownError");
    assert_eq!(unknown.message(), "mystery");
}

#[test]
fn location_is_captured_at_call_site() {
    let err = ApplicationError::custom("Check", "location");
    assert!(err.file().ends_with("application_error_test.rs"));
    assert!(err.line() > 0);
}

#[test]
fn classify_keeps_typed_errors() {
    let original = ApplicationError::decode("<html>", "JSON parse error");
    let classified = ApplicationError::classify(Box::new(original.clone()));
    assert_eq!(classified.kind(), original.kind());
    assert_eq!(classified.line(), original.line());
}

#[test]
fn classify_wraps_everything_else_as_unknown() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
    let classified = ApplicationError::classify(Box::new(io));

    assert!(matches!(
        classified.kind(),
        ApplicationErrorKind::Unknown { .. }
    ));
    let source = classified.source().expect("unknown errors expose their cause");
    assert_eq!(source.to_string(), "reset by peer");
}

#[test]
fn retryable_statuses() {
    assert!(ApplicationError::transport(503, "unavailable").is_retryable());
    assert!(ApplicationError::transport(429, "slow down").is_retryable());
    assert!(ApplicationError::transport(0, "connection refused").is_retryable());
    assert!(!ApplicationError::transport(404, "not found").is_retryable());
    assert!(!ApplicationError::decode("x", "bad").is_retryable());

    for status in [0, 408, 429, 500, 502, 503, 504] {
        assert!(ApplicationError::transport(status, "x").is_retryable(), "{}", status);
    }
    for status in [400, 401, 404, 409, 501, 505, 599] {
        assert!(!ApplicationError::transport(status, "x").is_retryable(), "{}", status);
    }
}

#[test]
fn canned_error_wraps_application_errors() {
    let err: CannedError = ApplicationError::transport(500, "boom").into();
    match err.kind() {
        CannedErrorKind::Application(inner) => assert_eq!(inner.status(), Some(500)),
        other => panic!("unexpected kind: {other}"),
    }
}
