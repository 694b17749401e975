use canned_core::{failure, success};
use canned_error::{ApplicationError, ApplicationErrorKind};
use canned_query::ResponseMapperSpec;

fn boom() -> ApplicationError {
    ApplicationError::custom("Error", "boom!")
}

#[test]
fn maps_response_with_provided_mapper() {
    let mapper = ResponseMapperSpec::new(|_: &str| success(true)).build();
    assert!(mapper.from_response("response").unwrap());
}

#[test]
fn errors_propagate_unchanged_without_recovery() {
    let mapper = ResponseMapperSpec::new(|_: &str| success(true)).build();
    let original = boom();

    let err = mapper.from_error(original.clone()).unwrap_err();
    assert_eq!(err.kind(), original.kind());
    assert_eq!(err.line(), original.line());
    assert!(!mapper.has_recovery());
}

#[test]
fn map_response_failures_propagate_without_recovery() {
    let mapper = ResponseMapperSpec::new(|_: &str| failure::<bool, _>(boom())).build();

    let err = mapper.from_response("response").unwrap_err();
    assert_eq!(err.message(), "boom!");
}

#[test]
fn recovery_maps_errors_to_fallback() {
    let mapper = ResponseMapperSpec::new(|_: &str| success(true))
        .with_map_error(|_| success(true))
        .build();

    assert!(mapper.from_response("response").unwrap());
    assert!(mapper.from_error(boom()).unwrap());
    assert!(mapper.from_error(ApplicationError::unknown("anything")).unwrap());
    assert!(mapper.has_recovery());
}

#[test]
fn map_response_failures_route_through_recovery() {
    let mapper = ResponseMapperSpec::new(|_: &str| failure::<bool, _>(boom()))
        .with_map_error(|_| success(true))
        .build();

    assert!(mapper.from_response("response").unwrap());
}

#[test]
fn recovery_sees_the_mapping_error() {
    let mapper = ResponseMapperSpec::new(|status: u16| {
        if status == 200 {
            success("ok".to_string())
        } else {
            failure(ApplicationError::custom("ValidationError", status.to_string()))
        }
    })
    .with_map_error(|error| match error.kind() {
        ApplicationErrorKind::Custom { message, .. } => success(format!("recovered {message}")),
        _ => failure(error),
    })
    .build();

    assert_eq!(mapper.from_response(200).unwrap(), "ok");
    assert_eq!(mapper.from_response(404).unwrap(), "recovered 404");

    let transport = mapper
        .from_error(ApplicationError::transport(500, "down"))
        .unwrap_err();
    assert_eq!(transport.status(), Some(500));
}

#[test]
fn failing_recovery_returns_its_own_error() {
    let mapper = ResponseMapperSpec::identity()
        .with_map_error(|_| failure::<u8, _>(ApplicationError::custom("Fallback", "no default")))
        .build();

    let err = mapper.from_error(boom()).unwrap_err();
    assert_eq!(err.message(), "no default");
}

#[test]
fn identity_passes_values_through() {
    let mapper = ResponseMapperSpec::<Vec<u8>, Vec<u8>>::identity().build();
    assert_eq!(mapper.from_response(vec![1, 2, 3]).unwrap(), vec![1, 2, 3]);
}
