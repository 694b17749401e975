use canned_error::{ApplicationError, ApplicationErrorKind};
use canned_http::{RawResponse, ResponseParser};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    login: String,
    id: u64,
}

#[tokio::test]
async fn well_formed_body_round_trips() {
    let payload = json!({
        "login": "octocat",
        "id": 583231,
        "nested": {"list": [1, 2.5, "three", null, true]},
        "unicode": "ß → 東京"
    });
    let parser = ResponseParser::default();

    let decoded: Value = parser
        .parse(RawResponse::json_body(StatusCode::OK, &payload))
        .await
        .expect("200 with valid JSON should decode");

    assert_eq!(decoded, payload);
}

#[tokio::test]
async fn decodes_into_typed_payload() {
    let parser = ResponseParser::new();
    let user: User = parser
        .parse(RawResponse::new(
            StatusCode::OK,
            r#"{"login":"octocat","id":1,"extra":"ignored"}"#,
        ))
        .await
        .expect("typed decode");

    assert_eq!(
        user,
        User {
            login: "octocat".to_string(),
            id: 1
        }
    );
}

#[tokio::test]
async fn http_400_with_message_yields_transport_error() {
    let parser = ResponseParser::default();
    let err = parser
        .parse::<Value>(RawResponse::new(
            StatusCode::BAD_REQUEST,
            r#"{"message":"failure"}"#,
        ))
        .await
        .unwrap_err();

    assert_eq!(
        err.kind(),
        &ApplicationErrorKind::Transport {
            status: 400,
            message: "failure".to_string()
        }
    );
}

#[tokio::test]
async fn http_200_with_garbage_yields_decode_error() {
    let parser = ResponseParser::default();
    let err = parser
        .parse::<Value>(RawResponse::new(StatusCode::OK, "not json"))
        .await
        .unwrap_err();

    match err.kind() {
        ApplicationErrorKind::Decode { body, message } => {
            assert_eq!(body, "not json");
            assert!(message.starts_with("JSON parse error"));
        }
        other => panic!("expected decode error, got {other}"),
    }
}

#[tokio::test]
async fn non_2xx_is_never_a_decode_error() {
    let parser = ResponseParser::default();
    for (status, body) in [
        (StatusCode::NOT_FOUND, "this will not parse"),
        (StatusCode::INTERNAL_SERVER_ERROR, r#"{"ok":true}"#),
        (StatusCode::UNAUTHORIZED, ""),
        (StatusCode::MOVED_PERMANENTLY, "[]"),
    ] {
        let err = parser
            .parse::<Value>(RawResponse::new(status, body))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(status.as_u16()), "body: {body}");
    }
}

#[tokio::test]
async fn successful_status_with_wrong_shape_is_never_a_transport_error() {
    let parser = ResponseParser::default();
    for body in ["", "<html></html>", r#"{"login":"octocat"}"#, "[1,2"] {
        let err = parser
            .parse::<User>(RawResponse::new(StatusCode::OK, body))
            .await
            .unwrap_err();
        assert!(
            matches!(err.kind(), ApplicationErrorKind::Decode { .. }),
            "body {body:?} gave {err}"
        );
    }
}

#[tokio::test]
async fn default_http_classifier_message_sources() {
    let parser = ResponseParser::default();

    let string_body = parser
        .parse::<Value>(RawResponse::new(StatusCode::FORBIDDEN, r#""rate limited""#))
        .await
        .unwrap_err();
    assert_eq!(string_body.message(), "rate limited");

    let plain_text = parser
        .parse::<Value>(RawResponse::new(StatusCode::BAD_GATEWAY, "upstream down"))
        .await
        .unwrap_err();
    assert_eq!(plain_text.message(), "upstream down");

    let empty = parser
        .parse::<Value>(RawResponse::new(StatusCode::NOT_FOUND, ""))
        .await
        .unwrap_err();
    assert_eq!(empty.message(), "Not Found");

    let object_without_message = parser
        .parse::<Value>(RawResponse::new(StatusCode::CONFLICT, r#"{"code":7}"#))
        .await
        .unwrap_err();
    assert_eq!(object_without_message.message(), "Conflict");

    let no_reason = StatusCode::from_u16(599).expect("valid status");
    let unnamed = parser
        .parse::<Value>(RawResponse::new(no_reason, ""))
        .await
        .unwrap_err();
    assert_eq!(unnamed.status(), Some(599));
    assert_eq!(unnamed.message(), "Request failed");
}

#[tokio::test]
async fn custom_classifiers_replace_default_messages() {
    let parser = ResponseParser::new()
        .with_http_error_classifier(|response: RawResponse| async move {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            ApplicationError::custom(status.as_u16().to_string(), body)
        })
        .with_decode_error_classifier(|response: RawResponse| async move {
            let body = response.text().await.unwrap_or_default();
            ApplicationError::custom("ParseError", format!("{} bytes", body.len()))
        });

    let http = parser
        .parse::<Value>(RawResponse::new(StatusCode::BAD_REQUEST, "Bad Request"))
        .await
        .unwrap_err();
    assert_eq!(
        http.kind(),
        &ApplicationErrorKind::Custom {
            name: "400".to_string(),
            message: "Bad Request".to_string()
        }
    );

    let decode = parser
        .parse::<Value>(RawResponse::new(StatusCode::OK, "nope"))
        .await
        .unwrap_err();
    assert_eq!(decode.message(), "4 bytes");
}

#[tokio::test]
async fn duplicate_shares_the_unread_body() {
    let mut response = RawResponse::new(StatusCode::OK, "payload");
    let first = response.duplicate().await.unwrap();
    let second = response.duplicate().await.unwrap();

    assert_eq!(first.text().await.unwrap(), "payload");
    assert_eq!(second.text().await.unwrap(), "payload");
    assert_eq!(response.text().await.unwrap(), "payload");
}
