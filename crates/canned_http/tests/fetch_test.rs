use canned_error::{ApplicationError, ApplicationErrorKind};
use canned_http::{FetchClient, HttpRequest, HttpTransport, RawResponse, ResponseParser};
use canned_interface::Request;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test]
async fn ok_response_resolves_to_payload() {
    let client: FetchClient<(), Value> = FetchClient::new(|_: ()| async {
        Ok::<_, ApplicationError>(RawResponse::new(StatusCode::OK, r#"{"ok":true}"#))
    });

    let payload = client.send(()).await.unwrap();
    assert_eq!(payload, serde_json::json!({"ok": true}));
}

#[tokio::test]
async fn bad_request_rejects_with_transport_error() {
    let client: FetchClient<(), Value> = FetchClient::new(|_: ()| async {
        Ok::<_, ApplicationError>(RawResponse::new(
            StatusCode::BAD_REQUEST,
            r#"{"message":"failure"}"#,
        ))
    });

    let err = client.send(()).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), "failure");
}

#[tokio::test]
async fn non_json_rejects_with_decode_error() {
    let client: FetchClient<(), Value> = FetchClient::new(|_: ()| async {
        Ok::<_, ApplicationError>(RawResponse::new(StatusCode::OK, "this will not parse"))
    });

    let err = client.send(()).await.unwrap_err();
    assert!(matches!(err.kind(), ApplicationErrorKind::Decode { .. }));
}

#[tokio::test]
async fn fetch_failures_pass_through_untouched() {
    let client: FetchClient<u32, Value> = FetchClient::new(|attempt: u32| async move {
        Err::<RawResponse, _>(ApplicationError::transport(0, format!("offline #{attempt}")))
    });

    let err = client.send(3).await.unwrap_err();
    assert_eq!(err.message(), "offline #3");
}

#[tokio::test]
async fn params_reach_the_fetch_function() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let client: FetchClient<String, Value> = FetchClient::new(move |name: String| {
        seen.fetch_add(1, Ordering::SeqCst);
        async move {
            Ok::<_, ApplicationError>(RawResponse::json_body(
                StatusCode::OK,
                &serde_json::json!({ "login": name }),
            ))
        }
    })
    .with_parser(ResponseParser::default());

    let payload = client.send("octocat".to_string()).await.unwrap();
    assert_eq!(payload["login"], "octocat");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn transport_joins_base_url_and_path() {
    let transport = HttpTransport::new("https://api.github.com/")
        .with_header("Accept", "application/vnd.github.v3+json")
        .with_bearer_token("secret");

    assert_eq!(transport.base_url(), "https://api.github.com");
    assert_eq!(
        transport.url_for("/users/octocat"),
        "https://api.github.com/users/octocat"
    );
    assert_eq!(transport.headers().len(), 2);
    assert_eq!(transport.headers()[1].1, "Bearer secret");
}

#[test]
fn request_builder_defaults_to_empty_query() {
    let request = HttpRequest::builder()
        .path("/search/users")
        .build()
        .expect("path is the only required field");
    assert!(request.query().is_empty());
    assert_eq!(request.path(), "/search/users");
}

#[tokio::test]
async fn invalid_url_surfaces_as_transport_error_without_status() {
    let transport = HttpTransport::new("not a url");
    let err = transport
        .send(HttpRequest::get("/users/octocat"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(0));
    assert!(err.message().starts_with("Request failed"));
}

#[test]
fn query_pairs_accumulate_in_order() {
    let request = HttpRequest::get("/search/users")
        .with_query("q", "octo")
        .with_query("per_page", 30);
    assert_eq!(
        request.query(),
        &vec![
            ("q".to_string(), "octo".to_string()),
            ("per_page".to_string(), "30".to_string())
        ]
    );
}
