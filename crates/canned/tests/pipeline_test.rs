use canned::{
    ApplicationError, CannedQuery, ErrorHandlerState, GET_USER_KEY, GithubClient, GithubConfig,
    HttpRequest, QueryContext, RawResponse, ResponseMapperSpec, UserProfileDto, success,
    user_profile_from_dto,
};
use reqwest::StatusCode;

fn client(status: StatusCode, body: &'static str) -> GithubClient {
    GithubClient::with_transport(GithubConfig::default(), move |_: HttpRequest| {
        std::future::ready(Ok::<_, ApplicationError>(RawResponse::new(status, body)))
    })
}

#[tokio::test]
async fn unrecovered_failures_land_in_queue_in_order() {
    let errors = ErrorHandlerState::new();

    let missing = CannedQuery::new(
        client(StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#).get_user_query(),
        errors.clone(),
    );
    let garbled = CannedQuery::new(
        client(StatusCode::OK, "<html>").get_user_query(),
        errors.clone(),
    );

    let not_found = missing
        .run(QueryContext::new(GET_USER_KEY, "nobody".to_string()))
        .await;
    let undecodable = garbled
        .run(QueryContext::new(GET_USER_KEY, "octocat".to_string()))
        .await;
    assert!(not_found.is_err());
    assert!(undecodable.is_err());

    let queued = errors.errors();
    assert_eq!(queued.len(), 2);
    assert_eq!(queued[0].kind().name(), "TransportError");
    assert_eq!(queued[1].kind().name(), "DecodeError");

    errors.dismiss_one();
    assert_eq!(errors.peek_next().map(|e| e.kind().name()), Some("DecodeError"));
    errors.dismiss_all();
    assert_eq!(errors.count(), 0);
}

#[tokio::test]
async fn recovered_failures_stay_out_of_queue() {
    let errors = ErrorHandlerState::new();
    let spec = ResponseMapperSpec::new(|dto: UserProfileDto| user_profile_from_dto(dto).map(Some))
        .with_map_error(|_| success(None));

    let query = CannedQuery::new(
        client(StatusCode::SERVICE_UNAVAILABLE, "").get_user_query_with(spec),
        errors.clone(),
    );

    let profile = query
        .run(QueryContext::new(GET_USER_KEY, "octocat".to_string()))
        .await
        .expect("recovered");

    assert!(profile.is_none());
    assert_eq!(errors.count(), 0);
}

#[tokio::test]
async fn per_query_handler_overrides_queue() {
    let errors = ErrorHandlerState::new();
    let elsewhere = ErrorHandlerState::new();

    let query = CannedQuery::new(
        client(StatusCode::INTERNAL_SERVER_ERROR, "boom").get_user_query(),
        errors.clone(),
    )
    .with_error_handler(elsewhere.clone());

    let error = query
        .run(QueryContext::new(GET_USER_KEY, "octocat".to_string()))
        .await
        .expect_err("server error");

    assert!(error.is_retryable());
    assert_eq!(errors.count(), 0);
    assert_eq!(elsewhere.count(), 1);
    assert_eq!(
        elsewhere.peek_next().map(|queued| queued.kind().clone()),
        Some(error.kind().clone())
    );
}
