//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error_case() -> Error {
    Error::internal("connection string leaked")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}))
}

#[fixture]
fn invalid_request_case() -> Error {
    Error::invalid_request("name must not be empty")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"field": "name", "code": "empty"}))
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn response_body(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("header is ascii").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace_id(internal_error_case: Error) {
    let (status, header, body) = response_body(&internal_error_case).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["traceId"], TRACE_ID);
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(invalid_request_case: Error) {
    let (status, header, body) = response_body(&invalid_request_case).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "name must not be empty");
    assert_eq!(body["details"]["code"], "empty");
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_id_omit_header() {
    let (_, header, body) = response_body(&Error::service_unavailable("store down")).await;

    assert!(header.is_none());
    assert!(body.get("traceId").is_none());
    assert_eq!(body["code"], "service_unavailable");
}

#[derive(Deserialize)]
struct Payload {
    name: String,
}

#[derive(Deserialize)]
struct Params {
    limit: u8,
}

#[actix_web::test]
async fn malformed_json_uses_error_envelope() {
    let app = actix_test::init_service(App::new().app_data(json_config()).route(
        "/",
        web::post().to(|payload: web::Json<Payload>| async move {
            HttpResponse::Ok().body(payload.into_inner().name)
        }),
    ))
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "malformed_body");
    assert_eq!(body["details"]["field"], "body");
}

#[actix_web::test]
async fn unparsable_query_uses_error_envelope() {
    let app = actix_test::init_service(App::new().app_data(query_config()).route(
        "/",
        web::get().to(|params: web::Query<Params>| async move {
            HttpResponse::Ok().body(params.limit.to_string())
        }),
    ))
    .await;

    let req = actix_test::TestRequest::get().uri("/?limit=many").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], "query");
}
