//! Tests for the strict JSON decode/encode helpers.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

use marquee::json::{from_slice_strict, read_json, write_json, Envelope, MAX_BODY_BYTES};
use marquee::Error;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct MovieInput {
    title: String,
}

#[test]
fn exact_shape_decodes_like_plain_serde() {
    let body = br#"{"title": "Casablanca"}"#;

    let strict: MovieInput = from_slice_strict(body).unwrap();
    let plain: MovieInput = serde_json::from_slice(body).unwrap();

    assert_eq!(strict, plain);
}

#[test]
fn unknown_field_is_rejected_by_name() {
    let err = from_slice_strict::<MovieInput>(br#"{"title": "X", "extra": 1}"#).unwrap_err();

    match &err {
        Error::UnknownKey { field } => assert_eq!(field, "extra"),
        other => panic!("expected UnknownKey, got {other:?}"),
    }
    assert!(err.to_string().contains("extra"));
}

#[test]
fn trailing_document_is_rejected() {
    let err = from_slice_strict::<Value>(b"{}{}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "body can only contain a single json value"
    );
}

#[test]
fn trailing_garbage_is_rejected() {
    let err = from_slice_strict::<Value>(b"{} trailing").unwrap_err();
    assert!(matches!(err, Error::MultipleJsonValues));
}

#[test]
fn trailing_whitespace_is_fine() {
    let value: Value = from_slice_strict(b"{\"a\": 1}  \n").unwrap();
    assert_eq!(value, json!({"a": 1}));
}

#[test]
fn empty_body_is_rejected() {
    for body in [&b""[..], b"   ", b"\n\t "] {
        let err = from_slice_strict::<Value>(body).unwrap_err();
        assert_eq!(err.to_string(), "body cannot be empty");
    }
}

#[test]
fn syntax_error_reports_character_position() {
    let err = from_slice_strict::<Value>(br#"{"title" "X"}"#).unwrap_err();

    match err {
        Error::MalformedJson { offset } => assert!(offset > 0),
        other => panic!("expected MalformedJson, got {other:?}"),
    }
}

#[test]
fn truncated_json_reports_generic_message() {
    let err = from_slice_strict::<Value>(br#"{"title": "X""#).unwrap_err();
    assert_eq!(err.to_string(), "body contains badly-formed JSON");
}

#[test]
fn type_mismatch_reports_position() {
    let err = from_slice_strict::<MovieInput>(br#"{"title": 123}"#).unwrap_err();

    match err {
        Error::MismatchedType { offset } => assert!(offset > 0),
        other => panic!("expected MismatchedType, got {other:?}"),
    }
}

#[tokio::test]
async fn oversized_body_reports_the_cap() {
    let body = vec![b' '; MAX_BODY_BYTES + 1];
    let req = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(body))
        .unwrap();

    let err = read_json::<Value>(req).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("body cannot be larger than {} bytes", MAX_BODY_BYTES)
    );
}

#[tokio::test]
async fn read_json_decodes_a_request_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(r#"{"title": "Casablanca"}"#))
        .unwrap();

    let input: MovieInput = read_json(req).await.unwrap();
    assert_eq!(input.title, "Casablanca");
}

#[tokio::test]
async fn write_json_round_trips_through_a_generic_parser() {
    let mut data = Envelope::new();
    data.insert("status".to_string(), json!("available"));
    data.insert("count".to_string(), json!(3));
    data.insert("tags".to_string(), json!(["a", "b"]));

    let response = write_json(StatusCode::OK, data, None).unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let parsed: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        parsed,
        json!({"status": "available", "count": 3, "tags": ["a", "b"]})
    );
}

#[tokio::test]
async fn write_json_emits_tab_indent_and_trailing_newline() {
    let mut data = Envelope::new();
    data.insert("status".to_string(), json!("available"));

    let response = write_json(StatusCode::OK, data, None).unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    assert_eq!(&bytes[..], b"{\n\t\"status\": \"available\"\n}\n");
}

#[test]
fn write_json_sets_status_and_content_type() {
    let response = write_json(StatusCode::CREATED, Envelope::new(), None).unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[test]
fn caller_content_type_is_overridden() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));

    let response = write_json(StatusCode::OK, Envelope::new(), Some(headers)).unwrap();

    let values: Vec<_> = response.headers().get_all(header::CONTENT_TYPE).iter().collect();
    assert_eq!(values, vec!["application/json"]);
}

#[test]
fn caller_headers_are_preserved() {
    let mut headers = HeaderMap::new();
    headers.insert("x-request-id", HeaderValue::from_static("req-123"));

    let response = write_json(StatusCode::OK, Envelope::new(), Some(headers)).unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-123");
}
