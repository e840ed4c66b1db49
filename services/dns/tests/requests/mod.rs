use std::time::{SystemTime, UNIX_EPOCH};

use http::{HeaderMap, Method};
use idcf_dns::{Client, Config};
use idcf_dns_core::{Context, ErrorKind, Result};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::mock::{client, expires, MockHttpSend};

#[tokio::test]
async fn test_signed_get() -> Result<()> {
    let mock = MockHttpSend::new().respond(200, "[]");
    let client = client(&mock);

    let resp = client.get("zones", &Value::Null, expires("1000")).await?;
    assert_eq!(resp.status(), 200);

    let req = mock.only_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.uri.to_string(), "https://dns.idcfcloud.com/api/v1/zones");
    assert_eq!(req.header("x-idcf-apikey"), Some("AKIA"));
    assert_eq!(req.header("x-idcf-expires"), Some("1000"));
    assert_eq!(
        req.header("x-idcf-signature"),
        Some("XWkdwRl3w4mRghVZJy5UELHPLwjHAxMqoC1nnT8EqQM=")
    );
    assert!(req.body.is_empty());
    assert_eq!(req.header("content-type"), None);

    Ok(())
}

#[tokio::test]
async fn test_query_is_not_signed() -> Result<()> {
    let mock = MockHttpSend::new();
    let client = client(&mock);

    client
        .get_raw("zones", &json!({"limit": 10}), expires("1000"))
        .await?;

    let req = mock.only_request();
    assert_eq!(
        req.uri.to_string(),
        "https://dns.idcfcloud.com/api/v1/zones?limit=10"
    );
    assert_eq!(
        req.header("x-idcf-signature"),
        Some("XWkdwRl3w4mRghVZJy5UELHPLwjHAxMqoC1nnT8EqQM=")
    );

    Ok(())
}

#[tokio::test]
async fn test_default_expires() -> Result<()> {
    let mock = MockHttpSend::new();
    let client = client(&mock);

    let before = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
    client.get_raw("zones", &Value::Null, HeaderMap::new()).await?;
    let after = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();

    let req = mock.only_request();
    let expires: u64 = req.header("x-idcf-expires").unwrap().parse().unwrap();
    assert!(expires >= before + 600 && expires <= after + 600);

    let signature = idcf_dns::sign(
        &Method::GET,
        "/api/v1/zones",
        "AKIA",
        "SECRET",
        &expires.to_string(),
    )?;
    assert_eq!(req.header("x-idcf-signature"), Some(signature.as_str()));

    Ok(())
}

#[tokio::test]
async fn test_post_sends_json_body() -> Result<()> {
    let mock = MockHttpSend::new().respond(201, r#"{"uuid":"z1"}"#);
    let client = client(&mock);

    let attributes = json!({
        "name": "example.com",
        "email": "postmaster@example.com",
        "default_ttl": 3600,
        "description": "create",
    });
    let resp = client.create_zone(&attributes, expires("1000")).await?;
    assert_eq!(resp.uuid(), Some("z1"));

    let req = mock.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(
        String::from_utf8(req.body.to_vec()).unwrap(),
        r#"{"name":"example.com","email":"postmaster@example.com","default_ttl":3600,"description":"create"}"#
    );
    assert_eq!(
        req.header("x-idcf-signature"),
        Some("ER7yvmV8unAArhVv1opGGPHfFuw5MqL0ejhoeFQkSMg=")
    );

    Ok(())
}

#[tokio::test]
async fn test_caller_headers_are_forwarded() -> Result<()> {
    let mock = MockHttpSend::new();
    let client = client(&mock);

    let mut headers = expires("1000");
    headers.insert("x-request-id", "abc".parse().unwrap());
    client.get_raw("zones", &Value::Null, headers).await?;

    let req = mock.only_request();
    assert_eq!(req.header("x-request-id"), Some("abc"));
    assert_eq!(req.headers.get_all("x-idcf-expires").iter().count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_strict_call_fails_on_error_status() {
    let mock = MockHttpSend::new().respond(
        422,
        r#"{"message":"name is already taken","reference":"ref-422"}"#,
    );
    let client = client(&mock);

    let err = client
        .post("zones", &json!({"name": "example.com"}), HeaderMap::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.to_string().contains("422"));
    assert_eq!(
        err.to_string(),
        "HTTP status code: 422, Error message: name is already taken, Reference: ref-422"
    );
    assert_eq!(err.status().map(|s| s.as_u16()), Some(422));
    assert_eq!(err.reference(), Some("ref-422"));
}

#[tokio::test]
async fn test_raw_call_returns_error_status() -> Result<()> {
    let mock = MockHttpSend::new().respond(422, r#"{"message":"invalid","reference":"r"}"#);
    let client = client(&mock);

    let resp = client
        .post_raw("zones", &json!({"name": "example.com"}), HeaderMap::new())
        .await?;

    assert_eq!(resp.status(), 422);
    assert!(!resp.is_success());
    assert_eq!(resp.message(), Some("invalid"));
    assert_eq!(resp.reference(), Some("r"));

    Ok(())
}

#[tokio::test]
async fn test_strict_call_without_body() {
    let mock = MockHttpSend::new().respond(404, "").respond(404, "null");
    let client = client(&mock);

    for _ in 0..2 {
        let err = client.get_zone("missing", HeaderMap::new()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "HTTP status code: 404, Error message: Resource not found., Reference: No reference"
        );
    }
}

#[tokio::test]
async fn test_invalid_payloads_are_never_sent() {
    let mock = MockHttpSend::new();
    let client = client(&mock);

    let err = client
        .create_record("z1", &json!({}), HeaderMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingAttribute);

    let err = client
        .create_record(
            "z1",
            &json!({"type": "AA", "name": "a.example.com", "content": "192.0.2.2", "ttl": 3600}),
            HeaderMap::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAttributeType);

    let err = client
        .create_zone(
            &json!({"name": "example.com", "email": "a@example.com", "default_ttl": 60, "color": "red"}),
            HeaderMap::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnnecessaryAttribute);

    let err = client
        .update_template("t1", &json!({"name": "renamed"}), HeaderMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnnecessaryAttribute);

    let err = client
        .update_zone("z1", &json!([1, 2]), HeaderMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);

    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_non_object_parameters_are_rejected() {
    let mock = MockHttpSend::new();
    let client = client(&mock);

    let err = client
        .put_raw("zones/z1", &json!("text"), HeaderMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_resource_paths() -> Result<()> {
    let mock = MockHttpSend::new();
    let client = client(&mock);

    client.list_zones(HeaderMap::new()).await?;
    client.get_zone("z1", HeaderMap::new()).await?;
    client.get_token("z1", HeaderMap::new()).await?;
    client.verify_zone("z1", HeaderMap::new()).await?;
    client
        .update_zone("z1", &json!({"default_ttl": 3600}), HeaderMap::new())
        .await?;
    client.delete_zone("z1", HeaderMap::new()).await?;
    client.list_records("z1", HeaderMap::new()).await?;
    client.get_record("z1", "r1", HeaderMap::new()).await?;
    client
        .update_record("z1", "r1", &json!({"content": "192.0.2.2"}), HeaderMap::new())
        .await?;
    client
        .delete_record("z1", "r1", &Value::Null, HeaderMap::new())
        .await?;
    client.list_templates(HeaderMap::new()).await?;
    client
        .create_template(&json!({"name": "tpl", "default_ttl": 600}), HeaderMap::new())
        .await?;
    client.delete_template("t1", HeaderMap::new()).await?;

    let seen: Vec<(Method, String)> = mock
        .requests()
        .into_iter()
        .map(|r| (r.method, r.uri.path().to_string()))
        .collect();
    assert_eq!(
        seen,
        vec![
            (Method::GET, "/api/v1/zones".to_string()),
            (Method::GET, "/api/v1/zones/z1".to_string()),
            (Method::GET, "/api/v1/zones/z1/token".to_string()),
            (Method::POST, "/api/v1/zones/z1/verify".to_string()),
            (Method::PUT, "/api/v1/zones/z1".to_string()),
            (Method::DELETE, "/api/v1/zones/z1".to_string()),
            (Method::GET, "/api/v1/zones/z1/records".to_string()),
            (Method::GET, "/api/v1/zones/z1/records/r1".to_string()),
            (Method::PUT, "/api/v1/zones/z1/records/r1".to_string()),
            (Method::DELETE, "/api/v1/zones/z1/records/r1".to_string()),
            (Method::GET, "/api/v1/templates".to_string()),
            (Method::POST, "/api/v1/templates".to_string()),
            (Method::DELETE, "/api/v1/templates/t1".to_string()),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_delete_record_with_purge() -> Result<()> {
    let mock = MockHttpSend::new();
    let client = client(&mock);

    client
        .delete_record("z1", "r1", &json!({"purge": "true"}), expires("1700000600"))
        .await?;

    let req = mock.only_request();
    assert_eq!(req.uri.query(), Some("purge=true"));
    assert!(req.body.is_empty());

    let err = client
        .delete_record("z1", "r1", &json!({"ttl": 60}), HeaderMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnnecessaryAttribute);
    assert_eq!(mock.requests().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_custom_host_and_endpoint() -> Result<()> {
    let mock = MockHttpSend::new();
    let ctx = Context::new().with_http_send(mock.clone());
    let client = Client::new(
        ctx,
        Config::new()
            .with_api_key("AKIA")
            .with_secret_key("SECRET")
            .with_host("dns.example.test")
            .with_endpoint("/api/v2")
            .with_verify_ssl(false),
    )?;
    assert!(!client.verify_ssl());

    client.get_raw("zones", &Value::Null, expires("1000")).await?;

    let req = mock.only_request();
    assert_eq!(req.uri.to_string(), "https://dns.example.test/api/v2/zones");
    let signature = idcf_dns::sign(&Method::GET, "/api/v2/zones", "AKIA", "SECRET", "1000")?;
    assert_eq!(req.header("x-idcf-signature"), Some(signature.as_str()));

    Ok(())
}
