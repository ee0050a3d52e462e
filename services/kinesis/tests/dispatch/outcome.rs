use super::{test_client, test_config, MockHttpSend};
use kinesign_core::{ResponseLimit, Result};
use kinesign_kinesis::{Action, Config, Response};
use pretty_assertions::assert_eq;

#[test]
fn test_success() -> Result<()> {
    let http = MockHttpSend::replying(200, r#"{"HasMoreStreams":false,"StreamNames":["s1"]}"#);
    let client = test_client(&test_config(), &http)?;

    let resp = client.list_streams()?;

    assert!(resp.is_success());
    assert_eq!(resp.error_message(), None);
    assert_eq!(
        resp.body.text(),
        r#"{"HasMoreStreams":false,"StreamNames":["s1"]}"#
    );
    assert!(resp.header.text().starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(resp
        .header
        .text()
        .contains("x-amzn-requestid: c0ffee00-0000-4000-8000-000000000000\r\n"));
    assert_eq!(resp.report(), resp.body.text());
    Ok(())
}

#[test]
fn test_api_error_is_passed_through() -> Result<()> {
    let body = r#"{"__type":"ResourceNotFoundException","message":"Stream missing under account 123456789012 not found."}"#;
    let http = MockHttpSend::replying(400, body);
    let client = test_client(&test_config(), &http)?;

    let resp = client.describe_stream("missing")?;

    assert_eq!(resp.status, 400);
    assert!(!resp.is_success());
    assert!(!resp.is_transport_error());
    assert_eq!(resp.body.text(), body);
    assert!(resp.header.text().starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(resp.report().ends_with(body));
    Ok(())
}

#[test]
fn test_transport_error() -> Result<()> {
    let http = MockHttpSend::refusing();
    let client = test_client(&test_config(), &http)?;

    let resp = client.put_record("my-stream", "pk-1", b"hello")?;

    assert_eq!(resp.status, 0);
    assert!(resp.is_transport_error());
    assert!(resp.header.is_empty());
    assert!(resp.body.is_empty());
    assert_eq!(
        resp.error_message(),
        Some("failed to send http request: connection refused")
    );
    assert_eq!(
        resp.report(),
        "failed to send http request: connection refused"
    );
    Ok(())
}

#[test]
fn test_body_is_truncated() -> Result<()> {
    let http = MockHttpSend::replying(200, r#"{"StreamNames":["a-very-long-stream-name"]}"#);
    let cfg = Config {
        max_response_size: Some(16),
        ..test_config()
    };
    let client = test_client(&cfg, &http)?;

    let resp = client.list_streams()?;

    assert!(resp.is_success());
    assert_eq!(resp.body.len(), 16);
    assert_eq!(resp.body.text(), r#"{"StreamNames":["#);
    assert!(resp.body.is_truncated());
    assert!(resp.header.len() <= 16);
    assert_eq!(http.last_request().limit, Some(ResponseLimit(16)));
    Ok(())
}

#[test]
fn test_send_into_resets_response() -> Result<()> {
    let client = test_client(&test_config(), &MockHttpSend::replying(200, "{}"))?;
    let mut resp = Response::new(1024);
    client.send_into(Action::ListStreams, "{}".to_string(), &mut resp)?;
    assert!(resp.is_success());

    let failing = test_client(&test_config(), &MockHttpSend::refusing())?;
    failing.send_into(Action::ListStreams, "{}".to_string(), &mut resp)?;

    assert!(resp.is_transport_error());
    assert!(resp.header.is_empty());
    assert!(resp.body.is_empty());
    Ok(())
}

#[test]
fn test_client_shared_across_threads() -> Result<()> {
    let http = MockHttpSend::replying(200, "{}");
    let client = test_client(&test_config(), &http)?;

    std::thread::scope(|s| {
        for i in 0..4 {
            let client = &client;
            s.spawn(move || {
                let resp = client
                    .describe_stream(&format!("stream-{i}"))
                    .expect("request must be built");
                assert!(resp.is_success());
            });
        }
    });

    assert_eq!(http.requests().len(), 4);
    Ok(())
}
