use super::{test_client, test_config, MockHttpSend};
use kinesign_core::Result;
use kinesign_kinesis::Config;
use pretty_assertions::assert_eq;

#[test]
fn test_list_streams_is_signed() -> Result<()> {
    let http = MockHttpSend::replying(200, r#"{"StreamNames":[]}"#);
    let client = test_client(&test_config(), &http)?;

    client.list_streams()?;

    let req = http.last_request();
    assert_eq!(req.uri, "https://kinesis.us-east-1.amazonaws.com/");
    assert_eq!(req.body_text(), "{}");
    assert_eq!(
        req.header("authorization"),
        Some(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/kinesis/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date, \
             Signature=701f2eeefd91c478c1b5e75c69a4a194b85bca80a5e13243e45291105e13eff7"
        )
    );
    assert_eq!(req.header("x-amz-date"), Some("20150830T123600Z"));
    assert_eq!(
        req.header("x-amz-target"),
        Some("Kinesis_20131202.ListStreams")
    );
    Ok(())
}

#[test]
fn test_describe_stream_is_signed() -> Result<()> {
    let http = MockHttpSend::replying(200, "{}");
    let client = test_client(&test_config(), &http)?;

    client.describe_stream("my-stream")?;

    let req = http.last_request();
    assert_eq!(req.body_text(), r#"{"StreamName":"my-stream"}"#);
    assert_eq!(
        req.header("x-amz-target"),
        Some("Kinesis_20131202.DescribeStream")
    );
    assert!(req.header("authorization").is_some_and(|v| v.ends_with(
        "Signature=58694178fcbc6d5b0d481f6ac1a75d421ab2c1d3b92cd6ecf97602a1d858cfe7"
    )));
    Ok(())
}

#[test]
fn test_put_record_is_signed() -> Result<()> {
    let http = MockHttpSend::replying(200, "{}");
    let client = test_client(&test_config(), &http)?;

    client.put_record("my-stream", "pk-1", b"hello")?;

    let req = http.last_request();
    assert_eq!(
        req.body_text(),
        r#"{"StreamName":"my-stream","PartitionKey":"pk-1","Data":"aGVsbG8="}"#
    );
    assert_eq!(
        req.header("x-amz-target"),
        Some("Kinesis_20131202.PutRecord")
    );
    assert!(req.header("authorization").is_some_and(|v| v.ends_with(
        "Signature=9da1f9775971433ac92acba4b0b5b5517b39fed499956318b7336779eca34be0"
    )));
    Ok(())
}

#[test]
fn test_headers_without_session_token() -> Result<()> {
    let http = MockHttpSend::replying(200, "{}");
    let client = test_client(&test_config(), &http)?;

    client.list_streams()?;

    let req = http.last_request();
    assert_eq!(
        req.header_names(),
        vec!["authorization", "content-type", "x-amz-target", "x-amz-date"]
    );
    assert_eq!(req.header("content-type"), Some("application/x-amz-json-1.1"));
    assert_eq!(req.header("expect"), None);
    Ok(())
}

#[test]
fn test_headers_with_session_token() -> Result<()> {
    let http = MockHttpSend::replying(200, "{}");
    let cfg = Config {
        session_token: Some("FwoGZXIvYXdzEBYaDGV4YW1wbGV0b2tlbg".to_string()),
        ..test_config()
    };
    let client = test_client(&cfg, &http)?;

    client.list_streams()?;

    let req = http.last_request();
    assert_eq!(
        req.header_names(),
        vec![
            "authorization",
            "content-type",
            "x-amz-security-token",
            "x-amz-target",
            "x-amz-date"
        ]
    );
    assert_eq!(
        req.header("x-amz-security-token"),
        Some("FwoGZXIvYXdzEBYaDGV4YW1wbGV0b2tlbg")
    );
    // The token is not a signed header, so the signature does not change.
    assert!(req.header("authorization").is_some_and(|v| v.ends_with(
        "Signature=701f2eeefd91c478c1b5e75c69a4a194b85bca80a5e13243e45291105e13eff7"
    )));
    Ok(())
}

#[test]
fn test_empty_session_token_is_not_sent() -> Result<()> {
    let http = MockHttpSend::replying(200, "{}");
    let cfg = Config {
        session_token: Some(String::new()),
        ..test_config()
    };
    let client = test_client(&cfg, &http)?;

    client.list_streams()?;

    assert_eq!(http.last_request().header("x-amz-security-token"), None);
    Ok(())
}
