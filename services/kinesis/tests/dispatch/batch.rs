use super::{test_client, test_config, MockHttpSend};
use kinesign_core::{ErrorKind, Result};
use kinesign_kinesis::{assign_partition_keys, Record};
use pretty_assertions::assert_eq;

#[test]
fn test_put_records_reuses_single_key() -> Result<()> {
    let http = MockHttpSend::replying(200, r#"{"FailedRecordCount":0}"#);
    let client = test_client(&test_config(), &http)?;

    let records = assign_partition_keys(&["a"], vec!["one", "two", "three"])?;
    let resp = client.put_records("my-stream", &records)?;
    assert!(resp.is_success());

    let req = http.last_request();
    assert_eq!(
        req.header("x-amz-target"),
        Some("Kinesis_20131202.PutRecords")
    );
    assert_eq!(
        req.body_text(),
        r#"{"StreamName":"my-stream","Records":[{"PartitionKey":"a","Data":"b25l"},{"PartitionKey":"a","Data":"dHdv"},{"PartitionKey":"a","Data":"dGhyZWU="}]}"#
    );
    Ok(())
}

#[test]
fn test_put_records_pads_with_last_key() -> Result<()> {
    let http = MockHttpSend::replying(200, r#"{"FailedRecordCount":0}"#);
    let client = test_client(&test_config(), &http)?;

    let records = assign_partition_keys(&["a", "b"], vec!["one", "two", "three"])?;
    client.put_records("my-stream", &records)?;

    let body: serde_json::Value = serde_json::from_str(http.last_request().body_text())
        .expect("body must be valid json");
    let keys: Vec<&str> = body["Records"]
        .as_array()
        .expect("records must be an array")
        .iter()
        .filter_map(|r| r["PartitionKey"].as_str())
        .collect();
    assert_eq!(keys, vec!["a", "b", "b"]);
    Ok(())
}

#[test]
fn test_put_records_single_record_uses_put_record() -> Result<()> {
    let http = MockHttpSend::replying(200, "{}");
    let client = test_client(&test_config(), &http)?;

    client.put_records("my-stream", &[Record::new("pk-1", "hello")])?;

    let req = http.last_request();
    assert_eq!(
        req.header("x-amz-target"),
        Some("Kinesis_20131202.PutRecord")
    );
    assert_eq!(
        req.body_text(),
        r#"{"StreamName":"my-stream","PartitionKey":"pk-1","Data":"aGVsbG8="}"#
    );
    Ok(())
}

#[test]
fn test_put_records_empty_sends_nothing() -> Result<()> {
    let http = MockHttpSend::replying(200, "{}");
    let client = test_client(&test_config(), &http)?;

    let err = client.put_records("my-stream", &[]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.requests().is_empty());
    Ok(())
}
