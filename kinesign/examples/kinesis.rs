use anyhow::Result;
use kinesign::kinesis::{assign_partition_keys, default_client, Config};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let stream = env::args().nth(1).unwrap_or_else(|| "my-stream".to_string());

    let config = Config {
        access_key_id: env::var("AWS_ACCESS_KEY_ID").ok(),
        secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").ok(),
        session_token: env::var("AWS_SESSION_TOKEN").ok(),
        ..Default::default()
    };
    let client = default_client(&config)?;

    let resp = client.describe_stream(&stream)?;
    if !resp.is_success() {
        eprintln!("{}", resp.report());
        return Ok(());
    }
    println!("{}", resp.body.text());

    let records = assign_partition_keys(&["pk"], vec!["first", "second"])?;
    let resp = client.put_records(&stream, &records)?;
    println!("put records: {}", resp.report());

    Ok(())
}
