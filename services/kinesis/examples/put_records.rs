use anyhow::Result;
use kinesign_core::{Context, OsEnv};
use kinesign_http_send_reqwest::ReqwestHttpSend;
use kinesign_kinesis::{assign_partition_keys, Client, Config};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let stream = env::args().nth(1).unwrap_or_else(|| "my-stream".to_string());

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::builder().build()?)
        .with_env(OsEnv);
    let config = Config {
        access_key_id: env::var("AWS_ACCESS_KEY_ID").ok(),
        secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").ok(),
        session_token: env::var("AWS_SESSION_TOKEN").ok(),
        ..Default::default()
    }
    .from_env(&ctx);
    let client = Client::new(ctx, &config)?;

    // Three records over two keys: the third record reuses "device-2".
    let records = assign_partition_keys(
        &["device-1", "device-2"],
        vec![r#"{"temp":20.5}"#, r#"{"temp":21.0}"#, r#"{"temp":19.8}"#],
    )?;

    let resp = client.put_records(&stream, &records)?;
    println!("status: {}", resp.status);
    println!("{}", resp.report());
    Ok(())
}
