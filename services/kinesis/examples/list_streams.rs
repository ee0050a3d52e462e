use anyhow::Result;
use kinesign_core::{Context, OsEnv};
use kinesign_http_send_reqwest::ReqwestHttpSend;
use kinesign_kinesis::{Client, Config};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::builder().build()?)
        .with_env(OsEnv);

    // Region and endpoint may come from AWS_REGION and AWS_ENDPOINT_URL_KINESIS.
    let mut config = Config {
        access_key_id: env::var("AWS_ACCESS_KEY_ID").ok(),
        secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").ok(),
        session_token: env::var("AWS_SESSION_TOKEN").ok(),
        ..Default::default()
    }
    .from_env(&ctx);
    if config.endpoint.is_none() {
        let region = config.region.as_deref().unwrap_or("us-east-1");
        config.endpoint = Some(format!("kinesis.{region}.amazonaws.com"));
    }

    let client = Client::new(ctx, &config)?;
    println!("Listing streams in {}", client.region());

    let resp = client.list_streams()?;
    if resp.is_success() {
        println!("{}", resp.body.text());
    } else {
        eprintln!("{}", resp.report());
    }
    Ok(())
}
