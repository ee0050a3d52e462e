use anyhow::Result;
use bytes::Bytes;
use kinesign_core::Context;
use kinesign_http_send_reqwest::ReqwestHttpSend;
use reqwest::blocking::Client;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("kinesign-example/1.0")
        .build()?;

    println!("Created custom HTTP client with:");
    println!("  - 30 second timeout");
    println!("  - Max 10 idle connections per host");
    println!("  - Custom user agent");

    // Create context with the custom client
    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    // An unsigned call is rejected by the service, which is enough to
    // show the transport round trip.
    let url = "https://kinesis.us-east-1.amazonaws.com/";
    println!("\nTesting HTTP client with POST {url}");

    let req = http::Request::builder()
        .method("POST")
        .uri(url)
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", "Kinesis_20131202.ListStreams")
        .body(Bytes::from_static(b"{}"))?;

    match ctx.http_send(req) {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("Response headers:");
            for (name, value) in resp.headers() {
                println!("  {name}: {value:?}");
            }
            println!("\nResponse body:");
            println!("{}", String::from_utf8_lossy(resp.body()));
        }
        Err(e) => {
            eprintln!("Request failed: {}", e.to_detailed_string());
        }
    }

    // Demonstrate using the builder defaults
    println!("\n--- Using builder defaults ---");
    let default_ctx = Context::new().with_http_send(ReqwestHttpSend::builder().build()?);
    let req = http::Request::builder()
        .method("POST")
        .uri(url)
        .body(Bytes::new())?;

    match default_ctx.http_send(req) {
        Ok(resp) => println!("Response status: {}", resp.status()),
        Err(e) => eprintln!("Request failed: {}", e.to_detailed_string()),
    }

    Ok(())
}
