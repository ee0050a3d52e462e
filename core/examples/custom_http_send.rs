use bytes::Bytes;
use kinesign_core::hash::hex_sha256;
use kinesign_core::{Context, HttpSend, Result, StaticEnv};
use std::collections::HashMap;

// An HttpSend that never touches the network: it answers every request
// with the sha256 of its body.
#[derive(Debug)]
struct DigestHttpSend;

impl HttpSend for DigestHttpSend {
    fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let digest = hex_sha256(req.body());
        Ok(http::Response::builder()
            .status(200)
            .header("content-type", "text/plain")
            .body(Bytes::from(digest))?)
    }
}

fn main() -> Result<()> {
    let ctx = Context::new()
        .with_http_send(DigestHttpSend)
        .with_env(StaticEnv {
            envs: HashMap::from([("AWS_REGION".to_string(), "us-east-1".to_string())]),
        });

    println!("region from env: {:?}", ctx.env_var("AWS_REGION"));

    let req = http::Request::post("https://kinesis.us-east-1.amazonaws.com/")
        .body(Bytes::from_static(b"{}"))?;
    let resp = ctx.http_send(req)?;

    println!("status: {}", resp.status());
    println!("body:   {}", String::from_utf8_lossy(resp.body()));
    Ok(())
}
