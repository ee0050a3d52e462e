mod batch;
mod headers;
mod outcome;

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use http::HeaderMap;
use kinesign_core::{Context, Error, HttpSend, ResponseLimit, Result};
use kinesign_kinesis::{Client, Config};
use std::io;
use std::sync::{Arc, Mutex};

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub limit: Option<ResponseLimit>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn header_names(&self) -> Vec<&str> {
        self.headers.keys().map(|k| k.as_str()).collect()
    }

    pub fn body_text(&self) -> &str {
        std::str::from_utf8(&self.body).expect("body must be utf-8")
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Status(u16, &'static str),
    Refused,
}

/// HttpSend that records requests and replies with a canned outcome.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    requests: Arc<Mutex<Vec<Recorded>>>,
    reply: Reply,
}

impl MockHttpSend {
    pub fn replying(status: u16, body: &'static str) -> Self {
        Self {
            requests: Arc::default(),
            reply: Reply::Status(status, body),
        }
    }

    pub fn refusing() -> Self {
        Self {
            requests: Arc::default(),
            reply: Reply::Refused,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("lock must succeed").clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests()
            .pop()
            .expect("at least one request must be sent")
    }
}

impl HttpSend for MockHttpSend {
    fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        let limit = parts.extensions.get::<ResponseLimit>().copied();
        self.requests
            .lock()
            .expect("lock must succeed")
            .push(Recorded {
                uri: parts.uri.to_string(),
                headers: parts.headers,
                body,
                limit,
            });

        match &self.reply {
            Reply::Status(status, body) => {
                // Read no more than the limit allows, like the real transport.
                let mut body = Bytes::from_static(body.as_bytes());
                if let Some(limit) = limit {
                    body.truncate(limit.read_limit() as usize);
                }
                Ok(http::Response::builder()
                    .status(*status)
                    .header("content-type", "application/x-amz-json-1.1")
                    .header("x-amzn-requestid", "c0ffee00-0000-4000-8000-000000000000")
                    .body(body)?)
            }
            Reply::Refused => Err(Error::unexpected("failed to send http request").with_source(
                io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
            )),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        region: Some("us-east-1".to_string()),
        endpoint: Some("kinesis.us-east-1.amazonaws.com".to_string()),
        ..Default::default()
    }
    .with_credential("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
}

/// Build a client pinned to 2015-08-30T12:36:00Z that sends through `http`.
pub fn test_client(cfg: &Config, http: &MockHttpSend) -> Result<Client> {
    let _ = env_logger::builder().is_test(true).try_init();

    let time = Utc
        .with_ymd_and_hms(2015, 8, 30, 12, 36, 0)
        .single()
        .expect("time must be valid");
    let ctx = Context::new().with_http_send(http.clone());
    Ok(Client::new(ctx, cfg)?.with_time(time))
}
