// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use crate::{payload, Action, Config, Credential, Record, RequestSigner, Response};
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::uri::Authority;
use http::{HeaderValue, Method};
use kinesign_core::time::DateTime;
use kinesign_core::{Context, Error, ResponseLimit, Result};
use log::{debug, warn};

/// Client that signs and sends kinesis requests.
///
/// All state is fixed at construction, so a client can be reused for any
/// number of calls and shared across threads.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    endpoint: String,
    url: String,
    signer: RequestSigner,
    max_response_size: usize,
}

impl Client {
    /// Create a new client.
    ///
    /// Returns [`ErrorKind::ConfigInvalid`](kinesign_core::ErrorKind::ConfigInvalid)
    /// if any required field of `config` is missing or empty.
    pub fn new(ctx: Context, config: &Config) -> Result<Self> {
        let access_key_id = required(&config.access_key_id, "access_key_id")?;
        let secret_access_key = required(&config.secret_access_key, "secret_access_key")?;
        let region = required(&config.region, "region")?;
        let endpoint = required(&config.endpoint, "endpoint")?;

        if !is_bare_authority(endpoint) {
            return Err(Error::config_invalid(format!(
                "endpoint must be a host like kinesis.us-east-1.amazonaws.com, got {endpoint}"
            )));
        }

        let mut credential = Credential::new(access_key_id, secret_access_key);
        if let Some(token) = config.session_token.as_deref() {
            credential = credential.with_session_token(token);
        }

        Ok(Self {
            ctx,
            credential,
            endpoint: endpoint.to_string(),
            url: format!("https://{endpoint}/"),
            signer: RequestSigner::new(region),
            max_response_size: config
                .max_response_size
                .unwrap_or(DEFAULT_MAX_RESPONSE_SIZE),
        })
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.signer = self.signer.with_time(time);
        self
    }

    /// Endpoint host.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Url every request is posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Region requests are signed for.
    pub fn region(&self) -> &str {
        self.signer.region()
    }

    /// List the streams of the account.
    pub fn list_streams(&self) -> Result<Response> {
        self.send(Action::ListStreams, payload::list_streams()?)
    }

    /// Describe `stream_name`.
    pub fn describe_stream(&self, stream_name: &str) -> Result<Response> {
        self.send(Action::DescribeStream, payload::describe_stream(stream_name)?)
    }

    /// Put one record into `stream_name`.
    pub fn put_record(
        &self,
        stream_name: &str,
        partition_key: &str,
        data: &[u8],
    ) -> Result<Response> {
        self.send(
            Action::PutRecord,
            payload::put_record(stream_name, partition_key, data)?,
        )
    }

    /// Put `records` into `stream_name`.
    ///
    /// A single record is sent with `PutRecord`, more with `PutRecords`.
    pub fn put_records(&self, stream_name: &str, records: &[Record]) -> Result<Response> {
        match records {
            [] => Err(Error::request_invalid("at least one record is required")),
            [record] => self.put_record(stream_name, &record.partition_key, &record.data),
            _ => self.send(
                Action::PutRecords,
                payload::put_records(stream_name, records)?,
            ),
        }
    }

    /// Sign and send `payload` as `action`.
    pub fn send(&self, action: Action, payload: String) -> Result<Response> {
        let mut resp = Response::new(self.max_response_size);
        self.send_into(action, payload, &mut resp)?;
        Ok(resp)
    }

    /// Sign and send `payload` as `action`, capturing the outcome into `resp`.
    ///
    /// `resp` is reset first. Transport failures are reported through
    /// `resp` with status `0`, only local failures are returned as `Err`.
    pub fn send_into(&self, action: Action, payload: String, resp: &mut Response) -> Result<()> {
        resp.reset();

        let req = self.build_request(action, payload)?;
        debug!("sending {action} request to {}", self.url);

        match self.ctx.http_send(req) {
            Ok(r) => {
                resp.capture(r);
                debug!("{action} request finished with status {}", resp.status);
            }
            Err(err) => {
                let msg = err.to_detailed_string();
                warn!("{action} request failed: {msg}");
                resp.fail(msg);
            }
        }

        Ok(())
    }

    /// Build the signed http request of `action`.
    pub fn build_request(&self, action: Action, payload: String) -> Result<http::Request<Bytes>> {
        let signed = self.signer.sign(&self.credential, &self.endpoint, &payload)?;

        let mut authorization = HeaderValue::from_str(&signed.authorization)?;
        authorization.set_sensitive(true);

        let mut req = http::Request::builder()
            .method(Method::POST)
            .uri(&self.url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, CONTENT_TYPE_AMZ_JSON);

        if let Some(token) = self.credential.session_token() {
            let mut value = HeaderValue::from_str(token)?;
            value.set_sensitive(true);
            req = req.header(X_AMZ_SECURITY_TOKEN, value);
        }

        Ok(req
            .header(X_AMZ_TARGET, action.target())
            .header(X_AMZ_DATE, signed.timestamp.long)
            .extension(ResponseLimit(self.max_response_size))
            .body(Bytes::from(payload))?)
    }
}

/// The endpoint is signed as the `host` header, so it must be exactly
/// `host[:port]` with no scheme, userinfo or path.
fn is_bare_authority(endpoint: &str) -> bool {
    match endpoint.parse::<Authority>() {
        Ok(authority) => !endpoint.contains("://") && !authority.as_str().contains('@'),
        Err(_) => false,
    }
}

fn required<'a>(v: &'a Option<String>, name: &str) -> Result<&'a str> {
    match v.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::config_invalid(format!("{name} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinesign_core::time::parse_rfc3339;
    use kinesign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn test_config() -> Config {
        Config {
            region: Some("us-east-1".to_string()),
            endpoint: Some("kinesis.us-east-1.amazonaws.com".to_string()),
            ..Default::default()
        }
        .with_credential("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
    }

    fn header_names(req: &http::Request<Bytes>) -> Vec<&str> {
        req.headers().keys().map(|k| k.as_str()).collect()
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn test_new() -> Result<()> {
        let client = Client::new(Context::new(), &test_config())?;

        assert_eq!(client.url(), "https://kinesis.us-east-1.amazonaws.com/");
        assert_eq!(client.endpoint(), "kinesis.us-east-1.amazonaws.com");
        assert_eq!(client.region(), "us-east-1");
        Ok(())
    }

    #[test_case(Config { access_key_id: None, ..test_config() }; "missing access key id")]
    #[test_case(Config { secret_access_key: Some(String::new()), ..test_config() }; "empty secret")]
    #[test_case(Config { region: None, ..test_config() }; "missing region")]
    #[test_case(Config { endpoint: None, ..test_config() }; "missing endpoint")]
    #[test_case(Config { endpoint: Some("https://kinesis.us-east-1.amazonaws.com".to_string()), ..test_config() }; "endpoint with scheme")]
    #[test_case(Config { endpoint: Some("kinesis us-east-1".to_string()), ..test_config() }; "endpoint with space")]
    #[test_case(Config { endpoint: Some("user@kinesis.us-east-1.amazonaws.com".to_string()), ..test_config() }; "endpoint with userinfo")]
    #[test_case(Config { endpoint: Some("kinesis.us-east-1.amazonaws.com/path".to_string()), ..test_config() }; "endpoint with path")]
    fn test_new_invalid_config(cfg: Config) {
        let err = Client::new(Context::new(), &cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_build_request() -> Result<()> {
        let client = Client::new(Context::new(), &test_config())?
            .with_time(parse_rfc3339("2015-08-30T12:36:00Z")?);
        let req = client.build_request(Action::ListStreams, "{}".to_string())?;

        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.uri(), "https://kinesis.us-east-1.amazonaws.com/");
        assert_eq!(
            header_names(&req),
            vec!["authorization", "content-type", "x-amz-target", "x-amz-date"]
        );
        assert!(req.headers().get(http::header::EXPECT).is_none());
        assert_eq!(req.headers()[X_AMZ_TARGET], "Kinesis_20131202.ListStreams");
        assert_eq!(req.headers()[X_AMZ_DATE], "20150830T123600Z");
        assert!(req.headers()[AUTHORIZATION].is_sensitive());
        assert_eq!(req.body().as_ref(), b"{}");
        Ok(())
    }

    #[test]
    fn test_build_request_carries_response_limit() -> Result<()> {
        let req = Client::new(Context::new(), &test_config())?
            .build_request(Action::ListStreams, "{}".to_string())?;
        assert_eq!(
            req.extensions().get::<ResponseLimit>(),
            Some(&ResponseLimit(DEFAULT_MAX_RESPONSE_SIZE))
        );

        let cfg = Config {
            max_response_size: Some(16),
            ..test_config()
        };
        let req = Client::new(Context::new(), &cfg)?
            .build_request(Action::ListStreams, "{}".to_string())?;
        assert_eq!(req.extensions().get::<ResponseLimit>(), Some(&ResponseLimit(16)));
        Ok(())
    }

    #[test]
    fn test_build_request_with_session_token() -> Result<()> {
        let cfg = Config {
            session_token: Some("session-token".to_string()),
            ..test_config()
        };
        let client = Client::new(Context::new(), &cfg)?;
        let req = client.build_request(Action::DescribeStream, "{}".to_string())?;

        assert_eq!(
            header_names(&req),
            vec![
                "authorization",
                "content-type",
                "x-amz-security-token",
                "x-amz-target",
                "x-amz-date"
            ]
        );
        assert_eq!(req.headers()[X_AMZ_SECURITY_TOKEN], "session-token");
        assert!(req.headers()[X_AMZ_SECURITY_TOKEN].is_sensitive());
        Ok(())
    }

    #[test]
    fn test_build_request_with_invalid_session_token() -> Result<()> {
        let cfg = Config {
            session_token: Some("bad\ntoken".to_string()),
            ..test_config()
        };
        let client = Client::new(Context::new(), &cfg)?;
        let err = client
            .build_request(Action::ListStreams, "{}".to_string())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        Ok(())
    }

    #[test]
    fn test_put_records_empty() -> Result<()> {
        let client = Client::new(Context::new(), &test_config())?;
        let err = client.put_records("my-stream", &[]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        Ok(())
    }

    #[test]
    fn test_send_without_http_client() -> Result<()> {
        let client = Client::new(Context::new(), &test_config())?;
        let resp = client.list_streams()?;

        assert!(resp.is_transport_error());
        assert!(resp.header.is_empty());
        assert!(resp.body.is_empty());
        assert!(resp
            .error_message()
            .is_some_and(|v| v.contains("no HTTP client configured")));
        Ok(())
    }
}
