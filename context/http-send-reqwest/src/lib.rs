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

//! Blocking [`reqwest`] implementation of [`HttpSend`].
//!
//! ```no_run
//! use kinesign_core::Context;
//! use kinesign_http_send_reqwest::ReqwestHttpSend;
//!
//! # fn main() -> kinesign_core::Result<()> {
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::builder().build()?);
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use kinesign_core::{Error, HttpSend, ResponseLimit, Result};
use log::{debug, warn};
use reqwest::blocking::Client;
use std::io::Read;
use std::time::Duration;

/// Timeout applied to the whole request, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// ReqwestHttpSend sends requests with a [`reqwest::blocking::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::blocking::Client.
    ///
    /// The client is used as-is: timeouts and TLS settings are the caller's.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a builder with [`DEFAULT_TIMEOUT`] and certificate
    /// verification enabled.
    pub fn builder() -> ReqwestHttpSendBuilder {
        ReqwestHttpSendBuilder::default()
    }
}

impl HttpSend for ReqwestHttpSend {
    fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        let limit = parts.extensions.get::<ResponseLimit>().copied();

        let resp = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(Vec::from(body))
            .send()
            .map_err(|e| Error::unexpected("failed to send http request").with_source(e))?;

        let status = resp.status();
        let version = resp.version();
        let headers = resp.headers().clone();
        let body = match limit {
            Some(limit) => {
                let mut buf = Vec::new();
                resp.take(limit.read_limit())
                    .read_to_end(&mut buf)
                    .map_err(|e| {
                        Error::unexpected("failed to read http response body").with_source(e)
                    })?;
                if buf.len() > limit.0 {
                    debug!("response body exceeds {} bytes, rest is not read", limit.0);
                }
                Bytes::from(buf)
            }
            None => resp.bytes().map_err(|e| {
                Error::unexpected("failed to read http response body").with_source(e)
            })?,
        };

        let mut builder = http::Response::builder().status(status).version(version);
        if let Some(hs) = builder.headers_mut() {
            *hs = headers;
        }
        Ok(builder.body(body)?)
    }
}

/// Builder for [`ReqwestHttpSend`].
#[derive(Debug, Clone)]
pub struct ReqwestHttpSendBuilder {
    timeout: Duration,
    danger_accept_invalid_certs: bool,
    user_agent: Option<String>,
}

impl Default for ReqwestHttpSendBuilder {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            danger_accept_invalid_certs: false,
            user_agent: None,
        }
    }
}

impl ReqwestHttpSendBuilder {
    /// Set the timeout for the whole request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Accept any server certificate, whatever its issuer or hostname.
    ///
    /// # Warning
    ///
    /// This makes every request open to man-in-the-middle attacks, including
    /// the disclosure of the session token header. Only use it against local
    /// test endpoints with self-signed certificates.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }

    /// Set the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the http sender.
    pub fn build(self) -> Result<ReqwestHttpSend> {
        if self.danger_accept_invalid_certs {
            warn!("tls certificate verification is disabled, requests are not protected");
        }

        let mut builder = Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);
        if let Some(ua) = self.user_agent {
            builder = builder.user_agent(ua);
        }

        let client = builder
            .build()
            .map_err(|e| Error::unexpected("failed to build http client").with_source(e))?;
        Ok(ReqwestHttpSend::new(client))
    }
}
