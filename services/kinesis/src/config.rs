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
use kinesign_core::utils::Redact;
use kinesign_core::Context;
use std::fmt::{Debug, Formatter};

/// Config for the kinesis client.
///
/// Every field except `session_token` and `max_response_size` must be set
/// before a [`Client`](crate::Client) can be built from it.
#[derive(Clone, Default)]
pub struct Config {
    /// Access key id.
    pub access_key_id: Option<String>,
    /// Secret access key.
    pub secret_access_key: Option<String>,
    /// Session token, only required for temporary credentials.
    pub session_token: Option<String>,
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// Endpoint host, like `kinesis.us-east-1.amazonaws.com`.
    ///
    /// `endpoint` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ENDPOINT_URL_KINESIS`], with scheme and trailing `/` removed
    pub endpoint: Option<String>,
    /// Maximum bytes kept for each of the response header and body text.
    ///
    /// Default to [`DEFAULT_MAX_RESPONSE_SIZE`].
    pub max_response_size: Option<usize>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("max_response_size", &self.max_response_size)
            .finish()
    }
}

impl Config {
    /// Fill region and endpoint from env if they are not set.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.region.is_none() {
            self.region = ctx
                .env_var(AWS_REGION)
                .or_else(|| ctx.env_var(AWS_DEFAULT_REGION));
        }

        if self.endpoint.is_none() {
            self.endpoint = ctx
                .env_var(AWS_ENDPOINT_URL_KINESIS)
                .map(|v| endpoint_host(&v).to_string());
        }

        self
    }

    /// Set the credential fields.
    pub fn with_credential(mut self, access_key_id: &str, secret_access_key: &str) -> Self {
        self.access_key_id = Some(access_key_id.to_string());
        self.secret_access_key = Some(secret_access_key.to_string());
        self
    }
}

/// Strip scheme and trailing slash from an endpoint url.
pub(crate) fn endpoint_host(v: &str) -> &str {
    let v = v
        .strip_prefix("https://")
        .or_else(|| v.strip_prefix("http://"))
        .unwrap_or(v);
    v.trim_end_matches('/')
}
