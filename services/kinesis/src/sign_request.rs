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
use crate::Credential;
use kinesign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use kinesign_core::time::{format_date, format_iso8601, now, DateTime};
use kinesign_core::{Error, Result};
use log::debug;
use std::fmt::Write;

/// The long and short forms of one signing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    /// `YYYYMMDDTHHMMSSZ`, sent as `x-amz-date`.
    pub long: String,
    /// `YYYYMMDD`, used in the credential scope.
    pub short: String,
}

impl Timestamp {
    /// Derive both forms from the same instant.
    pub fn new(time: DateTime) -> Self {
        Self {
            long: format_iso8601(time),
            short: format_date(time),
        }
    }
}

/// Everything produced while signing one request.
#[derive(Debug, Clone)]
pub struct SigningOutput {
    /// Signing time.
    pub timestamp: Timestamp,
    /// Canonical request text.
    pub canonical_request: String,
    /// String to sign.
    pub string_to_sign: String,
    /// Hex encoded signature.
    pub signature: String,
    /// Value of the `authorization` header.
    pub authorization: String,
}

/// RequestSigner that implements AWS SigV4 for the kinesis json protocol.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given region.
    pub fn new(region: &str) -> Self {
        Self {
            region: region.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Region of the credential scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Sign a POST of `payload` to `host`.
    pub fn sign(&self, cred: &Credential, host: &str, payload: &str) -> Result<SigningOutput> {
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "access key id and secret access key must not be empty",
            ));
        }

        let timestamp = Timestamp::new(self.time.unwrap_or_else(now));

        let canonical_request = canonical_request_string(host, &timestamp.long, payload)?;
        debug!("calculated canonical request: {canonical_request}");

        let scope = credential_scope(&timestamp.short, &self.region);
        debug!("calculated scope: {scope}");

        let string_to_sign = string_to_sign(&timestamp.long, &scope, &canonical_request)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            &cred.secret_access_key,
            &timestamp.short,
            &self.region,
            SERVICE,
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());
        let authorization = authorization_header(&cred.access_key_id, &scope, &signature);

        Ok(SigningOutput {
            timestamp,
            canonical_request,
            string_to_sign,
            signature,
            authorization,
        })
    }
}

/// Build the canonical request of a kinesis call.
///
/// ```text
/// POST
/// /
///
/// content-type:application/x-amz-json-1.1
/// host:<host>
/// x-amz-date:<long timestamp>
///
/// content-type;host;x-amz-date
/// <hashed payload>
/// ```
pub fn canonical_request_string(host: &str, long_date: &str, payload: &str) -> Result<String> {
    let mut f = String::new();

    // Method
    writeln!(f, "POST")?;
    // Path
    writeln!(f, "/")?;
    // Query
    writeln!(f)?;
    // Signed headers, already sorted.
    writeln!(f, "content-type:{CONTENT_TYPE_AMZ_JSON}")?;
    writeln!(f, "host:{host}")?;
    writeln!(f, "{X_AMZ_DATE}:{long_date}")?;
    writeln!(f)?;
    writeln!(f, "{SIGNED_HEADERS}")?;
    write!(f, "{}", hex_sha256(payload.as_bytes()))?;

    Ok(f)
}

/// Scope: "20150830/<region>/kinesis/aws4_request"
pub fn credential_scope(short_date: &str, region: &str) -> String {
    format!("{short_date}/{region}/{SERVICE}/{SCOPE_TERMINATOR}")
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20150830T123600Z
/// 20150830/<region>/kinesis/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(long_date: &str, scope: &str, canonical_request: &str) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "{ALGORITHM}")?;
    writeln!(f, "{long_date}")?;
    writeln!(f, "{scope}")?;
    write!(f, "{}", hex_sha256(canonical_request.as_bytes()))?;
    Ok(f)
}

/// Derive the signing key of one day, region and service.
pub fn generate_signing_key(
    secret: &str,
    short_date: &str,
    region: &str,
    service: &str,
) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), short_date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), SCOPE_TERMINATOR.as_bytes())
}

/// Value of the `authorization` header.
pub fn authorization_header(access_key_id: &str, scope: &str, signature: &str) -> String {
    format!(
        "{ALGORITHM} Credential={access_key_id}/{scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}"
    )
}
