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

//! Kinesis client signed with AWS SigV4.
//!
//! Supports `ListStreams`, `DescribeStream`, `PutRecord` and `PutRecords`
//! over the kinesis json protocol.
//!
//! ## Example
//!
//! ```no_run
//! use kinesign_core::Context;
//! use kinesign_kinesis::{Client, Config};
//!
//! # fn main() -> kinesign_core::Result<()> {
//! // Configure a transport with `Context::with_http_send`.
//! let ctx = Context::new();
//!
//! let config = Config {
//!     region: Some("us-east-1".to_string()),
//!     endpoint: Some("kinesis.us-east-1.amazonaws.com".to_string()),
//!     ..Default::default()
//! }
//! .with_credential("access_key_id", "secret_access_key");
//!
//! let client = Client::new(ctx, &config)?;
//! let resp = client.put_record("my-stream", "pk-1", b"hello")?;
//! if !resp.is_success() {
//!     eprintln!("{}", resp.report());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod action;
pub use action::Action;

mod client;
pub use client::Client;

mod config;
pub use config::Config;

mod constants;
pub use constants::DEFAULT_MAX_RESPONSE_SIZE;

mod credential;
pub use credential::Credential;

pub mod payload;

mod record;
pub use record::assign_partition_keys;
pub use record::Record;

mod response;
pub use response::Response;
pub use response::ResponseBuffer;

mod sign_request;
pub use sign_request::authorization_header;
pub use sign_request::canonical_request_string;
pub use sign_request::credential_scope;
pub use sign_request::generate_signing_key;
pub use sign_request::string_to_sign;
pub use sign_request::RequestSigner;
pub use sign_request::SigningOutput;
pub use sign_request::Timestamp;
