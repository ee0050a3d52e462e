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

//! Core components for signing and sending Kinesis API requests.
//!
//! This crate provides the foundational types and traits for the kinesign workspace.
//! Service crates build on top of it to sign requests and hand them to a transport.
//!
//! ## Overview
//!
//! The crate is built around a few key concepts:
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for sending requests ([`HttpSend`]) and reading the environment ([`Env`])
//! - **Error**: A single error type with an [`ErrorKind`] that callers can match on
//!
//! ## Example
//!
//! ```
//! use kinesign_core::{Context, StaticEnv};
//! use std::collections::HashMap;
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from([("AWS_REGION".to_string(), "us-east-1".to_string())]),
//! });
//!
//! assert_eq!(ctx.env_var("AWS_REGION").as_deref(), Some("us-east-1"));
//! ```
//!
//! ## Utilities
//!
//! The crate also provides utility modules:
//!
//! - [`hash`]: Cryptographic hashing and encoding utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;
mod http;
pub use http::HttpSend;
pub use http::ResponseLimit;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;
