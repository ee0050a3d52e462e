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

use crate::Result;
use bytes::Bytes;
use std::fmt::Debug;

/// HttpSend is used to send a signed request and wait for the response.
///
/// Calls are blocking: the only suspension point of a request lifecycle is
/// inside this method. Any `Err` returned here is treated as a transport
/// failure (DNS, TLS, connect, timeout) by the caller; a completed exchange
/// must be returned as `Ok` whatever its status code.
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Request extension capping how many response body bytes a sender reads.
///
/// Senders that honor it read at most `limit + 1` bytes, so the caller can
/// still tell a body that hit the limit from one that fit exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseLimit(pub usize);

impl ResponseLimit {
    /// Number of body bytes a sender should read at most.
    pub fn read_limit(self) -> u64 {
        (self.0 as u64).saturating_add(1)
    }
}
