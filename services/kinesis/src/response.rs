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

use bytes::Bytes;
use std::borrow::Cow;
use std::io;

/// Text buffer that never grows past its capacity.
///
/// Writes beyond capacity are dropped and flagged with
/// [`ResponseBuffer::is_truncated`].
#[derive(Debug, Clone, Default)]
pub struct ResponseBuffer {
    buf: Vec<u8>,
    capacity: usize,
    truncated: bool,
}

impl ResponseBuffer {
    /// Create an empty buffer that keeps at most `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::new(),
            capacity,
            truncated: false,
        }
    }

    /// Append `data`, returning how many bytes were kept.
    pub fn push(&mut self, data: &[u8]) -> usize {
        let room = self.capacity - self.buf.len();
        let n = data.len().min(room);
        if n < data.len() {
            self.truncated = true;
        }
        self.buf.extend_from_slice(&data[..n]);
        n
    }

    /// Empty the buffer, keeping its capacity.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.truncated = false;
    }

    /// Number of bytes held.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been kept.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Maximum number of bytes kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if any write was cut short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Raw bytes held.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Held bytes as text.
    ///
    /// Truncation may split a multi-byte char, which shows up as `U+FFFD`.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buf)
    }
}

impl io::Write for ResponseBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push(buf);
        // Dropped bytes still count as written.
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Outcome of one kinesis call.
///
/// - `status == 0`: transport failure, see [`Response::error_message`].
/// - `status == 200`: success, `body` holds the action's json result.
/// - anything else: api error, `body` holds the service's error json as-is.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// HTTP status code, `0` if no response was received.
    pub status: u16,
    /// Status line and headers, one per `\r\n` terminated line.
    pub header: ResponseBuffer,
    /// Response body.
    pub body: ResponseBuffer,
    /// Transport error message.
    pub error: Option<String>,
}

impl Response {
    /// Create an empty response whose buffers keep at most `capacity` bytes each.
    pub fn new(capacity: usize) -> Self {
        Self {
            status: 0,
            header: ResponseBuffer::with_capacity(capacity),
            body: ResponseBuffer::with_capacity(capacity),
            error: None,
        }
    }

    /// Reset to the empty state so the response can be reused.
    pub fn reset(&mut self) {
        self.status = 0;
        self.header.clear();
        self.body.clear();
        self.error = None;
    }

    /// Returns true if the action succeeded.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Returns true if no response was received.
    pub fn is_transport_error(&self) -> bool {
        self.status == 0
    }

    /// Transport error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Text to show a user for this outcome.
    ///
    /// The error message on transport failure, the body on success, and the
    /// headers followed by the body otherwise.
    pub fn report(&self) -> String {
        match self.status {
            0 => self.error.clone().unwrap_or_default(),
            200 => self.body.text().into_owned(),
            _ => format!("{}\n{}", self.header.text(), self.body.text()),
        }
    }

    pub(crate) fn capture(&mut self, resp: http::Response<Bytes>) {
        let (parts, body) = resp.into_parts();

        self.status = parts.status.as_u16();
        self.header.push(
            format!(
                "{:?} {} {}\r\n",
                parts.version,
                parts.status.as_str(),
                parts.status.canonical_reason().unwrap_or_default()
            )
            .as_bytes(),
        );
        for (name, value) in parts.headers.iter() {
            self.header.push(name.as_str().as_bytes());
            self.header.push(b": ");
            self.header.push(value.as_bytes());
            self.header.push(b"\r\n");
        }
        self.header.push(b"\r\n");
        self.body.push(&body);
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.status = 0;
        self.error = Some(message);
    }
}
