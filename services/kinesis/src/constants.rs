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

// Headers used in kinesis requests.
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub const X_AMZ_TARGET: &str = "x-amz-target";

/// Content type of every request body of the kinesis json protocol.
pub const CONTENT_TYPE_AMZ_JSON: &str = "application/x-amz-json-1.1";

// Signing constants. Method, path and signed headers never vary for this
// protocol, so they are part of the canonical request as-is.
pub const SERVICE: &str = "kinesis";
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const SCOPE_TERMINATOR: &str = "aws4_request";
pub const SIGNED_HEADERS: &str = "content-type;host;x-amz-date";

// Targets carried in `x-amz-target`.
pub const TARGET_LIST_STREAMS: &str = "Kinesis_20131202.ListStreams";
pub const TARGET_DESCRIBE_STREAM: &str = "Kinesis_20131202.DescribeStream";
pub const TARGET_PUT_RECORD: &str = "Kinesis_20131202.PutRecord";
pub const TARGET_PUT_RECORDS: &str = "Kinesis_20131202.PutRecords";

// Env values used to fill in config. Credentials are never read from env.
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const AWS_ENDPOINT_URL_KINESIS: &str = "AWS_ENDPOINT_URL_KINESIS";

/// Maximum number of bytes kept for each of the response header and body text.
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 64 * 1024;
