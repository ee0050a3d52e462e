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

//! JSON request bodies of the supported actions.
//!
//! Field order on the wire follows the declaration order of each struct.

use crate::record::Record;
use kinesign_core::hash::base64_encode;
use kinesign_core::{Error, Result};
use serde::Serialize;

#[derive(Serialize)]
struct ListStreamsInput {}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeStreamInput<'a> {
    stream_name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PutRecordInput<'a> {
    stream_name: &'a str,
    partition_key: &'a str,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PutRecordsInput<'a> {
    stream_name: &'a str,
    records: Vec<PutRecordsEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PutRecordsEntry<'a> {
    partition_key: &'a str,
    data: String,
}

fn to_json<T: Serialize>(input: &T) -> Result<String> {
    serde_json::to_string(input)
        .map_err(|e| Error::unexpected("failed to serialize request payload").with_source(e))
}

/// Body of `ListStreams`, always `{}`.
pub fn list_streams() -> Result<String> {
    to_json(&ListStreamsInput {})
}

/// Body of `DescribeStream`.
pub fn describe_stream(stream_name: &str) -> Result<String> {
    to_json(&DescribeStreamInput { stream_name })
}

/// Body of `PutRecord`.
pub fn put_record(stream_name: &str, partition_key: &str, data: &[u8]) -> Result<String> {
    to_json(&PutRecordInput {
        stream_name,
        partition_key,
        data: base64_encode(data),
    })
}

/// Body of `PutRecords`.
pub fn put_records(stream_name: &str, records: &[Record]) -> Result<String> {
    to_json(&PutRecordsInput {
        stream_name,
        records: records
            .iter()
            .map(|r| PutRecordsEntry {
                partition_key: &r.partition_key,
                data: base64_encode(&r.data),
            })
            .collect(),
    })
}
