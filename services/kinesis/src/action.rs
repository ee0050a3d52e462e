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
use std::fmt::{Display, Formatter};

/// The kinesis actions this client can call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// List the streams of the account.
    ListStreams,
    /// Describe one stream.
    DescribeStream,
    /// Put a single record.
    PutRecord,
    /// Put a batch of records into one stream.
    PutRecords,
}

impl Action {
    /// Value of the `x-amz-target` header.
    pub fn target(self) -> &'static str {
        match self {
            Action::ListStreams => TARGET_LIST_STREAMS,
            Action::DescribeStream => TARGET_DESCRIBE_STREAM,
            Action::PutRecord => TARGET_PUT_RECORD,
            Action::PutRecords => TARGET_PUT_RECORDS,
        }
    }

    /// Name of the action as used in the API reference.
    pub fn name(self) -> &'static str {
        match self {
            Action::ListStreams => "ListStreams",
            Action::DescribeStream => "DescribeStream",
            Action::PutRecord => "PutRecord",
            Action::PutRecords => "PutRecords",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
