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

//! Kinesis support with convenience APIs

pub use kinesign_kinesis::*;

#[cfg(feature = "default-context")]
use crate::default_context;

/// Create a kinesis client with the default context.
///
/// Region and endpoint missing from `config` are read from the environment,
/// see [`Config::from_env`].
///
/// # Example
///
/// ```no_run
/// # fn main() -> kinesign_core::Result<()> {
/// use kinesign::kinesis::{default_client, Config};
///
/// let config = Config::default().with_credential("my-access-key", "my-secret-key");
/// let client = default_client(&config)?;
///
/// let resp = client.list_streams()?;
/// println!("{}", resp.report());
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client(config: &Config) -> kinesign_core::Result<Client> {
    let ctx = default_context()?;
    let config = config.clone().from_env(&ctx);
    Client::new(ctx, &config)
}
