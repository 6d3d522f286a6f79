// This file is part of alf_client, a client library for the ALF hardware control services.
//
// Copyright 2025 Canonical Ltd.
//
// SPDX-License-Identifier: GPL-3.0-only
//
// alf_client is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License version 3, as published by the Free Software Foundation.
//
// alf_client is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranties of MERCHANTABILITY, SATISFACTORY QUALITY, or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with this program.  If not, see http://www.gnu.org/licenses/.

//! SCA, SWT and IC sequence commands.

use crate::SequenceArgs;
use alf_client::error::AlfError;
use alf_client::protocol::strip_prefix;
use alf_client::proxies::sequence::{SequenceKind, SequenceRpc};
use alf_client::transport::RpcTransport;

/// Sends either the raw buffer or the key/value pairs and returns the reply without its status
/// prefix.
///
/// # Arguments
///
/// * `rpc` - SCA, SWT or IC sequence proxy for the selected link
/// * `args` - Either `--raw <S>` or a list of `KEY=VALUE` pairs
///
/// # Returns: `Result<String, AlfError>`
/// * `Ok(String)` - Reply body as sent by the server
/// * `Err(AlfError)` - Transport failure, remote failure or a reply too short to carry a prefix
pub async fn sequence_handler<K: SequenceKind, T: RpcTransport>(
    rpc: &SequenceRpc<K, T>,
    args: &SequenceArgs,
) -> Result<String, AlfError> {
    let reply = match &args.raw {
        Some(buffer) => rpc.write(buffer).await?,
        None => {
            rpc.write_sequence(args.pairs.iter().map(|(key, value)| (key, value)))
                .await?
        }
    };
    Ok(printable_reply(&reply).to_string())
}

fn printable_reply(reply: &str) -> &str {
    strip_prefix(reply).unwrap_or(reply)
}
