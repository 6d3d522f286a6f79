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

//! Register read and write proxies.

use crate::error::AlfError;
use crate::protocol::{ARGUMENT_SEPARATOR, format_hex, parse_hex, strip_prefix};
use crate::service_names::ServiceNames;
use crate::transport::{RpcInfo, RpcTransport};
use std::sync::Arc;

/// Reads one 32-bit register per call.
#[derive(Debug, Clone)]
pub struct RegisterReadRpc<T> {
    rpc: RpcInfo<T>,
}

impl<T: RpcTransport> RegisterReadRpc<T> {
    pub const TAG: &'static str = "RegisterReadRpc";

    /// Binds the proxy to an explicit service name.
    pub fn new(service_name: impl Into<String>, transport: Arc<T>) -> Self {
        RegisterReadRpc {
            rpc: RpcInfo::new(service_name, transport),
        }
    }

    /// Binds the proxy to the matching service of `names`.
    ///
    /// # Arguments
    ///
    /// * `names` - Service names of one ALF link
    /// * `transport` - Transport shared with the other proxies of the link
    pub fn for_link(names: &ServiceNames, transport: Arc<T>) -> Self {
        Self::new(names.register_read(), transport)
    }

    /// Service name this proxy calls.
    pub fn service_name(&self) -> &str {
        self.rpc.service_name()
    }

    /// Sends `address` as `0x`-prefixed hex and parses the hex value in the reply.
    pub async fn read_register(&self, address: u64) -> Result<u32, AlfError> {
        let service = self.rpc.service_name();
        self.rpc
            .call_tagged(Self::TAG, &format_hex(address), |reply| {
                let value = strip_prefix(&reply).ok_or_else(|| AlfError::Reply {
                    service: service.to_string(),
                    reply: reply.clone(),
                })?;
                parse_hex(value)
            })
            .await
    }
}

/// Writes one 32-bit register per call.
#[derive(Debug, Clone)]
pub struct RegisterWriteRpc<T> {
    rpc: RpcInfo<T>,
}

impl<T: RpcTransport> RegisterWriteRpc<T> {
    pub const TAG: &'static str = "RegisterWriteRpc";

    /// Binds the proxy to an explicit service name.
    pub fn new(service_name: impl Into<String>, transport: Arc<T>) -> Self {
        RegisterWriteRpc {
            rpc: RpcInfo::new(service_name, transport),
        }
    }

    /// Binds the proxy to the matching service of `names`.
    ///
    /// # Arguments
    ///
    /// * `names` - Service names of one ALF link
    /// * `transport` - Transport shared with the other proxies of the link
    pub fn for_link(names: &ServiceNames, transport: Arc<T>) -> Self {
        Self::new(names.register_write(), transport)
    }

    /// Service name this proxy calls.
    pub fn service_name(&self) -> &str {
        self.rpc.service_name()
    }

    /// The reply body carries nothing; only its arrival is checked.
    pub async fn write_register(&self, address: u64, value: u32) -> Result<(), AlfError> {
        let request = format!(
            "{}{ARGUMENT_SEPARATOR}{}",
            format_hex(address),
            format_hex(value)
        );
        self.rpc
            .call_tagged(Self::TAG, &request, |_| Ok(()))
            .await
    }
}
