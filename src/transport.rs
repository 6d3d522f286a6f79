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

//! The RPC base every proxy is built on.
//!
//! [`RpcTransport`] is the seam to the middleware: one request string in, one reply string out.
//! [`RpcInfo`] binds a transport to a single service name, turns failure-prefixed replies into
//! [`AlfError::Remote`] and is the one place where a failed call gets logged.

pub mod dbus;

use crate::error::AlfError;
use crate::protocol::{is_failure, strip_prefix};
use log::{error, trace};
use std::future::Future;
use std::sync::Arc;

/// Sends one request to a named remote procedure and waits for its reply.
pub trait RpcTransport {
    fn call(
        &self,
        service_name: &str,
        request: &str,
    ) -> impl Future<Output = Result<String, AlfError>> + Send;
}

/// A transport bound to one service name.
#[derive(Debug)]
pub struct RpcInfo<T> {
    service_name: String,
    transport: Arc<T>,
}

impl<T> Clone for RpcInfo<T> {
    fn clone(&self) -> Self {
        RpcInfo {
            service_name: self.service_name.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> RpcInfo<T> {
    /// Binds `transport` to one service name.
    ///
    /// # Arguments
    ///
    /// * `service_name` - Full service name, as built by [`crate::service_names::ServiceNames`]
    /// * `transport` - Transport shared with other bindings
    pub fn new(service_name: impl Into<String>, transport: Arc<T>) -> Self {
        RpcInfo {
            service_name: service_name.into(),
            transport,
        }
    }

    /// Service name every call is sent to.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl<T: RpcTransport> RpcInfo<T> {
    /// One round trip. The reply is returned as sent, prefix included.
    pub async fn call(&self, request: &str) -> Result<String, AlfError> {
        trace!("Calling {} with {request:?}", self.service_name);
        let reply = self.transport.call(&self.service_name, request).await?;
        trace!("{} replied {reply:?}", self.service_name);
        if is_failure(&reply) {
            return Err(AlfError::Remote {
                service: self.service_name.clone(),
                message: strip_prefix(&reply).unwrap_or_default().to_string(),
            });
        }
        Ok(reply)
    }

    /// Like [`RpcInfo::call`], then hands the reply to `decode`.
    ///
    /// Whatever fails, transport or decoding, is logged exactly once at error level as
    /// `<tag>: <error>` and returned to the caller.
    pub async fn call_tagged<R>(
        &self,
        tag: &str,
        request: &str,
        decode: impl FnOnce(String) -> Result<R, AlfError>,
    ) -> Result<R, AlfError> {
        let result = match self.call(request).await {
            Ok(reply) => decode(reply),
            Err(e) => Err(e),
        };
        result.inspect_err(|e| error!("{tag}: {e}"))
    }
}
