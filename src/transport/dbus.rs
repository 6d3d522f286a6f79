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

//! [`RpcTransport`] over D-Bus.
//!
//! The ALF server registers under a well-known bus name (`ch.cern.alf` by default) and exports
//! one object per service. The object path is the escaped service name below a configurable
//! root, so `ALF/ALF_1/SERIAL_42/LINK_3/REGISTER_READ` is served at
//! `/ch/cern/alf/ALF/ALF_5f1/SERIAL_5f42/LINK_5f3/REGISTER_5fREAD`. Every object implements
//! `ch.cern.alf.Rpc.Execute(s) -> s`.

use crate::config::{BusKind, ClientConfig};
use crate::error::AlfError;
use crate::transport::RpcTransport;
use log::debug;
use zbus::proxy::CacheProperties;
use zbus::zvariant::ObjectPath;
use zbus::{Connection, proxy};

#[proxy(
    default_service = "ch.cern.alf",
    interface = "ch.cern.alf.Rpc",
    default_path = "/ch/cern/alf"
)]
pub trait AlfRpc {
    async fn execute(&self, request: &str) -> zbus::Result<String>;
}

/// Escapes one service name segment into a valid object path element.
///
/// ASCII letters and digits are kept; every other byte, `_` included, becomes `_` followed by
/// two lowercase hex digits. The mapping is reversible, so distinct segments never share an
/// element.
pub fn escape_path_element(segment: &str) -> String {
    segment
        .bytes()
        .map(|b| match b.is_ascii_alphanumeric() {
            true => char::from(b).to_string(),
            false => format!("_{b:02x}"),
        })
        .collect()
}

/// Maps a service name onto an object path below `object_root`.
///
/// Each `/`-separated segment becomes one path element, escaped with
/// [`escape_path_element`]. Empty segments are rejected, which keeps the mapping injective.
pub fn object_path_for(object_root: &str, service_name: &str) -> Result<String, AlfError> {
    if service_name.is_empty() {
        return Err(AlfError::Argument(format!(
            "Service name {service_name:?} does not contain any path element."
        )));
    }
    let segments: Vec<&str> = service_name.split('/').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(AlfError::Argument(format!(
            "Service name {service_name:?} contains an empty segment."
        )));
    }
    let elements: Vec<String> = segments.into_iter().map(escape_path_element).collect();
    let path = format!(
        "{}/{}",
        object_root.trim_end_matches('/'),
        elements.join("/")
    );
    ObjectPath::try_from(path.as_str()).map_err(|e| {
        AlfError::Argument(format!(
            "{path:?} built from {service_name:?} is not a valid object path: {e}"
        ))
    })?;
    Ok(path)
}

/// A connection to the bus the ALF server lives on.
#[derive(Debug, Clone)]
pub struct DbusTransport {
    connection: Connection,
    destination: String,
    object_root: String,
}

impl DbusTransport {
    pub async fn connect(config: &ClientConfig) -> Result<DbusTransport, AlfError> {
        let connection = match config.bus {
            BusKind::System => Connection::system().await,
            BusKind::Session => Connection::session().await,
        }
        .map_err(|e| AlfError::Dbus {
            service: config.destination.clone(),
            e,
        })?;
        debug!(
            "Connected to the {:?} bus for {}",
            config.bus, config.destination
        );
        Ok(Self::with_connection(connection, config))
    }

    /// Reuses an already open connection.
    pub fn with_connection(connection: Connection, config: &ClientConfig) -> DbusTransport {
        DbusTransport {
            connection,
            destination: config.destination.clone(),
            object_root: config.object_root.clone(),
        }
    }
}

impl RpcTransport for DbusTransport {
    async fn call(&self, service_name: &str, request: &str) -> Result<String, AlfError> {
        let path = object_path_for(&self.object_root, service_name)?;
        let dbus_error = |e: zbus::Error| AlfError::Dbus {
            service: service_name.to_string(),
            e,
        };
        let proxy = AlfRpcProxy::builder(&self.connection)
            .destination(self.destination.as_str())
            .map_err(dbus_error)?
            .path(path)
            .map_err(dbus_error)?
            .cache_properties(CacheProperties::No)
            .build()
            .await
            .map_err(dbus_error)?;
        proxy.execute(request).await.map_err(dbus_error)
    }
}
