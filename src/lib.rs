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

//! Client library for the ALF (ALICE Low-level Frontend) RPC services.
//!
//! ALF exposes register access and serial-protocol sequences of readout cards as named remote
//! procedures, one set per link. This crate provides:
//!
//! - [`service_names`] - the names of the six services of a link
//! - [`proxies`] - typed proxies for register read/write, SCA/SWT/IC sequences and GBT I2C writes
//! - [`client`] - all proxies of one link bundled over a shared transport
//! - [`transport`] - the request/reply seam and its D-Bus implementation
//! - [`protocol`] - hex formatting, reply prefixes and sequence separators
//! - [`config`] - TOML configuration with hardcoded fallbacks
//!
//! # Example
//!
//! ```rust,no_run
//! use alf_client::client::AlfClient;
//! use alf_client::config::client_config;
//! use alf_client::service_names::AlfLink;
//! use alf_client::transport::dbus::DbusTransport;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), alf_client::error::AlfError> {
//! let config = client_config();
//! let transport = Arc::new(DbusTransport::connect(config).await?);
//! let client = AlfClient::with_names(
//!     config.service_names(AlfLink::new("ALF_1", 42, 3)),
//!     transport,
//! );
//! let value = client.register_read().read_register(0x0c00_0000).await?;
//! client.register_write().write_register(0x0c00_0000, value | 1).await?;
//! let reply = client
//!     .sca_sequence()
//!     .write_sequence([("0x00010002", "0x00000000")])
//!     .await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod proxies;
pub mod service_names;
#[cfg(test)]
mod testing;
pub mod transport;
