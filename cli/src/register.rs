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

//! Register and I2C commands.

use alf_client::client::AlfClient;
use alf_client::error::AlfError;
use alf_client::protocol::format_hex;
use alf_client::transport::RpcTransport;

/// Reads one register and renders it as `<address>: <value>`.
///
/// # Arguments
///
/// * `client` - Client bound to the selected ALF link
/// * `address` - Hardware address of the register
///
/// # Returns: `Result<String, AlfError>`
/// * `Ok(String)` - Address and value, both in `0x` hex
/// * `Err(AlfError)` - Transport failure, remote failure or unparsable reply.
///   Already logged by the proxy.
pub async fn reg_read_handler<T: RpcTransport>(
    client: &AlfClient<T>,
    address: u64,
) -> Result<String, AlfError> {
    let value = client.register_read().read_register(address).await?;
    Ok(format!("{}: {}", format_hex(address), format_hex(value)))
}

/// Writes `value` to the register at `address`.
///
/// # Arguments
///
/// * `client` - Client bound to the selected ALF link
/// * `address` - Hardware address of the register
/// * `value` - Value to write
///
/// # Returns: `Result<String, AlfError>`
/// * `Ok(String)` - Confirmation naming the value and the address
/// * `Err(AlfError)` - Transport or remote failure, already logged by the proxy
pub async fn reg_write_handler<T: RpcTransport>(
    client: &AlfClient<T>,
    address: u64,
    value: u32,
) -> Result<String, AlfError> {
    client
        .register_write()
        .write_register(address, value)
        .await?;
    Ok(format!(
        "{} written to {}",
        format_hex(value),
        format_hex(address)
    ))
}

/// Writes one value over the IC GBT I2C service.
///
/// # Arguments
///
/// * `client` - Client bound to the selected ALF link
/// * `value` - Value to write
///
/// # Returns: `Result<String, AlfError>`
/// * `Ok(String)` - Confirmation naming the value and the service used
/// * `Err(AlfError)` - Transport or remote failure, already logged by the proxy
pub async fn i2c_write_handler<T: RpcTransport>(
    client: &AlfClient<T>,
    value: u32,
) -> Result<String, AlfError> {
    client.ic_gbt_i2c_write().write(value).await?;
    Ok(format!(
        "{} written via {}",
        format_hex(value),
        client.ic_gbt_i2c_write().service_name()
    ))
}
