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

use crate::error::AlfError;
use crate::protocol::format_hex;
use crate::service_names::ServiceNames;
use crate::transport::{RpcInfo, RpcTransport};
use std::sync::Arc;

/// Writes one value to the I2C slave reached through the GBT IC channel.
#[derive(Debug, Clone)]
pub struct IcGbtI2cWriteRpc<T> {
    rpc: RpcInfo<T>,
}

impl<T: RpcTransport> IcGbtI2cWriteRpc<T> {
    pub const TAG: &'static str = "IcGbtI2cWriteRpc";

    /// Binds the proxy to an explicit service name.
    pub fn new(service_name: impl Into<String>, transport: Arc<T>) -> Self {
        IcGbtI2cWriteRpc {
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
        Self::new(names.ic_gbt_i2c_write(), transport)
    }

    /// Service name this proxy calls.
    pub fn service_name(&self) -> &str {
        self.rpc.service_name()
    }

    pub async fn write(&self, value: u32) -> Result<(), AlfError> {
        self.rpc
            .call_tagged(Self::TAG, &format_hex(value), |_| Ok(()))
            .await
    }
}

#[cfg(test)]
mod test_ic_gbt_i2c_write {
    use super::*;
    use crate::service_names::AlfLink;
    use crate::testing::{FakeTransport, capture_logs, captured_errors};
    use googletest::prelude::*;
    use rstest::*;

    #[gtest]
    #[tokio::test]
    #[rstest]
    #[case::zero(0, "0x0")]
    #[case::byte(0x3c, "0x3c")]
    #[case::max(u32::MAX, "0xffffffff")]
    async fn value_is_sent_as_hex(#[case] value: u32, #[case] expected: &str) {
        let transport = Arc::new(FakeTransport::replying("success\n"));
        let names = ServiceNames::new(AlfLink::new("ALF_1", 42, 3));
        let rpc = IcGbtI2cWriteRpc::for_link(&names, transport.clone());

        assert_that!(rpc.write(value).await, ok(anything()));
        assert_that!(
            transport.requests(),
            elements_are![eq(&(
                "ALF/ALF_1/SERIAL_42/LINK_3/IC_GBT_I2C_WRITE".to_string(),
                expected.to_string()
            ))]
        );
    }

    #[gtest]
    #[tokio::test]
    async fn failure_is_logged_once_and_returned() {
        capture_logs();
        let rpc = IcGbtI2cWriteRpc::new("i2c", Arc::new(FakeTransport::failing()));

        assert_that!(rpc.write(0x1).await, err(anything()));
        assert_that!(
            captured_errors(),
            elements_are![starts_with("IcGbtI2cWriteRpc: ")]
        );
    }
}
