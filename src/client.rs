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

//! All proxies of one ALF link over one shared transport.

use crate::proxies::ic_gbt_i2c::IcGbtI2cWriteRpc;
use crate::proxies::register::{RegisterReadRpc, RegisterWriteRpc};
use crate::proxies::sequence::{IcSequenceRpc, ScaSequenceRpc, SwtSequenceRpc};
use crate::service_names::{AlfLink, ServiceNames};
use crate::transport::RpcTransport;
use std::sync::Arc;

#[derive(Debug)]
pub struct AlfClient<T> {
    names: ServiceNames,
    register_read: RegisterReadRpc<T>,
    register_write: RegisterWriteRpc<T>,
    sca_sequence: ScaSequenceRpc<T>,
    swt_sequence: SwtSequenceRpc<T>,
    ic_sequence: IcSequenceRpc<T>,
    ic_gbt_i2c_write: IcGbtI2cWriteRpc<T>,
}

impl<T: RpcTransport> AlfClient<T> {
    /// Binds every proxy of `link` using the default service prefix.
    pub fn new(link: AlfLink, transport: Arc<T>) -> Self {
        Self::with_names(ServiceNames::new(link), transport)
    }

    /// Binds every proxy to the services in `names`, which may carry a custom prefix.
    ///
    /// # Arguments
    ///
    /// * `names` - Service names of one ALF link
    /// * `transport` - Transport shared by all six proxies
    pub fn with_names(names: ServiceNames, transport: Arc<T>) -> Self {
        AlfClient {
            register_read: RegisterReadRpc::for_link(&names, Arc::clone(&transport)),
            register_write: RegisterWriteRpc::for_link(&names, Arc::clone(&transport)),
            sca_sequence: ScaSequenceRpc::for_link(&names, Arc::clone(&transport)),
            swt_sequence: SwtSequenceRpc::for_link(&names, Arc::clone(&transport)),
            ic_sequence: IcSequenceRpc::for_link(&names, Arc::clone(&transport)),
            ic_gbt_i2c_write: IcGbtI2cWriteRpc::for_link(&names, transport),
            names,
        }
    }

    pub fn names(&self) -> &ServiceNames {
        &self.names
    }

    pub fn register_read(&self) -> &RegisterReadRpc<T> {
        &self.register_read
    }

    pub fn register_write(&self) -> &RegisterWriteRpc<T> {
        &self.register_write
    }

    pub fn sca_sequence(&self) -> &ScaSequenceRpc<T> {
        &self.sca_sequence
    }

    pub fn swt_sequence(&self) -> &SwtSequenceRpc<T> {
        &self.swt_sequence
    }

    pub fn ic_sequence(&self) -> &IcSequenceRpc<T> {
        &self.ic_sequence
    }

    pub fn ic_gbt_i2c_write(&self) -> &IcGbtI2cWriteRpc<T> {
        &self.ic_gbt_i2c_write
    }
}

#[cfg(test)]
mod test_alf_client {
    use super::*;
    use crate::testing::FakeTransport;
    use googletest::prelude::*;

    #[gtest]
    #[tokio::test]
    async fn proxies_share_one_transport() {
        let transport = Arc::new(FakeTransport::replying("success\n0x7"));
        let client = AlfClient::new(AlfLink::new("ALF_1", 42, 3), transport.clone());

        assert_that!(client.register_read().read_register(0x8).await, ok(eq(&7u32)));
        client
            .register_write()
            .write_register(0x8, 0x9)
            .await
            .expect("register write should succeed");
        client
            .sca_sequence()
            .write("sca")
            .await
            .expect("sca write should succeed");
        client
            .swt_sequence()
            .write("swt")
            .await
            .expect("swt write should succeed");
        client
            .ic_sequence()
            .write("ic")
            .await
            .expect("ic write should succeed");
        client
            .ic_gbt_i2c_write()
            .write(0x1)
            .await
            .expect("i2c write should succeed");

        let services: Vec<String> = transport
            .requests()
            .into_iter()
            .map(|(service, _)| service)
            .collect();
        assert_that!(
            services,
            elements_are![
                eq(&client.names().register_read()),
                eq(&client.names().register_write()),
                eq(&client.names().sca_sequence()),
                eq(&client.names().swt_sequence()),
                eq(&client.names().ic_sequence()),
                eq(&client.names().ic_gbt_i2c_write())
            ]
        );
        assert_that!(Arc::strong_count(&transport), eq(7));
    }
}
