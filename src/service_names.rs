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

//! Names of the RPC services ALF publishes for one link of one card.
//!
//! A service name has the shape `<prefix>/<alf_id>/SERIAL_<serial>/LINK_<link>/<OPERATION>`,
//! e.g. `ALF/ALF_1/SERIAL_42/LINK_3/REGISTER_READ`.

use std::fmt;

/// Default first segment of every service name.
pub static DEFAULT_SERVICE_PREFIX: &str = "ALF";

/// Identifies one link of one card behind one ALF server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlfLink {
    pub alf_id: String,
    pub serial: i32,
    pub link: i32,
}

impl AlfLink {
    pub fn new(alf_id: impl Into<String>, serial: i32, link: i32) -> Self {
        AlfLink {
            alf_id: alf_id.into(),
            serial,
            link,
        }
    }
}

/// The remote operations available on every link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    RegisterRead,
    RegisterWrite,
    ScaSequence,
    SwtSequence,
    IcSequence,
    IcGbtI2cWrite,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::RegisterRead,
        ServiceKind::RegisterWrite,
        ServiceKind::ScaSequence,
        ServiceKind::SwtSequence,
        ServiceKind::IcSequence,
        ServiceKind::IcGbtI2cWrite,
    ];

    /// Last segment of the service name.
    pub fn token(self) -> &'static str {
        match self {
            ServiceKind::RegisterRead => "REGISTER_READ",
            ServiceKind::RegisterWrite => "REGISTER_WRITE",
            ServiceKind::ScaSequence => "SCA_SEQUENCE",
            ServiceKind::SwtSequence => "SWT_SEQUENCE",
            ServiceKind::IcSequence => "IC_SEQUENCE",
            ServiceKind::IcGbtI2cWrite => "IC_GBT_I2C_WRITE",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Builds the service names for one [`AlfLink`].
///
/// All accessors are pure: the same `ServiceNames` always yields the same strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNames {
    prefix: String,
    link: AlfLink,
}

impl ServiceNames {
    pub fn new(link: AlfLink) -> Self {
        Self::with_prefix(DEFAULT_SERVICE_PREFIX, link)
    }

    pub fn with_prefix(prefix: impl Into<String>, link: AlfLink) -> Self {
        ServiceNames {
            prefix: prefix.into(),
            link,
        }
    }

    pub fn link(&self) -> &AlfLink {
        &self.link
    }

    pub fn register_read(&self) -> String {
        self.name(ServiceKind::RegisterRead)
    }

    pub fn register_write(&self) -> String {
        self.name(ServiceKind::RegisterWrite)
    }

    pub fn sca_sequence(&self) -> String {
        self.name(ServiceKind::ScaSequence)
    }

    pub fn swt_sequence(&self) -> String {
        self.name(ServiceKind::SwtSequence)
    }

    pub fn ic_sequence(&self) -> String {
        self.name(ServiceKind::IcSequence)
    }

    pub fn ic_gbt_i2c_write(&self) -> String {
        self.name(ServiceKind::IcGbtI2cWrite)
    }

    pub fn name(&self, kind: ServiceKind) -> String {
        format!(
            "{}/{}/SERIAL_{}/LINK_{}/{kind}",
            self.prefix, self.link.alf_id, self.link.serial, self.link.link
        )
    }
}
