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

//! Typed proxies for the remote operations of one ALF link.
//!
//! Each proxy is bound to one service name at construction and reused for any number of calls.
//! Every call is a single request/reply round trip through an [`RpcTransport`]; nothing is
//! retried. A failed call is logged once, tagged with the proxy name, and handed back as an
//! [`AlfError`]. Callers that still want the old sentinel values can ask for them with
//! [`OrSentinel::or_sentinel`].
//!
//! # Modules
//!
//! - [`register`] - 32-bit register read and write
//! - [`sequence`] - SCA, SWT and IC sequences
//! - [`ic_gbt_i2c`] - single-value I2C writes over the GBT IC channel
//!
//! [`RpcTransport`]: crate::transport::RpcTransport

pub mod ic_gbt_i2c;
pub mod register;
pub mod sequence;

use crate::error::AlfError;
use crate::protocol::{ERR_HEX, ERR_STRING};

/// Collapses a proxy result into the legacy sentinel on failure.
///
/// The sentinels are legitimate values too (`0xffffffff` is a valid register content, `""` a
/// valid reply), so this throws information away. Prefer matching on the `Result`.
pub trait OrSentinel {
    type Output;
    fn or_sentinel(self) -> Self::Output;
}

impl OrSentinel for Result<u32, AlfError> {
    type Output = u32;

    fn or_sentinel(self) -> u32 {
        self.unwrap_or(ERR_HEX)
    }
}

impl OrSentinel for Result<String, AlfError> {
    type Output = String;

    fn or_sentinel(self) -> String {
        self.unwrap_or_else(|_| ERR_STRING.to_string())
    }
}
