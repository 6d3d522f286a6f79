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

//! Error type shared by every proxy, the transports and the configuration loader.
//!
//! Messages start with `AlfError::<Variant>:` so a log line or CLI error can be traced back to
//! the failing layer without a backtrace.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AlfError {
    #[error("AlfError::Dbus: D-Bus call to {service} failed: {e}")]
    Dbus { service: String, e: zbus::Error },
    #[error("AlfError::Remote: {service} reported a failure: {message}")]
    Remote { service: String, message: String },
    #[error("AlfError::Reply: {service} sent a malformed reply: {reply:?}")]
    Reply { service: String, reply: String },
    #[error("AlfError::Parse: Could not parse {value:?} as a 32-bit hex value: {e}")]
    Parse {
        value: String,
        e: std::num::ParseIntError,
    },
    #[error("AlfError::Argument: {0}")]
    Argument(String),
    #[error("AlfError::IORead: An IO error occurred when reading from {file:?}: {e}")]
    IORead { file: PathBuf, e: std::io::Error },
    #[error("AlfError::TomlDe: Failed to parse config file {file:?}: {e}")]
    TomlDe { file: PathBuf, e: toml::de::Error },
    #[error("AlfError::Internal: An Internal error occurred: {0}")]
    Internal(String),
}
