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

//! Client configuration.
//!
//! Settings are read once from a TOML file, `/etc/alf/client.toml` unless the
//! `ALF_CLIENT_CONFIG` environment variable points elsewhere:
//!
//! ```toml
//! [dbus]
//! bus = "system"            # or "session"
//! destination = "ch.cern.alf"
//! object_root = "/ch/cern/alf"
//!
//! [services]
//! prefix = "ALF"
//! ```
//!
//! Every key is optional. A missing file, section or key falls back to the hardcoded values
//! below, so a broken config never stops the client from talking to the default server.

use crate::error::AlfError;
use crate::service_names::{AlfLink, DEFAULT_SERVICE_PREFIX, ServiceNames};
use log::{trace, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub static CONFIG_PATH: &str = "/etc/alf/client.toml";
pub static CONFIG_PATH_ENV: &str = "ALF_CLIENT_CONFIG";
pub static DBUS_DESTINATION: &str = "ch.cern.alf";
pub static DBUS_OBJECT_ROOT: &str = "/ch/cern/alf";

/// Which message bus the ALF server is registered on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusKind {
    #[default]
    System,
    Session,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub bus: BusKind,
    pub destination: String,
    pub object_root: String,
    pub service_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            bus: BusKind::default(),
            destination: DBUS_DESTINATION.to_string(),
            object_root: DBUS_OBJECT_ROOT.to_string(),
            service_prefix: DEFAULT_SERVICE_PREFIX.to_string(),
        }
    }
}

/// This is the top level struct which holds all sections
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    dbus: Option<DbusToml>,
    services: Option<ServicesToml>,
}

#[derive(Debug, Default, Deserialize)]
struct DbusToml {
    bus: Option<BusKind>,
    destination: Option<String>,
    object_root: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ServicesToml {
    prefix: Option<String>,
}

impl From<TomlConfig> for ClientConfig {
    fn from(value: TomlConfig) -> Self {
        trace!("User provided config: {value:?}");
        let dbus = value.dbus.unwrap_or_default();
        let services = value.services.unwrap_or_default();
        ClientConfig {
            bus: dbus.bus.unwrap_or_else(|| {
                trace!("No bus provided. Using hardcoded value.");
                BusKind::default()
            }),
            destination: dbus.destination.unwrap_or_else(|| {
                trace!("No destination provided. Using hardcoded value.");
                DBUS_DESTINATION.to_string()
            }),
            object_root: dbus.object_root.unwrap_or_else(|| {
                trace!("No object_root provided. Using hardcoded value.");
                DBUS_OBJECT_ROOT.to_string()
            }),
            service_prefix: services.prefix.unwrap_or_else(|| {
                trace!("No service prefix provided. Using hardcoded value.");
                DEFAULT_SERVICE_PREFIX.to_string()
            }),
        }
    }
}

impl ClientConfig {
    /// Parses `toml_string`; `file` is only used for error reporting.
    pub fn from_toml_str(toml_string: &str, file: &Path) -> Result<ClientConfig, AlfError> {
        let config: TomlConfig = toml::from_str(toml_string).map_err(|e| AlfError::TomlDe {
            file: file.to_path_buf(),
            e,
        })?;
        Ok(config.into())
    }

    pub fn from_file(config_path: &Path) -> Result<ClientConfig, AlfError> {
        if !config_path.is_file() {
            return Err(AlfError::Internal(format!(
                "Config file not found in {config_path:?}."
            )));
        }
        trace!("Attempting to read config from {config_path:?}");
        let toml_string =
            std::fs::read_to_string(config_path).map_err(|e| AlfError::IORead {
                file: config_path.to_path_buf(),
                e,
            })?;
        Self::from_toml_str(&toml_string, config_path)
    }

    /// Loads the config file, falling back to the defaults when it is unusable.
    pub fn load() -> ClientConfig {
        let config_path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_PATH));
        match Self::from_file(&config_path) {
            Ok(config) => {
                trace!("Successfully loaded config: {config:?}");
                config
            }
            Err(e) => {
                warn!("Using hardcoded defaults because failed to load config: {e}");
                ClientConfig::default()
            }
        }
    }

    pub fn service_names(&self, link: AlfLink) -> ServiceNames {
        ServiceNames::with_prefix(self.service_prefix.as_str(), link)
    }
}

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Process-wide config, loaded on first access.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(ClientConfig::load)
}
