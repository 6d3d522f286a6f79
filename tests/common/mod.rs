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

use alf_client::error::AlfError;
use alf_client::protocol::{
    ARGUMENT_SEPARATOR, FAILURE_PREFIX, PAIR_SEPARATOR, SUCCESS_PREFIX, parse_hex,
};
use alf_client::transport::RpcTransport;
use std::collections::HashMap;
use std::future::{Future, ready};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory stand-in for an ALF server with one card.
///
/// Registers start at zero. Sequences answer with the value of every pair, one per line, the
/// way the SCA service echoes its data words.
#[derive(Debug, Default)]
pub struct FakeAlfServer {
    registers: Mutex<HashMap<u64, u32>>,
    i2c_writes: Mutex<Vec<u32>>,
    calls: Mutex<Vec<String>>,
    offline: AtomicBool,
}

impl FakeAlfServer {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn i2c_writes(&self) -> Vec<u32> {
        self.i2c_writes.lock().expect("lock poisoned").clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn handle(&self, operation: &str, request: &str) -> Result<String, String> {
        match operation {
            "REGISTER_READ" => {
                let address = parse_address(request)?;
                let registers = self.registers.lock().expect("lock poisoned");
                Ok(format!("{:#x}", registers.get(&address).copied().unwrap_or(0)))
            }
            "REGISTER_WRITE" => {
                let (address, value) = request
                    .split_once(ARGUMENT_SEPARATOR)
                    .ok_or_else(|| format!("expected address and value, got {request:?}"))?;
                let address = parse_address(address)?;
                let value = parse_hex(value).map_err(|e| e.to_string())?;
                self.registers
                    .lock()
                    .expect("lock poisoned")
                    .insert(address, value);
                Ok(String::new())
            }
            "SCA_SEQUENCE" | "SWT_SEQUENCE" | "IC_SEQUENCE" => request
                .split(ARGUMENT_SEPARATOR)
                .map(|pair| {
                    pair.split_once(PAIR_SEPARATOR)
                        .map(|(_, value)| value.to_string())
                        .ok_or_else(|| format!("malformed pair {pair:?}"))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|values| values.join(ARGUMENT_SEPARATOR)),
            "IC_GBT_I2C_WRITE" => {
                let value = parse_hex(request).map_err(|e| e.to_string())?;
                self.i2c_writes.lock().expect("lock poisoned").push(value);
                Ok(String::new())
            }
            other => Err(format!("unknown operation {other}")),
        }
    }
}

fn parse_address(request: &str) -> Result<u64, String> {
    let hex = request
        .strip_prefix("0x")
        .ok_or_else(|| format!("address {request:?} is not 0x-prefixed"))?;
    u64::from_str_radix(hex, 16).map_err(|e| e.to_string())
}

impl RpcTransport for FakeAlfServer {
    fn call(
        &self,
        service_name: &str,
        request: &str,
    ) -> impl Future<Output = Result<String, AlfError>> + Send {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(service_name.to_string());
        if self.offline.load(Ordering::SeqCst) {
            return ready(Err(AlfError::Internal(format!(
                "{service_name} is not reachable"
            ))));
        }
        let operation = service_name.rsplit('/').next().unwrap_or_default();
        let reply = match self.handle(operation, request) {
            Ok(body) => format!("{SUCCESS_PREFIX}{body}"),
            Err(message) => format!("{FAILURE_PREFIX}{message}"),
        };
        ready(Ok(reply))
    }
}
