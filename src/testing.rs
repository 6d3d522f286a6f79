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

//! Test doubles: an in-memory transport and a per-thread log capture.

use crate::error::AlfError;
use crate::transport::RpcTransport;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::future::{Future, ready};
use std::sync::{Mutex, Once};

/// Records every request and answers with a fixed reply, or fails every call.
#[derive(Debug)]
pub struct FakeTransport {
    reply: Option<String>,
    requests: Mutex<Vec<(String, String)>>,
}

impl FakeTransport {
    pub fn replying(reply: &str) -> Self {
        FakeTransport {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        FakeTransport {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `(service_name, request)` for every call so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }

    pub fn last_request(&self) -> Option<String> {
        self.requests().pop().map(|(_, request)| request)
    }
}

impl RpcTransport for FakeTransport {
    fn call(
        &self,
        service_name: &str,
        request: &str,
    ) -> impl Future<Output = Result<String, AlfError>> + Send {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push((service_name.to_string(), request.to_string()));
        ready(self.reply.clone().ok_or_else(|| AlfError::Remote {
            service: service_name.to_string(),
            message: "simulated link loss".to_string(),
        }))
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Installs the capturing logger and clears whatever this thread logged before.
pub fn capture_logs() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Error-level messages logged on this thread since [`capture_logs`].
pub fn captured_errors() -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, message)| message.clone())
            .collect()
    })
}
