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

//! SCA, SWT and IC sequence proxies.
//!
//! The three services share one request format: either an opaque buffer or an ordered list of
//! key/value pairs (see [`encode_sequence`]). They differ only in the service they address, so a
//! single [`SequenceRpc`] is parameterised with a [`SequenceKind`] marker. The markers keep
//! [`ScaSequenceRpc`], [`SwtSequenceRpc`] and [`IcSequenceRpc`] distinct types, so an SCA
//! sequence can not be sent through an IC proxy by accident.

use crate::error::AlfError;
use crate::protocol::encode_sequence;
use crate::service_names::{ServiceKind, ServiceNames};
use crate::transport::{RpcInfo, RpcTransport};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

pub trait SequenceKind {
    /// Tag used in log lines.
    const TAG: &'static str;
    const SERVICE: ServiceKind;
}

#[derive(Debug)]
pub enum Sca {}

#[derive(Debug)]
pub enum Swt {}

#[derive(Debug)]
pub enum Ic {}

impl SequenceKind for Sca {
    const TAG: &'static str = "ScaSequence";
    const SERVICE: ServiceKind = ServiceKind::ScaSequence;
}

impl SequenceKind for Swt {
    const TAG: &'static str = "SwtSequence";
    const SERVICE: ServiceKind = ServiceKind::SwtSequence;
}

impl SequenceKind for Ic {
    const TAG: &'static str = "IcSequence";
    const SERVICE: ServiceKind = ServiceKind::IcSequence;
}

pub struct SequenceRpc<K, T> {
    rpc: RpcInfo<T>,
    kind: PhantomData<fn() -> K>,
}

pub type ScaSequenceRpc<T> = SequenceRpc<Sca, T>;
pub type SwtSequenceRpc<T> = SequenceRpc<Swt, T>;
pub type IcSequenceRpc<T> = SequenceRpc<Ic, T>;

impl<K: SequenceKind, T> fmt::Debug for SequenceRpc<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::TAG)
            .field("service_name", &self.rpc.service_name())
            .finish()
    }
}

impl<K, T> Clone for SequenceRpc<K, T> {
    fn clone(&self) -> Self {
        SequenceRpc {
            rpc: self.rpc.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: SequenceKind, T: RpcTransport> SequenceRpc<K, T> {
    /// Binds the proxy to an explicit service name.
    pub fn new(service_name: impl Into<String>, transport: Arc<T>) -> Self {
        SequenceRpc {
            rpc: RpcInfo::new(service_name, transport),
            kind: PhantomData,
        }
    }

    /// Binds the proxy to the matching service of `names`.
    ///
    /// # Arguments
    ///
    /// * `names` - Service names of one ALF link
    /// * `transport` - Transport shared with the other proxies of the link
    pub fn for_link(names: &ServiceNames, transport: Arc<T>) -> Self {
        Self::new(names.name(K::SERVICE), transport)
    }

    /// Service name this proxy calls.
    pub fn service_name(&self) -> &str {
        self.rpc.service_name()
    }

    /// Sends `buffer` verbatim and returns the raw reply, status prefix included.
    pub async fn write(&self, buffer: &str) -> Result<String, AlfError> {
        self.rpc.call_tagged(K::TAG, buffer, Ok).await
    }

    /// Serializes `sequence` with [`encode_sequence`] and sends it through [`SequenceRpc::write`].
    pub async fn write_sequence<I, Key, Value>(&self, sequence: I) -> Result<String, AlfError>
    where
        I: IntoIterator<Item = (Key, Value)>,
        Key: AsRef<str>,
        Value: AsRef<str>,
    {
        let buffer = encode_sequence(sequence);
        self.write(&buffer).await
    }
}
