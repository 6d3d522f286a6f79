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

//! `alf`, a command-line client for the ALF services of one link.
//!
//! Every invocation addresses one link, identified by `--alf-id`, `--serial` and `--link`, and
//! performs exactly one remote operation. Connection settings come from the client config file
//! (see [`alf_client::config`]).
//!
//! # Examples
//!
//! ```bash
//! alf --alf-id ALF_1 --serial 42 --link 3 reg-read 0xc00
//! alf --alf-id ALF_1 --serial 42 --link 3 reg-write 0xc00 0x1
//! alf --alf-id ALF_1 --serial 42 --link 3 sca 0x00010002=0x00000000 0x00020003=0x00000001
//! alf --alf-id ALF_1 --serial 42 --link 3 swt --raw "reset"
//! RUST_LOG=trace alf --alf-id ALF_1 --serial 42 --link 3 i2c-write 0x3c
//! ```

mod register;
mod sequence;

use alf_client::client::AlfClient;
use alf_client::config::client_config;
use alf_client::error::AlfError;
use alf_client::service_names::AlfLink;
use alf_client::transport::dbus::DbusTransport;
use clap::{Args, Parser, Subcommand};
use log::{debug, error};
use register::{i2c_write_handler, reg_read_handler, reg_write_handler};
use sequence::sequence_handler;
use std::num::ParseIntError;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "alf")]
#[command(bin_name = "alf")]
struct Cli {
    #[arg(long = "alf-id", help = "Identifier of the ALF server, as used in its service names")]
    alf_id: String,
    #[arg(long, help = "Serial number of the readout card")]
    serial: i32,
    #[arg(long, help = "Link number on the card")]
    link: i32,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a 32-bit register
    RegRead {
        #[arg(value_parser = parse_u64)]
        address: u64,
    },
    /// Write a 32-bit register
    RegWrite {
        #[arg(value_parser = parse_u64)]
        address: u64,
        #[arg(value_parser = parse_u32)]
        value: u32,
    },
    /// Run an SCA sequence
    Sca(SequenceArgs),
    /// Run an SWT sequence
    Swt(SequenceArgs),
    /// Run an IC sequence
    Ic(SequenceArgs),
    /// Write one value over the GBT IC I2C channel
    I2cWrite {
        #[arg(value_parser = parse_u32)]
        value: u32,
    },
}

#[derive(Args, Debug)]
pub struct SequenceArgs {
    #[arg(
        long,
        conflicts_with = "pairs",
        help = "Send this buffer verbatim instead of building it from pairs"
    )]
    raw: Option<String>,
    #[arg(
        value_parser = parse_pair,
        required_unless_present = "raw",
        help = "Sequence entries as KEY=VALUE, sent in the given order"
    )]
    pairs: Vec<(String, String)>,
}

/// Accepts decimal or `0x`-prefixed hex.
fn parse_number<N>(
    arg: &str,
    from_radix: fn(&str, u32) -> Result<N, ParseIntError>,
) -> Result<N, String> {
    let result = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => from_radix(hex, 16),
        None => from_radix(arg, 10),
    };
    result.map_err(|e| format!("{arg:?} is not a decimal or 0x-prefixed hex number: {e}"))
}

fn parse_u64(arg: &str) -> Result<u64, String> {
    parse_number(arg, u64::from_str_radix)
}

fn parse_u32(arg: &str) -> Result<u32, String> {
    parse_number(arg, u32::from_str_radix)
}

fn parse_pair(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("{arg:?} is not a KEY=VALUE pair")),
    }
}

/// Prints the output of a successful command and returns the process exit status.
///
/// A failed call has already been logged once by the proxy that saw it, so it is not printed
/// again here.
///
/// # Arguments
///
/// * `result` - Output of one command handler
///
/// # Returns: `u8`
/// * `0` - The command succeeded and its output was printed to stdout
/// * `1` - The command failed
fn exit_status(result: Result<String, AlfError>) -> u8 {
    match result {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(e) => {
            debug!("Exiting after failure: {e}");
            1
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    debug!("parsed cli command with {cli:?}");

    let config = client_config();
    let transport = match DbusTransport::connect(config).await {
        Ok(transport) => Arc::new(transport),
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let link = AlfLink::new(cli.alf_id, cli.serial, cli.link);
    let client = AlfClient::with_names(config.service_names(link), transport);

    let result = match &cli.command {
        Commands::RegRead { address } => reg_read_handler(&client, *address).await,
        Commands::RegWrite { address, value } => {
            reg_write_handler(&client, *address, *value).await
        }
        Commands::Sca(args) => sequence_handler(client.sca_sequence(), args).await,
        Commands::Swt(args) => sequence_handler(client.swt_sequence(), args).await,
        Commands::Ic(args) => sequence_handler(client.ic_sequence(), args).await,
        Commands::I2cWrite { value } => i2c_write_handler(&client, *value).await,
    };
    ExitCode::from(exit_status(result))
}
