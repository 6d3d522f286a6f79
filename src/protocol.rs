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

//! Wire conventions of the ALF RPC services.
//!
//! Requests and replies are plain ASCII strings. Numbers travel as lowercase, `0x`-prefixed hex
//! without padding. Multi-argument requests are joined with [`ARGUMENT_SEPARATOR`]; key/value
//! pairs inside a sequence are joined with [`PAIR_SEPARATOR`]. Every reply starts with either
//! [`SUCCESS_PREFIX`] or [`FAILURE_PREFIX`], both exactly [`PREFIX_LENGTH`] bytes long.
//!
//! These literals are fixed by the ALF server's parser and must not be changed on this side.

use crate::error::AlfError;
use std::fmt::LowerHex;

pub const ARGUMENT_SEPARATOR: &str = "\n";
pub const PAIR_SEPARATOR: &str = ",";
pub const SUCCESS_PREFIX: &str = "success\n";
pub const FAILURE_PREFIX: &str = "failure\n";
pub const PREFIX_LENGTH: usize = 8;

/// Legacy "read failed" value. Overlaps a legitimate register value.
pub const ERR_HEX: u32 = 0xffff_ffff;
/// Legacy "call failed" value for sequences. Overlaps a legitimate empty reply.
pub const ERR_STRING: &str = "";

/// Formats `value` as `0x` followed by lowercase hex digits, without padding.
pub fn format_hex(value: impl LowerHex) -> String {
    format!("{value:#x}")
}

pub fn is_failure(reply: &str) -> bool {
    reply.starts_with(FAILURE_PREFIX)
}

/// Drops the success/failure prefix from a reply.
///
/// Returns `None` when the reply is too short to carry a prefix at all, which is what an
/// unreachable service hands back.
pub fn strip_prefix(reply: &str) -> Option<&str> {
    reply.get(PREFIX_LENGTH..)
}

/// Parses a hex register value as sent back by the server.
///
/// Surrounding whitespace and an optional `0x`/`0X` are accepted. Anything else that is not a
/// base-16 number fitting in 32 bits is an error, including hex digits followed by other text.
pub fn parse_hex(value: &str) -> Result<u32, AlfError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 16).map_err(|e| AlfError::Parse {
        value: value.to_string(),
        e,
    })
}

/// Serializes an ordered list of key/value pairs into one sequence request.
///
/// Each pair becomes `key<PAIR_SEPARATOR>value`; pairs are joined with [`ARGUMENT_SEPARATOR`]
/// and there is no trailing separator.
pub fn encode_sequence<I, K, V>(sequence: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    sequence
        .into_iter()
        .map(|(key, value)| format!("{}{PAIR_SEPARATOR}{}", key.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join(ARGUMENT_SEPARATOR)
}

#[cfg(test)]
mod test_protocol {
    use super::*;
    use googletest::prelude::*;
    use rstest::*;

    #[gtest]
    #[rstest]
    #[case::zero(0u64, "0x0")]
    #[case::small(0x1fu64, "0x1f")]
    #[case::no_padding(0x0000_0100u64, "0x100")]
    #[case::max(u64::MAX, "0xffffffffffffffff")]
    fn format_hex_is_lowercase_unpadded(#[case] value: u64, #[case] expected: &str) {
        assert_that!(format_hex(value), eq(expected));
    }

    #[gtest]
    #[rstest]
    #[case::bare("1f", 0x1f)]
    #[case::prefixed("0xdeadbeef", 0xdead_beef)]
    #[case::upper_prefix("0XCAFE", 0xcafe)]
    #[case::whitespace("  0x10\n", 0x10)]
    #[case::all_ones("ffffffff", ERR_HEX)]
    fn parse_hex_should_pass(#[case] input: &str, #[case] expected: u32) {
        assert_that!(parse_hex(input), ok(eq(&expected)));
    }

    #[gtest]
    #[rstest]
    #[case::empty("")]
    #[case::prefix_only("0x")]
    #[case::not_hex("0xzz")]
    #[case::trailing_text("0x1f status ok")]
    #[case::trailing_garbage("1fzz")]
    #[case::overflow("0x100000000")]
    fn parse_hex_should_fail(#[case] input: &str) {
        assert_that!(
            parse_hex(input),
            err(displays_as(contains_substring("AlfError::Parse:")))
        );
    }

    #[gtest]
    fn strip_prefix_drops_status_token() {
        assert_that!(strip_prefix("success\n0x42"), some(eq("0x42")));
        assert_that!(strip_prefix("success\n"), some(eq("")));
        assert_that!(strip_prefix("succ"), none());
    }

    #[gtest]
    fn failure_prefix_is_detected() {
        assert_that!(is_failure("failure\nno such register"), eq(true));
        assert_that!(is_failure("success\nfailure\n"), eq(false));
        assert_that!(SUCCESS_PREFIX.len(), eq(PREFIX_LENGTH));
        assert_that!(FAILURE_PREFIX.len(), eq(PREFIX_LENGTH));
    }

    #[gtest]
    #[rstest]
    #[case::two_pairs(&[("a", "1"), ("b", "2")], "a,1\nb,2")]
    #[case::single_pair(&[("x", "y")], "x,y")]
    #[case::empty(&[], "")]
    fn encode_sequence_joins_without_trailing_separator(
        #[case] pairs: &[(&str, &str)],
        #[case] expected: &str,
    ) {
        assert_that!(encode_sequence(pairs.iter().copied()), eq(expected));
    }
}
