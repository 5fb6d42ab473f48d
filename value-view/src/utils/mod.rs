// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use color::{Color, GREY, MINT, YELLOW};

pub mod color;

#[cfg(test)]
pub(crate) mod testing;

/// Pretty-prints the gas used by a transaction.
pub fn format_gas(gas: u64) -> String {
    let text = format!("{gas} gas");
    if gas <= 100_000 {
        text.mint()
    } else if gas <= 1_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}

/// Pretty-prints a stored value, making empty and whitespace-only strings visible.
pub fn format_value(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{YELLOW}{value:?}{GREY}")
    } else {
        format!("{MINT}{value}{GREY}")
    }
}
