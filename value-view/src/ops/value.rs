// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! One-shot reads and writes of the stored value.

use alloy::primitives::TxHash;
use eyre::eyre;

use crate::{
    core::binding::{BindingError, ValueBinding},
    utils::{color::DebugColor, format_value},
};

/// Reads the stored value and prints it.
pub async fn get(binding: &impl ValueBinding) -> eyre::Result<String> {
    let value = binding
        .get_value()
        .await
        .map_err(|err| explain("failed to read stored value", err))?;
    greyln!("stored value: {}", format_value(&value));
    Ok(value)
}

/// Overwrites the stored value and prints the transaction hash once confirmed.
pub async fn set(binding: &impl ValueBinding, value: String) -> eyre::Result<TxHash> {
    info!(@grey, "sending setValue tx...");
    let tx_hash = binding
        .set_value(value.clone())
        .await
        .map_err(|err| explain("failed to write stored value", err))?;
    greyln!(
        "stored value set to {} with tx {}",
        format_value(&value),
        tx_hash.debug_lavender()
    );
    Ok(tx_hash)
}

/// Adds the revert reason to the message, when the node returned one.
fn explain(context: &str, err: BindingError) -> eyre::Report {
    match err.reason() {
        Some(reason) => eyre!("{context}: {err} (reason: {reason})"),
        None => eyre!("{context}: {err}"),
    }
}
