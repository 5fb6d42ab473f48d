// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Interactive view session.
//!
//! Reproduces the lifecycle of the view: one load when the session starts, then one trigger
//! activation per input line, where the line is the input field's contents at that moment.
//! Writes run concurrently on the current task and are drained once input ends.

use eyre::WrapErr;
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    core::{
        binding::ValueBinding,
        config::ElementKeys,
        controller::{ControllerError, ViewController},
        surface::DisplaySurface,
    },
    utils::color::DebugColor,
};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Value rendered by the initial load, if it succeeded.
    pub loaded: Option<String>,
    /// Trigger activations.
    pub submitted: usize,
    pub confirmed: usize,
    pub failed: usize,
    /// Activations turned away because a write was in flight.
    pub rejected: usize,
}

pub async fn run<B, D, R>(
    controller: &ViewController<B, D>,
    elements: &ElementKeys,
    reader: R,
) -> eyre::Result<SessionSummary>
where
    B: ValueBinding,
    D: DisplaySurface,
    R: AsyncBufRead + Unpin,
{
    let mut summary = SessionSummary::default();
    match controller.load().await {
        Ok(value) => summary.loaded = Some(value),
        Err(err) => greyln!("{} {err}", format!("#{}:", elements.display).red()),
    }

    let mut lines = reader.lines();
    let mut pending = FuturesUnordered::new();
    let mut eof = false;
    loop {
        tokio::select! {
            line = lines.next_line(), if !eof => match line.wrap_err("failed to read input")? {
                Some(line) => {
                    debug!(@grey,
                        "#{} activated with #{} = {}",
                        elements.trigger,
                        elements.input,
                        line.debug_lavender()
                    );
                    summary.submitted += 1;
                    pending.push(controller.submit(line.as_str()));
                }
                None => eof = true,
            },
            Some(outcome) = pending.next(), if !pending.is_empty() => match outcome {
                Ok(receipt) => {
                    summary.confirmed += 1;
                    greyln!("confirmed in tx {}", receipt.tx_hash.debug_lavender());
                }
                Err(ControllerError::WriteInFlight) => {
                    summary.rejected += 1;
                    greyln!("{} a previous write is still in flight", format!("#{}:", elements.trigger).yellow());
                }
                Err(err) => {
                    summary.failed += 1;
                    greyln!("{} {err}", format!("#{}:", elements.trigger).red());
                }
            },
            else => break,
        }
    }

    info!(@grey,
        "session ended: {} submitted, {} confirmed, {} failed, {} rejected",
        summary.submitted,
        summary.confirmed,
        summary.failed,
        summary.rejected
    );
    Ok(summary)
}
