// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use tokio::io::BufReader;
use value_view::{
    core::{config::ConfigOverrides, controller::ViewController},
    ops,
};

use crate::{
    common_args::{build_writer, AuthArgs, ViewArgs},
    display::TerminalDisplay,
    error::ValueViewResult,
    utils::style::{KEY, MUTED},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Ignore new values while a previous write is still in flight.
    #[arg(long)]
    exclusive: bool,
    /// Show the value read back from the contract after each write, instead of the submitted one.
    #[arg(long)]
    confirm: bool,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    view: ViewArgs,
}

pub async fn exec(args: Args) -> ValueViewResult {
    let config = args.view.resolve(ConfigOverrides {
        sender: args.auth.from,
        exclusive: args.exclusive.then_some(true),
        confirm: args.confirm.then_some(true),
        ..Default::default()
    })?;
    let binding = build_writer(&config, &args.auth).await?;
    let elements = &config.elements;
    let display = TerminalDisplay::new(&elements.display);
    let controller = ViewController::new(binding, display, config.controller);

    println!(
        "{MUTED}type a new value for{MUTED:#} {KEY}#{}{KEY:#} {MUTED}and press Enter to{MUTED:#} {KEY}#{}{KEY:#}{MUTED}, Ctrl-D to quit{MUTED:#}",
        elements.input, elements.trigger
    );
    let stdin = BufReader::new(tokio::io::stdin());
    let summary = ops::session::run(&controller, elements, stdin).await?;
    log::debug!("{summary:?}");
    Ok(())
}
