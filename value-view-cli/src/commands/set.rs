// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use value_view::{core::config::ConfigOverrides, ops};

use crate::{
    common_args::{build_writer, AuthArgs, ViewArgs},
    error::ValueViewResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// New value to store. Sent as-is, the empty string included.
    value: String,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    view: ViewArgs,
}

pub async fn exec(args: Args) -> ValueViewResult {
    let config = args.view.resolve(ConfigOverrides {
        sender: args.auth.from,
        ..Default::default()
    })?;
    let binding = build_writer(&config, &args.auth).await?;
    ops::value::set(&binding, args.value).await?;
    Ok(())
}
