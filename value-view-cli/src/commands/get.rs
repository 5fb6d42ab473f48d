// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use value_view::{core::config::ConfigOverrides, ops};

use crate::{
    common_args::{build_reader, ViewArgs},
    error::ValueViewResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    view: ViewArgs,
}

pub async fn exec(args: Args) -> ValueViewResult {
    let config = args.view.resolve(ConfigOverrides::default())?;
    let binding = build_reader(&config).await?;
    ops::value::get(&binding).await?;
    Ok(())
}
