// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use value_view::{core::config::ConfigOverrides, ops};

use crate::{common_args::ViewArgs, error::ValueViewResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print the JSON ABI instead of function signatures.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    view: ViewArgs,
}

pub fn exec(args: Args) -> ValueViewResult {
    let config = args.view.resolve(ConfigOverrides::default())?;
    if args.json {
        println!("{}", ops::abi_json(&config.contract)?);
    } else {
        ops::describe(&config.contract);
    }
    Ok(())
}
