// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::ValueViewResult;

mod abi;
mod get;
mod session;
mod set;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the contract's address and interface
    Abi(abi::Args),
    /// Read the stored value
    #[clap(visible_alias = "g")]
    Get(get::Args),
    /// Run the interactive view: load once, then write every line typed
    #[clap(visible_alias = "s")]
    Session(session::Args),
    /// Overwrite the stored value
    Set(set::Args),
}

pub async fn exec(cmd: Command) -> ValueViewResult {
    match cmd {
        Command::Abi(args) => abi::exec(args),
        Command::Get(args) => get::exec(args).await,
        Command::Session(args) => session::exec(args).await,
        Command::Set(args) => set::exec(args).await,
    }
}
