// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod abi;
pub mod binding;
pub mod config;
pub mod controller;
pub mod surface;
