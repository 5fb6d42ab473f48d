// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::json_abi::{Function, StateMutability};

use crate::{core::abi::ContractDescriptor, utils::color::DebugColor};

/// Prints the contract address and its function signatures.
pub fn describe(descriptor: &ContractDescriptor) {
    greyln!("contract address: {}", descriptor.address().debug_lavender());
    for function in descriptor.abi().functions() {
        greyln!("{}", signature_line(function));
    }
}

/// Pretty-prints the JSON ABI of the contract.
pub fn abi_json(descriptor: &ContractDescriptor) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(descriptor.abi())?)
}

/// Solidity-style declaration of a function, e.g. `function getValue() view returns (string)`.
pub fn signature_line(function: &Function) -> String {
    let params = |params: &[alloy::json_abi::Param]| {
        params
            .iter()
            .map(|p| match p.name.as_str() {
                "" => p.ty.clone(),
                name => format!("{} {name}", p.ty),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut line = format!("function {}({})", function.name, params(&function.inputs));
    if function.state_mutability != StateMutability::NonPayable {
        line.push(' ');
        line.push_str(function.state_mutability.as_json_str());
    }
    if !function.outputs.is_empty() {
        line.push_str(&format!(" returns ({})", params(&function.outputs)));
    }
    line
}
