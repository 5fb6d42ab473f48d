// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract descriptor: the interface description plus the deployed address.
//!
//! The descriptor is checked against the [`ValueStore`] interface the binding is generated from,
//! so a mismatched ABI file is rejected before any request reaches the node.

use std::{fs, path::Path};

use alloy::{
    json_abi::{Function, JsonAbi, StateMutability},
    primitives::{address, Address},
    sol_types::SolCall,
};

use super::binding::ValueStore;

/// Default deployed contract address.
pub const DEFAULT_ADDRESS: Address = address!("0x1234567890123456789012345678901234567890");

pub const GETTER: &str = "getValue";
pub const SETTER: &str = "setValue";

/// Interface description of the value store contract.
pub const DEFAULT_ABI: &str = r#"[
    {
        "constant": false,
        "inputs": [
            {"name": "_value", "type": "string"}
        ],
        "name": "setValue",
        "outputs": [],
        "payable": false,
        "stateMutability": "nonpayable",
        "type": "function"
    },
    {
        "constant": true,
        "inputs": [],
        "name": "getValue",
        "outputs": [{"name": "", "type": "string"}],
        "payable": false,
        "stateMutability": "view",
        "type": "function"
    }
]"#;

#[derive(Debug, thiserror::Error)]
pub enum AbiError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid ABI json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ABI is missing function `{0}`")]
    MissingFunction(&'static str),
    #[error("ABI function `{name}` has unexpected signature (found: {found})")]
    SignatureMismatch { name: &'static str, found: String },
    #[error("ABI function `{name}` must return {expected}")]
    Outputs {
        name: &'static str,
        expected: &'static str,
    },
    #[error("ABI function `{name}` has unsupported state mutability `{found}`")]
    Mutability {
        name: &'static str,
        found: &'static str,
    },
}

#[derive(Clone, Debug)]
pub struct ContractDescriptor {
    abi: JsonAbi,
    address: Address,
}

impl ContractDescriptor {
    pub fn new(abi: JsonAbi, address: Address) -> Result<Self, AbiError> {
        validate(&abi)?;
        Ok(Self { abi, address })
    }

    pub fn from_json(json: &str, address: Address) -> Result<Self, AbiError> {
        let abi: JsonAbi = serde_json::from_str(json)?;
        Self::new(abi, address)
    }

    /// Loads a JSON ABI file, either a bare array or a compiler artifact with an `abi` field.
    pub fn load(path: impl AsRef<Path>, address: Address) -> Result<Self, AbiError> {
        let contents = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;
        let abi: JsonAbi = match value {
            serde_json::Value::Object(mut artifact) if artifact.contains_key("abi") => {
                serde_json::from_value(artifact.remove("abi").unwrap_or_default())?
            }
            other => serde_json::from_value(other)?,
        };
        Self::new(abi, address)
    }

    pub fn with_default_abi(address: Address) -> Result<Self, AbiError> {
        Self::from_json(DEFAULT_ABI, address)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// The read function. Always present once the descriptor is constructed.
    pub fn getter(&self) -> Option<&Function> {
        find(&self.abi, GETTER, ValueStore::getValueCall::SELECTOR).ok()
    }

    /// The write function. Always present once the descriptor is constructed.
    pub fn setter(&self) -> Option<&Function> {
        find(&self.abi, SETTER, ValueStore::setValueCall::SELECTOR).ok()
    }
}

fn validate(abi: &JsonAbi) -> Result<(), AbiError> {
    let getter = find(abi, GETTER, ValueStore::getValueCall::SELECTOR)?;
    if getter.outputs.len() != 1 || getter.outputs[0].ty != "string" {
        return Err(AbiError::Outputs {
            name: GETTER,
            expected: "a single string",
        });
    }
    if !matches!(
        getter.state_mutability,
        StateMutability::View | StateMutability::Pure
    ) {
        return Err(AbiError::Mutability {
            name: GETTER,
            found: getter.state_mutability.as_json_str(),
        });
    }

    let setter = find(abi, SETTER, ValueStore::setValueCall::SELECTOR)?;
    if !setter.outputs.is_empty() {
        return Err(AbiError::Outputs {
            name: SETTER,
            expected: "nothing",
        });
    }
    if matches!(
        setter.state_mutability,
        StateMutability::View | StateMutability::Pure
    ) {
        return Err(AbiError::Mutability {
            name: SETTER,
            found: setter.state_mutability.as_json_str(),
        });
    }
    Ok(())
}

fn find<'a>(
    abi: &'a JsonAbi,
    name: &'static str,
    selector: [u8; 4],
) -> Result<&'a Function, AbiError> {
    let overloads = abi.function(name).ok_or(AbiError::MissingFunction(name))?;
    overloads
        .iter()
        .find(|f| f.selector().0 == selector)
        .ok_or_else(|| AbiError::SignatureMismatch {
            name,
            found: overloads
                .iter()
                .map(|f| f.signature())
                .collect::<Vec<_>>()
                .join(", "),
        })
}
