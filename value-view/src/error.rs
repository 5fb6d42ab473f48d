// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::sol_types::GenericContractError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error(transparent)]
    Abi(#[from] crate::core::abi::AbiError),
    #[error(transparent)]
    Config(#[from] crate::core::config::ConfigError),
    #[error(transparent)]
    Binding(#[from] crate::core::binding::BindingError),
    #[error(transparent)]
    Controller(#[from] crate::core::controller::ControllerError),
}

/// Extracts a human readable revert reason from a failed contract call, if the node returned one.
pub fn revert_reason(e: &alloy::contract::Error) -> Option<String> {
    let alloy::contract::Error::TransportError(tperr) = e else {
        return None;
    };
    let payload = tperr.as_error_resp()?;
    match payload.as_decoded_interface_error::<GenericContractError>()? {
        GenericContractError::Revert(revert) => Some(revert.reason),
        GenericContractError::Panic(panic) => Some(format!("panic code {}", panic.code)),
        GenericContractError::CustomError(never) => match never {},
    }
}
