// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! View configuration.
//!
//! Values are layered: explicit overrides (usually CLI flags) win over the `ValueView.toml` file,
//! which wins over built-in defaults. The resolved [`ViewConfig`] is immutable.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::Address;
use reqwest::Url;
use serde::Deserialize;

use super::{
    abi::{AbiError, ContractDescriptor, DEFAULT_ADDRESS},
    controller::{ControllerConfig, DisplayPolicy, SubmitPolicy},
};

/// Filename for the optional config file.
pub const FILENAME: &str = "ValueView.toml";

/// Default RPC endpoint of a local development node.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),
    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error("missing config file {}", .0.display())]
    Missing(PathBuf),
    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub network: TomlNetwork,
    #[serde(default)]
    pub contract: TomlContract,
    #[serde(default)]
    pub account: TomlAccount,
    #[serde(default)]
    pub view: TomlView,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlNetwork {
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlContract {
    pub address: Option<Address>,
    /// Path to a JSON ABI, relative to the config file.
    pub abi: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlAccount {
    pub from: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlView {
    pub display: Option<String>,
    pub input: Option<String>,
    pub trigger: Option<String>,
    pub exclusive: Option<bool>,
    pub confirm: Option<bool>,
}

pub fn load(path: impl AsRef<Path>) -> Result<TomlConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::Missing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Keys of the three UI elements the view is made of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementKeys {
    pub display: String,
    pub input: String,
    pub trigger: String,
}

impl Default for ElementKeys {
    fn default() -> Self {
        Self {
            display: "value".into(),
            input: "input".into(),
            trigger: "set".into(),
        }
    }
}

/// Values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub address: Option<Address>,
    pub abi: Option<PathBuf>,
    pub sender: Option<Address>,
    pub exclusive: Option<bool>,
    pub confirm: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ViewConfig {
    pub endpoint: Url,
    pub contract: ContractDescriptor,
    /// Node-managed account that writes are sent from, if any.
    pub sender: Option<Address>,
    pub elements: ElementKeys,
    pub controller: ControllerConfig,
}

impl ViewConfig {
    /// Resolves the configuration from an optional config file and explicit overrides.
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let (toml, base_dir) = match file {
            Some(path) => {
                let toml = load(path)?;
                let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
                (toml, base_dir)
            }
            None => (TomlConfig::default(), PathBuf::new()),
        };

        let endpoint = overrides
            .endpoint
            .or(toml.network.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        let endpoint = parse_endpoint(&endpoint)?;

        let address = overrides
            .address
            .or(toml.contract.address)
            .unwrap_or(DEFAULT_ADDRESS);
        let abi = overrides
            .abi
            .or_else(|| toml.contract.abi.map(|abi| base_dir.join(abi)));
        let contract = match abi {
            Some(path) => ContractDescriptor::load(path, address)?,
            None => ContractDescriptor::with_default_abi(address)?,
        };

        let defaults = ElementKeys::default();
        let elements = ElementKeys {
            display: toml.view.display.unwrap_or(defaults.display),
            input: toml.view.input.unwrap_or(defaults.input),
            trigger: toml.view.trigger.unwrap_or(defaults.trigger),
        };

        let exclusive = overrides.exclusive.or(toml.view.exclusive).unwrap_or(false);
        let confirm = overrides.confirm.or(toml.view.confirm).unwrap_or(false);
        let controller = ControllerConfig {
            submit: if exclusive {
                SubmitPolicy::Exclusive
            } else {
                SubmitPolicy::Concurrent
            },
            display: if confirm {
                DisplayPolicy::Confirm
            } else {
                DisplayPolicy::Optimistic
            },
        };

        Ok(Self {
            endpoint,
            contract,
            sender: overrides.sender.or(toml.account.from),
            elements,
            controller,
        })
    }
}

/// Parses an RPC endpoint, accepting HTTP(S) and WebSocket URLs.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason,
    };
    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" | "ws" | "wss" => Ok(url),
        scheme => Err(invalid(format!("unsupported scheme `{scheme}`"))),
    }
}
