// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, B256},
    providers::{DynProvider, Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{bail, eyre, Context};
use value_view::core::{
    binding::AlloyValueBinding,
    config::{self, ConfigOverrides, ViewConfig},
};

use crate::utils::decode0x;

#[derive(Debug, Default, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Account managed by the node to send writes from, signed by the node itself
    #[arg(long)]
    pub from: Option<Address>,
}

impl AuthArgs {
    fn has_signer(&self) -> bool {
        self.private_key.is_some() || self.private_key_path.is_some() || self.keystore_path.is_some()
    }

    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            let signer = parse_private_key(key)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            let signer = parse_private_key(key)?.with_chain_id(Some(chain_id));
            return Ok(EthereumWallet::new(signer));
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!("no keystore"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }
}

fn parse_private_key(key: impl AsRef<str>) -> eyre::Result<PrivateKeySigner> {
    let bytes = decode0x(key)?;
    let key = B256::try_from(bytes.as_slice())
        .map_err(|_| eyre!("private key must be 32 bytes, got {}", bytes.len()))?;
    Ok(PrivateKeySigner::from_bytes(&key)?)
}

#[derive(Debug, Default, clap::Args)]
pub struct ViewArgs {
    /// RPC endpoint of the node [default: http://localhost:8545]
    #[arg(short, long)]
    endpoint: Option<String>,
    /// Address of the deployed contract [default: 0x1234567890123456789012345678901234567890]
    #[arg(long)]
    address: Option<Address>,
    /// JSON ABI of the contract, either a bare ABI or a compiler artifact
    #[arg(long)]
    abi: Option<PathBuf>,
    /// Config file (defaults to ValueView.toml in the current directory, if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ViewArgs {
    /// Resolves the view configuration, CLI flags taking precedence over the config file.
    pub fn resolve(&self, overrides: ConfigOverrides) -> value_view::Result<ViewConfig> {
        let default_file = Path::new(config::FILENAME);
        let file = match &self.config {
            Some(path) => Some(path.as_path()),
            None if default_file.exists() => Some(default_file),
            None => None,
        };
        let overrides = ConfigOverrides {
            endpoint: self.endpoint.clone(),
            address: self.address,
            abi: self.abi.clone(),
            ..overrides
        };
        Ok(ViewConfig::resolve(file, overrides)?)
    }
}

/// Builds a read-only binding to the configured contract.
pub async fn build_reader(config: &ViewConfig) -> eyre::Result<AlloyValueBinding<DynProvider>> {
    let provider = ProviderBuilder::new()
        .connect(config.endpoint.as_str())
        .await?
        .erased();
    Ok(AlloyValueBinding::new(config.contract.address(), provider))
}

/// Builds a binding able to send writes, using the local signer if one was given and otherwise
/// the node-managed account from the config.
pub async fn build_writer(
    config: &ViewConfig,
    auth: &AuthArgs,
) -> eyre::Result<AlloyValueBinding<DynProvider>> {
    if !auth.has_signer() {
        let Some(sender) = config.sender else {
            bail!("no caller identity: pass a private key, a keystore, or --from");
        };
        return Ok(build_reader(config).await?.with_sender(sender));
    }

    let provider = ProviderBuilder::new()
        .connect(config.endpoint.as_str())
        .await?;
    let chain_id = provider.get_chain_id().await?;
    let wallet = auth.build_wallet(chain_id)?;
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(config.endpoint.as_str())
        .await?;

    let signer = provider.default_signer_address();
    if let Some(sender) = config.sender.filter(|sender| *sender != signer) {
        bail!("sender {sender} does not match signer {signer}");
    }
    log::debug!("sending writes from {signer}");
    Ok(AlloyValueBinding::new(config.contract.address(), provider.erased()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = ViewArgs {
            endpoint: Some("https://rpc.example.org".into()),
            address: Some(Address::repeat_byte(0x22)),
            config: Some(PathBuf::from("does-not-exist.toml")),
            ..Default::default()
        };
        // An explicit config path must exist.
        assert!(args.resolve(ConfigOverrides::default()).is_err());

        let args = ViewArgs {
            config: None,
            ..args
        };
        let config = args
            .resolve(ConfigOverrides {
                sender: Some(Address::repeat_byte(0x33)),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.endpoint.as_str(), "https://rpc.example.org/");
        assert_eq!(config.contract.address(), Address::repeat_byte(0x22));
        assert_eq!(config.sender, Some(Address::repeat_byte(0x33)));
    }

    #[tokio::test]
    async fn writer_requires_identity() {
        let config = ViewConfig::resolve(None, ConfigOverrides::default()).unwrap();
        let err = build_writer(&config, &AuthArgs::default())
            .await
            .err()
            .unwrap();
        assert!(err.to_string().contains("no caller identity"));
    }

    #[test]
    fn wallet_from_private_key() {
        let auth = AuthArgs {
            private_key: Some(
                "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659".into(),
            ),
            ..Default::default()
        };
        assert!(auth.has_signer());
        assert!(auth.build_wallet(1337).is_ok());
    }

    #[test]
    fn empty_private_key_is_rejected() {
        let auth = AuthArgs {
            private_key: Some(String::new()),
            ..Default::default()
        };
        assert!(auth.build_wallet(1337).is_err());
    }

    #[test]
    fn short_private_key_is_rejected() {
        let auth = AuthArgs {
            private_key: Some("0xdead".into()),
            ..Default::default()
        };
        let err = auth.build_wallet(1337).unwrap_err();
        assert_eq!(err.to_string(), "private key must be 32 bytes, got 2");
    }

    #[test]
    fn truncated_private_key_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.txt");
        fs::write(&path, "0xb6b15c8cb491557369f3c7d2c287b053\n").unwrap();
        let auth = AuthArgs {
            private_key_path: Some(path),
            ..Default::default()
        };
        let err = auth.build_wallet(1337).unwrap_err();
        assert!(err.to_string().starts_with("private key must be 32 bytes"));
    }
}
