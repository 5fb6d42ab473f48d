// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Read/write binding to the deployed value store contract.

use alloy::{
    contract::SolCallBuilder,
    primitives::{Address, TxHash},
    providers::Provider,
    sol,
    transports::RpcError,
};

use crate::{
    error::revert_reason,
    utils::{color::DebugColor, format_gas},
};

sol! {
    #[sol(rpc)]
    interface ValueStore {
        function setValue(string _value) external;
        function getValue() external view returns (string);
    }
}

/// The two operations the view needs from the contract.
#[allow(async_fn_in_trait)]
pub trait ValueBinding {
    /// Reads the currently stored value.
    async fn get_value(&self) -> Result<String, BindingError>;

    /// Overwrites the stored value, resolving once the transaction is confirmed.
    async fn set_value(&self, value: String) -> Result<TxHash, BindingError>;
}

impl<T: ValueBinding + ?Sized> ValueBinding for &T {
    async fn get_value(&self) -> Result<String, BindingError> {
        (**self).get_value().await
    }

    async fn set_value(&self, value: String) -> Result<TxHash, BindingError> {
        (**self).set_value(value).await
    }
}

/// Coarse classification of binding failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The node could not be reached or the transport failed.
    Connectivity,
    /// The node answered, but the call reverted or returned malformed data.
    Contract,
}

#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
}

impl BindingError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Contract(alloy::contract::Error::TransportError(RpcError::Transport(_))) => {
                FailureKind::Connectivity
            }
            Self::PendingTransaction(alloy::providers::PendingTransactionError::TransportError(
                RpcError::Transport(_),
            )) => FailureKind::Connectivity,
            _ => FailureKind::Contract,
        }
    }

    /// Revert reason returned by the node, if any.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Contract(err) => revert_reason(err),
            _ => None,
        }
    }
}

/// [`ValueBinding`] backed by an alloy provider.
///
/// Writes are sent from `sender` when one is set, which lets the node sign for an account it
/// manages. Otherwise the provider's wallet chooses the sender.
pub struct AlloyValueBinding<P> {
    contract: ValueStore::ValueStoreInstance<P>,
    sender: Option<Address>,
}

impl<P: Provider> AlloyValueBinding<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            contract: ValueStore::new(address, provider),
            sender: None,
        }
    }

    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    pub fn sender(&self) -> Option<Address> {
        self.sender
    }

    fn set_value_call(&self, value: String) -> SolCallBuilder<&P, ValueStore::setValueCall> {
        let call = self.contract.setValue(value);
        match self.sender {
            Some(sender) => call.from(sender),
            None => call,
        }
    }
}

impl<P: Provider> ValueBinding for AlloyValueBinding<P> {
    async fn get_value(&self) -> Result<String, BindingError> {
        let value = self.contract.getValue().call().await?;
        debug!(@grey, "read value from {}", self.address().debug_lavender());
        Ok(value)
    }

    async fn set_value(&self, value: String) -> Result<TxHash, BindingError> {
        let pending_tx = self.set_value_call(value).send().await?;
        debug!(@grey, "sent setValue tx {}", pending_tx.tx_hash().debug_lavender());
        let receipt = pending_tx.get_receipt().await?;
        if !receipt.status() {
            return Err(BindingError::Reverted(receipt.transaction_hash));
        }
        debug!(@grey, "setValue confirmed with {}", format_gas(receipt.gas_used));
        Ok(receipt.transaction_hash)
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{Bloom, Bytes, B256},
        providers::ProviderBuilder,
        sol_types::SolValue,
        transports::mock::Asserter,
    };
    use serde_json::json;

    use super::*;

    fn receipt(tx_hash: TxHash, success: bool) -> serde_json::Value {
        let status = if success { "0x1" } else { "0x0" };
        json!({
            "type": "0x2",
            "status": status,
            "cumulativeGasUsed": "0x6d60",
            "logs": [],
            "logsBloom": Bloom::ZERO,
            "transactionHash": tx_hash,
            "transactionIndex": "0x0",
            "blockHash": B256::repeat_byte(0x22),
            "blockNumber": "0x1",
            "gasUsed": "0x6d60",
            "effectiveGasPrice": "0x3b9aca00",
            "from": Address::repeat_byte(0xab),
            "to": Address::ZERO,
            "contractAddress": null,
        })
    }

    fn binding(asserter: &Asserter) -> AlloyValueBinding<impl Provider> {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone());
        AlloyValueBinding::new(Address::ZERO, provider)
    }

    #[tokio::test]
    async fn get_value_decodes_string() {
        let asserter = Asserter::new();
        let encoded = Bytes::from(("hello".to_owned(),).abi_encode_params());
        asserter.push_success(&encoded);

        let value = binding(&asserter).get_value().await.unwrap();
        assert_eq!(value, "hello");
    }

    #[tokio::test]
    async fn get_value_rejects_malformed_data() {
        let asserter = Asserter::new();
        asserter.push_success(&Bytes::from_static(&[0x01, 0x02]));

        let err = binding(&asserter).get_value().await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Contract);
    }

    #[tokio::test]
    async fn get_value_surfaces_node_errors() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("execution reverted");

        let err = binding(&asserter).get_value().await.unwrap_err();
        assert!(matches!(err, BindingError::Contract(_)));
        assert_eq!(err.kind(), FailureKind::Contract);
    }

    #[test]
    fn sender_is_optional() {
        let asserter = Asserter::new();
        let binding = binding(&asserter);
        assert_eq!(binding.sender(), None);
        let sender = Address::repeat_byte(0xab);
        assert_eq!(binding.with_sender(sender).sender(), Some(sender));
    }

    #[test]
    fn set_value_is_sent_from_sender() {
        let asserter = Asserter::new();
        let binding = binding(&asserter);
        let request = binding.set_value_call("hi".into()).into_transaction_request();
        assert_eq!(request.from, None);

        let sender = Address::repeat_byte(0xab);
        let binding = binding.with_sender(sender);
        let request = binding.set_value_call("hi".into()).into_transaction_request();
        assert_eq!(request.from, Some(sender));
        assert_eq!(request.to, Some(Address::ZERO.into()));
    }

    #[tokio::test]
    async fn set_value_waits_for_receipt() {
        let asserter = Asserter::new();
        let tx_hash = TxHash::repeat_byte(0x11);
        asserter.push_success(&tx_hash);
        asserter.push_success(&receipt(tx_hash, true));

        let binding = binding(&asserter).with_sender(Address::repeat_byte(0xab));
        assert_eq!(binding.set_value("world".into()).await.unwrap(), tx_hash);
    }

    #[tokio::test]
    async fn set_value_reports_failed_receipt() {
        let asserter = Asserter::new();
        let tx_hash = TxHash::repeat_byte(0x22);
        asserter.push_success(&tx_hash);
        asserter.push_success(&receipt(tx_hash, false));

        let err = binding(&asserter)
            .set_value("world".into())
            .await
            .unwrap_err();
        assert!(matches!(err, BindingError::Reverted(hash) if hash == tx_hash));
        assert_eq!(err.kind(), FailureKind::Contract);
        assert_eq!(err.reason(), None);
    }

    #[tokio::test]
    async fn set_value_surfaces_send_errors() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("insufficient funds");

        let err = binding(&asserter)
            .set_value("world".into())
            .await
            .unwrap_err();
        assert!(matches!(err, BindingError::Contract(_)));
    }
}
