// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::TxHash;
use parking_lot::Mutex;

use crate::core::binding::{BindingError, ValueBinding};

/// In-memory stand-in for the deployed contract.
#[derive(Default)]
pub struct MockBinding {
    pub stored: Mutex<String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    /// When false, successful writes leave `stored` untouched.
    pub apply_writes: bool,
    pub writes: Mutex<Vec<String>>,
}

impl MockBinding {
    pub fn storing(value: &str) -> Self {
        Self {
            stored: Mutex::new(value.to_owned()),
            apply_writes: true,
            ..Default::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl ValueBinding for MockBinding {
    async fn get_value(&self) -> Result<String, BindingError> {
        if self.fail_reads {
            return Err(BindingError::Reverted(TxHash::ZERO));
        }
        Ok(self.stored.lock().clone())
    }

    async fn set_value(&self, value: String) -> Result<TxHash, BindingError> {
        self.writes.lock().push(value.clone());
        tokio::task::yield_now().await;
        if self.fail_writes {
            return Err(BindingError::Reverted(TxHash::ZERO));
        }
        if self.apply_writes {
            *self.stored.lock() = value;
        }
        Ok(TxHash::repeat_byte(0x11))
    }
}
