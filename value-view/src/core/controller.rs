// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! View controller.
//!
//! Bridges a [`ValueBinding`] and a [`DisplaySurface`]: [`ViewController::load`] runs once when the
//! view comes up, and [`ViewController::submit`] runs every time the trigger fires. Each submission
//! is independent. Unless [`SubmitPolicy::Exclusive`] is chosen, nothing orders or de-duplicates
//! concurrent writes and the display shows whichever one settles last.

use std::{
    future::Future,
    sync::atomic::{AtomicBool, Ordering},
};

use alloy::primitives::TxHash;

use super::{
    binding::{BindingError, ValueBinding},
    surface::{DisplaySurface, InputSource},
};
use crate::utils::{color::DebugColor, format_value};

/// How overlapping trigger activations are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Every activation sends its own write.
    #[default]
    Concurrent,
    /// Activations are rejected while a previous write is in flight.
    Exclusive,
}

/// What the display shows after a successful write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayPolicy {
    /// The submitted text, without asking the contract again.
    #[default]
    Optimistic,
    /// The value read back from the contract once the write is confirmed.
    Confirm,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ControllerConfig {
    pub submit: SubmitPolicy,
    pub display: DisplayPolicy,
}

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("failed to read stored value: {0}")]
    Read(BindingError),
    #[error("failed to write stored value: {0}")]
    Write(BindingError),
    #[error("a previous write is still in flight")]
    WriteInFlight,
}

/// Outcome of a confirmed write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// The text taken from the input when the trigger fired.
    pub value: String,
    pub tx_hash: TxHash,
    /// The text the display was set to.
    pub displayed: String,
}

pub struct ViewController<B, D> {
    binding: B,
    display: D,
    config: ControllerConfig,
    in_flight: AtomicBool,
}

impl<B: ValueBinding, D: DisplaySurface> ViewController<B, D> {
    pub fn new(binding: B, display: D, config: ControllerConfig) -> Self {
        Self {
            binding,
            display,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn config(&self) -> ControllerConfig {
        self.config
    }

    /// Whether a write is currently holding the exclusive slot.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Reads the stored value and renders it.
    ///
    /// On failure the display keeps whatever it showed before.
    pub async fn load(&self) -> Result<String, ControllerError> {
        match self.binding.get_value().await {
            Ok(value) => {
                debug!(@grey, "loaded stored value: {}", format_value(&value));
                self.display.set_text(&value);
                Ok(value)
            }
            Err(err) => {
                warn!(@yellow, "could not load stored value: {err}");
                Err(ControllerError::Read(err))
            }
        }
    }

    /// Fires the trigger.
    ///
    /// The input is read immediately, so the returned future writes the value the input held at
    /// activation time. The value is forwarded as-is, including the empty string.
    pub fn submit<'a, I: InputSource + ?Sized + 'a>(
        &'a self,
        input: &I,
    ) -> impl Future<Output = Result<SubmitReceipt, ControllerError>> + 'a {
        let value = input.value();
        let slot = self.claim();
        async move {
            let _slot = slot?;
            self.write(value).await
        }
    }

    async fn write(&self, value: String) -> Result<SubmitReceipt, ControllerError> {
        let tx_hash = match self.binding.set_value(value.clone()).await {
            Ok(tx_hash) => tx_hash,
            Err(err) => {
                warn!(@yellow, "failed to set value {}: {err}", value.debug_lavender());
                return Err(ControllerError::Write(err));
            }
        };
        info!(@grey, "value set successfully");

        let displayed = match self.config.display {
            DisplayPolicy::Optimistic => value.clone(),
            DisplayPolicy::Confirm => match self.binding.get_value().await {
                Ok(confirmed) => confirmed,
                Err(err) => {
                    warn!(@yellow, "could not re-read stored value, showing submitted text: {err}");
                    value.clone()
                }
            },
        };
        self.display.set_text(&displayed);

        Ok(SubmitReceipt {
            value,
            tx_hash,
            displayed,
        })
    }

    fn claim(&self) -> Result<Option<InFlight<'_>>, ControllerError> {
        match self.config.submit {
            SubmitPolicy::Concurrent => Ok(None),
            SubmitPolicy::Exclusive => {
                if self
                    .in_flight
                    .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                    .is_err()
                {
                    debug!(@grey, "ignoring trigger while a write is in flight");
                    return Err(ControllerError::WriteInFlight);
                }
                Ok(Some(InFlight(&self.in_flight)))
            }
        }
    }
}

/// Releases the exclusive slot when the write settles or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::surface::{InputField, TextCell},
        utils::testing::MockBinding,
    };

    fn controller(binding: MockBinding) -> ViewController<MockBinding, TextCell> {
        ViewController::new(binding, TextCell::default(), ControllerConfig::default())
    }

    #[tokio::test]
    async fn load_renders_stored_value() {
        let controller = controller(MockBinding::storing("hello"));
        assert_eq!(controller.load().await.unwrap(), "hello");
        assert_eq!(controller.display().text(), "hello");
    }

    #[tokio::test]
    async fn load_failure_leaves_display_unset() {
        let controller = controller(MockBinding {
            fail_reads: true,
            ..MockBinding::storing("hello")
        });
        let err = controller.load().await.unwrap_err();
        assert!(matches!(err, ControllerError::Read(_)));
        assert_eq!(controller.display().text(), "");
    }

    #[tokio::test]
    async fn submit_displays_submitted_text() {
        // The contract keeps its old value, the display still shows the input.
        let controller = controller(MockBinding {
            apply_writes: false,
            ..MockBinding::storing("hello")
        });
        controller.load().await.unwrap();

        let input = InputField::default();
        input.set("world");
        let receipt = controller.submit(&input).await.unwrap();

        assert_eq!(receipt.value, "world");
        assert_eq!(receipt.displayed, "world");
        assert_eq!(receipt.tx_hash, TxHash::repeat_byte(0x11));
        assert_eq!(controller.display().text(), "world");
        assert_eq!(controller.binding().writes(), ["world"]);
    }

    #[tokio::test]
    async fn submit_failure_keeps_display() {
        let controller = controller(MockBinding {
            fail_writes: true,
            ..MockBinding::storing("hello")
        });
        controller.load().await.unwrap();

        let err = controller.submit("world").await.unwrap_err();
        assert!(matches!(err, ControllerError::Write(_)));
        assert_eq!(controller.display().text(), "hello");
    }

    #[tokio::test]
    async fn empty_input_is_forwarded() {
        let controller = controller(MockBinding::storing("hello"));
        let receipt = controller.submit("").await.unwrap();
        assert_eq!(receipt.value, "");
        assert_eq!(controller.binding().writes(), [""]);
        assert_eq!(controller.display().text(), "");
    }

    #[tokio::test]
    async fn input_is_read_at_activation() {
        let controller = controller(MockBinding::storing(""));
        let input = InputField::default();
        input.set("first");
        let pending = controller.submit(&input);
        input.set("second");
        assert_eq!(pending.await.unwrap().value, "first");
    }

    #[tokio::test]
    async fn concurrent_submits_are_independent() {
        let controller = controller(MockBinding::storing(""));
        let (a, b) = tokio::join!(controller.submit("a"), controller.submit("b"));
        assert!(a.is_ok());
        assert!(b.is_ok());

        let mut writes = controller.binding().writes();
        writes.sort();
        assert_eq!(writes, ["a", "b"]);
    }

    #[tokio::test]
    async fn exclusive_policy_rejects_overlapping_submits() {
        let controller = ViewController::new(
            MockBinding::storing(""),
            TextCell::default(),
            ControllerConfig {
                submit: SubmitPolicy::Exclusive,
                ..Default::default()
            },
        );

        let first = controller.submit("a");
        assert!(controller.is_busy());
        let second = controller.submit("b").await;
        assert!(matches!(second, Err(ControllerError::WriteInFlight)));

        first.await.unwrap();
        assert!(!controller.is_busy());
        controller.submit("c").await.unwrap();
        assert_eq!(controller.binding().writes(), ["a", "c"]);
    }

    #[tokio::test]
    async fn confirm_policy_displays_contract_value() {
        let controller = ViewController::new(
            MockBinding {
                apply_writes: false,
                ..MockBinding::storing("hello")
            },
            TextCell::default(),
            ControllerConfig {
                display: DisplayPolicy::Confirm,
                ..Default::default()
            },
        );

        let receipt = controller.submit("world").await.unwrap();
        assert_eq!(receipt.value, "world");
        assert_eq!(receipt.displayed, "hello");
        assert_eq!(controller.display().text(), "hello");
    }

    #[tokio::test]
    async fn confirm_policy_falls_back_to_submitted_text() {
        let controller = ViewController::new(
            MockBinding {
                fail_reads: true,
                ..MockBinding::storing("hello")
            },
            TextCell::default(),
            ControllerConfig {
                display: DisplayPolicy::Confirm,
                ..Default::default()
            },
        );

        let receipt = controller.submit("world").await.unwrap();
        assert_eq!(receipt.displayed, "world");
        assert_eq!(controller.display().text(), "world");
    }

    #[tokio::test]
    async fn exclusive_slot_is_released_after_failed_write() {
        let controller = ViewController::new(
            MockBinding {
                fail_writes: true,
                ..MockBinding::storing("")
            },
            TextCell::default(),
            ControllerConfig {
                submit: SubmitPolicy::Exclusive,
                ..Default::default()
            },
        );

        let err = controller.submit("a").await.unwrap_err();
        assert!(matches!(err, ControllerError::Write(_)));
        assert!(!controller.is_busy());

        let err = controller.submit("b").await.unwrap_err();
        assert!(matches!(err, ControllerError::Write(_)));
        assert_eq!(controller.binding().writes(), ["a", "b"]);
    }
}
