// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use parking_lot::Mutex;
use value_view::core::surface::DisplaySurface;

use crate::utils::style::{KEY, MUTED};

/// Display element rendered as a line on stdout every time its text changes.
pub struct TerminalDisplay {
    key: String,
    text: Mutex<String>,
}

impl TerminalDisplay {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: Mutex::new(String::new()),
        }
    }

    fn render(&self, text: &str) -> String {
        if text.is_empty() {
            format!("{KEY}#{}{KEY:#} {MUTED}(empty){MUTED:#}", self.key)
        } else {
            format!("{KEY}#{}{KEY:#} {text}", self.key)
        }
    }
}

impl DisplaySurface for TerminalDisplay {
    fn set_text(&self, text: &str) {
        *self.text.lock() = text.to_owned();
        println!("{}", self.render(text));
    }

    fn text(&self) -> String {
        self.text.lock().clone()
    }
}
