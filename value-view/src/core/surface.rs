// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! UI surfaces consumed by the view controller.

use parking_lot::Mutex;

/// Element whose text shows the stored value.
///
/// Shared by every in-flight operation, so the last writer wins.
pub trait DisplaySurface {
    fn set_text(&self, text: &str);
    fn text(&self) -> String;
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &T {
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }

    fn text(&self) -> String {
        (**self).text()
    }
}

/// Element the user types the new value into.
pub trait InputSource {
    /// Current contents, read when the trigger fires.
    fn value(&self) -> String;
}

impl InputSource for str {
    fn value(&self) -> String {
        self.to_owned()
    }
}

impl InputSource for String {
    fn value(&self) -> String {
        self.clone()
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn value(&self) -> String {
        (**self).value()
    }
}

/// In-memory display surface. Starts empty.
#[derive(Debug, Default)]
pub struct TextCell {
    text: Mutex<String>,
}

impl TextCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
        }
    }
}

impl DisplaySurface for TextCell {
    fn set_text(&self, text: &str) {
        *self.text.lock() = text.to_owned();
    }

    fn text(&self) -> String {
        self.text.lock().clone()
    }
}

/// Editable input field.
#[derive(Debug, Default)]
pub struct InputField {
    value: Mutex<String>,
}

impl InputField {
    pub fn set(&self, value: impl Into<String>) {
        *self.value.lock() = value.into();
    }
}

impl InputSource for InputField {
    fn value(&self) -> String {
        self.value.lock().clone()
    }
}
