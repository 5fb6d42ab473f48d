// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type ValueViewResult = Result<(), ValueViewError>;

/// Error reported by a command, with the process exit code it maps to.
#[derive(Debug)]
pub struct ValueViewError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl ValueViewError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for ValueViewError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

// Config, binding and IO failures all exit with the generic failure code.
impl<E: Into<eyre::Error>> From<E> for ValueViewError {
    fn from(err: E) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
