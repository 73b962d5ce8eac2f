// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

use bscripts_core::ConfigError;
use bscripts_engine::RunError;

/// A build command failed or could not be started.
pub const EXIT_COMMAND_FAILED: i32 = 1;
/// Configuration missing or invalid (including artifact patterns).
pub const EXIT_CONFIG: i32 = 2;
/// Anything else (filesystem failures, I/O).
pub const EXIT_OTHER: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<ConfigError> for ExitError {
    fn from(err: ConfigError) -> Self {
        Self::new(EXIT_CONFIG, err.to_string())
    }
}

impl From<RunError> for ExitError {
    fn from(err: RunError) -> Self {
        let code = match err {
            RunError::CommandFailed { .. } | RunError::Spawn { .. } => EXIT_COMMAND_FAILED,
            RunError::Pattern(_) => EXIT_CONFIG,
            RunError::Io { .. } | RunError::Walk { .. } => EXIT_OTHER,
        };
        Self::new(code, err.to_string())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
