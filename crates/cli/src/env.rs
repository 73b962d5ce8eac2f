// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

/// Log level used when `--log-level` is not given.
pub const LOG_LEVEL_VAR: &str = "BSCRIPTS_LOG_LEVEL";

/// Log level from `BSCRIPTS_LOG_LEVEL`, ignoring empty values.
pub fn log_level() -> Option<String> {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
