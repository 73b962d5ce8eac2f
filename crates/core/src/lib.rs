// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bscripts-core: script definitions and their configuration

pub mod config;
pub mod script;

pub use config::{
    find_config, load_scripts, parse_scripts, ConfigError, ConfigSource, ScriptEntry,
    ScriptsTable, CONFIG_FILE, PYPROJECT_FILE,
};
pub use script::{PreClean, ScriptDef};
