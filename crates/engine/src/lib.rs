// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bscripts-engine: runs build scripts and collects their artifacts

pub mod error;
pub mod ledger;
pub mod pattern;
pub mod runner;
pub mod shell;

pub use error::{ExitStatus, FsOp, PatternError, RunError};
pub use ledger::CopyLedger;
pub use pattern::ArtifactPatterns;
pub use runner::{BuildReport, CleanReport, ExecuteReport, ScriptRunner};
#[cfg(any(test, feature = "test-support"))]
pub use shell::{FakeShell, ShellCall};
pub use shell::{ShellExecutor, SystemShell};
