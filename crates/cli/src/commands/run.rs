// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bscripts run`: the "before packaging" hook.
//!
//! Cleans every script's output, runs the commands, collects artifacts and
//! prints the output directories to include in the package, one per line.

use anyhow::Result;
use bscripts_engine::{BuildReport, ScriptRunner, ShellExecutor};

use super::project::Project;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

pub fn handle(project: &Project, format: OutputFormat) -> Result<()> {
    let report = initialize(&project.runner()?)?;
    format_or_json(format, &report, || {
        for dir in &report.executed.artifacts {
            println!("{}", dir.display());
        }
    })
}

pub(crate) fn initialize<S: ShellExecutor>(
    runner: &ScriptRunner<S>,
) -> Result<BuildReport, ExitError> {
    let report = runner.initialize()?;
    tracing::info!(
        copied = report.executed.copied.len(),
        skipped = report.executed.skipped.len(),
        "collected artifacts"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
