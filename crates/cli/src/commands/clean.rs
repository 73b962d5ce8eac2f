// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bscripts clean`: pre-run cleanup only, no commands run.

use anyhow::Result;

use super::project::Project;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, removed_lines, OutputFormat};

pub fn handle(project: &Project, format: OutputFormat) -> Result<()> {
    let report = project.runner()?.clean().map_err(ExitError::from)?;
    format_or_json(format, &report, || {
        for line in removed_lines(&project.root, &report.removed) {
            println!("{}", line);
        }
    })
}
