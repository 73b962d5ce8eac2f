// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bscripts show`: print resolved script definitions.

use anyhow::Result;

use super::project::Project;
use crate::output::{format_or_json, script_lines, OutputFormat};

pub fn handle(project: &Project, format: OutputFormat) -> Result<()> {
    // Compiles patterns so a bad one is reported here too
    project.runner()?;

    format_or_json(format, &project.scripts, || {
        if project.scripts.is_empty() {
            println!("No scripts defined in {}", project.config.display());
            return;
        }
        for (index, script) in project.scripts.iter().enumerate() {
            if index > 0 {
                println!();
            }
            for line in script_lines(index, script) {
                println!("{}", line);
            }
        }
    })
}
