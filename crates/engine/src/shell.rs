// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command execution boundary.
//!
//! Command strings come straight from configuration and are handed to the
//! platform shell verbatim. Quoting, pipes and expansion are the author's
//! responsibility.

use crate::error::{ExitStatus, RunError};
use std::path::Path;
use std::process::Command;

/// Runs one shell command to completion in a working directory.
pub trait ShellExecutor {
    /// Block until `command` exits. Non-zero exit is [`RunError::CommandFailed`].
    fn run(&self, command: &str, cwd: &Path) -> Result<(), RunError>;
}

impl<T: ShellExecutor + ?Sized> ShellExecutor for &T {
    fn run(&self, command: &str, cwd: &Path) -> Result<(), RunError> {
        (**self).run(command, cwd)
    }
}

/// Executes commands through the system shell with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct SystemShell;

impl SystemShell {
    fn command(command: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl ShellExecutor for SystemShell {
    fn run(&self, command: &str, cwd: &Path) -> Result<(), RunError> {
        let status = Self::command(command)
            .current_dir(cwd)
            .status()
            .map_err(|source| RunError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }
        Err(RunError::CommandFailed {
            command: command.to_string(),
            status: exit_status(&status),
        })
    }
}

fn exit_status(status: &std::process::ExitStatus) -> ExitStatus {
    if let Some(code) = status.code() {
        return ExitStatus::Code(code);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ExitStatus::Signal(signal);
        }
    }
    ExitStatus::Unknown
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::*;
    use parking_lot::Mutex;
    use std::path::PathBuf;
    use std::sync::Arc;

    /// A command the fake shell was asked to run.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ShellCall {
        pub command: String,
        pub cwd: PathBuf,
    }

    /// Records commands instead of running them.
    ///
    /// Commands registered with [`FakeShell::fail_on`] return
    /// [`RunError::CommandFailed`] with the configured exit code.
    #[derive(Clone, Default)]
    pub struct FakeShell {
        calls: Arc<Mutex<Vec<ShellCall>>>,
        failures: Arc<Mutex<Vec<(String, i32)>>>,
    }

    impl FakeShell {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail_on(&self, command: impl Into<String>, exit_code: i32) {
            self.failures.lock().push((command.into(), exit_code));
        }

        pub fn calls(&self) -> Vec<ShellCall> {
            self.calls.lock().clone()
        }

        pub fn commands(&self) -> Vec<String> {
            self.calls.lock().iter().map(|c| c.command.clone()).collect()
        }
    }

    impl ShellExecutor for FakeShell {
        fn run(&self, command: &str, cwd: &Path) -> Result<(), RunError> {
            self.calls.lock().push(ShellCall {
                command: command.to_string(),
                cwd: cwd.to_path_buf(),
            });
            let failure = self
                .failures
                .lock()
                .iter()
                .find(|(cmd, _)| cmd == command)
                .map(|(_, code)| *code);
            match failure {
                Some(code) => Err(RunError::CommandFailed {
                    command: command.to_string(),
                    status: ExitStatus::Code(code),
                }),
                None => Ok(()),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeShell, ShellCall};

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
