// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runner error types.
//!
//! Absent paths on the read/delete side never surface here: a missing work
//! dir, out dir or file to delete is an empty result, not an error.

use std::fmt;
use std::path::PathBuf;

/// How a failed command terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Process exited with a non-zero code.
    Code(i32),
    /// Process was killed by a signal (Unix only).
    Signal(i32),
    /// Neither code nor signal was reported.
    Unknown,
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Code(code) => write!(f, "exit code {}", code),
            ExitStatus::Signal(sig) => write!(f, "signal {}", sig),
            ExitStatus::Unknown => f.write_str("unknown status"),
        }
    }
}

/// Filesystem operation that failed, for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    CreateDir,
    Copy,
    CopyMetadata,
    Remove,
    RemoveDir,
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FsOp::CreateDir => "create directory",
            FsOp::Copy => "copy",
            FsOp::CopyMetadata => "copy metadata to",
            FsOp::Remove => "remove",
            FsOp::RemoveDir => "remove directory",
        })
    }
}

/// Invalid artifact pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid artifact pattern `{pattern}`: {message}")]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

/// Errors that abort a runner phase.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A command exited unsuccessfully (fail-fast).
    #[error("command `{command}` failed with {status}")]
    CommandFailed { command: String, status: ExitStatus },

    /// The shell could not be started (missing executable or work dir).
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// A write-side filesystem operation failed.
    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: FsOp,
        path: PathBuf,
        source: std::io::Error,
    },

    /// Walking a directory for pattern matches failed.
    #[error("failed to scan {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl RunError {
    pub(crate) fn io(op: FsOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RunError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Exit code of the failed command, when one was reported.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunError::CommandFailed {
                status: ExitStatus::Code(code),
                ..
            } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
