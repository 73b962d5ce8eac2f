// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log subscriber setup. Logs go to stderr so stdout stays parseable.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Parse a level name, accepting Python logging names as aliases.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "warning" => Some(LevelFilter::WARN),
        "critical" | "fatal" => Some(LevelFilter::ERROR),
        "notset" => Some(LevelFilter::TRACE),
        other => other.parse().ok(),
    }
}

/// Pick the level: `--log-level` flag, then environment, then the default.
///
/// Returns the rejected name alongside the fallback when the chosen value
/// does not parse.
pub fn resolve_level(flag: Option<&str>, env: Option<&str>) -> (LevelFilter, Option<String>) {
    match flag.or(env) {
        None => (DEFAULT_LEVEL, None),
        Some(name) => match parse_level(name) {
            Some(level) => (level, None),
            None => (DEFAULT_LEVEL, Some(name.to_string())),
        },
    }
}

pub fn init(flag: Option<&str>) {
    let env = crate::env::log_level();
    let (level, rejected) = resolve_level(flag, env.as_deref());

    let filter = EnvFilter::default().add_directive(level.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Some(name) = rejected {
        tracing::warn!(level = %name, "unknown log level, using {}", DEFAULT_LEVEL);
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
