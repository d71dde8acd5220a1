// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: logging.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers

use std::io;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber. Stdout stays reserved for command
/// output (file lists, `+` trace lines).
pub fn init_logging() -> io::Result<()> {
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	let ansi = std::env::var_os("NO_COLOR").is_none();

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(io::stderr)
		.with_ansi(ansi)
		.with_target(false)
		.try_init()
		.map_err(io::Error::other)
}
