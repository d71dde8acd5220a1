// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: main.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers

use rustgendigest::rgd::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	app::run()?;
	Ok(())
}
