// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: lib.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers

pub mod rgd {
	pub mod app;
	pub mod checksum;
	pub mod digest_file;
	pub mod exec;
	pub mod logging;
}
