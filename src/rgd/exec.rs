// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: exec.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers

//! Runs helper programs in the foreground with passthrough stdio.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default)]
pub struct ExecOptions {
	/// Bind the child's stdout to ours. When unset, stdout keeps
	/// whatever the `Command` was configured with.
	pub inherit_stdout: bool,
}

#[derive(Debug, Error)]
pub enum ExecError {
	#[error("failed to run `{program}`: {source}")]
	Spawn {
		program: String,
		#[source]
		source: io::Error,
	},
	#[error("`{program}` exited unsuccessfully ({status})")]
	Failed { program: String, status: ExitStatus },
}

impl ExecError {
	/// Exit code of the child, if it exited normally.
	pub fn exit_code(&self) -> Option<i32> {
		match self {
			ExecError::Spawn { .. } => None,
			ExecError::Failed { status, .. } => status.code(),
		}
	}
}

/// `+ <program> <args...>`
pub fn trace_line(cmd: &Command) -> String {
	let mut parts =
		vec![cmd.get_program().to_string_lossy().into_owned()];
	parts.extend(
		cmd.get_args().map(|arg| arg.to_string_lossy().into_owned()),
	);
	format!("+ {}", parts.join(" "))
}

pub fn execute(cmd: &mut Command) -> Result<(), ExecError> {
	execute_with(cmd, &ExecOptions::default())
}

/// Echoes the command line to stdout, then runs it to completion with
/// stdin and stderr attached to this process.
pub fn execute_with(
	cmd: &mut Command,
	options: &ExecOptions,
) -> Result<(), ExecError> {
	println!("{}", trace_line(cmd));

	cmd.stdin(Stdio::inherit()).stderr(Stdio::inherit());
	if options.inherit_stdout {
		cmd.stdout(Stdio::inherit());
	}

	let program = cmd.get_program().to_string_lossy().into_owned();
	debug!(%program, inherit_stdout = options.inherit_stdout, "spawning");
	let status = cmd.status().map_err(|source| ExecError::Spawn {
		program: program.clone(),
		source,
	})?;
	debug!(%program, %status, "child exited");

	if status.success() {
		Ok(())
	} else {
		Err(ExecError::Failed { program, status })
	}
}
