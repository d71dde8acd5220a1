// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: app.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers

use crate::rgd::checksum::algorithms;
use crate::rgd::digest_file::{
	write_checksums_with, DigestOptions, FileExistsPolicy,
};
use crate::rgd::exec::{execute_with, ExecOptions};
use crate::rgd::logging::init_logging;
use clap::{Arg, ArgAction, ArgMatches};
use clap_complete::{generate, Shell};
use colored::*;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::Command;

pub const BIN_NAME: &str = "rgd";

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Primary command families:
  rgd digest -m <method> <FILE>...  Write <first file>.DIGEST (e.g. rgd digest -m sha256 -m md5 app.tar.gz)
  rgd exec -- <PROGRAM> [ARGS]...   Run a helper command with passthrough stdio
{usage-heading} {usage}

{all-args}{after-help}
";

pub fn build_cli() -> clap::Command {
	clap::Command::new(BIN_NAME)
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(BIN_NAME)
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("Write sidecar digest files for release artifacts")
		.subcommand_required(true)
		.arg_required_else_help(true)
		.subcommand(
			clap::command!("digest")
				.about("Hash files and write <first file>.DIGEST")
				.arg(
					Arg::new("method")
						.short('m')
						.long("method")
						.help("Hash method (md5, sha1, sha256, sha512, adler32, crc32, blake2b, blake2s); repeat for several")
						.action(ArgAction::Append)
						.required(true),
				)
				.arg(
					Arg::new("output-dir")
						.short('d')
						.long("output-dir")
						.value_parser(clap::value_parser!(PathBuf))
						.help("Directory for the digest file (default: current directory)"),
				)
				.arg(
					Arg::new("if-exists")
						.long("if-exists")
						.value_parser(clap::value_parser!(
							FileExistsPolicy
						))
						.help("What to do when the digest file already exists")
						.default_value("overwrite"),
				)
				.arg(
					Arg::new("files")
						.help("Files to hash; the first one names the digest file")
						.value_parser(clap::value_parser!(PathBuf))
						.num_args(1..)
						.required(true),
				),
		)
		.subcommand(
			clap::command!("exec")
				.about("Run a command with stdin/stderr attached to this terminal")
				.arg(
					Arg::new("inherit-stdout")
						.long("inherit-stdout")
						.help("Attach the command's stdout as well")
						.action(ArgAction::SetTrue),
				)
				.arg(
					Arg::new("command")
						.help("Program and arguments")
						.num_args(1..)
						.trailing_var_arg(true)
						.allow_hyphen_values(true)
						.required(true),
				),
		)
		.subcommand(
			clap::command!("methods")
				.about("List supported hash methods"),
		)
		.subcommand(
			clap::command!("completions")
				.about("Generate shell completions")
				.arg(
					Arg::new("shell")
						.value_parser(clap::value_parser!(Shell))
						.required(true),
				),
		)
}

fn handle_digest_command(
	matches: &ArgMatches,
) -> Result<(), Box<dyn Error>> {
	let methods: Vec<String> = matches
		.get_many::<String>("method")
		.into_iter()
		.flatten()
		.cloned()
		.collect();
	let files: Vec<PathBuf> = matches
		.get_many::<PathBuf>("files")
		.into_iter()
		.flatten()
		.cloned()
		.collect();
	let options = DigestOptions {
		output_dir: matches.get_one::<PathBuf>("output-dir").cloned(),
		if_exists: matches
			.get_one::<FileExistsPolicy>("if-exists")
			.copied()
			.unwrap_or_default(),
	};

	match write_checksums_with(&files, &methods, &options) {
		Ok(listed) => {
			for path in listed {
				println!("{}", path.display());
			}
			Ok(())
		}
		Err(err) => fail(&err, 1),
	}
}

fn handle_exec_command(
	matches: &ArgMatches,
) -> Result<(), Box<dyn Error>> {
	let mut argv = matches
		.get_many::<String>("command")
		.into_iter()
		.flatten();
	let Some(program) = argv.next() else {
		return Err("no command given".into());
	};
	let mut cmd = Command::new(program);
	cmd.args(argv);
	let options = ExecOptions {
		inherit_stdout: matches.get_flag("inherit-stdout"),
	};

	match execute_with(&mut cmd, &options) {
		Ok(()) => Ok(()),
		Err(err) => {
			let code = err.exit_code().unwrap_or(1);
			fail(&err, code)
		}
	}
}

fn print_methods() {
	for algorithm in algorithms() {
		println!(
			"{:<8} {}",
			algorithm.method.identifier(),
			algorithm.encoding
		);
	}
}

fn fail(err: &dyn Error, code: i32) -> ! {
	eprintln!("{} {}", "error:".red().bold(), err);
	std::process::exit(code);
}

pub fn run() -> Result<(), Box<dyn Error>> {
	init_logging()?;
	let m = build_cli().get_matches();

	match m.subcommand() {
		Some(("digest", matches)) => handle_digest_command(matches)?,
		Some(("exec", matches)) => handle_exec_command(matches)?,
		Some(("methods", _)) => print_methods(),
		Some(("completions", matches)) => {
			if let Some(shell) = matches.get_one::<Shell>("shell") {
				generate(
					*shell,
					&mut build_cli(),
					BIN_NAME,
					&mut io::stdout(),
				);
			}
		}
		_ => unreachable!("subcommand_required is set"),
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		build_cli().debug_assert();
	}

	#[test]
	fn digest_args_collect_in_order() {
		let m = build_cli()
			.try_get_matches_from([
				"rgd", "digest", "-m", "md5", "--method", "sha256",
				"--if-exists", "skip", "a.txt", "b.txt",
			])
			.unwrap();
		let (_, sub) = m.subcommand().unwrap();
		let methods: Vec<&String> =
			sub.get_many::<String>("method").unwrap().collect();
		assert_eq!(methods, ["md5", "sha256"]);
		assert_eq!(
			sub.get_one::<FileExistsPolicy>("if-exists"),
			Some(&FileExistsPolicy::Skip)
		);
		let files: Vec<&PathBuf> =
			sub.get_many::<PathBuf>("files").unwrap().collect();
		assert_eq!(files.len(), 2);
	}

	#[test]
	fn exec_passes_hyphenated_args_through() {
		let m = build_cli()
			.try_get_matches_from([
				"rgd", "exec", "--", "tar", "-czf", "out.tgz", ".",
			])
			.unwrap();
		let (_, sub) = m.subcommand().unwrap();
		let argv: Vec<&String> =
			sub.get_many::<String>("command").unwrap().collect();
		assert_eq!(argv, ["tar", "-czf", "out.tgz", "."]);
		assert!(!sub.get_flag("inherit-stdout"));
	}
}
