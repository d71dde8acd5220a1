// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: digest_file.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers

//! Sidecar digest files.
//!
//! A digest file is named after the first input file with a `.DIGEST`
//! suffix and holds one section per method:
//!
//! ```text
//! # MD5 HASH
//! <hash>  <file>
//! ```

use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::rgd::checksum::{
	find_algorithm, ChecksumAlgorithm, ChecksumError,
};

pub const DIGEST_SUFFIX: &str = ".DIGEST";

/// What to do when the digest file is already present.
#[derive(
	clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum FileExistsPolicy {
	#[default]
	Overwrite,
	Fail,
	Skip,
}

#[derive(Clone, Debug, Default)]
pub struct DigestOptions {
	/// Directory the digest file is written to. `None` means the
	/// current working directory.
	pub output_dir: Option<PathBuf>,
	pub if_exists: FileExistsPolicy,
}

#[derive(Debug, Error)]
pub enum DigestError {
	#[error("cannot derive a digest file name from the first input file")]
	NoBaseName,
	#[error("digest file {} already exists", path.display())]
	DigestExists { path: PathBuf },
	#[error("failed to create {}: {source}", path.display())]
	Create {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to read {} artifact: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to write {}: {source}", path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error(transparent)]
	Checksum(#[from] ChecksumError),
}

/// `<basename of first>.DIGEST`
pub fn digest_file_name<P: AsRef<Path>>(
	first: P,
) -> Result<PathBuf, DigestError> {
	let base =
		first.as_ref().file_name().ok_or(DigestError::NoBaseName)?;
	let mut name = base.to_os_string();
	name.push(DIGEST_SUFFIX);
	Ok(PathBuf::from(name))
}

/// Writes `<first>.DIGEST` into the current directory and returns
/// `files` with the digest file appended.
pub fn write_checksums<P, M>(
	files: &[P],
	methods: &[M],
) -> Result<Vec<PathBuf>, DigestError>
where
	P: AsRef<Path>,
	M: AsRef<str>,
{
	write_checksums_with(files, methods, &DigestOptions::default())
}

pub fn write_checksums_with<P, M>(
	files: &[P],
	methods: &[M],
	options: &DigestOptions,
) -> Result<Vec<PathBuf>, DigestError>
where
	P: AsRef<Path>,
	M: AsRef<str>,
{
	let first = files.first().ok_or(DigestError::NoBaseName)?;
	let name = digest_file_name(first)?;
	let digest_path = match &options.output_dir {
		Some(dir) => dir.join(name),
		None => name,
	};

	let mut listed: Vec<PathBuf> =
		files.iter().map(|file| file.as_ref().to_path_buf()).collect();

	let Some(handle) = open_digest(&digest_path, options.if_exists)?
	else {
		info!(
			path = %digest_path.display(),
			"digest file exists, leaving it untouched"
		);
		listed.push(digest_path);
		return Ok(listed);
	};

	let mut writer =
		DigestWriter::new(BufWriter::new(handle), digest_path.clone());
	let written = methods
		.iter()
		.try_for_each(|method| {
			writer.write_section(method.as_ref(), files)
		});
	// Flush whatever made it out before a failure so the partial file
	// reflects every completed record.
	let flushed = writer.finish();
	written?;
	flushed?;

	info!(
		path = %digest_path.display(),
		files = files.len(),
		methods = methods.len(),
		"digest file written"
	);
	listed.push(digest_path);
	Ok(listed)
}

fn open_digest(
	path: &Path,
	policy: FileExistsPolicy,
) -> Result<Option<File>, DigestError> {
	let opened = match policy {
		FileExistsPolicy::Overwrite => File::create(path),
		FileExistsPolicy::Fail | FileExistsPolicy::Skip => {
			OpenOptions::new().write(true).create_new(true).open(path)
		}
	};
	match opened {
		Ok(file) => Ok(Some(file)),
		Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
			match policy {
				FileExistsPolicy::Skip => Ok(None),
				_ => Err(DigestError::DigestExists {
					path: path.to_path_buf(),
				}),
			}
		}
		Err(source) => Err(DigestError::Create {
			path: path.to_path_buf(),
			source,
		}),
	}
}

/// Formats digest sections onto any writer.
pub struct DigestWriter<W: Write> {
	out: W,
	path: PathBuf,
}

impl<W: Write> DigestWriter<W> {
	/// `path` names the destination in error messages.
	pub fn new(out: W, path: PathBuf) -> Self {
		Self { out, path }
	}

	/// Resolves `method`, then writes its header and one record per file.
	///
	/// An unknown method fails before its header is written, so a failed
	/// run never ends in an empty `# <METHOD> HASH` section.
	pub fn write_section<P: AsRef<Path>>(
		&mut self,
		method: &str,
		files: &[P],
	) -> Result<(), DigestError> {
		let algorithm = find_algorithm(method)?;
		let header = format!("# {} HASH", algorithm.method.header_label());
		self.write_line(header.as_bytes())?;
		for file in files {
			self.write_record(algorithm, file.as_ref())?;
		}
		Ok(())
	}

	fn write_record(
		&mut self,
		algorithm: &ChecksumAlgorithm,
		file: &Path,
	) -> Result<(), DigestError> {
		let hash = {
			let handle =
				File::open(file).map_err(|source| DigestError::Read {
					path: file.to_path_buf(),
					source,
				})?;
			algorithm.hash_reader(BufReader::new(handle)).map_err(
				|source| DigestError::Read {
					path: file.to_path_buf(),
					source,
				},
			)?
		};
		debug!(
			method = %algorithm.method,
			file = %file.display(),
			%hash,
			"hashed artifact"
		);
		let mut line = hash.into_bytes();
		line.extend_from_slice(b"  ");
		line.extend_from_slice(&path_bytes(file));
		self.write_line(&line)
	}

	fn write_line(&mut self, line: &[u8]) -> Result<(), DigestError> {
		self.out
			.write_all(line)
			.and_then(|()| self.out.write_all(b"\n"))
			.map_err(|source| DigestError::Write {
				path: self.path.clone(),
				source,
			})
	}

	pub fn finish(mut self) -> Result<W, DigestError> {
		self.out.flush().map_err(|source| DigestError::Write {
			path: self.path.clone(),
			source,
		})?;
		Ok(self.out)
	}
}

/// Record paths are written as raw bytes so non-UTF-8 names survive.
#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
	use std::os::unix::ffi::OsStrExt;
	Cow::Borrowed(path.as_os_str().as_bytes())
}

// Lossy: non-Unicode names get U+FFFD replacements.
#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
	match path.to_string_lossy() {
		Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
		Cow::Owned(text) => Cow::Owned(text.into_bytes()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	/// Accepts `budget` bytes, then fails every write.
	struct FailingWriter {
		written: Vec<u8>,
		budget: usize,
	}

	impl Write for FailingWriter {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			if self.written.len() + buf.len() > self.budget {
				return Err(io::Error::new(
					io::ErrorKind::WriteZero,
					"no space left",
				));
			}
			self.written.extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn digest_name_uses_base_name_only() {
		let name = digest_file_name("build/out/app-1.0.tar.gz").unwrap();
		assert_eq!(name, PathBuf::from("app-1.0.tar.gz.DIGEST"));
		assert!(matches!(
			digest_file_name(".."),
			Err(DigestError::NoBaseName)
		));
	}

	#[test]
	fn empty_file_list_is_an_error() {
		let files: [&str; 0] = [];
		let err = write_checksums(&files, &["md5"]).unwrap_err();
		assert!(matches!(err, DigestError::NoBaseName));
	}

	#[test]
	fn write_failure_aborts_section() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("input.bin");
		fs::write(&input, b"payload").unwrap();

		let sink = FailingWriter {
			written: Vec::new(),
			budget: "# MD5 HASH\n".len(),
		};
		let mut writer =
			DigestWriter::new(sink, PathBuf::from("input.bin.DIGEST"));
		let err = writer.write_section("md5", &[&input]).unwrap_err();
		match err {
			DigestError::Write { path, source } => {
				assert_eq!(path, PathBuf::from("input.bin.DIGEST"));
				assert_eq!(source.kind(), io::ErrorKind::WriteZero);
			}
			other => panic!("unexpected error {other:?}"),
		}
		let sink = writer.finish().unwrap();
		assert_eq!(sink.written, b"# MD5 HASH\n");
	}

	#[cfg(unix)]
	#[test]
	fn record_keeps_non_utf8_path_bytes() {
		use std::ffi::OsStr;
		use std::os::unix::ffi::OsStrExt;

		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join(OsStr::from_bytes(b"art\xff.bin"));
		fs::write(&input, b"").unwrap();

		let mut writer = DigestWriter::new(Vec::new(), PathBuf::new());
		writer.write_section("crc32", &[&input]).unwrap();
		let written = writer.finish().unwrap();

		let mut expected = b"# CRC32 HASH\n0  ".to_vec();
		expected.extend_from_slice(input.as_os_str().as_bytes());
		expected.push(b'\n');
		assert_eq!(written, expected);
		assert!(written.windows(4).any(|w| w == b"t\xff.b"));
	}

	#[test]
	fn section_layout_in_memory() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("empty");
		fs::write(&input, b"").unwrap();

		let mut writer = DigestWriter::new(Vec::new(), PathBuf::new());
		writer.write_section("crc32", &[&input]).unwrap();
		writer.write_section("Adler32", &[&input]).unwrap();
		let text = String::from_utf8(writer.finish().unwrap()).unwrap();
		assert_eq!(
			text,
			format!(
				"# CRC32 HASH\n0  {0}\n# ADLER32 HASH\n1  {0}\n",
				input.display()
			)
		);
	}
}
