// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: mod.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers
//
// Checksum methods: md5, sha1, sha256, sha512, blake2b/blake2s (256-bit)
// rendered as hex, adler32 and crc32 rendered as decimal.

pub mod crypto;
pub mod registry;
pub mod sum;

use std::io::{self, Read};

use thiserror::Error;

pub use registry::{
	algorithms, find_algorithm, ChecksumAlgorithm, ChecksumExecutor,
	Encoding, HashMethod,
};

/// Size of the chunks fed to an executor while streaming a reader.
pub const READ_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum ChecksumError {
	#[error("hashing method `{method}` is not supported")]
	UnsupportedMethod { method: String },
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Hashes everything `reader` yields with the named method.
pub fn checksum<R: Read>(
	reader: R,
	method: &str,
) -> Result<String, ChecksumError> {
	let algorithm = find_algorithm(method)?;
	Ok(algorithm.hash_reader(reader)?)
}

pub fn checksum_bytes(
	data: &[u8],
	method: &str,
) -> Result<String, ChecksumError> {
	Ok(find_algorithm(method)?.hash_bytes(data))
}
