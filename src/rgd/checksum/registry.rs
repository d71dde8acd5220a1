// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: registry.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers

//! Registry of supported checksum methods. Each entry pairs a method with
//! a factory for a streaming executor and the rule used to render the
//! finished value.

use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

use strum::{EnumIter, IntoEnumIterator};

use super::{crypto, sum, ChecksumError, READ_CHUNK_SIZE};

pub trait ChecksumExecutor: Send + 'static {
	fn update(&mut self, data: &[u8]);
	fn finalize(self: Box<Self>) -> Vec<u8>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum HashMethod {
	Md5,
	Sha1,
	Sha256,
	Sha512,
	Adler32,
	Crc32,
	Blake2b,
	Blake2s,
}

impl HashMethod {
	pub fn all() -> impl Iterator<Item = HashMethod> {
		HashMethod::iter()
	}

	/// Canonical lowercase identifier, as accepted on the command line.
	pub const fn identifier(self) -> &'static str {
		match self {
			HashMethod::Md5 => "md5",
			HashMethod::Sha1 => "sha1",
			HashMethod::Sha256 => "sha256",
			HashMethod::Sha512 => "sha512",
			HashMethod::Adler32 => "adler32",
			HashMethod::Crc32 => "crc32",
			HashMethod::Blake2b => "blake2b",
			HashMethod::Blake2s => "blake2s",
		}
	}

	/// Rendering rule for this method's finished value.
	pub const fn encoding(self) -> Encoding {
		match self {
			HashMethod::Adler32 | HashMethod::Crc32 => Encoding::Decimal,
			HashMethod::Md5
			| HashMethod::Sha1
			| HashMethod::Sha256
			| HashMethod::Sha512
			| HashMethod::Blake2b
			| HashMethod::Blake2s => Encoding::Hex,
		}
	}

	/// Label used in digest file section headers.
	pub fn header_label(self) -> String {
		self.identifier().to_ascii_uppercase()
	}

	pub fn algorithm(self) -> Option<&'static ChecksumAlgorithm> {
		algorithms().find(|alg| alg.method == self)
	}
}

impl fmt::Display for HashMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.identifier())
	}
}

impl FromStr for HashMethod {
	type Err = ChecksumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		HashMethod::iter()
			.find(|method| method.identifier().eq_ignore_ascii_case(s))
			.ok_or_else(|| ChecksumError::UnsupportedMethod {
				method: s.to_string(),
			})
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Encoding {
	/// Lowercase hexadecimal of the raw digest bytes.
	Hex,
	/// Base-10 unsigned value of a big-endian 32-bit sum.
	Decimal,
}

impl Encoding {
	pub fn render(self, value: &[u8]) -> String {
		match self {
			Encoding::Hex => hex::encode(value),
			Encoding::Decimal => value
				.iter()
				.fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
				.to_string(),
		}
	}
}

pub type ChecksumFactory = fn() -> Box<dyn ChecksumExecutor>;

#[derive(Clone, Copy)]
pub struct ChecksumAlgorithm {
	pub method: HashMethod,
	pub encoding: Encoding,
	pub factory: ChecksumFactory,
}

impl ChecksumAlgorithm {
	pub const fn new(method: HashMethod, factory: ChecksumFactory) -> Self {
		Self {
			method,
			encoding: method.encoding(),
			factory,
		}
	}

	pub fn executor(&self) -> Box<dyn ChecksumExecutor> {
		(self.factory)()
	}

	/// Streams `reader` through a fresh executor and renders the result.
	pub fn hash_reader<R: Read>(&self, mut reader: R) -> io::Result<String> {
		let mut executor = self.executor();
		let mut buffer = vec![0; READ_CHUNK_SIZE];
		loop {
			let count = match reader.read(&mut buffer) {
				Ok(0) => break,
				Ok(count) => count,
				Err(err) if err.kind() == io::ErrorKind::Interrupted => {
					continue
				}
				Err(err) => return Err(err),
			};
			executor.update(&buffer[..count]);
		}
		Ok(self.encoding.render(&executor.finalize()))
	}

	pub fn hash_bytes(&self, data: &[u8]) -> String {
		let mut executor = self.executor();
		executor.update(data);
		self.encoding.render(&executor.finalize())
	}
}

impl fmt::Debug for ChecksumAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ChecksumAlgorithm")
			.field("method", &self.method)
			.field("encoding", &self.encoding)
			.finish()
	}
}

pub fn algorithms() -> impl Iterator<Item = &'static ChecksumAlgorithm> {
	crypto::catalog().iter().chain(sum::catalog().iter())
}

/// Resolves a method name to its registry entry.
pub fn find_algorithm(
	identifier: &str,
) -> Result<&'static ChecksumAlgorithm, ChecksumError> {
	let method: HashMethod = identifier.parse()?;
	method.algorithm().ok_or_else(|| ChecksumError::UnsupportedMethod {
		method: identifier.to_string(),
	})
}
