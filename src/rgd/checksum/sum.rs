// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: sum.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers

//! 32-bit non-cryptographic checksums (Adler-32, CRC-32/IEEE).

use super::registry::{ChecksumAlgorithm, ChecksumExecutor, HashMethod};

pub fn catalog() -> &'static [ChecksumAlgorithm] {
	const ALGORITHMS: &[ChecksumAlgorithm] = &[
		ChecksumAlgorithm::new(HashMethod::Adler32, create_adler32),
		ChecksumAlgorithm::new(HashMethod::Crc32, create_crc32),
	];
	ALGORITHMS
}

struct Adler32Executor {
	inner: adler::Adler32,
}

impl ChecksumExecutor for Adler32Executor {
	fn update(&mut self, data: &[u8]) {
		self.inner.write_slice(data);
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		self.inner.checksum().to_be_bytes().to_vec()
	}
}

struct Crc32Executor {
	inner: crc32fast::Hasher,
}

impl ChecksumExecutor for Crc32Executor {
	fn update(&mut self, data: &[u8]) {
		self.inner.update(data);
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		self.inner.finalize().to_be_bytes().to_vec()
	}
}

fn create_adler32() -> Box<dyn ChecksumExecutor> {
	Box::new(Adler32Executor {
		inner: adler::Adler32::new(),
	})
}

fn create_crc32() -> Box<dyn ChecksumExecutor> {
	Box::new(Crc32Executor {
		inner: crc32fast::Hasher::new(),
	})
}
