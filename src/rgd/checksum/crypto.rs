// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: crypto.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers

//! Cryptographic digests backed by the RustCrypto `digest` traits.

use blake2::digest::consts::U32;
use digest::DynDigest;

use super::registry::{ChecksumAlgorithm, ChecksumExecutor, HashMethod};

type Blake2b256 = blake2::Blake2b<U32>;

pub fn catalog() -> &'static [ChecksumAlgorithm] {
	const ALGORITHMS: &[ChecksumAlgorithm] = &[
		ChecksumAlgorithm::new(HashMethod::Md5, create::<md5::Md5>),
		ChecksumAlgorithm::new(HashMethod::Sha1, create::<sha1::Sha1>),
		ChecksumAlgorithm::new(HashMethod::Sha256, create::<sha2::Sha256>),
		ChecksumAlgorithm::new(HashMethod::Sha512, create::<sha2::Sha512>),
		ChecksumAlgorithm::new(HashMethod::Blake2b, create::<Blake2b256>),
		ChecksumAlgorithm::new(HashMethod::Blake2s, create::<blake2::Blake2s256>),
	];
	ALGORITHMS
}

struct DigestExecutor<D> {
	inner: D,
}

impl<D> ChecksumExecutor for DigestExecutor<D>
where
	D: DynDigest + Send + 'static,
{
	fn update(&mut self, data: &[u8]) {
		DynDigest::update(&mut self.inner, data);
	}

	fn finalize(mut self: Box<Self>) -> Vec<u8> {
		DynDigest::finalize_reset(&mut self.inner).to_vec()
	}
}

fn create<D>() -> Box<dyn ChecksumExecutor>
where
	D: DynDigest + Default + Send + 'static,
{
	Box::new(DigestExecutor { inner: D::default() })
}
