// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgendigest
// File: checksums.rs
// Author: rustgendigest maintainers
// Copyright (c) 2026 rustgendigest maintainers

use hex_literal::hex;
use rustgendigest::rgd::checksum::{checksum, checksum_bytes};

const PHRASE: &str = "The quick brown fox jumps over the lazy dog";

fn digest_bytes(method: &str) -> Vec<u8> {
	let rendered = checksum(PHRASE.as_bytes(), method)
		.unwrap_or_else(|err| panic!("{method}: {err}"));
	hex::decode(rendered).expect("hex output")
}

#[test]
fn lib_md5_checksum() {
	assert_eq!(
		digest_bytes("md5")[..],
		hex!("9e107d9d372bb6826bd81d3542a419d6")
	);
}

#[test]
fn lib_sha1_checksum() {
	assert_eq!(
		digest_bytes("sha1")[..],
		hex!("2FD4E1C67A2D28FCED849EE1BB76E7391B93EB12")
	);
}

#[test]
fn lib_sha256_checksum() {
	assert_eq!(
		digest_bytes("sha256")[..],
		hex!("d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592")
	);
}

#[test]
fn lib_sha512_checksum() {
	assert_eq!(
		digest_bytes("sha512")[..],
		hex!("07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb642e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6")
	);
}

#[test]
fn lib_blake2b_checksum_is_256_bit() {
	let digest = digest_bytes("blake2b");
	assert_eq!(digest.len(), 32);
	assert_eq!(
		digest[..],
		hex!("01718cec35cd3d796dd00020e0bfecb473ad23457d063b75eff29c0ffa2e58a9")
	);
}

#[test]
fn lib_blake2s_checksum() {
	assert_eq!(
		digest_bytes("blake2s")[..],
		hex!("606beeec743ccbeff6cbcdf5d5302aa855c256c29b88c8ed331ea1a6bf3c8812")
	);
}

#[test]
fn lib_sums_render_decimal() {
	assert_eq!(
		checksum_bytes(PHRASE.as_bytes(), "crc32").unwrap(),
		"1095738169"
	);
	assert_eq!(
		checksum_bytes(PHRASE.as_bytes(), "adler32").unwrap(),
		"1541148634"
	);
}

#[test]
fn lib_hex_output_is_lowercase() {
	let rendered = checksum_bytes(PHRASE.as_bytes(), "sha1").unwrap();
	assert_eq!(rendered, rendered.to_ascii_lowercase());
}
