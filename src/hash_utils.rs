//! Hash Utilities
//! Provides content digests rendered as lowercase hex.
//! MD5 is kept for compatibility with existing checksums only; it is not a
//! security primitive. Use SHA-256 where collision resistance matters.
//! Author: kartik4091
//! Created: 2026-10-18

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::Result;

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    MD5,
    SHA256,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashAlgorithm::MD5 => "MD5",
            HashAlgorithm::SHA256 => "SHA256",
        };
        write!(f, "{}", name)
    }
}

/// Hash result (digest + algorithm)
#[derive(Debug, Clone)]
pub struct HashResult {
    pub algorithm: HashAlgorithm,
    pub digest: String,
}

/// Hashes a byte slice
pub fn hash_bytes(data: &[u8], algo: HashAlgorithm) -> HashResult {
    let digest = match algo {
        HashAlgorithm::MD5 => hex::encode(md5::compute(data).0),
        HashAlgorithm::SHA256 => {
            let mut hasher = Sha256::new();
            hasher.update(data);
            hex::encode(hasher.finalize())
        }
    };

    HashResult { algorithm: algo, digest }
}

/// MD5 of the UTF-8 bytes of `text`, as 32 lowercase hex digits.
pub fn md5_hex(text: &str) -> String {
    hash_bytes(text.as_bytes(), HashAlgorithm::MD5).digest
}

/// Hashes file content at given path
pub fn hash_file(path: &Path, algo: HashAlgorithm) -> Result<HashResult> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    Ok(hash_bytes(&buffer, algo))
}

/// Verifies content hash matches the expected value
pub fn verify_hash(data: &[u8], expected: &str, algo: HashAlgorithm) -> bool {
    hash_bytes(data, algo).digest.eq_ignore_ascii_case(expected)
}
