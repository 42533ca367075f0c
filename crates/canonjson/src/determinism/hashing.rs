//! Hashing of canonical JSON bytes.
//!
//! Canonical output exists to be hashed; this module keeps the digest step
//! next to it so that callers agree on the algorithm and on the hex form.
//!
//! Supported algorithms:
//! - sha256 (feature `sha256`)
//! - blake3 (feature `blake3`)
//!
//! Selecting an algorithm whose feature is disabled is an error, never a
//! silent fallback.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CanonError, CanonResult};

/// Hash algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlg {
    #[default]
    Sha256,
    Blake3,
}

impl HashAlg {
    pub fn parse(s: &str) -> CanonResult<Self> {
        match s {
            "sha256" => Ok(Self::Sha256),
            "blake3" => Ok(Self::Blake3),
            _ => Err(CanonError::invalid_argument(format!(
                "unsupported hash algorithm: {s}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A digest tagged with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashDigest {
    pub alg: HashAlg,
    #[serde(with = "hex_bytes")]
    pub bytes: Vec<u8>,
}

impl HashDigest {
    /// Lowercase hex of the digest bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.alg, self.to_hex())
    }
}

/// Hash raw bytes using the selected algorithm.
pub fn hash_bytes(alg: HashAlg, bytes: &[u8]) -> CanonResult<HashDigest> {
    let out = match alg {
        HashAlg::Sha256 => sha256_digest(bytes)?,
        HashAlg::Blake3 => blake3_digest(bytes)?,
    };
    Ok(HashDigest { alg, bytes: out })
}

#[cfg(feature = "sha256")]
fn sha256_digest(bytes: &[u8]) -> CanonResult<Vec<u8>> {
    use sha2::{Digest, Sha256};

    let mut h = Sha256::new();
    h.update(bytes);
    Ok(h.finalize().to_vec())
}

#[cfg(not(feature = "sha256"))]
fn sha256_digest(_bytes: &[u8]) -> CanonResult<Vec<u8>> {
    Err(CanonError::invalid_argument("sha256 support is not compiled in"))
}

#[cfg(feature = "blake3")]
fn blake3_digest(bytes: &[u8]) -> CanonResult<Vec<u8>> {
    Ok(blake3::hash(bytes).as_bytes().to_vec())
}

#[cfg(not(feature = "blake3"))]
fn blake3_digest(_bytes: &[u8]) -> CanonResult<Vec<u8>> {
    Err(CanonError::invalid_argument("blake3 support is not compiled in"))
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(d)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
