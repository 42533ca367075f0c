//! Canonicalization pipeline.
//!
//! Every entry point runs the same three steps:
//! - validate options
//! - decode input (or take a caller-provided value)
//! - encode canonically
//!
//! Calls share no state. Each one owns its value tree and output buffer and
//! drops the tree before returning, so every function here is safe to call
//! from many threads at once.

use std::fmt;

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::config::{validate_options, CanonicalizeOptions};
use crate::determinism::decode::{decode, max_depth};
use crate::determinism::encode::encode;
use crate::determinism::hashing::{hash_bytes, HashAlg, HashDigest};
use crate::errors::{CanonError, CanonResult};

pub mod batch;

/// Canonicalize JSON bytes with default options.
pub fn canonicalize(input: &[u8]) -> CanonResult<Vec<u8>> {
    canonicalize_with(input, &CanonicalizeOptions::default())
}

/// Canonicalize JSON bytes with explicit options.
pub fn canonicalize_with(input: &[u8], opts: &CanonicalizeOptions) -> CanonResult<Vec<u8>> {
    validate_options(opts)?;

    let value = decode(input, &opts.limits).map_err(|e| {
        tracing::debug!(code = e.code(), input_bytes = input.len(), "canonicalize failed");
        e
    })?;
    let out = encode(&value, &opts.limits)?;

    tracing::debug!(
        input_bytes = input.len(),
        output_bytes = out.len(),
        "canonicalized JSON document"
    );
    Ok(out)
}

/// Canonicalize JSON text, returning text.
pub fn canonicalize_str(input: &str) -> CanonResult<String> {
    let out = canonicalize(input.as_bytes())?;
    // Encoder only writes UTF-8 taken from valid `str`s plus ASCII punctuation.
    String::from_utf8(out).map_err(|e| CanonError::encode(format!("non UTF-8 output: {e}")))
}

/// Canonicalize an already-parsed value with default options.
pub fn canonicalize_value(value: &Value) -> CanonResult<Vec<u8>> {
    canonicalize_value_with(value, &CanonicalizeOptions::default())
}

/// Canonicalize an already-parsed value with explicit options.
///
/// The depth limit is checked up front with an iterative walk.
pub fn canonicalize_value_with(value: &Value, opts: &CanonicalizeOptions) -> CanonResult<Vec<u8>> {
    validate_options(opts)?;

    // The encoder guards depth too, but only after writing a prefix; this
    // rejects an over-deep tree before any bytes are produced.
    if max_depth(value) > opts.limits.max_depth {
        return Err(CanonError::DepthExceeded {
            limit: opts.limits.max_depth,
        });
    }
    encode(value, &opts.limits)
}

/// Canonicalize any serializable type by converting it to a `Value` first.
pub fn canonicalize_serializable<T: Serialize + ?Sized>(value: &T) -> CanonResult<Vec<u8>> {
    let v = serde_json::to_value(value)
        .map_err(|e| CanonError::encode(format!("failed to convert to JSON value: {e}")))?;
    canonicalize_value(&v)
}

/// Compare two JSON documents for canonical equality.
///
/// Returns true if their canonical forms are byte-equal.
pub fn canonical_eq(a: &[u8], b: &[u8]) -> CanonResult<bool> {
    Ok(canonicalize(a)? == canonicalize(b)?)
}

/// Whether `input` is already in canonical form, byte for byte.
pub fn is_canonical(input: &[u8]) -> CanonResult<bool> {
    Ok(canonicalize(input)? == input)
}

/// Digest of the canonical form of `input`.
pub fn canonical_digest(input: &[u8], alg: HashAlg) -> CanonResult<HashDigest> {
    canonical_digest_with(input, &CanonicalizeOptions::default().with_hash(alg))
}

/// Digest of the canonical form of `input`, using `opts.hash`.
pub fn canonical_digest_with(input: &[u8], opts: &CanonicalizeOptions) -> CanonResult<HashDigest> {
    let bytes = canonicalize_with(input, opts)?;
    hash_bytes(opts.hash, &bytes)
}

/// Owned canonical JSON output.
///
/// Cheap to clone, so it can be used directly as a cache or map key.
///
/// The UTF-8 check happens once, at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalJson(Bytes);

impl CanonicalJson {
    /// Canonicalize `input` with `opts`.
    pub fn from_slice(input: &[u8], opts: &CanonicalizeOptions) -> CanonResult<Self> {
        Self::from_encoded(canonicalize_with(input, opts)?)
    }

    /// Canonicalize an existing value with `opts`.
    pub fn from_value(value: &Value, opts: &CanonicalizeOptions) -> CanonResult<Self> {
        Self::from_encoded(canonicalize_value_with(value, opts)?)
    }

    fn from_encoded(bytes: Vec<u8>) -> CanonResult<Self> {
        let text = String::from_utf8(bytes)
            .map_err(|e| CanonError::encode(format!("non UTF-8 output: {e}")))?;
        Ok(Self(Bytes::from(text)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: every constructor goes through `from_encoded`, which
        // validated these bytes as UTF-8, and `Bytes` is immutable.
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn digest(&self, alg: HashAlg) -> CanonResult<HashDigest> {
        hash_bytes(alg, &self.0)
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl AsRef<[u8]> for CanonicalJson {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for CanonicalJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
