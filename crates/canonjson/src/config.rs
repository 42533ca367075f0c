//! Configuration structures for canonjson.
//!
//! Options are plain values passed in by the caller. The crate never reads
//! environment variables, so the same options and the same input always give
//! the same output.

use crate::determinism::hashing::HashAlg;
use crate::errors::{CanonError, CanonResult};

/// Deepest nesting the underlying parser accepts before its own recursion
/// guard trips. `Limits::max_depth` may not exceed this.
pub const MAX_SUPPORTED_DEPTH: usize = 127;

/// Options for a canonicalization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalizeOptions {
    pub limits: Limits,
    /// Algorithm used by digest helpers.
    pub hash: HashAlg,
}

impl Default for CanonicalizeOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            hash: HashAlg::default(),
        }
    }
}

impl CanonicalizeOptions {
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_hash(mut self, hash: HashAlg) -> Self {
        self.hash = hash;
        self
    }
}

/// Resource limits applied to a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes, checked before parsing.
    pub max_input_bytes: usize,
    /// Maximum array/object nesting. A scalar has depth 0, `[]` depth 1.
    pub max_depth: usize,
}

impl Limits {
    /// Tight limits for untrusted, signature-bound payloads.
    pub const fn strict() -> Self {
        Self {
            max_input_bytes: 1024 * 1024,
            max_depth: 32,
        }
    }

    /// Widest limits the decoder supports.
    pub const fn lenient() -> Self {
        Self {
            max_input_bytes: 256 * 1024 * 1024,
            max_depth: MAX_SUPPORTED_DEPTH,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: 16 * 1024 * 1024,
            max_depth: 64,
        }
    }
}

/// Validate a full options object.
pub fn validate_options(opts: &CanonicalizeOptions) -> CanonResult<()> {
    validate_limits(&opts.limits)
}

/// Validate limits on their own.
pub fn validate_limits(limits: &Limits) -> CanonResult<()> {
    if limits.max_input_bytes == 0 {
        return Err(CanonError::invalid_argument(
            "max_input_bytes must be greater than zero",
        ));
    }

    if limits.max_depth == 0 {
        return Err(CanonError::invalid_argument(
            "max_depth must be greater than zero",
        ));
    }

    if limits.max_depth > MAX_SUPPORTED_DEPTH {
        return Err(CanonError::invalid_argument(format!(
            "max_depth must not exceed {MAX_SUPPORTED_DEPTH}"
        )));
    }

    Ok(())
}
