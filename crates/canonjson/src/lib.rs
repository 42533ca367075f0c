//! canonjson
//!
//! Canonical JSON for hashing, signing, and equality checks:
//! - decode arbitrary JSON with `serde_json`
//! - re-encode with sorted object keys, preserved array order, compact
//!   punctuation, and number mantissas kept as written (exponents are
//!   normalized to lowercase `e` with an explicit sign)
//! - hash the canonical bytes
//!
//! Two documents that differ only in key order or insignificant whitespace
//! canonicalize to the same bytes.
//!
//! ```
//! let out = canonjson::canonicalize(br#"{"b": 1, "a": [3, 1, 2]}"#).unwrap();
//! assert_eq!(out, br#"{"a":[3,1,2],"b":1}"#);
//! ```

pub mod config;
pub mod determinism;
pub mod errors;
pub mod pipeline;

pub use crate::config::{CanonicalizeOptions, Limits, MAX_SUPPORTED_DEPTH};
pub use crate::determinism::hashing::{HashAlg, HashDigest};
pub use crate::errors::{CanonError, CanonResult};
pub use crate::pipeline::batch::canonicalize_batch;
pub use crate::pipeline::{
    canonical_digest, canonical_digest_with, canonical_eq, canonicalize,
    canonicalize_serializable, canonicalize_str, canonicalize_value, canonicalize_value_with,
    canonicalize_with, is_canonical, CanonicalJson,
};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{validate_options, CanonicalizeOptions, Limits};
    pub use crate::determinism::decode::decode;
    pub use crate::determinism::encode::{encode, encode_into};
    pub use crate::determinism::hashing::{hash_bytes, HashAlg, HashDigest};
    pub use crate::pipeline::batch::canonicalize_batch;
    pub use crate::pipeline::{canonicalize, canonicalize_with, CanonicalJson};
    pub use crate::{CanonError, CanonResult};
}
