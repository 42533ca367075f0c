//! Decode → normalize → encode building blocks.
//!
//! - [`decode`] parses bytes into `serde_json::Value`
//! - [`encode`] writes a value in canonical form
//! - [`stable_sort`] defines canonical key order
//! - [`hashing`] digests canonical bytes

pub mod decode;
pub mod encode;
pub mod hashing;
pub mod stable_sort;
