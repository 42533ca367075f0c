//! Canonical encoder.
//!
//! Rules:
//! - no whitespace between tokens
//! - object keys in byte-wise order (see `stable_sort`)
//! - array order preserved
//! - numbers emitted as the decoder's text: mantissa as written, lowercase
//!   `e`, explicit exponent sign
//! - strings escape `"`, `\` and C0 controls; everything else is raw UTF-8
//!
//! The encoder tracks nesting and refuses to go past `Limits::max_depth`, so
//! caller-built values cannot drive it into unbounded recursion.

use std::io::Write;

use serde_json::{Map, Number, Value};

use crate::config::Limits;
use crate::determinism::stable_sort::sorted_entries;
use crate::errors::{CanonError, CanonResult};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Encode a value into canonical bytes.
pub fn encode(value: &Value, limits: &Limits) -> CanonResult<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(value, limits, &mut out)?;
    tracing::trace!(bytes = out.len(), "encoded canonical JSON");
    Ok(out)
}

/// Encode a value, appending canonical bytes to `out`.
///
/// On error `out` may hold a partial prefix; callers that expose output must
/// discard it.
pub fn encode_into(value: &Value, limits: &Limits, out: &mut Vec<u8>) -> CanonResult<()> {
    let mut enc = Encoder {
        out,
        max_depth: limits.max_depth,
    };
    enc.value(value, 0)
}

struct Encoder<'a> {
    out: &'a mut Vec<u8>,
    max_depth: usize,
}

impl Encoder<'_> {
    fn value(&mut self, value: &Value, depth: usize) -> CanonResult<()> {
        match value {
            Value::Null => self.out.extend_from_slice(b"null"),
            Value::Bool(true) => self.out.extend_from_slice(b"true"),
            Value::Bool(false) => self.out.extend_from_slice(b"false"),
            Value::Number(n) => self.number(n)?,
            Value::String(s) => write_string(self.out, s),
            Value::Array(items) => self.array(items, depth)?,
            Value::Object(map) => self.object(map, depth)?,
        }
        Ok(())
    }

    fn enter(&self, depth: usize) -> CanonResult<usize> {
        let next = depth + 1;
        if next > self.max_depth {
            return Err(CanonError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(next)
    }

    fn number(&mut self, n: &Number) -> CanonResult<()> {
        // With arbitrary_precision the Display impl yields the text kept by
        // the parser (exponent already normalized), or ryu/itoa output for
        // built values.
        write!(self.out, "{n}").map_err(|e| CanonError::encode(format!("number: {e}")))
    }

    fn array(&mut self, items: &[Value], depth: usize) -> CanonResult<()> {
        let depth = self.enter(depth)?;
        self.out.push(b'[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(b',');
            }
            self.value(item, depth)?;
        }
        self.out.push(b']');
        Ok(())
    }

    fn object(&mut self, map: &Map<String, Value>, depth: usize) -> CanonResult<()> {
        let depth = self.enter(depth)?;
        self.out.push(b'{');
        for (i, (key, item)) in sorted_entries(map).into_iter().enumerate() {
            if i > 0 {
                self.out.push(b',');
            }
            write_string(self.out, key);
            self.out.push(b':');
            self.value(item, depth)?;
        }
        self.out.push(b'}');
        Ok(())
    }
}

/// Write a quoted, escaped JSON string.
pub fn write_string(out: &mut Vec<u8>, s: &str) {
    out.push(b'"');

    let bytes = s.as_bytes();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let escape: &[u8] = match b {
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            0x08 => b"\\b",
            0x0C => b"\\f",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            0x00..=0x1F => {
                out.extend_from_slice(&bytes[start..i]);
                out.extend_from_slice(b"\\u00");
                out.push(HEX[(b >> 4) as usize]);
                out.push(HEX[(b & 0x0F) as usize]);
                start = i + 1;
                continue;
            }
            _ => continue,
        };
        out.extend_from_slice(&bytes[start..i]);
        out.extend_from_slice(escape);
        start = i + 1;
    }
    out.extend_from_slice(&bytes[start..]);

    out.push(b'"');
}
