//! Decoding of raw JSON bytes into the value model.
//!
//! Grammar handling is delegated to `serde_json`; this module only adds the
//! size and depth limits and maps failures into `CanonError`.
//!
//! Notes:
//! - numbers are kept as text (`arbitrary_precision`): the mantissa exactly
//!   as written, the exponent marker lowercased to `e`, and the exponent
//!   sign always explicit (`1E2` and `1e+2` both become `1e+2`)
//! - duplicate object keys resolve last-write-wins
//! - a leading UTF-8 BOM is rejected like any other stray byte

use serde_json::Value;

use crate::config::Limits;
use crate::errors::{CanonError, CanonResult};

/// Parse JSON bytes into a `Value`, enforcing `limits`.
pub fn decode(bytes: &[u8], limits: &Limits) -> CanonResult<Value> {
    if bytes.len() > limits.max_input_bytes {
        return Err(CanonError::InputTooLarge {
            size: bytes.len(),
            limit: limits.max_input_bytes,
        });
    }

    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        if is_recursion_limit(&e) {
            CanonError::DepthExceeded {
                limit: limits.max_depth,
            }
        } else {
            CanonError::from_parse(&e)
        }
    })?;

    let depth = max_depth(&value);
    if depth > limits.max_depth {
        return Err(CanonError::DepthExceeded {
            limit: limits.max_depth,
        });
    }

    tracing::trace!(bytes = bytes.len(), depth, "decoded JSON document");
    Ok(value)
}

/// Nesting depth of a value: 0 for scalars, 1 for a flat container.
///
/// Walks with an explicit stack so caller-built trees of any depth are safe.
pub fn max_depth(value: &Value) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(&Value, usize)> = vec![(value, 0)];

    while let Some((v, depth)) = stack.pop() {
        match v {
            Value::Array(items) => {
                deepest = deepest.max(depth + 1);
                stack.extend(items.iter().map(|child| (child, depth + 1)));
            }
            Value::Object(map) => {
                deepest = deepest.max(depth + 1);
                stack.extend(map.values().map(|child| (child, depth + 1)));
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }

    deepest
}

// serde_json has no public error code for its recursion guard; the Display
// message is the only stable signal it exposes.
fn is_recursion_limit(err: &serde_json::Error) -> bool {
    err.is_syntax() && err.to_string().starts_with("recursion limit exceeded")
}
