//! Batch canonicalization.
//!
//! With the `parallel` feature the batch runs on the rayon pool; without it
//! the same function runs sequentially. Results always line up with inputs.

use crate::config::{validate_options, CanonicalizeOptions};
use crate::errors::CanonResult;
use crate::pipeline::canonicalize_with;

/// Canonicalize independent documents, one result per input, in input order.
///
/// Invalid options fail the whole batch; per-document failures are reported
/// in place.
pub fn canonicalize_batch(
    inputs: &[&[u8]],
    opts: &CanonicalizeOptions,
) -> CanonResult<Vec<CanonResult<Vec<u8>>>> {
    validate_options(opts)?;
    tracing::debug!(documents = inputs.len(), "canonicalizing batch");
    Ok(run(inputs, opts))
}

#[cfg(feature = "parallel")]
fn run(inputs: &[&[u8]], opts: &CanonicalizeOptions) -> Vec<CanonResult<Vec<u8>>> {
    use rayon::prelude::*;

    inputs
        .par_iter()
        .map(|input| canonicalize_with(input, opts))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run(inputs: &[&[u8]], opts: &CanonicalizeOptions) -> Vec<CanonResult<Vec<u8>>> {
    inputs
        .iter()
        .map(|input| canonicalize_with(input, opts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;

    #[test]
    fn results_line_up_with_inputs() {
        let inputs: [&[u8]; 3] = [br#"{"b":1,"a":2}"#, b"{invalid", b"[ 1 , 2 ]"];
        let out = canonicalize_batch(&inputs, &CanonicalizeOptions::default()).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].as_deref().unwrap(), br#"{"a":2,"b":1}"#);
        assert!(out[1].as_ref().unwrap_err().is_parse());
        assert_eq!(out[2].as_deref().unwrap(), b"[1,2]");
    }

    #[test]
    fn invalid_options_fail_whole_batch() {
        let opts = CanonicalizeOptions::default().with_limits(Limits {
            max_input_bytes: 0,
            ..Limits::default()
        });
        assert!(canonicalize_batch(&[&b"{}"[..]], &opts).is_err());
    }

    #[test]
    fn empty_batch() {
        let out = canonicalize_batch(&[], &CanonicalizeOptions::default()).unwrap();
        assert!(out.is_empty());
    }
}
