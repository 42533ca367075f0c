//! Independent calls from many threads agree with single-threaded output.

mod common;

use std::thread;

use canonjson::{canonicalize, canonicalize_batch, CanonicalizeOptions};

fn document(i: usize) -> String {
    format!(r#"{{"n":{i},"list":[{i},"x{i}"],"meta":{{"z":true,"a":null}}}}"#)
}

#[test]
fn threads_share_nothing() {
    common::init_tracing();
    let expected: Vec<Vec<u8>> = (0..32)
        .map(|i| canonicalize(document(i).as_bytes()).unwrap())
        .collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let expected = &expected;
                s.spawn(move || {
                    for i in (t..32).step_by(8) {
                        let out = canonicalize(document(i).as_bytes()).unwrap();
                        assert_eq!(&out, &expected[i]);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    });
}

#[test]
fn batch_matches_individual_calls() {
    let docs: Vec<String> = (0..64).map(document).collect();
    let inputs: Vec<&[u8]> = docs.iter().map(|d| d.as_bytes()).collect();

    let out = canonicalize_batch(&inputs, &CanonicalizeOptions::default()).unwrap();
    assert_eq!(out.len(), inputs.len());
    for (input, result) in inputs.iter().zip(out) {
        assert_eq!(result.unwrap(), canonicalize(input).unwrap());
    }
}
