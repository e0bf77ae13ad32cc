// =========================================================================
// FALSIFY-BS: ByteString value-semantics contract (sentir primitives)
//
// The rest of the crate assumes ByteString behaves as an independent,
// deep-copied value: maps key on it, the tokenizer mutates buffers of it,
// and the CSV parser hands copies across module boundaries. These tests try
// to falsify the contract rather than demonstrate it.
// =========================================================================

use super::*;

/// FALSIFY-BS-001: clone produces an equal value
#[test]
fn falsify_bs_001_clone_equals_source() {
    let s = ByteString::from("tweet text");
    let copy = s.clone();
    assert_eq!(copy, s, "FALSIFIED BS-001: clone differs from source");
}

/// FALSIFY-BS-002: clones share no storage
#[test]
fn falsify_bs_002_clone_is_independent() {
    let mut a = ByteString::from("shared?");
    let b = a.clone();
    a.push(b'!');
    assert_ne!(
        a, b,
        "FALSIFIED BS-002: mutation of one copy leaked into the other"
    );
    assert_eq!(
        b,
        ByteString::from("shared?"),
        "FALSIFIED BS-002: clone changed after source mutation"
    );
}

/// FALSIFY-BS-003: concatenation preserves length and byte layout
#[test]
fn falsify_bs_003_concat_layout() {
    let a = ByteString::from_bytes(&[1, 2, 3]);
    let b = ByteString::from_bytes(&[4, 5]);
    let joined = &a + &b;

    assert_eq!(
        joined.len(),
        a.len() + b.len(),
        "FALSIFIED BS-003: concat length mismatch"
    );
    assert_eq!(
        &joined.as_bytes()[..a.len()],
        a.as_bytes(),
        "FALSIFIED BS-003: concat does not start with lhs bytes"
    );
    assert_eq!(
        &joined.as_bytes()[a.len()..],
        b.as_bytes(),
        "FALSIFIED BS-003: concat does not end with rhs bytes"
    );
}

/// FALSIFY-BS-004: comparison is a total order (exactly one of ==, <, >)
#[test]
fn falsify_bs_004_total_order() {
    let samples = [
        ByteString::new(),
        ByteString::from("a"),
        ByteString::from("ab"),
        ByteString::from("b"),
        ByteString::from_bytes(&[0xff]),
    ];
    for x in &samples {
        for y in &samples {
            let relations =
                usize::from(x == y) + usize::from(x < y) + usize::from(x > y);
            assert_eq!(
                relations, 1,
                "FALSIFIED BS-004: {x:?} vs {y:?} satisfies {relations} relations"
            );
        }
    }
}

/// FALSIFY-BS-005: substring never fails, for any argument combination
#[test]
fn falsify_bs_005_substring_is_total() {
    let s = ByteString::from("hello");
    for start in [-2_isize, -1, 0, 1, 4, 5, 6, 100] {
        for count in [-1_isize, 0, 1, 5, 6, 1000] {
            let sub = s.substring(start, count);
            assert!(
                sub.len() <= s.len(),
                "FALSIFIED BS-005: substring({start}, {count}) grew the string"
            );
        }
    }
}

/// FALSIFY-BS-006: lowercase touches only ASCII A-Z
#[test]
fn falsify_bs_006_lowercase_ascii_only() {
    let all: Vec<u8> = (0..=255).collect();
    let lowered = ByteString::from_bytes(&all).to_lowercase();
    for (i, &b) in lowered.as_bytes().iter().enumerate() {
        let original = i as u8;
        if original.is_ascii_uppercase() {
            assert_eq!(
                b,
                original + 32,
                "FALSIFIED BS-006: byte {original} not lowercased"
            );
        } else {
            assert_eq!(
                b, original,
                "FALSIFIED BS-006: non-uppercase byte {original} was changed"
            );
        }
    }
}
