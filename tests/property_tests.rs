//! Property-based tests using proptest.
//!
//! These tests verify the value-semantics invariants of `ByteString` and
//! the determinism guarantees of the tokenizer and CSV splitter.

use proptest::prelude::*;

use sentir::data::split_record;
use sentir::prelude::*;
use sentir::text::tokenize::DELIMITERS;

// Strategy for generating arbitrary byte strings
fn bytestring_strategy(max_len: usize) -> impl Strategy<Value = ByteString> {
    proptest::collection::vec(any::<u8>(), 0..max_len).prop_map(ByteString::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ByteString value semantics

    #[test]
    fn clone_equals_source(s in bytestring_strategy(64)) {
        prop_assert_eq!(s.clone(), s);
    }

    #[test]
    fn clone_is_independent_of_source(s in bytestring_strategy(64)) {
        let mut mutated = s.clone();
        let copy = mutated.clone();
        mutated.push(b'!');
        prop_assert_eq!(copy, s);
    }

    #[test]
    fn concat_length_is_sum(a in bytestring_strategy(64), b in bytestring_strategy(64)) {
        let joined = &a + &b;
        prop_assert_eq!(joined.len(), a.len() + b.len());
    }

    #[test]
    fn concat_is_lhs_bytes_then_rhs_bytes(a in bytestring_strategy(64), b in bytestring_strategy(64)) {
        let joined = &a + &b;
        prop_assert_eq!(&joined.as_bytes()[..a.len()], a.as_bytes());
        prop_assert_eq!(&joined.as_bytes()[a.len()..], b.as_bytes());
    }

    #[test]
    fn comparison_is_trichotomous(a in bytestring_strategy(16), b in bytestring_strategy(16)) {
        let relations = usize::from(a == b) + usize::from(a < b) + usize::from(a > b);
        prop_assert_eq!(relations, 1);
    }

    #[test]
    fn substring_never_panics(
        s in bytestring_strategy(32),
        start in any::<isize>(),
        count in any::<isize>(),
    ) {
        let sub = s.substring(start, count);
        prop_assert!(sub.len() <= s.len());
    }

    #[test]
    fn substring_of_valid_range_matches_slice(
        s in bytestring_strategy(32),
        start in 0_usize..32,
        count in 1_usize..32,
    ) {
        prop_assume!(start < s.len());
        let sub = s.substring(start as isize, count as isize);
        let end = (start + count).min(s.len());
        prop_assert_eq!(sub.as_bytes(), &s.as_bytes()[start..end]);
    }

    #[test]
    fn lowercase_is_idempotent(s in bytestring_strategy(64)) {
        let once = s.to_lowercase();
        prop_assert_eq!(once.to_lowercase(), once);
    }

    #[test]
    fn lowercase_preserves_length(s in bytestring_strategy(64)) {
        prop_assert_eq!(s.to_lowercase().len(), s.len());
    }

    // Tokenizer determinism

    #[test]
    fn tokens_never_contain_delimiters(s in bytestring_strategy(64)) {
        let tokens = DelimiterTokenizer::new().tokenize(&s);
        for token in &tokens {
            prop_assert!(!token.is_empty());
            for byte in token.as_bytes() {
                prop_assert!(!DELIMITERS.contains(byte));
            }
        }
    }

    #[test]
    fn tokenization_is_case_insensitive(s in bytestring_strategy(64)) {
        let tokenizer = DelimiterTokenizer::new();
        prop_assert_eq!(tokenizer.tokenize(&s), tokenizer.tokenize(&s.to_lowercase()));
    }

    #[test]
    fn token_bytes_never_exceed_input(s in bytestring_strategy(64)) {
        let tokens = DelimiterTokenizer::new().tokenize(&s);
        let total: usize = tokens.iter().map(ByteString::len).sum();
        prop_assert!(total <= s.len());
    }

    // CSV splitter

    #[test]
    fn split_always_emits_at_least_one_field(s in bytestring_strategy(64)) {
        prop_assert!(!split_record(&s).is_empty());
    }

    #[test]
    fn split_of_quote_free_line_counts_commas(
        fields in proptest::collection::vec("[a-z ]{0,8}", 1..6)
    ) {
        let line = ByteString::from(fields.join(","));
        let parsed = split_record(&line);
        prop_assert_eq!(parsed.len(), fields.len());
        for (parsed_field, expected) in parsed.iter().zip(&fields) {
            prop_assert_eq!(parsed_field, &ByteString::from(expected.as_str()));
        }
    }

    #[test]
    fn split_drops_every_quote_byte(s in bytestring_strategy(64)) {
        for field in split_record(&s) {
            prop_assert!(!field.as_bytes().contains(&b'"'));
        }
    }

    // Model scoring

    #[test]
    fn score_of_unseen_vocabulary_is_zero(tokens in proptest::collection::vec("[a-z]{2,8}", 0..8)) {
        let model = FrequencyModel::new();
        let tokens: Vec<ByteString> = tokens.iter().map(|t| ByteString::from(t.as_str())).collect();
        prop_assert_eq!(model.score(&tokens), 0);
        prop_assert_eq!(model.predict(&tokens), Sentiment::Negative);
    }
}
