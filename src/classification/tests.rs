use super::*;

fn tokens(words: &[&str]) -> Vec<ByteString> {
    words.iter().map(|w| ByteString::from(*w)).collect()
}

#[test]
fn test_label_from_first_byte() {
    assert_eq!(
        Sentiment::from_label_field(&ByteString::from("4")),
        Sentiment::Positive
    );
    // Only the first byte matters
    assert_eq!(
        Sentiment::from_label_field(&ByteString::from("400")),
        Sentiment::Positive
    );
}

#[test]
fn test_garbled_label_degrades_to_negative() {
    for raw in ["0", "2", "x4", "", "positive"] {
        assert_eq!(
            Sentiment::from_label_field(&ByteString::from(raw)),
            Sentiment::Negative,
            "label field {raw:?} should degrade to Negative"
        );
    }
}

#[test]
fn test_sentiment_display_uses_sentinels() {
    assert_eq!(Sentiment::Positive.to_string(), "4");
    assert_eq!(Sentiment::Negative.to_string(), "0");
}

#[test]
fn test_observe_counts_by_label() {
    let mut model = FrequencyModel::new();
    model.observe(&tokens(&["great", "day"]), Sentiment::Positive);
    model.observe(&tokens(&["great", "pain"]), Sentiment::Negative);

    let great = model
        .lookup(&ByteString::from("great"))
        .expect("seen twice");
    assert_eq!(great.positive, 1);
    assert_eq!(great.negative, 1);

    let day = model.lookup(&ByteString::from("day")).expect("seen once");
    assert_eq!((day.positive, day.negative), (1, 0));
}

#[test]
fn test_single_byte_tokens_are_discarded() {
    let mut model = FrequencyModel::new();
    model.observe(&tokens(&["a", "i", "ok"]), Sentiment::Positive);

    assert!(model.lookup(&ByteString::from("a")).is_none());
    assert!(model.lookup(&ByteString::from("i")).is_none());
    assert!(model.lookup(&ByteString::from("ok")).is_some());
    assert_eq!(model.vocabulary_size(), 1);
}

#[test]
fn test_repeated_tokens_count_each_occurrence() {
    let mut model = FrequencyModel::new();
    model.observe(&tokens(&["good", "good"]), Sentiment::Positive);

    let good = model.lookup(&ByteString::from("good")).expect("seen");
    assert_eq!(good.positive, 2);
}

#[test]
fn test_record_totals_are_instance_scoped() {
    let mut model = FrequencyModel::new();
    model.observe(&tokens(&["up"]), Sentiment::Positive);
    model.observe(&tokens(&["down"]), Sentiment::Negative);
    model.observe(&tokens(&["down"]), Sentiment::Negative);
    assert_eq!(model.positive_records(), 1);
    assert_eq!(model.negative_records(), 2);

    // A fresh instance starts from zero
    assert_eq!(FrequencyModel::new().positive_records(), 0);
}

#[test]
fn test_score_sums_signed_differences() {
    let mut model = FrequencyModel::new();
    model.observe(&tokens(&["great", "great", "meh"]), Sentiment::Positive);
    model.observe(&tokens(&["bad", "meh"]), Sentiment::Negative);

    // great: +2, bad: -1, meh: 0, unseen: 0
    assert_eq!(model.score(&tokens(&["great"])), 2);
    assert_eq!(model.score(&tokens(&["bad"])), -1);
    assert_eq!(model.score(&tokens(&["meh"])), 0);
    assert_eq!(model.score(&tokens(&["great", "bad"])), 1);
    assert_eq!(model.score(&tokens(&["unseen"])), 0);
}

#[test]
fn test_predict_positive_requires_strictly_positive_score() {
    let mut model = FrequencyModel::new();
    model.observe(&tokens(&["great"]), Sentiment::Positive);
    model.observe(&tokens(&["bad"]), Sentiment::Negative);

    assert_eq!(model.predict(&tokens(&["great"])), Sentiment::Positive);
    assert_eq!(model.predict(&tokens(&["bad"])), Sentiment::Negative);
    // Score of exactly 0 resolves to Negative
    assert_eq!(model.predict(&tokens(&["unseen"])), Sentiment::Negative);
    assert_eq!(
        model.predict(&tokens(&["great", "bad"])),
        Sentiment::Negative
    );
}

#[test]
fn test_untrained_model_is_always_negative() {
    let model = FrequencyModel::new();
    assert_eq!(model.score(&tokens(&["anything"])), 0);
    assert_eq!(model.predict(&tokens(&["anything"])), Sentiment::Negative);
    assert_eq!(model.predict(&[]), Sentiment::Negative);
}

#[test]
fn test_snapshot_round_trip_preserves_scoring() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("model.json");

    let mut model = FrequencyModel::new();
    model.observe(&tokens(&["great", "great", "day"]), Sentiment::Positive);
    model.observe(&tokens(&["bad", "day"]), Sentiment::Negative);
    model.save(&path).expect("save succeeds");

    let restored = FrequencyModel::load(&path).expect("load succeeds");
    assert_eq!(restored.vocabulary_size(), model.vocabulary_size());
    assert_eq!(restored.positive_records(), model.positive_records());
    assert_eq!(restored.negative_records(), model.negative_records());

    let probe = tokens(&["great", "bad", "day", "unseen"]);
    assert_eq!(restored.score(&probe), model.score(&probe));
}

#[test]
fn test_snapshot_round_trip_with_non_utf8_token() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("model.json");

    let raw = vec![ByteString::from_bytes(&[0xf0, 0x28, 0x8c, 0x28])];
    let mut model = FrequencyModel::new();
    model.observe(&raw, Sentiment::Positive);
    model.save(&path).expect("save succeeds");

    let restored = FrequencyModel::load(&path).expect("load succeeds");
    assert_eq!(restored.score(&raw), 1);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = FrequencyModel::load("/no/such/model.json").expect_err("must fail");
    assert!(matches!(err, crate::error::SentirError::Io { .. }));
}
