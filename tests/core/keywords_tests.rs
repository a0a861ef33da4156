//! Keyword extraction integration tests
//!
//! BM25 ranking through the engine, on pre-segmented text so the
//! expected order can be worked out by hand.

use crate::common::{create_jieba_services, create_test_services, keywords_at, CROSS_DOCS, INTRA_DOC};
use segkit::core::error::SegkitError;
use segkit::core::keywords::{CorpusMode, KeywordOptions, ScoringMode};
use segkit::core::types::TextInput;
use serde_json::json;

fn options(top_k: usize, corpus_mode: CorpusMode) -> KeywordOptions {
    KeywordOptions {
        top_k,
        corpus_mode,
        scoring: ScoringMode::Bm25,
    }
}

#[test]
fn test_intra_document_term_in_two_sentences_ranks_first() {
    let services = create_test_services();
    let results = services
        .engine
        .extract_keywords(&TextInput::from(INTRA_DOC), &options(5, CorpusMode::IntraDocument))
        .unwrap();

    let keywords = keywords_at(&results, 0);
    assert_eq!(keywords.len(), 5);
    assert_eq!(keywords[0], "甲");
}

#[test]
fn test_cross_document_shared_term_ranks_last() {
    let services = create_test_services();
    let input = TextInput::from(CROSS_DOCS.to_vec());
    let results = services
        .engine
        .extract_keywords(&input, &options(3, CorpusMode::CrossDocument))
        .unwrap();

    assert_eq!(keywords_at(&results, 0), vec!["猫", "鱼", "喜欢"]);
    assert_eq!(keywords_at(&results, 1), vec!["狗", "骨头", "喜欢"]);
}

#[test]
fn test_cross_document_top_one() {
    let services = create_test_services();
    let input = TextInput::from(CROSS_DOCS.to_vec());
    let results = services
        .engine
        .extract_keywords(&input, &options(1, CorpusMode::CrossDocument))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&results).unwrap(),
        json!({"0": ["猫"], "1": ["狗"]})
    );
}

#[test]
fn test_top_k_larger_than_vocabulary() {
    let services = create_test_services();
    let results = services
        .engine
        .extract_keywords(&TextInput::from("猫 鱼"), &options(50, CorpusMode::IntraDocument))
        .unwrap();

    assert_eq!(keywords_at(&results, 0).len(), 2);
}

#[test]
fn test_keywords_are_unique() {
    let services = create_test_services();
    let results = services
        .engine
        .extract_keywords(
            &TextInput::from("猫 猫 鱼。猫 狗。鱼 鱼"),
            &options(10, CorpusMode::IntraDocument),
        )
        .unwrap();

    let mut keywords = keywords_at(&results, 0);
    let len = keywords.len();
    keywords.sort();
    keywords.dedup();
    assert_eq!(keywords.len(), len);
    assert_eq!(len, 3);
}

#[test]
fn test_degenerate_entries_in_both_modes() {
    let services = create_test_services();
    let input = TextInput::from_value(json!(["", 7, "   ", "猫 鱼"])).unwrap();

    for mode in [CorpusMode::IntraDocument, CorpusMode::CrossDocument] {
        let results = services
            .engine
            .extract_keywords(&input, &options(5, mode))
            .unwrap();

        assert_eq!(results.len(), 4, "{mode}");
        assert!(keywords_at(&results, 0).is_empty());
        assert!(keywords_at(&results, 1).is_empty());
        assert!(keywords_at(&results, 2).is_empty());
        assert_eq!(keywords_at(&results, 3).len(), 2);
    }
}

#[test]
fn test_tfidf_scoring_prefers_repeated_term() {
    let services = create_test_services();
    let input = TextInput::from(vec!["猫 喜欢 鱼 鱼", "狗 喜欢 骨头"]);
    let results = services
        .engine
        .extract_keywords(
            &input,
            &KeywordOptions {
                top_k: 3,
                corpus_mode: CorpusMode::CrossDocument,
                scoring: ScoringMode::TfIdf,
            },
        )
        .unwrap();

    assert_eq!(keywords_at(&results, 0), vec!["鱼", "猫", "喜欢"]);
}

#[test]
fn test_top_k_bounds() {
    let services = create_test_services();
    let input = TextInput::from("猫 鱼");

    let zero = services
        .engine
        .extract_keywords(&input, &options(0, CorpusMode::IntraDocument))
        .unwrap_err();
    assert!(matches!(zero, SegkitError::InvalidInput(_)));

    let too_many = services
        .engine
        .extract_keywords(&input, &options(101, CorpusMode::IntraDocument))
        .unwrap_err();
    assert!(matches!(too_many, SegkitError::InvalidInput(_)));
}

#[test]
fn test_extraction_is_deterministic() {
    let services = create_test_services();
    let input = TextInput::from(INTRA_DOC);
    let first = services
        .engine
        .extract_keywords(&input, &options(7, CorpusMode::IntraDocument))
        .unwrap();

    for _ in 0..5 {
        let again = services
            .engine
            .extract_keywords(&input, &options(7, CorpusMode::IntraDocument))
            .unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_jieba_keywords_are_words_of_the_text() {
    let services = create_jieba_services();
    let text = "自然语言处理是人工智能的一个重要方向。深度学习推动了自然语言处理的发展。";
    let results = services
        .engine
        .extract_keywords(&TextInput::from(text), &KeywordOptions::default())
        .unwrap();

    let keywords = keywords_at(&results, 0);
    assert!(!keywords.is_empty());
    assert!(keywords.len() <= 5);
    for keyword in &keywords {
        assert!(text.contains(keyword.as_str()), "{keyword} not in text");
        assert_ne!(keyword, "的");
    }
}

#[test]
fn test_removing_stopwords_does_not_change_ranking() {
    let services = create_test_services();
    let with_stopwords = TextInput::from(vec!["猫 的 喜欢 鱼 。 的 狗 鱼", "狗 很 喜欢 的 骨头"]);
    let without_stopwords = TextInput::from(vec!["猫 喜欢 鱼 。 狗 鱼", "狗 喜欢 骨头"]);

    for corpus_mode in [CorpusMode::IntraDocument, CorpusMode::CrossDocument] {
        for scoring in [ScoringMode::Bm25, ScoringMode::TfIdf] {
            let options = KeywordOptions {
                top_k: 10,
                corpus_mode,
                scoring,
            };
            let with = services
                .engine
                .extract_keywords(&with_stopwords, &options)
                .unwrap();
            let without = services
                .engine
                .extract_keywords(&without_stopwords, &options)
                .unwrap();

            assert_eq!(with, without, "{corpus_mode} / {scoring}");
            assert!(!keywords_at(&with, 0).is_empty());
        }
    }
}

#[test]
fn test_jieba_cross_document_shared_verb_ranks_below_nouns() {
    let services = create_jieba_services();
    let input = TextInput::from(vec!["猫喜欢鱼", "狗喜欢骨头"]);
    let results = services
        .engine
        .extract_keywords(&input, &options(1, CorpusMode::CrossDocument))
        .unwrap();

    let first = keywords_at(&results, 0);
    assert_eq!(first.len(), 1);
    assert!(first[0] == "猫" || first[0] == "鱼", "got {first:?}");
    assert_ne!(first[0], "喜欢");

    let second = keywords_at(&results, 1);
    assert!(second[0] == "狗" || second[0] == "骨头", "got {second:?}");
}

#[test]
fn test_jieba_intra_document_two_sentence_ranking() {
    // jieba splits 自然语言处理 into 自然语言 / 处理, both present in
    // each sentence, so they carry the lowest IDF and the single-sentence
    // words lead
    let services = create_jieba_services();
    let results = services
        .engine
        .extract_keywords(
            &TextInput::from("我喜欢自然语言处理。自然语言处理很有趣。"),
            &options(2, CorpusMode::IntraDocument),
        )
        .unwrap();

    assert_eq!(keywords_at(&results, 0), vec!["喜欢", "有趣"]);
}
