//! Tagging of hyphenated words and whitespace under both policies
//!
//! `Corrected` is the default and tags these words with their own types.
//! `Legacy` keeps the historical output where they stay `Word` / `Other`.

use pyrus_core::{Parser, ParserConfig, TypeTagPolicy, WordType};

fn types_of(parser: &Parser, text: &str) -> Vec<WordType> {
    parser.parse(text).iter().map(|w| w.word_type()).collect()
}

#[test]
fn test_default_policy_is_corrected() {
    assert_eq!(Parser::new().type_tags(), TypeTagPolicy::Corrected);
}

#[test]
fn test_corrected_policy_tags_hyphenated_and_whitespace() {
    let parser = Parser::new();

    assert_eq!(
        types_of(&parser, "кто-то пришёл"),
        vec![
            WordType::HyphenatedWord,
            WordType::Whitespace,
            WordType::Word
        ]
    );
}

#[test]
fn test_legacy_policy_keeps_word_and_other() {
    let parser = Parser::builder().type_tags(TypeTagPolicy::Legacy).build();

    assert_eq!(
        types_of(&parser, "кто-то пришёл"),
        vec![WordType::Word, WordType::Other, WordType::Word]
    );
}

#[test]
fn test_policies_agree_on_tokens() {
    let corrected = Parser::new();
    let legacy = Parser::builder().type_tags(TypeTagPolicy::Legacy).build();
    let text = "Где-то там,  далеко-далеко.";

    let a: Vec<Vec<String>> = corrected
        .parse(text)
        .iter()
        .map(|w| w.tokens().to_vec())
        .collect();
    let b: Vec<Vec<String>> = legacy
        .parse(text)
        .iter()
        .map(|w| w.tokens().to_vec())
        .collect();

    assert_eq!(a, b);
}

#[test]
fn test_legacy_policy_still_tags_mwe() {
    let parser = Parser::builder()
        .type_tags(TypeTagPolicy::Legacy)
        .mwe("в общем")
        .build();

    assert_eq!(types_of(&parser, "в общем"), vec![WordType::Mwe]);
}

#[test]
fn test_legacy_policy_from_toml() {
    let config = ParserConfig::from_toml_str("[parser]\ntype_tags = \"legacy\"\n").unwrap();
    let parser = Parser::with_config(&config).unwrap();

    assert_eq!(types_of(&parser, " "), vec![WordType::Other]);
}
