//! Integration tests for the blueprint grammar

use warband_parser::{Blueprint, BlueprintParser, BlueprintToken};

fn pairs(input: &str) -> Option<Vec<(u32, String)>> {
    let blueprint = BlueprintParser::parse(input);
    blueprint.is_good().then(|| {
        blueprint
            .tokens()
            .iter()
            .map(|t| (t.quantity, t.name.clone()))
            .collect()
    })
}

#[test]
fn whitespace_is_normalized() {
    let blueprint = BlueprintParser::parse("  1   Nusala \t 50  Heavy   Cavalry ");
    assert_eq!(blueprint.source(), "1 Nusala 50 Heavy Cavalry");
    assert_eq!(blueprint.tokens()[1], BlueprintToken::new(50, "Heavy Cavalry"));
}

#[test]
fn names_may_contain_digits() {
    assert_eq!(
        pairs("5 A1 5 B1"),
        Some(vec![(5, "A1".to_string()), (5, "B1".to_string())])
    );
}

#[test]
fn compact_form_parses() {
    assert_eq!(
        pairs("12R 5Sword"),
        Some(vec![(12, "R".to_string()), (5, "Sword".to_string())])
    );
}

#[test]
fn name_first_is_rejected() {
    let blueprint = BlueprintParser::parse("Swordsman 12");
    assert!(!blueprint.is_good());
    assert!(blueprint.is_empty());
}

#[test]
fn missing_name_is_rejected() {
    assert_eq!(pairs("12"), None);
    assert_eq!(pairs("12 Recruit 5"), None);
}

#[test]
fn quantity_overflow_is_rejected() {
    assert_eq!(pairs("4294967295 Recruit").map(|t| t[0].0), Some(u32::MAX));
    assert_eq!(pairs("4294967296 Recruit"), None);
}

#[test]
fn empty_input_is_valid() {
    let blueprint = BlueprintParser::parse("   ");
    assert!(blueprint.is_good());
    assert!(blueprint.is_empty());
}

#[test]
fn from_tokens_rejects_blank_names() {
    assert!(Blueprint::from_tokens(vec![BlueprintToken::new(1, "  ")]).is_none());
    let blueprint = Blueprint::from_tokens(vec![BlueprintToken::new(3, " Bow  man ")]).unwrap();
    assert_eq!(blueprint.to_string(), "3 Bow man");
}
