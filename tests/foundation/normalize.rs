//! Integration tests for text relaxation

use proptest::prelude::*;
use warband_foundation::{deep_trim, relax_articles, relax_case, relax_spelling};

fn relax(text: &str) -> String {
    relax_spelling(&relax_case(text))
}

// =============================================================================
// Spelling
// =============================================================================

#[test]
fn plural_forms_meet_singular() {
    assert_eq!(relax("Swordsmen"), relax("Swordsman"));
    assert_eq!(relax("Archers"), relax("Archer"));
    assert_eq!(relax("Horses"), "hors");
}

#[test]
fn doubled_letters_collapse_on_long_words() {
    assert_eq!(relax("Cannoneer"), relax("Canoner"));
    assert_eq!(relax("Wall"), "wall");
}

#[test]
fn empty_stays_empty() {
    assert_eq!(relax(""), "");
    assert_eq!(deep_trim("   "), "");
    assert_eq!(relax_articles(""), "");
}

// =============================================================================
// Whitespace and articles
// =============================================================================

#[test]
fn deep_trim_collapses_runs() {
    assert_eq!(deep_trim("  Heavy \t Cavalry\n"), "Heavy Cavalry");
}

#[test]
fn articles_drop_out_of_adventure_names() {
    let relaxed = deep_trim(&relax_articles(&relax_case("The Sons of the Desert")));
    assert_eq!(relaxed, "sons of desert");
    assert_eq!(relax_articles("a an the bandit"), "bandit");
    assert_eq!(relax_articles("theater"), "theater");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn relax_case_is_idempotent(text in "[A-Za-zÀ-ÖØ-öø-ÿ ]{0,24}") {
        let once = relax_case(&text);
        prop_assert_eq!(relax_case(&once), once);
    }

    #[test]
    fn relax_spelling_is_idempotent_without_suffix_letters(text in "[a-df-rt-z]{0,12}") {
        let once = relax_spelling(&text);
        prop_assert_eq!(relax_spelling(&once), once);
    }

    #[test]
    fn deep_trim_is_idempotent(text in "[ a-z\t]{0,24}") {
        let once = deep_trim(&text);
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
        prop_assert!(!once.contains("  "));
        prop_assert_eq!(deep_trim(&once), once);
    }

    #[test]
    fn relax_spelling_never_grows(text in "[a-z]{0,16}") {
        prop_assert!(relax_spelling(&text).len() <= text.len());
    }
}
