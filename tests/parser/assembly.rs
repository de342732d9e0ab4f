//! Integration tests for army reconstruction

use warband_catalog::{Faction, UnitCatalog, UnitType};
use warband_parser::{Army, ArmyAssembler, BlueprintParser, BuildOptions};

/// Two factions whose short names overlap: "B1" names an elite unit
/// exactly and a common unit by prefix.
fn units() -> UnitCatalog {
    let mut units = UnitCatalog::new();
    let mut log: Vec<String> = Vec::new();
    for unit in [
        UnitType::new(1, ["A1"]).with_faction(Faction::Common),
        UnitType::new(2, ["A2", "B1 Auxiliary"]).with_faction(Faction::Common),
        UnitType::new(3, ["B1"]).with_faction(Faction::Elite),
        UnitType::new(4, ["Nusala"]).with_faction(Faction::General),
        UnitType::new(5, ["Swordsman"]).with_faction(Faction::Common),
    ] {
        assert!(units.add(unit, &mut log), "{log:?}");
    }
    units
}

fn build(text: &str, options: BuildOptions) -> (Army, Vec<String>) {
    let units = units();
    let mut log: Vec<String> = Vec::new();
    let army = ArmyAssembler::new(&units)
        .with_options(options)
        .build(&BlueprintParser::parse(text), &mut log);
    (army, log)
}

#[test]
fn mixed_factions_are_coerced() {
    let (army, log) = build("1 Nusala 5 A1 5 B1", BuildOptions::lenient());

    assert_eq!(army.count_of(1), 5);
    assert_eq!(army.count_of(2), 5);
    assert_eq!(army.count_of(3), 0);
    assert_eq!(
        log,
        vec![
            "There is more than one faction in the army.",
            "Did you mean: 5A1 5A2 1Nusala?",
            "Assuming yes.",
        ]
    );
}

#[test]
fn strict_build_keeps_original() {
    let (army, log) = build("1 Nusala 5 A1 5 B1", BuildOptions::strict());
    assert_eq!(army.count_of(3), 5);
    assert_eq!(log.len(), 2);
}

#[test]
fn try_build_with_filter() {
    let units = units();
    let assembler = ArmyAssembler::new(&units);
    let blueprint = BlueprintParser::parse("5 A1 5 B1");

    let common = assembler
        .try_build(&blueprint, |u| u.is(Faction::Common), &mut Vec::<String>::new())
        .unwrap();
    assert_eq!(common.to_string(), "5 A1 5 A2");

    let elite = assembler.try_build(&blueprint, |u| u.is(Faction::Elite), &mut Vec::<String>::new());
    assert!(elite.is_none());
}

#[test]
fn name_first_fails_to_parse() {
    let (army, log) = build("Swordsman 12", BuildOptions::lenient());
    assert!(army.is_empty());
    assert_eq!(log, vec!["Parsing army failed."]);
}

#[test]
fn unresolved_name_fails_whole_army() {
    let (army, log) = build("1 Nusala 5 Swordsman 5 Dragon", BuildOptions::lenient());
    assert!(army.is_empty());
    assert_eq!(log, vec!["Reconstructing army from database failed."]);
}

#[test]
fn ambiguous_name_fails_whole_army() {
    let (army, log) = build("1 Nusala 5 a", BuildOptions::lenient());
    assert!(army.is_empty());
    assert_eq!(
        log,
        vec![
            "Multiple entries match the specified query: a.",
            "Reconstructing army from database failed.",
        ]
    );
}

#[test]
fn leaderless_army_warns() {
    let (army, log) = build("10 swordsmen", BuildOptions::lenient());
    assert_eq!(army.to_string(), "10 Swordsman");
    assert_eq!(log, vec!["Army does not have any generals."]);
}
