//! Property tests: canonical forms parse back to what produced them

use proptest::prelude::*;
use warband_catalog::{Faction, UnitCatalog, UnitType};
use warband_foundation::Discard;
use warband_parser::{Army, ArmyAssembler, Blueprint, BlueprintParser, BlueprintToken, BuildOptions};

const NAMES: [&str; 8] = [
    "Recruit",
    "Militia",
    "Swordsman",
    "Cavalry",
    "Bowman",
    "Longbowman",
    "Crossbowman",
    "Cannoneer",
];

fn units() -> UnitCatalog {
    let mut units = UnitCatalog::new();
    for (id, name) in (1u32..).zip(NAMES) {
        assert!(units.add(UnitType::new(id, [name]).with_faction(Faction::Common), &mut Discard));
    }
    units
}

fn build(units: &UnitCatalog, text: &str) -> Army {
    let options = BuildOptions::lenient().with_require_leader(false);
    ArmyAssembler::new(units)
        .with_options(options)
        .build(&BlueprintParser::parse(text), &mut Discard)
}

fn token() -> impl Strategy<Value = BlueprintToken> {
    (0u32..100_000, "[A-Za-z]([A-Za-z ]{0,8}[A-Za-z])?").prop_map(|(q, name)| BlueprintToken::new(q, name))
}

proptest! {
    #[test]
    fn blueprint_display_parses_back(tokens in prop::collection::vec(token(), 0..6)) {
        let blueprint = Blueprint::from_tokens(tokens).unwrap();
        let reparsed = BlueprintParser::parse(&blueprint.to_string());
        prop_assert!(reparsed.is_good());
        prop_assert_eq!(reparsed.tokens(), blueprint.tokens());
    }

    #[test]
    fn army_display_rebuilds_same_army(
        picks in prop::collection::vec((0..NAMES.len(), 0u32..500), 0..10),
        lowercase in any::<bool>(),
    ) {
        let units = units();
        let text = picks
            .iter()
            .map(|(i, q)| {
                let name = if lowercase { NAMES[*i].to_lowercase() } else { NAMES[*i].to_string() };
                format!("{q} {name}")
            })
            .collect::<Vec<_>>()
            .join(" ");

        let army = build(&units, &text);
        let expected: u64 = picks.iter().map(|(_, q)| u64::from(*q)).sum();
        prop_assert_eq!(army.count_units(), expected);

        let rebuilt = build(&units, &army.to_string());
        prop_assert_eq!(rebuilt, army);
    }
}

#[test]
fn names_with_digits_round_trip() {
    let mut units = UnitCatalog::new();
    let mut log: Vec<String> = Vec::new();
    for unit in [
        UnitType::new(1, ["Guard 2", "Second Guard"]).with_faction(Faction::Common),
        UnitType::new(2, ["2nd Legion"]).with_codenames(["L2"]).with_faction(Faction::Common),
        UnitType::new(3, ["A1"]).with_faction(Faction::Common),
    ] {
        assert!(units.add(unit, &mut log), "{log:?}");
    }

    let army = build(&units, "3 second guard 4 L2 5 A1");
    assert_eq!(army.count_units(), 12);
    assert_eq!(army.to_string(), "3 Second Guard 4 L2 5 A1");
    assert_eq!(army.to_compact_string(), "3Second Guard 4L2 5A1");

    let rebuilt = build(&units, &army.to_string());
    assert_eq!(rebuilt, army);
    assert_eq!(build(&units, &army.to_compact_string()), army);
}
