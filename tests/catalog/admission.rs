//! Integration tests for entry admission

use warband_catalog::{Adventure, AdventureCatalog, Camp, CampCatalog, UnitCatalog, UnitType};
use warband_foundation::Discard;

#[test]
fn duplicate_id_is_rejected() {
    let mut units = UnitCatalog::new();
    let mut log: Vec<String> = Vec::new();
    assert!(units.add(UnitType::new(1, ["Recruit"]), &mut log));
    assert!(!units.add(UnitType::new(1, ["Militia"]), &mut log));

    assert_eq!(units.len(), 1);
    assert_eq!(log, vec!["Entry with id (1) already exists."]);
    assert_eq!(units.find("militia", |_| true, &mut Discard).entry(), None);
}

#[test]
fn relaxed_duplicate_name_is_rejected() {
    let mut units = UnitCatalog::new();
    let mut log: Vec<String> = Vec::new();
    assert!(units.add(UnitType::new(1, ["Archer"]), &mut log));
    assert!(!units.add(UnitType::new(2, ["ARCHERS"]), &mut log));

    assert_eq!(log, vec!["Entry with a similar name (ARCHERS) already exists."]);
    assert!(!units.contains_key(&2));
}

#[test]
fn nameless_entry_is_rejected() {
    let mut units = UnitCatalog::new();
    let mut log: Vec<String> = Vec::new();
    assert!(!units.add(UnitType::new(1, ["   "]), &mut log));
    assert!(units.is_empty());
    assert_eq!(log.len(), 1);
}

#[test]
fn names_that_relax_to_nothing_are_accepted() {
    let mut units = UnitCatalog::new();
    let mut log: Vec<String> = Vec::new();
    assert!(units.add(UnitType::new(1, ["Es"]), &mut log));
    assert!(units.add(UnitType::new(2, ["Ss"]), &mut log));

    assert!(log.is_empty(), "{log:?}");
    assert_eq!(units.find("Es", |_| true, &mut Discard).entry().map(|u| u.id), Some(1));
    assert_eq!(units.find("ss", |_| true, &mut Discard).entry().map(|u| u.id), Some(2));
}

#[test]
fn rejection_leaves_catalog_untouched() {
    let mut units = UnitCatalog::new();
    units.add(UnitType::new(1, ["Archer"]), &mut Discard);
    units.add(UnitType::new(2, ["Bowman", "Archers"]), &mut Discard);

    // "Bowman" must not have been half-inserted.
    assert!(units.add(UnitType::new(3, ["Bowman"]), &mut Discard));
    assert_eq!(units.find("bowman", |_| true, &mut Discard).entry().map(|u| u.id), Some(3));
}

#[test]
fn camps_key_on_lowercase_name() {
    let mut camps = CampCatalog::new();
    let mut log: Vec<String> = Vec::new();
    assert!(camps.add(Camp::new(["Tower"], 250), &mut log));
    assert!(!camps.add(Camp::new(["TOWER"], 100), &mut log));
    assert_eq!(camps.get(&"tower".to_string()).map(|c| c.hit_points), Some(250));
}

#[test]
fn adventures_link_units() {
    let mut units = UnitCatalog::new();
    units.add(UnitType::new(1, ["Bandit"]), &mut Discard);
    units.add(UnitType::new(2, ["Wolf"]), &mut Discard);

    let mut adventures = AdventureCatalog::new();
    adventures.add(
        Adventure::new("The Bandit Nest", ["Nest"]).with_units(["Bandits", "Wolves", "Dragon", "bandit"]),
        &mut Discard,
    );

    let mut log: Vec<String> = Vec::new();
    assert_eq!(adventures.link_units(&units, &mut log), 1);
    assert_eq!(
        log,
        vec![
            "Unit Wolves from adventure The Bandit Nest not found.",
            "Unit Dragon from adventure The Bandit Nest not found.",
            "Unit Bandit from adventure The Bandit Nest has already been mapped.",
        ]
    );

    let nest = adventures.find("bandit nest", |_| true, &mut Discard).entry().unwrap();
    assert!(nest.has_unit(1));
}
