//! Integration tests for sessions over a data folder

use std::fs;
use std::path::Path;

use warband_catalog::Lookup;
use warband_parser::BuildOptions;
use warband_runtime::{LoadReport, Session, Settings};

fn write(dir: &Path, sub: &str, json: &str) {
    fs::create_dir_all(dir.join(sub)).unwrap();
    fs::write(dir.join(sub).join("data.json"), json).unwrap();
}

fn data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "units",
        r#"[
            {"id": 1, "names": ["Recruit"], "codenames": ["R"], "faction": "common", "hit points": 40},
            {"id": 2, "names": ["Swordsman"], "faction": "common", "hit points": 120},
            {"id": 3, "names": ["Cavalry Soldier"], "faction": "common", "hit points": 5},
            {"id": 4, "names": ["Cavalry"], "faction": "elite", "hit points": 100},
            {"id": 5, "names": ["Nusala"], "faction": "general", "hit points": 140},
            {"id": 6, "names": ["Swordsmen"], "faction": "elite", "hit points": 1}
        ]"#,
    );
    write(
        dir.path(),
        "camps",
        r#"[{"names": ["Guard Tower"], "hit points": 250, "damage reduction": 10}]"#,
    );
    dir
}

#[test]
fn load_reports_rejections() {
    let dir = data_dir();
    let mut session = Session::new();
    let report = session.load_data_dir(dir.path()).unwrap();

    assert_eq!(
        report,
        LoadReport {
            units: 5,
            camps: 1,
            adventures: 0,
            links: 0
        }
    );
    assert_eq!(
        session.drain_warnings(),
        vec!["Entry with a similar name (Swordsmen) already exists."]
    );
}

#[test]
fn plural_query_finds_singular_unit() {
    let dir = data_dir();
    let mut session = Session::new();
    session.load_data_dir(dir.path()).unwrap();

    let Lookup::Found(unit) = session.find_unit("swordsmen") else {
        panic!("swordsmen should resolve");
    };
    assert_eq!(unit.id, 2);
}

#[test]
fn evaluate_coerces_factions() {
    let dir = data_dir();
    let mut session = Session::new();
    session.load_data_dir(dir.path()).unwrap();
    session.drain_warnings();

    let army = session.evaluate("1 Nusala 5 Swordsman 5 Cavalry");
    assert_eq!(army.to_compact_string(), "5Swordsman 5Cavalry Soldier 1Nusala");
    assert_eq!(
        session.drain_warnings(),
        vec![
            "There is more than one faction in the army.",
            "Did you mean: 5Swordsman 5Cavalry Soldier 1Nusala?",
            "Assuming yes.",
        ]
    );
}

#[test]
fn strict_settings_keep_the_typed_army() {
    let dir = data_dir();
    let settings = Settings::default().with_build_options(BuildOptions::strict());
    let mut session = Session::with_settings(settings);
    session.load_data_dir(dir.path()).unwrap();

    let army = session.evaluate("1 Nusala 5 Swordsman 5 Cavalry");
    assert_eq!(army.count_of(4), 5);
}

#[test]
fn configured_data_folder_is_loaded() {
    let dir = data_dir();
    let mut session = Session::with_settings(Settings::default().with_data_folder(dir.path()));
    let report = session.load_configured_data().unwrap();
    assert_eq!(report.map(|r| r.units), Some(5));

    let mut bare = Session::new();
    assert_eq!(bare.load_configured_data().unwrap(), None);
}
