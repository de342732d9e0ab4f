//! Integration tests for settings persistence

use warband_catalog::BattleSkill;
use warband_parser::{ArmyDecorator, BuildOptions};
use warband_runtime::{Settings, serialize};

#[test]
fn settings_survive_a_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.msgpack");

    let mut settings = Settings::default()
        .with_data_folder("/srv/data")
        .with_build_options(BuildOptions::strict());
    settings.simulations = 500;
    settings.left = ArmyDecorator::new().with_skill("Nusala", BattleSkill::Juggernaut, 3);

    serialize::save_to_file(&settings, &path).unwrap();
    assert_eq!(serialize::load_from_file(&path).unwrap(), settings);
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = serialize::load_or_default(dir.path().join("absent.msgpack")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn garbage_is_an_error() {
    assert!(serialize::from_bytes(&[0xc1, 0x00, 0xff]).is_err());
}
