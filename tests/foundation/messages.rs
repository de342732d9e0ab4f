//! Integration tests for message sinks

use warband_foundation::{Discard, MessageLog, Warnings};

fn report(log: &mut dyn MessageLog, count: usize) {
    for i in 0..count {
        log.push(format!("message {i}"));
    }
}

#[test]
fn vec_collects_everything() {
    let mut log: Vec<String> = Vec::new();
    report(&mut log, 3);
    assert_eq!(log, vec!["message 0", "message 1", "message 2"]);
}

#[test]
fn discard_accepts_anything() {
    report(&mut Discard, 10);
}

#[test]
fn warnings_keep_newest_within_capacity() {
    let mut warnings = Warnings::new(2);
    report(&mut warnings, 5);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings.total_pushed(), 5);
    assert_eq!(warnings.iter().collect::<Vec<_>>(), vec!["message 3", "message 4"]);
    assert!(warnings.contains("message 4"));
}

#[test]
fn warnings_drain_oldest_first() {
    let mut warnings = Warnings::default();
    report(&mut warnings, 3);
    let drained: Vec<String> = warnings.drain().collect();
    assert_eq!(drained[0], "message 0");
    assert!(warnings.is_empty());
}

#[test]
fn borrowed_sink_forwards() {
    let mut log: Vec<String> = Vec::new();
    {
        let mut borrowed = &mut log;
        report(&mut borrowed, 1);
    }
    assert_eq!(log.len(), 1);
}
