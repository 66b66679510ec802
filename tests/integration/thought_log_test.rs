//! Integration tests for day-partitioned thought logs

use chrono::NaiveDate;
use cot_filter::{Config, ThoughtLog, ThoughtSink};
use tempfile::TempDir;

use super::helpers::{fixtures_dir, read_logs};

#[test]
fn entries_are_partitioned_by_day() {
    let temp_dir = TempDir::new().unwrap();
    let log = ThoughtLog::new(temp_dir.path());

    let may_1 = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let may_2 = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    log.append_at("a", may_1.and_hms_opt(23, 59, 59).unwrap()).unwrap();
    log.append_at("b", may_2.and_hms_opt(0, 0, 1).unwrap()).unwrap();
    log.append_at("c", may_2.and_hms_opt(8, 0, 0).unwrap()).unwrap();

    let logs = read_logs(temp_dir.path());
    let names: Vec<_> = logs.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec!["2024-05-01_rosa_thought.log", "2024-05-02_rosa_thought.log"]
    );
    assert_eq!(
        logs[1].1,
        "[2024-05-02 00:00:01] --- 罗莎的内心独白 ---\nb\n\n[2024-05-02 08:00:00] --- 罗莎的内心独白 ---\nc\n\n"
    );
}

#[test]
fn multi_line_thought_is_written_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let log = ThoughtLog::new(temp_dir.path());
    let at = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();

    log.append_at("第一行\n嗯...第二行", at).unwrap();

    let logs = read_logs(temp_dir.path());
    assert_eq!(
        logs[0].1,
        "[2024-01-02 03:04:05] --- 罗莎的内心独白 ---\n第一行\n嗯...第二行\n\n"
    );
}

#[test]
fn naming_comes_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::load_from(&fixtures_dir().join("english_persona.toml")).unwrap();
    config.log.directory = temp_dir.path().join("mira");

    let log = ThoughtLog::from_config(&config.log);
    log.record("offer tea").unwrap();

    let logs = read_logs(&temp_dir.path().join("mira"));
    assert_eq!(logs.len(), 1);
    assert!(logs[0].0.ends_with("_mira-thought.log"));
    assert!(logs[0].1.contains("--- Mira's reasoning ---\noffer tea\n\n"));
}

#[test]
fn record_ignores_empty_thought() {
    let temp_dir = TempDir::new().unwrap();
    let log = ThoughtLog::new(temp_dir.path().join("logs"));

    log.record("").unwrap();

    assert!(!log.directory().exists());
}
