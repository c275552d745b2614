//! Tests for rule file loading and validation.

use std::fs;
use tempfile::TempDir;
use trashsweep::config::{ConfigError, DEFAULT_MINIMUM_AGE, DEFAULT_THRESHOLD};
use trashsweep::{Error, RuleFile};

const CONNECTION: &str = "[Nextcloud]
url = https://cloud.example.org
username = alice
password = hunter2
";

fn load(content: &str) -> Result<RuleFile, Error> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.ini");
    fs::write(&path, content).unwrap();
    RuleFile::load(&path)
}

fn config_err(content: &str) -> ConfigError {
    match load(content) {
        Err(Error::Config(e)) => e,
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn minimal_file_uses_defaults() {
    let rules = load(&format!("{CONNECTION}\n[Logs]\npattern = .*\\.log\n")).unwrap();

    assert_eq!(rules.connection.url, "https://cloud.example.org");
    assert_eq!(rules.connection.username, "alice");
    assert_eq!(rules.connection.password, "hunter2");
    assert_eq!(rules.connection.minimum_age, DEFAULT_MINIMUM_AGE);
    assert_eq!(rules.connection.threshold, DEFAULT_THRESHOLD);
    assert_eq!(rules.rules.len(), 1);
    assert_eq!(rules.rules[0].name, "Logs");
    assert_eq!(rules.rules[0].pattern(), ".*\\.log");
    assert_eq!(rules.rules[0].min_age_days, DEFAULT_MINIMUM_AGE);
}

#[test]
fn rule_age_falls_back_through_default_section_then_connection() {
    let content = "[DEFAULT]
minimum_age = 14

[Nextcloud]
url = https://cloud.example.org
username = alice
password = hunter2
minimum_age = 60
threshold = 25

[Logs]
pattern = .*\\.log
minimum_age = 3

[Photos]
pattern = IMG_
";
    let rules = load(content).unwrap();

    assert_eq!(rules.connection.minimum_age, 60);
    assert_eq!(rules.connection.threshold, 25);
    assert_eq!(rules.rules[0].min_age_days, 3);
    // [DEFAULT] beats the connection section's value
    assert_eq!(rules.rules[1].min_age_days, 14);
}

#[test]
fn rule_inherits_connection_minimum_age() {
    let content = "[Nextcloud]
url = https://cloud.example.org
username = alice
password = hunter2
minimum_age = 45

[Tmp]
pattern = tmp
";
    let rules = load(content).unwrap();
    assert_eq!(rules.rules[0].min_age_days, 45);
}

#[test]
fn pattern_in_default_section_applies_to_all_sections() {
    let content = "[DEFAULT]
pattern = .*\\.bak

[Nextcloud]
url = https://cloud.example.org
username = alice
password = hunter2

[One]
minimum_age = 1

[Two]
pattern = tmp
";
    let rules = load(content).unwrap();
    let patterns: Vec<_> = rules.rules.iter().map(|r| r.pattern()).collect();
    assert_eq!(patterns, vec![".*\\.bak", "tmp"]);
}

#[test]
fn sections_without_pattern_are_ignored() {
    let rules = load(&format!("{CONNECTION}\n[Notes]\nminimum_age = 3\n\n[Logs]\npattern = log\n"))
        .unwrap();
    assert_eq!(rules.rules.len(), 1);
    assert_eq!(rules.rules[0].name, "Logs");
}

#[test]
fn rule_order_follows_file_order() {
    let rules = load(&format!(
        "{CONNECTION}\n[Zeta]\npattern = z\n\n[Alpha]\npattern = a\n"
    ))
    .unwrap();
    let names: Vec<_> = rules.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}

#[test]
fn missing_connection_section() {
    let err = config_err("[Logs]\npattern = log\n");
    assert!(matches!(err, ConfigError::MissingSection(ref s) if s == "Nextcloud"));
}

#[test]
fn missing_credentials_are_listed() {
    let err = config_err("[Nextcloud]\nurl = https://cloud.example.org\n\n[Logs]\npattern = log\n");
    match err {
        ConfigError::MissingFields(fields) => assert_eq!(fields, vec!["username", "password"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_value_counts_as_missing() {
    let err = config_err(
        "[Nextcloud]\nurl = https://cloud.example.org\nusername = alice\npassword =\n\n[Logs]\npattern = log\n",
    );
    assert!(matches!(err, ConfigError::MissingFields(ref f) if f == &["password"]));
}

#[test]
fn no_patterns_is_an_error() {
    let err = config_err(CONNECTION);
    assert!(matches!(err, ConfigError::NoPatterns));
}

#[test]
fn invalid_regex_names_section() {
    let err = config_err(&format!("{CONNECTION}\n[Broken]\npattern = (unclosed\n"));
    match err {
        ConfigError::InvalidPattern { section, .. } => assert_eq!(section, "Broken"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_threshold() {
    let err = config_err(&format!("{CONNECTION}threshold = lots\n\n[Logs]\npattern = log\n"));
    assert!(matches!(
        err,
        ConfigError::InvalidNumber { key: "threshold", ref value, .. } if value == "lots"
    ));
}

#[test]
fn negative_minimum_age_is_rejected() {
    let err = config_err(&format!("{CONNECTION}\n[Logs]\npattern = log\nminimum_age = -1\n"));
    assert!(matches!(err, ConfigError::InvalidNumber { key: "minimum_age", .. }));
}

#[test]
fn duplicate_section_is_rejected() {
    let err = config_err(&format!(
        "{CONNECTION}\n[Logs]\npattern = a\n\n[Logs]\npattern = b\n"
    ));
    assert!(matches!(err, ConfigError::DuplicateSection { ref name, .. } if name == "Logs"));
}

#[test]
fn text_before_first_section_is_rejected() {
    let err = config_err(&format!("pattern = x\n{CONNECTION}"));
    assert!(matches!(err, ConfigError::MissingSectionHeader { line: 1 }));
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = RuleFile::load(&dir.path().join("absent.ini")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn debug_output_hides_password() {
    let rules = load(&format!("{CONNECTION}\n[Logs]\npattern = log\n")).unwrap();
    let debug = format!("{:?}", rules.connection);
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn default_path_ends_with_app_file() {
    if let Ok(path) = RuleFile::default_path() {
        assert!(path.ends_with("trashsweep/trashsweep.ini"));
    }
}
