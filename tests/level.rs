//! Tests for log level functionality.

use trashsweep::Level;

#[test]
fn level_ordering() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_display() {
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert!("loud".parse::<Level>().is_err());
}

#[test]
fn verbosity_mapping() {
    assert_eq!(Level::from_verbosity(0), Level::Warn);
    assert_eq!(Level::from_verbosity(1), Level::Info);
    assert_eq!(Level::from_verbosity(2), Level::Debug);
    assert_eq!(Level::from_verbosity(3), Level::Trace);
    assert_eq!(Level::from_verbosity(9), Level::Trace);
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
