use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn given_known_level_names_when_parsed_then_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("warn").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("Off").unwrap().0, LevelFilter::Off);
}

#[test]
fn given_unknown_level_when_parsed_then_defaults_to_info() {
    assert_eq!(LogLevel::from_str("verbose").unwrap().0, LevelFilter::Info);
}

#[test]
fn given_log_level_when_converted_then_yields_level_filter() {
    let filter: LevelFilter = LogLevel(LevelFilter::Trace).into();
    assert_eq!(filter, LevelFilter::Trace);
}
