#![allow(non_snake_case)]

use super::*;

// LogLevel tests

#[test]
fn LogLevel___ordering___trace_less_than_debug() {
    assert!(LogLevel::Trace < LogLevel::Debug);
}

#[test]
fn LogLevel___ordering___warn_less_than_error() {
    assert!(LogLevel::Warn < LogLevel::Error);
}

#[test]
fn LogLevel___ordering___error_less_than_off() {
    assert!(LogLevel::Error < LogLevel::Off);
}

#[test]
fn LogLevel___from_u8___2_returns_info() {
    assert_eq!(LogLevel::from_u8(2), LogLevel::Info);
}

#[test]
fn LogLevel___from_u8___out_of_range_returns_off() {
    assert_eq!(LogLevel::from_u8(200), LogLevel::Off);
}

#[test]
fn LogLevel___parse___is_case_insensitive() {
    assert_eq!(LogLevel::parse("DeBuG"), Some(LogLevel::Debug));
    assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
}

#[test]
fn LogLevel___parse___unknown_returns_none() {
    assert_eq!(LogLevel::parse("verbose"), None);
}

#[test]
fn LogLevel___display___is_uppercase() {
    assert_eq!(LogLevel::Info.to_string(), "INFO");
    assert_eq!(LogLevel::Off.to_string(), "OFF");
}

#[test]
fn MANIFEST_VERSION___is_two() {
    assert_eq!(MANIFEST_VERSION, "2");
}
