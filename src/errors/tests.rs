//! Unit tests for error handling.

use std::io;

use crate::errors::errors::{DriverError, Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, Position(10));

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_position().0, 10);
    assert!(error.get_scanned().is_empty());
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '#' }, Position(4));

    assert_eq!(error.to_string(), "unrecognised character: '#' at column 5");
}

#[test]
fn test_error_tip_colon() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: ':' }, Position(0));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains(":=")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_whitespace() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '\r' }, Position(0));

    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '$' }, Position(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_driver_error_messages() {
    let error = DriverError::InputNotFound { path: "missing.limp".into() };
    assert_eq!(error.to_string(), "file not found: missing.limp");
    assert_eq!(error.exit_code(), 2);

    let error = DriverError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert_eq!(error.to_string(), "i/o error: denied");
    assert_eq!(error.exit_code(), 1);
}
