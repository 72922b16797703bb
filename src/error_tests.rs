//! Tests for SnipdeckError type

use super::*;

#[test]
fn test_library_not_found_display() {
    let error = SnipdeckError::LibraryNotFound("/tmp/missing.toml".to_string());
    let msg = error.to_string();
    assert!(msg.contains("not found"));
    assert!(msg.contains("/tmp/missing.toml"));
}

#[test]
fn test_invalid_library_display() {
    let error = SnipdeckError::InvalidLibrary("expected `=`".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid snippet library"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test error");
    let err = SnipdeckError::from(io_err);
    assert!(matches!(err, SnipdeckError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = SnipdeckError::InvalidLibrary("bad".to_string());
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("InvalidLibrary"));
}
