use crate::AuthError;

use std::path::PathBuf;

#[test]
fn given_file_read_error_when_is_transient_then_returns_true() {
    let err = AuthError::file_read(
        PathBuf::from("/test"),
        std::io::Error::new(std::io::ErrorKind::Other, "test"),
    );
    assert!(err.is_transient());
}

#[test]
fn given_credentials_error_when_is_transient_then_returns_false() {
    let err = AuthError::credentials("bad password");
    assert!(!err.is_transient());
}

#[test]
fn given_credentials_error_when_user_message_then_passes_message_through() {
    let err = AuthError::credentials("Username already taken");
    assert_eq!(err.user_message(), "Username already taken");
}

#[test]
fn given_io_errors_when_user_message_then_hides_paths() {
    let errors = vec![
        AuthError::file_write(
            PathBuf::from("/secret/path"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ),
        AuthError::file_read(
            PathBuf::from("/secret/path"),
            std::io::Error::new(std::io::ErrorKind::Other, "test"),
        ),
    ];

    for err in errors {
        let message = err.user_message();
        assert!(!message.is_empty());
        assert!(!message.contains("/secret/path"), "leaked path in {message}");
    }
}

#[test]
fn given_serde_json_error_when_converted_then_serialization_variant() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let auth_err: AuthError = json_err.into();

    assert!(matches!(auth_err, AuthError::Serialization { .. }));
}
