use super::*;

#[test]
fn validation_messages_are_user_facing() {
    assert_eq!(ValidationError::NameTooShort.to_string(), "Name must be at least 2 characters long");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address");
    assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match");
}

#[test]
fn rejected_displays_server_message_verbatim() {
    let err = SubmitError::Rejected("Rate limited".to_owned());
    assert_eq!(err.to_string(), "Rate limited");
    assert_eq!(err.kind(), FailureKind::Rejected);
}

#[test]
fn unsuccessful_displays_fallback() {
    let err = SubmitError::Unsuccessful { fallback: "Try again." };
    assert_eq!(err.to_string(), "Try again.");
    assert_eq!(err.kind(), FailureKind::Unsuccessful);
}

#[test]
fn transport_hides_detail_behind_fixed_message() {
    let err = SubmitError::transport("connection refused (os error 111)");
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    assert_eq!(err.kind(), FailureKind::Transport);
    let SubmitError::Transport { detail } = err else {
        panic!("expected transport error");
    };
    assert!(detail.contains("connection refused"));
}

#[test]
fn failure_kind_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&FailureKind::Unsuccessful).unwrap(), "\"unsuccessful\"");
}
