use listmonk_client::error::AppError;
use reqwest::StatusCode;
use std::path::PathBuf;

#[test]
fn test_app_error_display_validation() {
    let error = AppError::Validation("Email is required".to_string());
    assert_eq!(error.to_string(), "validation error: Email is required");
}

#[test]
fn test_app_error_display_empty_response() {
    assert_eq!(
        AppError::EmptyResponse.to_string(),
        "validation error: empty response"
    );
}

#[test]
fn test_app_error_display_http() {
    let error = AppError::Http {
        status: StatusCode::BAD_REQUEST,
        body: r#"{"message":"invalid email"}"#.to_string(),
    };
    let text = error.to_string();
    assert!(text.contains("400"));
    assert!(text.contains("invalid email"));
}

#[test]
fn test_app_error_display_file_not_found() {
    let error = AppError::FileNotFound(PathBuf::from("/tmp/missing.pdf"));
    assert_eq!(error.to_string(), "file not found: /tmp/missing.pdf");
}

#[test]
fn test_app_error_validation_family() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(AppError::Validation(String::new()).is_validation());
    assert!(AppError::EmptyResponse.is_validation());
    assert!(AppError::InvalidJson(json_error).is_validation());
    assert!(AppError::SchemaMismatch(String::new()).is_validation());
    assert!(AppError::OperationNotAllowed(String::new()).is_validation());
    assert!(AppError::FileNotFound(PathBuf::new()).is_validation());

    assert!(!AppError::NotFound(String::new()).is_validation());
    assert!(
        !AppError::Http {
            status: StatusCode::NOT_FOUND,
            body: String::new()
        }
        .is_validation()
    );
}

#[test]
fn test_app_error_status() {
    let error = AppError::Http {
        status: StatusCode::NOT_FOUND,
        body: String::new(),
    };
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(AppError::EmptyResponse.status(), None);
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::Io(_)));
    assert!(!error.is_validation());
}
