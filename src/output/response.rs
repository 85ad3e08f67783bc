//! CLI error envelope and exit code mapping.

use rewire::error::Hint;
use rewire::{Error, ErrorCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse {
    pub success: bool,
    pub error: CliError,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl CliResponse {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            error: CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| {
            format!(
                "{{\"success\":false,\"error\":{{\"code\":{:?},\"message\":{:?}}}}}",
                self.error.code, self.error.message
            )
        })
    }
}

/// Print the error envelope to stderr. Stdout carries progress lines only.
pub fn print_error(err: &Error) {
    eprintln!("{}", CliResponse::from_error(err).to_json());
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::FileAccessDenied => 3,

        ErrorCode::FileNotFound => 4,

        ErrorCode::FileEncodingError => 5,

        ErrorCode::FileDiskFull | ErrorCode::InternalIoError => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_code_details_and_hints() {
        let err = Error::file_not_found("events.js", "read");
        let json = CliResponse::from_error(&err).to_json();

        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"code\": \"file.not_found\""));
        assert!(json.contains("\"path\": \"events.js\""));
        assert!(json.contains("\"hints\""));
    }

    #[test]
    fn envelope_omits_empty_hints() {
        let err = Error::file_encoding("events.js", "invalid utf-8");
        let json = CliResponse::from_error(&err).to_json();

        assert!(!json.contains("\"hints\""));
    }

    #[test]
    fn error_classes_map_to_distinct_exit_codes() {
        assert_eq!(exit_code_for_error(ErrorCode::ConfigInvalidValue), 2);
        assert_eq!(exit_code_for_error(ErrorCode::FileAccessDenied), 3);
        assert_eq!(exit_code_for_error(ErrorCode::FileNotFound), 4);
        assert_eq!(exit_code_for_error(ErrorCode::FileEncodingError), 5);
        assert_eq!(exit_code_for_error(ErrorCode::FileDiskFull), 1);
    }
}
