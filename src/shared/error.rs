use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the SPDX document was written
    Success = 0,
    /// Runtime error (API error, network error, unexpected server response)
    RuntimeError = 1,
    /// Configuration error (missing credentials, unknown project or version,
    /// invalid command-line arguments - clap also exits 2 for usage errors)
    ConfigError = 2,
    /// Output error (the SPDX document could not be written)
    OutputError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RuntimeError => write!(f, "Runtime Error (1)"),
            ExitCode::ConfigError => write!(f, "Configuration Error (2)"),
            ExitCode::OutputError => write!(f, "Output Error (3)"),
        }
    }
}

/// Application-specific errors for SPDX export.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Hub server URL not set\n\n💡 Hint: Set the HUB_URL environment variable or use --hub-url")]
    MissingHubUrl,

    #[error("Hub API token not set\n\n💡 Hint: Set the HUB_API_TOKEN environment variable or use --api-token")]
    MissingApiToken,

    #[error("Invalid hub server URL: {url}\nReason: {reason}\n\n💡 Hint: The URL must start with http:// or https://")]
    InvalidHubUrl { url: String, reason: String },

    #[error("Failed to authenticate with the hub server\nDetails: {details}\n\n💡 Hint: Please verify that the API token is valid and not expired")]
    AuthenticationFailed { details: String },

    #[error("Project '{name}' does not exist\nAvailable projects:\n{}\n\n💡 Hint: Project names are matched exactly (case-sensitive)", format_names(available))]
    ProjectNotFound { name: String, available: Vec<String> },

    #[error("Version '{version}' does not exist in project '{project}'\nAvailable versions:\n{}\n\n💡 Hint: Version names are matched exactly (case-sensitive)", format_names(available))]
    VersionNotFound {
        project: String,
        version: String,
        available: Vec<String>,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Hub API request failed: {url}\nDetails: {details}")]
    ApiRequestFailed { url: String, details: String },
}

impl ExportError {
    /// Maps the error to the process exit code it should produce.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ExportError::MissingHubUrl
            | ExportError::MissingApiToken
            | ExportError::InvalidHubUrl { .. }
            | ExportError::AuthenticationFailed { .. }
            | ExportError::ProjectNotFound { .. }
            | ExportError::VersionNotFound { .. } => ExitCode::ConfigError,
            ExportError::FileWriteError { .. } => ExitCode::OutputError,
            ExportError::ApiRequestFailed { .. } => ExitCode::RuntimeError,
        }
    }

    /// Configuration and resolution failures are operator guidance and are
    /// printed to stdout; everything else goes to stderr.
    pub fn prints_to_stdout(&self) -> bool {
        self.exit_code() == ExitCode::ConfigError
    }
}

fn format_names(names: &[String]) -> String {
    if names.is_empty() {
        "  (none)".to_string()
    } else {
        names
            .iter()
            .map(|n| format!("  {}", n))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ExitCode tests
    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::RuntimeError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigError.as_i32(), 2);
        assert_eq!(ExitCode::OutputError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::RuntimeError), "Runtime Error (1)");
        assert_eq!(format!("{}", ExitCode::ConfigError), "Configuration Error (2)");
        assert_eq!(format!("{}", ExitCode::OutputError), "Output Error (3)");
    }

    #[test]
    fn test_exit_code_equality() {
        assert_eq!(ExitCode::Success, ExitCode::Success);
        assert_ne!(ExitCode::Success, ExitCode::OutputError);
    }

    // ExportError tests
    #[test]
    fn test_missing_hub_url_display() {
        let error = ExportError::MissingHubUrl;
        let display = format!("{}", error);
        assert!(display.contains("Hub server URL not set"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("HUB_URL"));
        assert_eq!(error.exit_code(), ExitCode::ConfigError);
    }

    #[test]
    fn test_missing_api_token_display() {
        let error = ExportError::MissingApiToken;
        let display = format!("{}", error);
        assert!(display.contains("Hub API token not set"));
        assert!(display.contains("HUB_API_TOKEN"));
        assert_eq!(error.exit_code(), ExitCode::ConfigError);
    }

    #[test]
    fn test_project_not_found_lists_available() {
        let error = ExportError::ProjectNotFound {
            name: "missing".to_string(),
            available: vec!["alpha".to_string(), "beta".to_string()],
        };
        let display = format!("{}", error);
        assert!(display.contains("Project 'missing' does not exist"));
        assert!(display.contains("  alpha"));
        assert!(display.contains("  beta"));
        assert!(error.prints_to_stdout());
    }

    #[test]
    fn test_project_not_found_empty_catalog() {
        let error = ExportError::ProjectNotFound {
            name: "missing".to_string(),
            available: vec![],
        };
        let display = format!("{}", error);
        assert!(display.contains("(none)"));
    }

    #[test]
    fn test_version_not_found_lists_available() {
        let error = ExportError::VersionNotFound {
            project: "alpha".to_string(),
            version: "9.9".to_string(),
            available: vec!["1.0".to_string(), "2.0".to_string()],
        };
        let display = format!("{}", error);
        assert!(display.contains("Version '9.9' does not exist in project 'alpha'"));
        assert!(display.contains("  1.0"));
        assert!(display.contains("  2.0"));
        assert_eq!(error.exit_code(), ExitCode::ConfigError);
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ExportError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.json"));
        assert!(display.contains("Permission denied"));
        assert_eq!(error.exit_code(), ExitCode::OutputError);
        assert!(!error.prints_to_stdout());
    }

    #[test]
    fn test_authentication_failed_display() {
        let error = ExportError::AuthenticationFailed {
            details: "status 401".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to authenticate"));
        assert!(display.contains("status 401"));
        assert_eq!(error.exit_code(), ExitCode::ConfigError);
    }

    #[test]
    fn test_api_request_failed_exit_code() {
        let error = ExportError::ApiRequestFailed {
            url: "https://hub.example.com/api/projects".to_string(),
            details: "status 500".to_string(),
        };
        assert_eq!(error.exit_code(), ExitCode::RuntimeError);
        assert!(!error.prints_to_stdout());
    }
}
