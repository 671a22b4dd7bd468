use crate::core::error::InvokeError;

/// Exit codes for the callapi CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Malformed JSON on stdin or in the response body
    ParseError = 2,
    /// Configuration error (.env file)
    ConfigError = 3,
    /// Reading stdin failed
    IoError = 4,
    /// Request could not be built
    RequestError = 5,
    /// Network failure
    NetworkError = 6,
    /// Non-2xx response status
    HttpStatusError = 7,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&InvokeError> for ExitCode {
    fn from(error: &InvokeError) -> Self {
        match error {
            InvokeError::Io(_) => ExitCode::IoError,
            InvokeError::Parse { .. } => ExitCode::ParseError,
            InvokeError::HttpStatus(_) => ExitCode::HttpStatusError,
            InvokeError::Network(_) => ExitCode::NetworkError,
            InvokeError::Request(_) => ExitCode::RequestError,
            InvokeError::Config(_) => ExitCode::ConfigError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        match error.downcast_ref::<InvokeError>() {
            Some(invoke_error) => ExitCode::from(invoke_error),
            None => ExitCode::GeneralError,
        }
    }
}
