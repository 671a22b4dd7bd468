use std::fmt;
use std::io;

/// Which side of the exchange produced JSON that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSource {
    Input,
    Response,
}

impl ParseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseSource::Input => "input",
            ParseSource::Response => "response",
        }
    }
}

#[derive(Debug)]
pub enum InvokeError {
    Io(io::Error),
    Parse {
        source: ParseSource,
        message: String,
    },
    HttpStatus(u16),
    Network(String),
    Request(String),
    Config(String),
}

impl InvokeError {
    pub fn parse(source: ParseSource, err: serde_json::Error) -> Self {
        InvokeError::Parse {
            source,
            message: err.to_string(),
        }
    }

    /// Coarse category label written into error envelopes.
    pub fn type_label(&self) -> &'static str {
        match self {
            InvokeError::Io(_) => "IoError",
            InvokeError::Parse { .. } => "ParseError",
            InvokeError::HttpStatus(_) => "HttpStatusError",
            InvokeError::Network(_) => "NetworkError",
            InvokeError::Request(_) => "RequestError",
            InvokeError::Config(_) => "ConfigError",
        }
    }
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvokeError::Io(err) => write!(f, "IO error: {err}"),
            InvokeError::Parse { source, message } => {
                write!(f, "Invalid {} JSON: {message}", source.as_str())
            }
            InvokeError::HttpStatus(status) => write!(f, "HTTP error! status: {status}"),
            InvokeError::Network(msg) => write!(f, "Network error: {msg}"),
            InvokeError::Request(msg) => write!(f, "Invalid request: {msg}"),
            InvokeError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for InvokeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvokeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InvokeError {
    fn from(err: io::Error) -> Self {
        InvokeError::Io(err)
    }
}

impl From<reqwest::Error> for InvokeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            InvokeError::Request(err.to_string())
        } else if let Some(status) = err.status() {
            InvokeError::HttpStatus(status.as_u16())
        } else {
            InvokeError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_mentions_code() {
        let err = InvokeError::HttpStatus(404);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(err.type_label(), "HttpStatusError");
    }

    #[test]
    fn test_parse_error_names_its_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = InvokeError::parse(ParseSource::Input, json_err);
        assert!(err.to_string().starts_with("Invalid input JSON: "));
        assert_eq!(err.type_label(), "ParseError");

        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = InvokeError::parse(ParseSource::Response, json_err);
        assert!(err.to_string().starts_with("Invalid response JSON: "));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = InvokeError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.type_label(), "IoError");
        assert!(err.source().is_some());
    }
}
