use crate::core::error::InvokeError;
use std::str::FromStr;

/// Methods a request payload may name. Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

const ALL: [HttpMethod; 7] = [
    HttpMethod::Get,
    HttpMethod::Post,
    HttpMethod::Put,
    HttpMethod::Delete,
    HttpMethod::Patch,
    HttpMethod::Head,
    HttpMethod::Options,
];

impl HttpMethod {
    /// Absent and empty both mean GET.
    pub fn resolve(name: Option<&str>) -> Result<Self, InvokeError> {
        match name.filter(|name| !name.is_empty()) {
            Some(name) => name.parse(),
            None => Ok(Self::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }

    pub fn to_reqwest_method(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Patch => reqwest::Method::PATCH,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
        }
    }
}

impl FromStr for HttpMethod {
    type Err = InvokeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ALL.into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvokeError::Request(format!("unsupported HTTP method '{name}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(HttpMethod::resolve(Some("get")).unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::resolve(Some("Post")).unwrap(), HttpMethod::Post);
        assert_eq!(HttpMethod::resolve(Some("OPTIONS")).unwrap(), HttpMethod::Options);
        assert_eq!(HttpMethod::resolve(Some("patch")).unwrap(), HttpMethod::Patch);
    }

    #[test]
    fn test_resolve_absent_or_empty_is_get() {
        assert_eq!(HttpMethod::resolve(None).unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::resolve(Some("")).unwrap(), HttpMethod::Get);
    }

    #[test]
    fn test_resolve_unknown_is_request_error() {
        let err = HttpMethod::resolve(Some("BREW")).unwrap_err();
        assert_eq!(err.type_label(), "RequestError");
        assert_eq!(err.to_string(), "Invalid request: unsupported HTTP method 'BREW'");

        // Whitespace is not trimmed.
        assert!(HttpMethod::resolve(Some(" get")).is_err());
    }

    #[test]
    fn test_every_method_maps_to_reqwest() {
        for method in ALL {
            assert_eq!(method.to_reqwest_method().as_str(), method.as_str());
        }
    }
}
