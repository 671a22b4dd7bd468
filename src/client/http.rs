use super::http_method::HttpMethod;
use crate::auth::{Headers, API_KEY_HEADER};
use crate::core::error::{InvokeError, ParseSource};
use crate::core::logger::Logger;
use serde_json::Value;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Value>,
    pub timeout: Option<Duration>,
    /// Header names whose values must not appear in debug output.
    pub sensitive_headers: Vec<String>,
}

impl ApiRequest {
    pub fn get(url: &str, timeout: Option<Duration>) -> Self {
        ApiRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
            timeout,
            sensitive_headers: Vec::new(),
        }
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(key, _)| key.eq_ignore_ascii_case(name))
    }

    fn is_sensitive(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(reqwest::header::AUTHORIZATION.as_str())
            || name.eq_ignore_ascii_case(API_KEY_HEADER)
            || self
                .sensitive_headers
                .iter()
                .any(|key| key.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn error_for_status(self) -> Result<Self, InvokeError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(InvokeError::HttpStatus(self.status))
        }
    }

    pub fn json(&self) -> Result<Value, InvokeError> {
        crate::core::json::parse(&self.body, ParseSource::Response)
    }
}

pub async fn execute_request(request: &ApiRequest) -> Result<HttpResponse, InvokeError> {
    Logger::debug(&format!(
        "Executing {} request to URL: {}",
        request.method.as_str(),
        request.url
    ));

    let client = reqwest::Client::new();
    let mut req_builder = client.request(request.method.to_reqwest_method(), &request.url);

    if !request.has_header(reqwest::header::USER_AGENT.as_str()) {
        req_builder = req_builder.header(
            reqwest::header::USER_AGENT,
            crate::core::version::user_agent(),
        );
    }

    for (key, value) in &request.headers {
        if request.is_sensitive(key) {
            Logger::debug(&format!("Adding header: {key}: <redacted>"));
        } else {
            Logger::debug(&format!("Adding header: {key}: {value}"));
        }
        req_builder = req_builder.header(key, value);
    }

    if let Some(body) = &request.body {
        if !request.has_header(reqwest::header::CONTENT_TYPE.as_str()) {
            req_builder = req_builder.header(
                reqwest::header::CONTENT_TYPE,
                crate::core::json::CONTENT_TYPE,
            );
        }
        req_builder = req_builder.body(serde_json::to_vec(body).map_err(|e| {
            InvokeError::Request(format!("body could not be serialized: {e}"))
        })?);
    }

    if let Some(timeout) = request.timeout {
        req_builder = req_builder.timeout(timeout);
    }

    let start_time = Instant::now();
    let response = req_builder.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    Logger::debug(&format!(
        "Response status: {status} ({} ms, {} bytes)",
        start_time.elapsed().as_millis(),
        body.len()
    ));

    Ok(HttpResponse { status, body })
}
