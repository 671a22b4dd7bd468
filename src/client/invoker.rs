use super::http::{execute_request, ApiRequest};
use super::http_method::HttpMethod;
use super::input::parse_input;
use super::invoke_models::{InvokeConfig, RequestSpec, UrlInput};
use crate::auth::{merge_headers, AuthType, Credentials, Headers};
use crate::core::error::InvokeError;
use serde_json::Value;

/// Runs the single request of one invocation, from stdin text to parsed body.
pub struct ApiInvoker {
    config: InvokeConfig,
}

impl ApiInvoker {
    pub fn new(config: InvokeConfig) -> Self {
        Self { config }
    }

    /// GET `url`, rejecting non-2xx responses.
    pub async fn fetch(&self, input: &str) -> Result<Value, InvokeError> {
        let UrlInput { url } = parse_input(input)?;
        let request = ApiRequest::get(&url, self.config.timeout);
        let response = execute_request(&request).await?.error_for_status()?;
        response.json()
    }

    /// GET `url` and parse whatever comes back, regardless of status.
    pub async fn fetch_unchecked(&self, input: &str) -> Result<Value, InvokeError> {
        let UrlInput { url } = parse_input(input)?;
        let request = ApiRequest::get(&url, self.config.timeout);
        let response = execute_request(&request).await?;
        if !response.is_success() {
            crate::debug_log!("Ignoring status {}, parsing body anyway", response.status);
        }
        response.json()
    }

    /// Full request with credential injection. Returns the body and status.
    pub async fn invoke(
        &self,
        input: &str,
        credentials: &Credentials,
    ) -> Result<(Value, u16), InvokeError> {
        let spec: RequestSpec = parse_input(input)?;
        let request = self.build_request(spec, credentials)?;
        let response = execute_request(&request).await?.error_for_status()?;
        let data = response.json()?;
        Ok((data, response.status))
    }

    pub fn build_request(
        &self,
        spec: RequestSpec,
        credentials: &Credentials,
    ) -> Result<ApiRequest, InvokeError> {
        let method = HttpMethod::resolve(spec.method.as_deref())?;

        let auth_type = AuthType::from_name(spec.auth_type.as_deref());
        crate::debug_log!("Auth type: {}", auth_type.as_str());

        let custom_headers = spec.custom_headers.unwrap_or_default();
        let injected = auth_type.headers(credentials, &custom_headers);
        let sensitive_headers = injected.iter().map(|(key, _)| key.clone()).collect();

        let mut base: Headers = spec.headers.unwrap_or_default().into_iter().collect();
        base.sort();

        Ok(ApiRequest {
            method,
            url: spec.url,
            headers: merge_headers(base, injected),
            body: spec.body,
            timeout: self.config.timeout,
            sensitive_headers,
        })
    }
}
