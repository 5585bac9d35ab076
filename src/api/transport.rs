use crate::api::body::RequestBody;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA};
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Source of the cache-busting timestamp
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Per-call options for [`prepare`]
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<RequestBody>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach `Authorization: Bearer <token>` when a token is given
    pub fn with_bearer(mut self, token: Option<&str>) -> Result<Self> {
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::Request(format!("invalid bearer token: {e}")))?;
            self.headers.insert(AUTHORIZATION, value);
        }
        Ok(self)
    }
}

/// A fully assembled request, ready for a [`Transport`]
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

/// Status and raw text of a response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs one network round trip. Connection-level failures must be
/// reported as [`ApiError::Unreachable`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse>;
}

/// Append the cache-busting `_` parameter to `{base}{endpoint}`
pub fn build_url(base_url: &str, endpoint: &str, timestamp: i64) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{base_url}{endpoint}{separator}_={timestamp}")
}

/// Assemble URL and headers for a call. Fails on an empty endpoint before
/// anything else happens.
pub fn prepare(base_url: &str, endpoint: &str, options: RequestOptions, clock: &dyn Clock) -> Result<PreparedRequest> {
    if endpoint.trim().is_empty() {
        return Err(ApiError::InvalidEndpoint(endpoint.to_string()));
    }

    let url = build_url(base_url, endpoint, clock.now_millis());
    let multipart = options.body.as_ref().is_some_and(RequestBody::is_multipart);

    let mut headers = HeaderMap::new();
    if !multipart {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    headers.extend(options.headers);
    if multipart {
        // the boundary is only known once the form is encoded
        headers.remove(CONTENT_TYPE);
    }
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store, must-revalidate"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));

    Ok(PreparedRequest {
        method: options.method,
        url,
        headers,
        body: options.body,
    })
}

/// Best-effort message for a non-2xx response
pub fn http_error_message(status: u16, body: &str) -> String {
    let generic = format!("HTTP error! status: {status}");
    let text = body.trim();
    if text.is_empty() {
        return generic;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
        for key in ["message", "error"] {
            if let Some(Value::String(message)) = map.get(key) {
                if !message.is_empty() {
                    return message.clone();
                }
            }
        }
    }

    format!("{generic} - {text}")
}

/// Turn a raw response into the parsed JSON body or a typed error
pub fn parse_response(response: RawResponse) -> Result<Value> {
    if !(200..300).contains(&response.status) {
        return Err(ApiError::Http {
            status: response.status,
            message: http_error_message(response.status, &response.body),
        });
    }

    let text = response.body.trim();
    if text.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_str(text).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

/// [`Transport`] backed by `reqwest`
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Request(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

/// A request reqwest refused to build (bad scheme, unparseable URL) never
/// left the process and is not a connectivity failure
fn send_error(url: &str, e: &reqwest::Error) -> ApiError {
    if e.is_builder() {
        ApiError::Request(e.to_string())
    } else {
        ApiError::Unreachable {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, &url).headers(headers);
        builder = match body {
            Some(RequestBody::Json(value)) => builder.body(value.to_string()),
            Some(RequestBody::Multipart(form)) => builder.multipart(form.into_reqwest()?),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            send_error(&url, &e)
        })?;

        let status = response.status().as_u16();
        // Headers arrived, so the server was reached; a broken body is a bad response
        let body = response.text().await.map_err(|e| {
            warn!("Reading response from {} failed: {}", url, e);
            ApiError::MalformedResponse(format!("failed to read response body: {e}"))
        })?;

        debug!("{} answered {} with {} bytes", url, status, body.len());
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::body::MultipartForm;
    use serde_json::json;

    const BASE: &str = "http://localhost:5000/api";

    #[test]
    fn cache_buster_uses_question_mark_or_ampersand() {
        assert_eq!(build_url(BASE, "/properties", 1700), "http://localhost:5000/api/properties?_=1700");
        assert_eq!(
            build_url(BASE, "/properties?type=exclusive", 1700),
            "http://localhost:5000/api/properties?type=exclusive&_=1700"
        );
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let err = prepare(BASE, "  ", RequestOptions::get(), &FixedClock(1)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidEndpoint(_)));
    }

    #[test]
    fn json_requests_carry_content_type_and_cache_headers() {
        let options = RequestOptions::method(Method::POST).with_body(RequestBody::Json(json!({ "a": 1 })));
        let request = prepare(BASE, "/reviews", options, &FixedClock(42)).unwrap();

        assert_eq!(request.url, "http://localhost:5000/api/reviews?_=42");
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers[CACHE_CONTROL], "no-cache, no-store, must-revalidate");
        assert_eq!(request.headers[PRAGMA], "no-cache");
        assert_eq!(request.headers[EXPIRES], "0");
    }

    #[test]
    fn multipart_requests_leave_content_type_unset() {
        let options = RequestOptions::method(Method::POST)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .with_body(MultipartForm::new().text("name", "x").into());
        let request = prepare(BASE, "/partners", options, &FixedClock(1)).unwrap();

        assert!(request.headers.get(CONTENT_TYPE).is_none());
        assert!(request.headers.get(CACHE_CONTROL).is_some());
    }

    #[test]
    fn caller_cannot_override_cache_headers() {
        let options =
            RequestOptions::get().with_header(CACHE_CONTROL, HeaderValue::from_static("max-age=3600"));
        let request = prepare(BASE, "/blogs", options, &FixedClock(1)).unwrap();
        assert_eq!(request.headers[CACHE_CONTROL], "no-cache, no-store, must-revalidate");
    }

    #[test]
    fn bearer_token_is_attached() {
        let options = RequestOptions::get().with_bearer(Some("abc")).unwrap();
        let request = prepare(BASE, "/contacts", options, &FixedClock(1)).unwrap();
        assert_eq!(request.headers[AUTHORIZATION], "Bearer abc");

        let anonymous = RequestOptions::get().with_bearer(None).unwrap();
        assert!(anonymous.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn empty_success_body_is_empty_object() {
        assert_eq!(parse_response(RawResponse::new(200, "")).unwrap(), json!({}));
        assert_eq!(parse_response(RawResponse::new(204, "  \n")).unwrap(), json!({}));
    }

    #[test]
    fn success_body_is_parsed() {
        let value = parse_response(RawResponse::new(201, r#"{"success":true}"#)).unwrap();
        assert_eq!(value, json!({ "success": true }));
    }

    #[test]
    fn unparseable_success_body_is_malformed() {
        let err = parse_response(RawResponse::new(200, "<html>")).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn error_message_comes_from_json_message() {
        let err = parse_response(RawResponse::new(400, r#"{"message":"Title is required"}"#)).unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn error_message_falls_back_to_plain_text() {
        let err = parse_response(RawResponse::new(502, "Bad Gateway")).unwrap_err();
        assert!(err.to_string().contains("Bad Gateway"));
        assert!(err.to_string().starts_with("HTTP error! status: 502"));
    }

    #[test]
    fn empty_error_body_gives_generic_message() {
        let err = parse_response(RawResponse::new(500, "")).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn json_error_without_message_keeps_raw_text() {
        let err = parse_response(RawResponse::new(404, r#"{"ok":false}"#)).unwrap_err();
        assert_eq!(err.to_string(), r#"HTTP error! status: 404 - {"ok":false}"#);
    }
}
