//! cPanel JSON API executor over WHM.
//!
//! Calls are sent as `GET /json-api/cpanel` against the WHM port with the
//! cPanel module, function and API version carried as `cpanel_jsonapi_*`
//! query parameters. Authentication uses a WHM remote access hash.
//!
//! Responses are JSON documents of the form
//! `{"cpanelresult": {"data": ..., "event": {...}, "error": "..."}}`. A
//! non-empty `cpanelresult.error` is surfaced as [`CpanelError::Remote`];
//! anything else is returned untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use url::Url;

use super::traits::{CpanelError, CpanelResult, RequestExecutor};
use crate::config::{ServerSettings, Settings};
use crate::domain::Request;

const CPANEL_ENDPOINT: &str = "json-api/cpanel";

/// Executor backed by a WHM server.
///
/// # Example
///
/// ```ignore
/// use cpanel_mail::config::Settings;
/// use cpanel_mail::providers::WhmExecutor;
/// use cpanel_mail::services::EmailService;
///
/// let settings = Settings::load(&Settings::default_path()?)?;
/// let email = EmailService::new(WhmExecutor::new(settings)?);
/// let accounts = email.accounts(Default::default()).await?;
/// ```
pub struct WhmExecutor {
    client: reqwest::Client,
    server: ServerSettings,
    api_username: String,
}

impl WhmExecutor {
    /// Creates an executor, building an HTTP client from the server settings.
    pub fn new(settings: Settings) -> CpanelResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.server.timeout_seconds))
            .danger_accept_invalid_certs(!settings.server.verify_ssl)
            .build()?;

        Ok(Self {
            client,
            server: settings.server,
            api_username: settings.api_username,
        })
    }

    /// Overrides the HTTP client (useful for proxies or custom TLS roots).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The cPanel account calls act on unless a request overrides it.
    pub fn api_username(&self) -> &str {
        &self.api_username
    }

    pub fn server(&self) -> &ServerSettings {
        &self.server
    }

    /// Builds the full request URL including every query parameter.
    pub fn request_url(&self, request: &Request) -> CpanelResult<Url> {
        let base = self.server.base_url()?;
        let mut url = base
            .join(CPANEL_ENDPOINT)
            .map_err(|e| CpanelError::Config(format!("invalid endpoint URL: {}", e)))?;

        let version = request.version().unwrap_or(self.server.api_version);
        let user = request.username().unwrap_or(&self.api_username);

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("cpanel_jsonapi_user", user)
                .append_pair("cpanel_jsonapi_module", request.module())
                .append_pair("cpanel_jsonapi_func", request.function())
                .append_pair("cpanel_jsonapi_apiversion", &version.to_string());

            for (key, value) in request.params() {
                query.append_pair(key, &encode_value(value));
            }
        }

        Ok(url)
    }

    fn auth_headers(&self) -> CpanelResult<HeaderMap> {
        let hash: String = self
            .server
            .hash
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("WHM {}:{}", self.server.user, hash))
                .map_err(|e| CpanelError::Config(format!("invalid auth header: {}", e)))?,
        );
        Ok(headers)
    }

    async fn handle_error(&self, response: reqwest::Response) -> CpanelError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        } else {
            body
        };

        tracing::warn!(status = status.as_u16(), host = %self.server.host, "cPanel request failed");

        match status.as_u16() {
            401 | 403 => CpanelError::Authentication(message),
            code => CpanelError::Api {
                status: code,
                message,
            },
        }
    }
}

/// Renders a parameter value the way cPanel expects it in a query string.
fn encode_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Pulls a non-empty `cpanelresult.error` out of a response body.
fn remote_error(body: &Value) -> Option<&str> {
    body.get("cpanelresult")
        .and_then(|result| result.get("error"))
        .and_then(Value::as_str)
        .filter(|error| !error.is_empty())
}

#[async_trait]
impl RequestExecutor for WhmExecutor {
    async fn perform_request(&self, request: Request) -> CpanelResult<Value> {
        let url = self.request_url(&request)?;

        tracing::debug!(
            host = %self.server.host,
            module = request.module(),
            function = request.function(),
            "sending cPanel request"
        );

        let response = self
            .client
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.handle_error(response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| CpanelError::InvalidResponse(format!("failed to parse response: {}", e)))?;

        if let Some(error) = remote_error(&body) {
            tracing::warn!(function = request.function(), error, "cPanel reported an error");
            return Err(CpanelError::Remote(error.to_string()));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn executor() -> WhmExecutor {
        let settings = Settings {
            server: ServerSettings::default()
                .with_host("whm.example.com")
                .with_hash("abc\ndef\n"),
            api_username: "alice".to_string(),
        };
        WhmExecutor::new(settings).unwrap()
    }

    fn query(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn url_targets_cpanel_endpoint_on_ssl_port() {
        let url = executor().request_url(&Request::new("listpops")).unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("whm.example.com"));
        assert_eq!(url.port_or_known_default(), Some(2087));
        assert_eq!(url.path(), "/json-api/cpanel");
    }

    #[test]
    fn url_carries_jsonapi_fields_and_params() {
        let request = Request::new("addpop")
            .param("domain", "example.com")
            .param("quota", 250);
        let url = executor().request_url(&request).unwrap();
        let pairs = query(&url);

        assert!(pairs.contains(&("cpanel_jsonapi_user".into(), "alice".into())));
        assert!(pairs.contains(&("cpanel_jsonapi_module".into(), "Email".into())));
        assert!(pairs.contains(&("cpanel_jsonapi_func".into(), "addpop".into())));
        assert!(pairs.contains(&("cpanel_jsonapi_apiversion".into(), "2".into())));
        assert!(pairs.contains(&("domain".into(), "example.com".into())));
        assert!(pairs.contains(&("quota".into(), "250".into())));
    }

    #[test]
    fn request_overrides_version_and_user() {
        let request = Request::new("addlist")
            .with_version(1)
            .merge(crate::domain::Options::new().with("api_username", "bob"));
        let pairs = query(&executor().request_url(&request).unwrap());

        assert!(pairs.contains(&("cpanel_jsonapi_apiversion".into(), "1".into())));
        assert!(pairs.contains(&("cpanel_jsonapi_user".into(), "bob".into())));
    }

    #[test]
    fn auth_header_strips_whitespace_from_hash() {
        let headers = executor().auth_headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "WHM root:abcdef");
    }

    #[test]
    fn value_encoding() {
        assert_eq!(encode_value(&Value::Null), "");
        assert_eq!(encode_value(&json!(true)), "1");
        assert_eq!(encode_value(&json!(false)), "0");
        assert_eq!(encode_value(&json!(42)), "42");
        assert_eq!(encode_value(&json!("$header_from:")), "$header_from:");
        assert_eq!(encode_value(&json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn remote_error_detection() {
        let failed = json!({"cpanelresult": {"error": "Access denied", "data": []}});
        assert_eq!(remote_error(&failed), Some("Access denied"));

        let empty = json!({"cpanelresult": {"error": "", "data": []}});
        assert_eq!(remote_error(&empty), None);

        let ok = json!({"cpanelresult": {"data": [{"email": "a@b.c"}], "event": {"result": 1}}});
        assert_eq!(remote_error(&ok), None);
    }
}
