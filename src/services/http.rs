//! Fetch-based API client
//!
//! Thin wrapper over `window.fetch` for the JSON action endpoints.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::error::{ServiceError, ServiceResult};

/// Backend error body: `{"errors":[{"field":..,"message":..}]}`
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Deserialize)]
struct ErrorItem {
    message: String,
}

/// Build the error for a non-2xx response
pub(crate) fn rejection(status: u16, body: &str) -> ServiceError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.errors.into_iter().next())
        .map(|item| item.message);
    ServiceError::Rejected { status, message }
}

fn js_error(e: wasm_bindgen::JsValue) -> ServiceError {
    ServiceError::Network(
        e.as_string()
            .unwrap_or_else(|| format!("{:?}", e)),
    )
}

/// Same-origin API client
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post(&self, path: &str) -> ServiceResult<()> {
        self.send("POST", path).await
    }

    pub async fn delete(&self, path: &str) -> ServiceResult<()> {
        self.send("DELETE", path).await
    }

    async fn send(&self, method: &str, path: &str) -> ServiceResult<()> {
        let url = self.url(path);
        log::debug!("[API] {} {}", method, url);

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_credentials(RequestCredentials::SameOrigin);

        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| ServiceError::Network("no window".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        let err = rejection(status, &body);
        log::warn!("[API] {} {} -> {}", method, url, err);
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_takes_first_backend_message() {
        let body = r#"{"errors":[{"field":"","message":"Idea is closed"},{"message":"second"}]}"#;
        assert_eq!(
            rejection(400, body),
            ServiceError::Rejected { status: 400, message: Some("Idea is closed".to_string()) }
        );
    }

    #[test]
    fn test_rejection_with_unparseable_body() {
        assert_eq!(
            rejection(502, "<html>Bad Gateway</html>"),
            ServiceError::Rejected { status: 502, message: None }
        );
        assert_eq!(
            rejection(400, r#"{"errors":[]}"#),
            ServiceError::Rejected { status: 400, message: None }
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("https://demo.example.com/");
        assert_eq!(client.url("/api/ideas/1/support"), "https://demo.example.com/api/ideas/1/support");
        assert_eq!(ApiClient::default().url("/api/x"), "/api/x");
    }
}
