//! HTTP client for the remote API.
//!
//! One [`ApiClient`] is built from [`AppConfig`] in `App` and provided via
//! context; views fetch it with [`use_api`]. Every call accepts an optional
//! abort signal, normally taken from an [`AbortOnCleanup`] owned by the view.

use contracts::shared::api::{join_url, ApiError};
use contracts::shared::config::AppConfig;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let builder = Request::get(&url).header("Content-Type", "application/json");
        let response = send(builder.abort_signal(signal).build(), signal, &url).await?;
        decode(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        signal: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        self.send_with_body(Request::post(&url), body, signal, &url).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        signal: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("PUT {}", url);
        self.send_with_body(Request::put(&url), body, signal, &url).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        signal: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("PATCH {}", url);
        self.send_with_body(Request::patch(&url), body, signal, &url).await
    }

    pub async fn delete(&self, path: &str, signal: Option<&AbortSignal>) -> Result<(), ApiError> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        let builder = Request::delete(&url).header("Content-Type", "application/json");
        send(builder.abort_signal(signal).build(), signal, &url).await?;
        Ok(())
    }

    async fn send_with_body<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
        signal: Option<&AbortSignal>,
        url: &str,
    ) -> Result<T, ApiError> {
        let request = builder
            .header("Content-Type", "application/json")
            .abort_signal(signal)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        let response = send(Ok(request), signal, url).await?;
        decode(response).await
    }
}

async fn send(
    request: Result<Request, gloo_net::Error>,
    signal: Option<&AbortSignal>,
    url: &str,
) -> Result<Response, ApiError> {
    let request = request.map_err(|e| ApiError::Serialize(e.to_string()))?;
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            if is_abort(&e, signal) {
                log::debug!("Request aborted: {}", url);
                return Err(ApiError::Aborted);
            }
            log::error!("Request to {} failed: {}", url, e);
            return Err(ApiError::Network(e.to_string()));
        }
    };

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let body = if body.trim().is_empty() {
            response.status_text()
        } else {
            body
        };
        log::error!("{} responded {}: {}", url, status, body);
        return Err(ApiError::Status { status, body });
    }

    Ok(response)
}

/// Empty bodies decode as JSON `null` so that `serde_json::Value` callers
/// accept `204`-style answers.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| {
        log::error!("Failed to decode response from {}: {}", response.url(), e);
        ApiError::Decode(e.to_string())
    })
}

fn is_abort(error: &gloo_net::Error, signal: Option<&AbortSignal>) -> bool {
    if signal.map(|s| s.aborted()).unwrap_or(false) {
        return true;
    }
    matches!(error, gloo_net::Error::JsError(js) if js.name == "AbortError")
}

/// Client provided by `App`.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient context not found")
}

/// Abort controller tied to the current reactive owner.
///
/// Created inside a view; every request started with [`AbortOnCleanup::signal`]
/// is aborted when the view (its tab) is disposed.
#[derive(Clone, Copy)]
pub struct AbortOnCleanup {
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl AbortOnCleanup {
    pub fn new() -> Self {
        let controller = StoredValue::new_local(AbortController::new().ok());
        on_cleanup(move || {
            controller.try_with_value(|c| {
                if let Some(c) = c {
                    c.abort();
                }
            });
        });
        Self { controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller
            .try_with_value(|c| c.as_ref().map(AbortController::signal))
            .flatten()
    }
}

impl Default for AbortOnCleanup {
    fn default() -> Self {
        Self::new()
    }
}
