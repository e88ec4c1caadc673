use async_trait::async_trait;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::interface::ContentApi;
use crate::destination::BilingualDestination;
use crate::error::ApiError;
use crate::language::Language;
use crate::progress::TranslationProgress;

/// Static shared-secret header expected by the admin endpoints. Passed
/// through verbatim; this client adds no session or token handling.
const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// HTTP client for the content API.
#[derive(Debug, Clone)]
pub struct ContentClient {
    client: Client,
    base_url: String,
    admin_key: Option<String>,
}

/// Response envelope used by every endpoint.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

impl ContentClient {
    pub fn new(base_url: impl Into<String>, admin_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            admin_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_admin_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.admin_key {
            Some(key) => request.header(ADMIN_KEY_HEADER, key),
            None => request,
        }
    }
}

#[async_trait]
impl ContentApi for ContentClient {
    async fn fetch_destination(
        &self,
        slug: &str,
        language: Language,
    ) -> Result<BilingualDestination, ApiError> {
        let url = self.url(&format!("/destinations/bilingual/{}", slug));
        debug!("GET {} ({})", url, language);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT_LANGUAGE, language.code())
            .send()
            .await?;
        unwrap_envelope(response).await
    }

    async fn fetch_raw(&self, slug: &str) -> Result<BilingualDestination, ApiError> {
        let url = self.url(&format!("/destinations/bilingual/{}/raw", slug));
        debug!("GET {}", url);
        let response = self.with_admin_key(self.client.get(&url)).send().await?;
        unwrap_envelope(response).await
    }

    async fn create_destination(
        &self,
        destination: &BilingualDestination,
    ) -> Result<BilingualDestination, ApiError> {
        let url = self.url("/destinations/bilingual");
        debug!("POST {} ({})", url, destination.slug);
        let response = self
            .with_admin_key(self.client.post(&url))
            .json(destination)
            .send()
            .await?;
        unwrap_envelope(response).await
    }

    async fn update_destination(
        &self,
        id: &str,
        destination: &BilingualDestination,
    ) -> Result<BilingualDestination, ApiError> {
        let url = self.url(&format!("/destinations/bilingual/{}", id));
        debug!("PUT {}", url);
        let response = self
            .with_admin_key(self.client.put(&url))
            .json(destination)
            .send()
            .await?;
        unwrap_envelope(response).await
    }

    async fn delete_destination(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/destinations/bilingual/{}", id));
        debug!("DELETE {}", url);
        let response = self.with_admin_key(self.client.delete(&url)).send().await?;
        ensure_accepted(response).await
    }

    async fn translation_status(&self, slug: &str) -> Result<TranslationProgress, ApiError> {
        let url = self.url(&format!("/destinations/bilingual/{}/translation-status", slug));
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        unwrap_envelope(response).await
    }
}

/// Collapse HTTP status and envelope into the uniform error path: a
/// non-2xx status or `success: false` raises the server message, falling
/// back to a generic one when the body carried none.
async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;
    let envelope: ApiEnvelope<T> = match serde_json::from_slice(&bytes) {
        Ok(envelope) => envelope,
        Err(e) if status.is_success() => {
            return Err(ApiError::rejected(format!("unexpected response body: {}", e)));
        }
        Err(_) => return Err(ApiError::rejected(status_message(status))),
    };
    if !status.is_success() || !envelope.success {
        return Err(ApiError::rejected(
            envelope.message.unwrap_or_else(|| status_message(status)),
        ));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::rejected("response carried no data"))
}

/// Like `unwrap_envelope` for endpoints whose envelope carries no data.
async fn ensure_accepted(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;
    let envelope: ApiEnvelope<serde_json::Value> = match serde_json::from_slice(&bytes) {
        Ok(envelope) => envelope,
        Err(_) if status.is_success() => return Ok(()),
        Err(_) => return Err(ApiError::rejected(status_message(status))),
    };
    if !status.is_success() || !envelope.success {
        return Err(ApiError::rejected(
            envelope.message.unwrap_or_else(|| status_message(status)),
        ));
    }
    Ok(())
}

fn status_message(status: StatusCode) -> String {
    format!("request failed with status {}", status)
}
