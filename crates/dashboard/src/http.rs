//! [`RecordGateway`] over the HTTP API.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use meterops_core::{DomainError, RecordId};
use meterops_infra::{GatewayError, RecordGateway};
use meterops_records::{Record, Stored};

/// Error body returned by the API.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    message: String,
}

/// Talks to a running API at `base_url` (e.g. `http://localhost:3000`).
pub struct HttpGateway<R> {
    client: reqwest::Client,
    base_url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for HttpGateway<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> HttpGateway<R> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            _record: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, R::descriptor().route)
    }

    fn record_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    async fn check(resp: Response, id: Option<RecordId>) -> Result<Response, GatewayError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body: ErrorBody = resp.json().await.unwrap_or_default();
        Err(match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => GatewayError::NotFound { kind: R::KIND, id },
            (StatusCode::BAD_REQUEST, _) if body.error == "validation_error" => {
                GatewayError::Validation(DomainError::validation(body.message))
            }
            _ => GatewayError::Transport(format!("{status}: {}", body.message)),
        })
    }

    async fn json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, GatewayError> {
        resp.json().await.map_err(|e| GatewayError::Decode {
            kind: R::KIND,
            message: e.to_string(),
        })
    }

    /// Pull the document out of a `{ message, <key>: doc }` envelope.
    async fn enveloped(resp: Response, key: &str) -> Result<Stored<R>, GatewayError> {
        let mut body: JsonValue = Self::json(resp).await?;
        let doc = body
            .get_mut(key)
            .map(JsonValue::take)
            .ok_or_else(|| GatewayError::Decode {
                kind: R::KIND,
                message: format!("response has no {key:?} field"),
            })?;
        serde_json::from_value(doc).map_err(|e| GatewayError::Decode {
            kind: R::KIND,
            message: e.to_string(),
        })
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

#[async_trait]
impl<R: Record> RecordGateway<R> for HttpGateway<R> {
    async fn list(&self) -> Result<Vec<Stored<R>>, GatewayError> {
        let resp = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(transport)?;
        Self::json(Self::check(resp, None).await?).await
    }

    async fn get(&self, id: RecordId) -> Result<Stored<R>, GatewayError> {
        let resp = self
            .client
            .get(self.record_url(id))
            .send()
            .await
            .map_err(transport)?;
        Self::json(Self::check(resp, Some(id)).await?).await
    }

    async fn create(&self, record: R) -> Result<Stored<R>, GatewayError> {
        record.validate().map_err(GatewayError::Validation)?;
        let resp = self
            .client
            .post(self.collection_url())
            .json(&record)
            .send()
            .await
            .map_err(transport)?;
        Self::enveloped(Self::check(resp, None).await?, R::descriptor().key).await
    }

    async fn update(&self, id: RecordId, record: R) -> Result<Stored<R>, GatewayError> {
        record.validate().map_err(GatewayError::Validation)?;
        let resp = self
            .client
            .put(self.record_url(id))
            .json(&record)
            .send()
            .await
            .map_err(transport)?;
        Self::enveloped(Self::check(resp, Some(id)).await?, R::descriptor().updated_key).await
    }

    async fn delete(&self, id: RecordId) -> Result<Stored<R>, GatewayError> {
        let resp = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(transport)?;
        Self::enveloped(Self::check(resp, Some(id)).await?, R::descriptor().deleted_key).await
    }
}
