//! `MemoryClient`: construction and the single request primitive every operation goes through.

use crate::config::{ClientConfig, Scope, DEFAULT_HOST};
use crate::error::{ClientError, Result};
use mem0_types::MessageResponse;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Per-request deadline, covering connect, send and reading the body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Mem0 platform API.
///
/// Cheap to clone; clones share the HTTP connection pool and the organization/project scope.
/// Each call issues at most one request (except [`MemoryClient::delete_users`] without a target)
/// and nothing is retried.
#[derive(Clone)]
pub struct MemoryClient {
    http: reqwest::Client,
    api_key: String,
    host: Url,
    scope: Arc<RwLock<Scope>>,
    timeout: Duration,
}

impl MemoryClient {
    /// Validate the config and build a client. Never touches the network.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ClientError::validation(
                "Mem0 API key is required and must be a non-empty string",
            ));
        }
        let host = parse_host(config.host.as_deref().unwrap_or(DEFAULT_HOST))?;
        let scope = config.scope();
        scope.warn_unpaired();
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_key: config.api_key,
            host,
            scope: Arc::new(RwLock::new(scope)),
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Shorthand for a client with only an API key and the default host.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Build from `MEM0_*` environment variables; `None` when `MEM0_API_KEY` is unset.
    pub fn from_env() -> Option<Result<Self>> {
        ClientConfig::from_env().map(Self::new)
    }

    pub fn host(&self) -> &str {
        self.host.as_str().trim_end_matches('/')
    }

    /// Configured or learned organization id.
    pub async fn organization_id(&self) -> Option<String> {
        self.scope.read().await.organization_id.clone()
    }

    /// Configured or learned project id.
    pub async fn project_id(&self) -> Option<String> {
        self.scope.read().await.project_id.clone()
    }

    pub(crate) async fn scope(&self) -> Scope {
        self.scope.read().await.clone()
    }

    /// Fill in ids the caller did not configure. Existing values are kept.
    pub(crate) async fn learn_scope(&self, org_id: Option<String>, project_id: Option<String>) {
        let mut scope = self.scope.write().await;
        if scope.organization_id.is_none() {
            if let Some(org) = org_id {
                tracing::debug!(organization_id = %org, "learned organization id");
                scope.organization_id = Some(org);
            }
        }
        if scope.project_id.is_none() {
            if let Some(project) = project_id {
                tracing::debug!(project_id = %project, "learned project id");
                scope.project_id = Some(project);
            }
        }
    }

    /// Host URL with the given path segments; a trailing `""` yields a trailing slash.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.host.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Issue one request and return the JSON body. Non-2xx statuses become
    /// [`ClientError::Api`] with the body text (or the status line when the body is empty).
    pub(crate) async fn send(&self, method: Method, url: Url, body: Option<&Value>) -> Result<Value> {
        tracing::debug!(method = %method, url = %url, "mem0 request");
        let target = url.to_string();
        let mut req = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Token {}", self.api_key))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }
        let exchange = async {
            let res = req.send().await?;
            let status = res.status();
            let text = res.text().await?;
            Ok::<_, reqwest::Error>((status, text))
        };
        let (status, text) = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(res) => res?,
            Err(_) => {
                return Err(ClientError::Timeout {
                    elapsed_ms: self.timeout.as_millis() as u64,
                    url: target,
                })
            }
        };
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %target, "mem0 request failed");
            let message = if text.trim().is_empty() {
                status.to_string()
            } else {
                text
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// [`send`](Self::send) and decode into `T`.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<T> {
        let value = self.send(method, url, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// [`send`](Self::send) for endpoints answering `{"message": ...}`. An empty body (e.g. 204)
    /// still counts as success and yields an empty message.
    pub(crate) async fn call_message(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<MessageResponse> {
        let value = self.send(method, url, body).await?;
        Ok(decode_message(value)?)
    }
}

pub(crate) fn decode_message(value: Value) -> serde_json::Result<MessageResponse> {
    let message: Option<MessageResponse> = serde_json::from_value(value)?;
    Ok(message.unwrap_or_default())
}

fn parse_host(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim().trim_end_matches('/'))
        .map_err(|e| ClientError::validation(format!("invalid host {:?}: {}", raw, e)))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::validation(format!(
            "invalid host {:?}: expected an http(s) base URL",
            raw
        )));
    }
    Ok(url)
}

impl fmt::Debug for MemoryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryClient")
            .field("host", &self.host.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}
