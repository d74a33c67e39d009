//! Project settings and webhooks.

use crate::error::{ClientError, Result};
use crate::params::to_params;
use crate::MemoryClient;
use mem0_types::{MessageResponse, ProjectOptions, ProjectUpdate, Webhook, WebhookCreate, WebhookUpdate};
use reqwest::{Method, Url};
use serde_json::Value;

impl MemoryClient {
    async fn project_url(&self) -> Result<Url> {
        let scope = self.scope().await;
        let (org, project) = scope.ids().ok_or_else(|| {
            ClientError::validation("organization_id and project_id must be set to access project settings")
        })?;
        Ok(self.endpoint(&["api", "v1", "orgs", "organizations", org, "projects", project, ""]))
    }

    async fn webhook_project(&self, project_id: Option<&str>) -> Result<String> {
        match project_id {
            Some(id) => Ok(id.to_string()),
            None => self
                .project_id()
                .await
                .ok_or_else(|| ClientError::validation("project_id must be set to manage webhooks")),
        }
    }

    /// Project configuration (custom instructions, categories, ...). Requires both ids.
    pub async fn get_project(&self, options: &ProjectOptions) -> Result<Value> {
        let mut url = self.project_url().await?;
        if let Some(fields) = options.fields.as_ref().filter(|f| !f.is_empty()) {
            url.query_pairs_mut().append_pair("fields", &fields.join(","));
        }
        self.send(Method::GET, url, None).await
    }

    /// Patch the project configuration. Requires both ids.
    pub async fn update_project(&self, update: &ProjectUpdate) -> Result<Value> {
        let url = self.project_url().await?;
        let body = Value::Object(to_params(update)?);
        self.send(Method::PATCH, url, Some(&body)).await
    }

    /// Webhooks of `project_id`, or of the client's project. With neither available this is a
    /// local [`ClientError::Validation`] and no request is sent.
    pub async fn get_webhooks(&self, project_id: Option<&str>) -> Result<Vec<Webhook>> {
        let project = self.webhook_project(project_id).await?;
        let url = self.endpoint(&["api", "v1", "webhooks", "projects", project.as_str(), ""]);
        self.call(Method::GET, url, None).await
    }

    /// Create a webhook in `webhook.project_id`, or in the client's project. Fails locally with
    /// [`ClientError::Validation`] when neither is set.
    pub async fn create_webhook(&self, webhook: &WebhookCreate) -> Result<Webhook> {
        let project = self.webhook_project(webhook.project_id.as_deref()).await?;
        let url = self.endpoint(&["api", "v1", "webhooks", "projects", project.as_str(), ""]);
        let body = serde_json::to_value(webhook)?;
        self.call(Method::POST, url, Some(&body)).await
    }

    pub async fn update_webhook(&self, webhook: &WebhookUpdate) -> Result<MessageResponse> {
        let url = self.endpoint(&["api", "v1", "webhooks", webhook.webhook_id.as_str(), ""]);
        let body = serde_json::to_value(webhook)?;
        self.call_message(Method::PUT, url, Some(&body)).await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<MessageResponse> {
        let url = self.endpoint(&["api", "v1", "webhooks", webhook_id, ""]);
        self.call_message(Method::DELETE, url, None).await
    }
}
