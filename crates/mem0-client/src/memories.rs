//! Memory CRUD, search, history, batch, feedback and export operations.

use crate::error::{ClientError, Result};
use crate::params::{
    append_pagination, append_query, apply_scope, take_pagination, take_version, to_params,
};
use crate::MemoryClient;
use mem0_types::{
    ApiVersion, CreateMemoryExport, Feedback, GetMemoryExport, MemoryExport, MemoryHistoryEntry,
    MemoryList, MemoryOptions, MemoryRecord, MemoryUpdateItem, Message, MessageResponse, OneOrMany,
    PingResponse, SearchOptions, UpdateMemory,
};
use reqwest::Method;
use serde_json::{json, Value};

impl MemoryClient {
    /// Check the API key. Learns the organization/project ids from the response when they were
    /// not configured. A non-`ok` status is reported as a 401 API error.
    pub async fn ping(&self) -> Result<PingResponse> {
        let url = self.endpoint(&["v1", "ping", ""]);
        let res: PingResponse = self.call(Method::GET, url, None).await?;
        if !res.is_ok() {
            return Err(ClientError::Api {
                status: 401,
                message: res
                    .message
                    .clone()
                    .unwrap_or_else(|| "API Key is invalid".to_string()),
            });
        }
        self.learn_scope(res.org_id.clone(), res.project_id.clone())
            .await;
        Ok(res)
    }

    /// Extract and store memories from a conversation.
    pub async fn add(&self, messages: &[Message], options: &MemoryOptions) -> Result<Vec<MemoryRecord>> {
        if messages.is_empty() {
            return Ok(Vec::new());
        }
        let mut params = to_params(options)?;
        if let Some(version) = take_version(&mut params) {
            params.insert("version".into(), Value::from(version.as_str()));
        }
        apply_scope(&mut params, &self.scope().await);
        params.insert("messages".into(), serde_json::to_value(messages)?);
        let url = self.endpoint(&["v1", "memories", ""]);
        let list: MemoryList = self
            .call(Method::POST, url, Some(&Value::Object(params)))
            .await?;
        Ok(list.into_records())
    }

    pub async fn get(&self, memory_id: &str) -> Result<MemoryRecord> {
        let url = self.endpoint(&["v1", "memories", memory_id, ""]);
        self.call(Method::GET, url, None).await
    }

    /// List memories. v1 sends the options as a query string; v2 posts them as JSON.
    /// `page`/`page_size` are appended to the URL only when both are set.
    pub async fn get_all(&self, options: &MemoryOptions) -> Result<MemoryList> {
        let mut params = to_params(options)?;
        let version = take_version(&mut params).unwrap_or_default();
        let pagination = take_pagination(&mut params);
        apply_scope(&mut params, &self.scope().await);
        match version {
            ApiVersion::V2 => {
                let mut url = self.endpoint(&["v2", "memories", ""]);
                append_pagination(&mut url, pagination);
                self.call(Method::POST, url, Some(&Value::Object(params)))
                    .await
            }
            ApiVersion::V1 => {
                let mut url = self.endpoint(&["v1", "memories", ""]);
                append_query(&mut url, &params);
                append_pagination(&mut url, pagination);
                self.call(Method::GET, url, None).await
            }
        }
    }

    /// Semantic search. Zero hits is an empty list, not an error.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<MemoryList> {
        let mut params = to_params(options)?;
        let version = take_version(&mut params).unwrap_or_default();
        apply_scope(&mut params, &self.scope().await);
        params.insert("query".into(), Value::from(query));
        let url = self.endpoint(&[version.as_str(), "memories", "search", ""]);
        self.call(Method::POST, url, Some(&Value::Object(params)))
            .await
    }

    /// Update a memory's text and/or metadata. Fails locally when neither is given.
    pub async fn update(&self, memory_id: &str, update: &UpdateMemory) -> Result<Vec<MemoryRecord>> {
        if update.is_empty() {
            return Err(ClientError::validation(
                "Either text or metadata must be provided for update.",
            ));
        }
        let url = self.endpoint(&["v1", "memories", memory_id, ""]);
        let body = serde_json::to_value(update)?;
        let updated: OneOrMany<MemoryRecord> = self.call(Method::PUT, url, Some(&body)).await?;
        Ok(updated.into_vec())
    }

    pub async fn delete(&self, memory_id: &str) -> Result<MessageResponse> {
        let url = self.endpoint(&["v1", "memories", memory_id, ""]);
        self.call_message(Method::DELETE, url, None).await
    }

    /// Delete every memory matching the filter options.
    pub async fn delete_all(&self, options: &MemoryOptions) -> Result<MessageResponse> {
        let mut params = to_params(options)?;
        take_version(&mut params);
        apply_scope(&mut params, &self.scope().await);
        let mut url = self.endpoint(&["v1", "memories", ""]);
        append_query(&mut url, &params);
        self.call_message(Method::DELETE, url, None).await
    }

    /// Change log of a memory, in the order the service returns it.
    pub async fn history(&self, memory_id: &str) -> Result<Vec<MemoryHistoryEntry>> {
        let url = self.endpoint(&["v1", "memories", memory_id, "history", ""]);
        self.call(Method::GET, url, None).await
    }

    pub async fn batch_update(&self, memories: &[MemoryUpdateItem]) -> Result<MessageResponse> {
        let url = self.endpoint(&["v1", "batch", ""]);
        let body = json!({ "memories": memories });
        self.call_message(Method::PUT, url, Some(&body)).await
    }

    pub async fn batch_delete<S: AsRef<str>>(&self, memory_ids: &[S]) -> Result<MessageResponse> {
        let memories: Vec<Value> = memory_ids
            .iter()
            .map(|id| json!({ "memory_id": id.as_ref() }))
            .collect();
        let url = self.endpoint(&["v1", "batch", ""]);
        let body = json!({ "memories": memories });
        self.call_message(Method::DELETE, url, Some(&body)).await
    }

    pub async fn feedback(&self, feedback: &Feedback) -> Result<MessageResponse> {
        let url = self.endpoint(&["v1", "feedback", ""]);
        let body = serde_json::to_value(feedback)?;
        self.call_message(Method::POST, url, Some(&body)).await
    }

    /// Start an export job. Both `filters` and `schema` are required.
    pub async fn create_memory_export(&self, request: &CreateMemoryExport) -> Result<MemoryExport> {
        if request.filters.is_none() || request.schema.is_none() {
            return Err(ClientError::validation("Missing filters or schema"));
        }
        let mut params = to_params(request)?;
        apply_scope(&mut params, &self.scope().await);
        let url = self.endpoint(&["v1", "exports", ""]);
        self.call(Method::POST, url, Some(&Value::Object(params)))
            .await
    }

    /// Fetch an export by id or by the filters it was created with.
    pub async fn get_memory_export(&self, request: &GetMemoryExport) -> Result<MemoryExport> {
        if request.memory_export_id.is_none() && request.filters.is_none() {
            return Err(ClientError::validation("Missing memory_export_id or filters"));
        }
        let mut params = to_params(request)?;
        apply_scope(&mut params, &self.scope().await);
        let url = self.endpoint(&["v1", "exports", "get", ""]);
        self.call(Method::POST, url, Some(&Value::Object(params)))
            .await
    }
}
