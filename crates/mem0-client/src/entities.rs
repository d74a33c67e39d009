//! Entity (user/agent/app/run) listing and deletion.

use crate::client::decode_message;
use crate::error::{ClientError, Result};
use crate::params::{append_query, scope_params};
use crate::MemoryClient;
use mem0_types::{DeleteUser, DeleteUsers, EntityPage, EntityType, MessageResponse};
use reqwest::Method;
use serde_json::Value;

impl MemoryClient {
    /// Entities in the client's organization/project scope.
    pub async fn users(&self) -> Result<EntityPage> {
        let mut url = self.endpoint(&["v1", "entities", ""]);
        append_query(&mut url, &scope_params(&self.scope().await));
        self.call(Method::GET, url, None).await
    }

    /// Delete one entity; `entity_type` defaults to `user`.
    #[deprecated(note = "use delete_users")]
    pub async fn delete_user(&self, request: &DeleteUser) -> Result<MessageResponse> {
        let kind = request.entity_type.unwrap_or(EntityType::User);
        let res = self.delete_entity(kind.as_str(), &request.entity_id).await?;
        Ok(decode_message(res)?)
    }

    /// Delete the targeted entity, or every entity in scope when no target is given.
    ///
    /// The bulk path lists entities with [`users`](Self::users) and then deletes them one by one,
    /// in listing order, addressing each by the `type` string the listing reported. It is not
    /// atomic: the first failing delete is returned as-is, entities deleted before it stay deleted
    /// and the rest are not attempted.
    pub async fn delete_users(&self, request: &DeleteUsers) -> Result<MessageResponse> {
        let targeted = request.target();
        let to_delete: Vec<(String, String)> = match targeted {
            Some((kind, name)) => vec![(kind.as_str().to_string(), name.to_string())],
            None => self
                .users()
                .await?
                .results
                .into_iter()
                .map(|e| (e.entity_type, e.name))
                .collect(),
        };
        if to_delete.is_empty() {
            return Err(ClientError::validation("No entities to delete"));
        }

        for (done, (kind, name)) in to_delete.iter().enumerate() {
            tracing::debug!(entity_type = %kind, entity = %name, "deleting entity");
            if let Err(e) = self.delete_entity(kind, name).await {
                tracing::warn!(
                    entity_type = %kind,
                    entity = %name,
                    deleted = done,
                    remaining = to_delete.len() - done,
                    error = %e,
                    "entity delete failed; aborting"
                );
                return Err(e);
            }
        }

        Ok(MessageResponse::new(if targeted.is_some() {
            "Entity deleted successfully."
        } else {
            "All users, agents, apps and runs deleted."
        }))
    }

    async fn delete_entity(&self, kind: &str, name: &str) -> Result<Value> {
        let mut url = self.endpoint(&["v2", "entities", kind, name, ""]);
        append_query(&mut url, &scope_params(&self.scope().await));
        self.send(Method::DELETE, url, None).await
    }
}
