//! Entities (users, agents, apps, runs) that own memories.

use crate::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    User,
    Agent,
    App,
    Run,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::User => "user",
            EntityType::Agent => "agent",
            EntityType::App => "app",
            EntityType::Run => "run",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(EntityType::User),
            "agent" => Some(EntityType::Agent),
            "app" => Some(EntityType::App),
            "run" => Some(EntityType::Run),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity as listed by the service. `entity_type` is kept as sent so that kinds this crate
/// does not know about can still be addressed; see [`Entity::kind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub id: serde_json::Value,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub total_memories: u64,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Entity {
    pub fn kind(&self) -> Option<EntityType> {
        EntityType::parse(&self.entity_type)
    }
}

/// Paginated list of entities.
pub type EntityPage = Page<Entity>;

/// Single-entity delete (legacy form). `entity_type` defaults to `user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteUser {
    pub entity_id: String,
    #[serde(default)]
    pub entity_type: Option<EntityType>,
}

/// Target of `delete_users`. With no field set every entity in scope is deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteUsers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl DeleteUsers {
    /// The single targeted entity, checked in user, agent, app, run order.
    pub fn target(&self) -> Option<(EntityType, &str)> {
        [
            (EntityType::User, &self.user_id),
            (EntityType::Agent, &self.agent_id),
            (EntityType::App, &self.app_id),
            (EntityType::Run, &self.run_id),
        ]
        .into_iter()
        .find_map(|(kind, id)| id.as_deref().map(|id| (kind, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entity_page_decodes() {
        let v = json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "id": 7,
                "name": "alice",
                "type": "user",
                "total_memories": 3,
                "owner": "owner@example.com",
                "created_at": "2024-07-20T01:34:29Z",
                "updated_at": "2024-07-20T01:34:29Z"
            }]
        });
        let page: EntityPage = serde_json::from_value(v).unwrap();
        assert_eq!(page.results[0].kind(), Some(EntityType::User));
        assert_eq!(page.results[0].total_memories, 3);
    }

    #[test]
    fn unknown_entity_type_is_kept_verbatim() {
        let e: Entity = serde_json::from_value(json!({ "name": "ops", "type": "team" })).unwrap();
        assert_eq!(e.entity_type, "team");
        assert_eq!(e.kind(), None);
    }

    #[test]
    fn target_prefers_user_then_agent() {
        let d = DeleteUsers {
            agent_id: Some("bot".into()),
            run_id: Some("r1".into()),
            ..Default::default()
        };
        assert_eq!(d.target(), Some((EntityType::Agent, "bot")));
        assert_eq!(DeleteUsers::default().target(), None);
    }
}
