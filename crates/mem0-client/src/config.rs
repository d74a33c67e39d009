//! Client configuration and organization/project scope.

use std::fmt;

/// Production API host.
pub const DEFAULT_HOST: &str = "https://api.mem0.ai";

/// Connection settings for [`MemoryClient`](crate::MemoryClient).
///
/// `organization_id`/`project_id` must be given together, as must the deprecated
/// `organization_name`/`project_name`; a lone half only produces a warning.
#[derive(Clone, Default)]
pub struct ClientConfig {
    pub api_key: String,
    pub host: Option<String>,
    pub organization_id: Option<String>,
    pub project_id: Option<String>,
    /// Deprecated; prefer `organization_id`.
    pub organization_name: Option<String>,
    /// Deprecated; prefer `project_id`.
    pub project_name: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Read `MEM0_API_KEY` (required), `MEM0_API_HOST`, `MEM0_ORG_ID` and `MEM0_PROJECT_ID`.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("MEM0_API_KEY").ok()?;
        Some(Self {
            api_key,
            host: std::env::var("MEM0_API_HOST").ok(),
            organization_id: std::env::var("MEM0_ORG_ID").ok(),
            project_id: std::env::var("MEM0_PROJECT_ID").ok(),
            ..Default::default()
        })
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_project(
        mut self,
        organization_id: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        self.organization_id = Some(organization_id.into());
        self.project_id = Some(project_id.into());
        self
    }

    #[deprecated(note = "use with_project")]
    pub fn with_project_names(
        mut self,
        organization_name: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Self {
        self.organization_name = Some(organization_name.into());
        self.project_name = Some(project_name.into());
        self
    }

    pub(crate) fn scope(&self) -> Scope {
        Scope {
            organization_id: self.organization_id.clone(),
            project_id: self.project_id.clone(),
            organization_name: self.organization_name.clone(),
            project_name: self.project_name.clone(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("organization_id", &self.organization_id)
            .field("project_id", &self.project_id)
            .field("organization_name", &self.organization_name)
            .field("project_name", &self.project_name)
            .finish()
    }
}

/// Organization/project scope merged into outgoing requests. The id pair may be learned from
/// `ping` after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Scope {
    pub organization_id: Option<String>,
    pub project_id: Option<String>,
    pub organization_name: Option<String>,
    pub project_name: Option<String>,
}

impl Scope {
    /// Both ids, if configured.
    pub fn ids(&self) -> Option<(&str, &str)> {
        match (&self.organization_id, &self.project_id) {
            (Some(org), Some(project)) => Some((org.as_str(), project.as_str())),
            _ => None,
        }
    }

    pub fn names(&self) -> Option<(&str, &str)> {
        match (&self.organization_name, &self.project_name) {
            (Some(org), Some(project)) => Some((org.as_str(), project.as_str())),
            _ => None,
        }
    }

    /// Warn about half-configured pairs. Returns how many warnings were emitted.
    pub fn warn_unpaired(&self) -> usize {
        let mut warned = 0;
        if self.organization_id.is_some() != self.project_id.is_some() {
            tracing::warn!(
                organization_id = ?self.organization_id,
                project_id = ?self.project_id,
                "organization_id and project_id should be set together; ignoring the lone value"
            );
            warned += 1;
        }
        if self.organization_name.is_some() != self.project_name.is_some() {
            tracing::warn!(
                organization_name = ?self.organization_name,
                project_name = ?self.project_name,
                "organization_name and project_name should be set together; ignoring the lone value"
            );
            warned += 1;
        }
        warned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_id_warns_but_pair_does_not() {
        let lone = Scope {
            organization_id: Some("org".into()),
            ..Default::default()
        };
        assert_eq!(lone.warn_unpaired(), 1);
        assert!(lone.ids().is_none());

        let paired = ClientConfig::new("k").with_project("org", "proj").scope();
        assert_eq!(paired.warn_unpaired(), 0);
        assert_eq!(paired.ids(), Some(("org", "proj")));
    }

    #[test]
    fn lone_name_warns() {
        let scope = Scope {
            project_name: Some("proj".into()),
            ..Default::default()
        };
        assert_eq!(scope.warn_unpaired(), 1);
        assert!(scope.names().is_none());
    }

    #[test]
    fn debug_omits_api_key() {
        let cfg = ClientConfig::new("super-secret-key");
        assert!(!format!("{:?}", cfg).contains("super-secret-key"));
    }
}
