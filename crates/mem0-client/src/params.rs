//! Turning option bags into query strings or JSON bodies.

use crate::config::Scope;
use crate::error::{ClientError, Result};
use mem0_types::ApiVersion;
use reqwest::Url;
use serde::Serialize;
use serde_json::{Map, Value};

pub(crate) type Params = Map<String, Value>;

/// Serialize an option bag into a flat JSON object.
pub(crate) fn to_params<T: Serialize>(options: &T) -> Result<Params> {
    match serde_json::to_value(options)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(ClientError::validation(format!(
            "options must serialize to an object, got {}",
            other
        ))),
    }
}

/// Merge the client scope. The id pair wins over the name pair, and names never travel
/// alongside ids.
pub(crate) fn apply_scope(params: &mut Params, scope: &Scope) {
    if let Some((org, project)) = scope.ids() {
        params.insert("org_id".into(), Value::from(org));
        params.insert("project_id".into(), Value::from(project));
    } else if let Some((org, project)) = scope.names() {
        params.insert("org_name".into(), Value::from(org));
        params.insert("project_name".into(), Value::from(project));
    }
    if is_set(params, "org_id") && is_set(params, "project_id") {
        params.remove("org_name");
        params.remove("project_name");
    }
}

/// Only the scope, as params (for endpoints that take no options).
pub(crate) fn scope_params(scope: &Scope) -> Params {
    let mut params = Params::new();
    apply_scope(&mut params, scope);
    params
}

/// Remove `api_version` (or its alias `version`) and return the selected version, if any.
pub(crate) fn take_version(params: &mut Params) -> Option<ApiVersion> {
    let raw = params.remove("api_version");
    let alias = params.remove("version");
    match raw.or(alias)? {
        Value::String(s) if s.eq_ignore_ascii_case("v2") => Some(ApiVersion::V2),
        Value::Null => None,
        _ => Some(ApiVersion::V1),
    }
}

/// Remove `page`/`page_size`; they only take effect as a pair. Zero counts as unset.
pub(crate) fn take_pagination(params: &mut Params) -> Option<(u64, u64)> {
    let page = params
        .remove("page")
        .and_then(|v| v.as_u64())
        .filter(|n| *n > 0);
    let page_size = params
        .remove("page_size")
        .and_then(|v| v.as_u64())
        .filter(|n| *n > 0);
    page.zip(page_size)
}

fn is_set(params: &Params, key: &str) -> bool {
    params.get(key).is_some_and(|v| !v.is_null())
}

/// Query-string form of a value; `None` for null.
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Append every non-null param to the URL's query string.
pub(crate) fn append_query(url: &mut Url, params: &Params) {
    let pairs: Vec<(&str, String)> = params
        .iter()
        .filter_map(|(k, v)| query_value(v).map(|v| (k.as_str(), v)))
        .collect();
    if pairs.is_empty() {
        return;
    }
    url.query_pairs_mut().extend_pairs(pairs);
}

/// Append the `page=N&page_size=M` fragment.
pub(crate) fn append_pagination(url: &mut Url, pagination: Option<(u64, u64)>) {
    if let Some((page, page_size)) = pagination {
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("page_size", &page_size.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mem0_types::MemoryOptions;
    use serde_json::json;

    fn both_pairs() -> Scope {
        Scope {
            organization_id: Some("org_1".into()),
            project_id: Some("proj_1".into()),
            organization_name: Some("Acme".into()),
            project_name: Some("Default".into()),
        }
    }

    #[test]
    fn ids_win_over_names() {
        let mut params = to_params(&MemoryOptions::for_user("alice")).unwrap();
        apply_scope(&mut params, &both_pairs());
        assert_eq!(params["org_id"], "org_1");
        assert_eq!(params["project_id"], "proj_1");
        assert!(!params.contains_key("org_name"));
        assert!(!params.contains_key("project_name"));
    }

    #[test]
    fn caller_names_are_stripped_when_ids_present() {
        let opts = MemoryOptions {
            org_name: Some("Acme".into()),
            project_name: Some("Default".into()),
            ..Default::default()
        };
        let mut params = to_params(&opts).unwrap();
        apply_scope(&mut params, &both_pairs());
        assert!(!params.contains_key("org_name"));
    }

    #[test]
    fn names_used_when_no_ids() {
        let scope = Scope {
            organization_name: Some("Acme".into()),
            project_name: Some("Default".into()),
            ..Default::default()
        };
        let params = scope_params(&scope);
        assert_eq!(params["org_name"], "Acme");
        assert_eq!(params["project_name"], "Default");
        assert!(!params.contains_key("org_id"));
    }

    #[test]
    fn lone_id_is_not_injected() {
        let scope = Scope {
            organization_id: Some("org_1".into()),
            ..Default::default()
        };
        assert!(scope_params(&scope).is_empty());
    }

    #[test]
    fn version_and_alias_are_removed() {
        let mut params: Params = serde_json::from_value(json!({ "version": "v2", "user_id": "a" })).unwrap();
        assert_eq!(take_version(&mut params), Some(ApiVersion::V2));
        assert!(!params.contains_key("version"));

        let mut params = to_params(&MemoryOptions::default()).unwrap();
        assert_eq!(take_version(&mut params), None);
    }

    #[test]
    fn pagination_needs_both_values() {
        let mut params = to_params(&MemoryOptions {
            page: Some(2),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(take_pagination(&mut params), None);
        assert!(params.is_empty());

        let mut params = to_params(&MemoryOptions::default().with_page(2, 50)).unwrap();
        assert_eq!(take_pagination(&mut params), Some((2, 50)));
    }

    #[test]
    fn zero_page_is_treated_as_unset() {
        let mut params = to_params(&MemoryOptions::default().with_page(0, 10)).unwrap();
        assert_eq!(take_pagination(&mut params), None);
        assert!(params.is_empty());
    }

    #[test]
    fn query_skips_null_and_joins_arrays() {
        let mut url = Url::parse("https://api.mem0.ai/v1/memories/").unwrap();
        let params: Params = serde_json::from_value(json!({
            "user_id": "alice",
            "categories": ["food", "travel"],
            "enable_graph": true,
            "run_id": null
        }))
        .unwrap();
        append_query(&mut url, &params);
        append_pagination(&mut url, Some((1, 10)));
        assert_eq!(
            url.query(),
            Some("categories=food%2Ctravel&enable_graph=true&user_id=alice&page=1&page_size=10")
        );
    }

    #[test]
    fn empty_params_leave_no_query() {
        let mut url = Url::parse("https://api.mem0.ai/v1/memories/").unwrap();
        append_query(&mut url, &Params::new());
        append_pagination(&mut url, None);
        assert_eq!(url.as_str(), "https://api.mem0.ai/v1/memories/");
    }
}
