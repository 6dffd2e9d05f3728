//! Address-bar state types
//!
//! `UrlState` is derived from the panel stack, never authoritative.
//! `QueryParams` is the ordered key/value form exchanged with the
//! location port and with deep links.

use serde::{Deserialize, Serialize};

/// Ordered query-string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Empty parameter list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value pair
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// First value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether no parameters are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as a percent-encoded query string (no leading `?`)
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse a query string (with or without leading `?`)
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            let k = urlencoding::decode(k).map_or_else(|_| k.to_string(), |c| c.into_owned());
            let v = urlencoding::decode(v).map_or_else(|_| v.to_string(), |c| c.into_owned());
            params.push(k, v);
        }
        params
    }
}

/// Address-bar mirror of the panel stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlState {
    /// Question whose detail panel is open
    pub detail_id: Option<String>,
    /// Whether the answer panel is open on top of the detail
    pub answering: bool,
}

impl UrlState {
    /// Derive query parameters from this state
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(ref id) = self.detail_id {
            params.push("detail", id.clone());
            if self.answering {
                params.push("answering", "1");
            }
        }
        params
    }

    /// Read state back out of query parameters
    #[must_use]
    pub fn from_params(params: &QueryParams) -> Self {
        let detail_id = params.get("detail").map(ToString::to_string);
        // `answering` without a detail is meaningless and dropped
        let answering = detail_id.is_some() && matches!(params.get("answering"), Some("1" | "true"));
        Self {
            detail_id,
            answering,
        }
    }

    /// Whether the state points at the root list only
    pub fn is_root(&self) -> bool {
        self.detail_id.is_none()
    }
}
