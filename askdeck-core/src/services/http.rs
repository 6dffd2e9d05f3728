//! HTTP adapters for the data service and media collaborator
//!
//! JSON over request/response; the services depend only on the traits,
//! never on this transport.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::traits::{MediaResolver, QuestionService};
use crate::types::{
    MediaRef, MediaSegment, PaginatedResponse, Question, QuestionFilter, QuestionPatch, SortKey,
    StatusFilter,
};

/// Question data service over HTTP
pub struct HttpQuestionService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuestionService {
    /// Service rooted at `base_url` (no trailing slash)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn check(response: reqwest::Response, id: Option<&str>) -> CoreResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(CoreError::QuestionNotFound(id.to_string()));
            }
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        Err(CoreError::ApiError { message })
    }
}

fn status_param(status: StatusFilter) -> &'static str {
    match status {
        StatusFilter::Pending => "pending",
        StatusFilter::Answered => "answered",
        StatusFilter::Hidden => "hidden",
        StatusFilter::All => "all",
    }
}

fn sort_param(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Newest => "newest",
        SortKey::Oldest => "oldest",
        SortKey::SlaDue => "sla_due",
    }
}

#[async_trait]
impl QuestionService for HttpQuestionService {
    async fn list(&self, filter: &QuestionFilter) -> CoreResult<PaginatedResponse<Question>> {
        let mut query: Vec<(&str, String)> = vec![
            ("status", status_param(filter.status).to_string()),
            ("sort", sort_param(filter.sort).to_string()),
            ("page", filter.page.to_string()),
            ("pageSize", filter.page_size.to_string()),
        ];
        if !filter.search.is_empty() {
            query.push(("search", filter.search.clone()));
        }

        let response = self
            .client
            .get(self.endpoint("/questions"))
            .query(&query)
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;
        Self::check(response, None)
            .await?
            .json()
            .await
            .map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    async fn get(&self, id: &str) -> CoreResult<Question> {
        let response = self
            .client
            .get(self.endpoint(&format!("/questions/{id}")))
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;
        Self::check(response, Some(id))
            .await?
            .json()
            .await
            .map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    async fn mutate(&self, id: &str, patch: &QuestionPatch) -> CoreResult<Question> {
        let response = self
            .client
            .patch(self.endpoint(&format!("/questions/{id}")))
            .json(patch)
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;
        Self::check(response, Some(id))
            .await?
            .json()
            .await
            .map_err(|e| CoreError::SerializationError(e.to_string()))
    }
}

/// Resolve request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveRequest<'a> {
    refs: &'a [MediaRef],
}

/// One resolved entry in the response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedMedia {
    media: MediaRef,
    segment: Option<MediaSegment>,
}

/// Media-enrichment collaborator over HTTP
pub struct HttpMediaResolver {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMediaResolver {
    /// Resolver rooted at `base_url` (no trailing slash)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn resolve_batch(&self, refs: &[MediaRef]) -> CoreResult<Vec<ResolvedMedia>> {
        let response = self
            .client
            .post(format!("{}/media/resolve", self.base_url))
            .json(&ResolveRequest { refs })
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;
        if !response.status().is_success() {
            return Err(CoreError::MediaError(response.status().to_string()));
        }
        response
            .json()
            .await
            .map_err(|e| CoreError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl MediaResolver for HttpMediaResolver {
    async fn resolve(&self, refs: &[MediaRef]) -> Vec<(MediaRef, Option<MediaSegment>)> {
        match self.resolve_batch(refs).await {
            Ok(resolved) => resolved.into_iter().map(|r| (r.media, r.segment)).collect(),
            // Degrade the whole batch to "no media" instead of failing the list
            Err(e) => {
                log::warn!("media resolution failed: {e}");
                refs.iter().map(|r| (r.clone(), None)).collect()
            }
        }
    }
}
