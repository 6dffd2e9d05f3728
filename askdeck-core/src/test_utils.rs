//! Test helper module
//!
//! Mock implementations of the external ports plus factory helpers.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{LocationPort, MediaResolver, QuestionService};
use crate::types::{
    MediaKind, MediaRef, MediaSegment, PaginatedResponse, Question, QuestionFilter, QuestionPatch,
    QuestionStatus, QueryParams,
};

// ===== Factories =====

/// Pending question with defaults
pub fn question(id: &str) -> Question {
    Question {
        id: id.to_string(),
        author: format!("author-{id}"),
        body: format!("What about {id}?"),
        status: QuestionStatus::Pending,
        sla_due: None,
        media: None,
        media_state: crate::types::MediaState::None,
        created_at: Utc::now(),
    }
}

/// Alias that reads better in bulk tests
pub fn pending_question(id: &str) -> Question {
    question(id)
}

/// Question carrying a media reference
pub fn media_question(id: &str, media_id: &str) -> Question {
    let mut q = question(id);
    q.media = Some(MediaRef {
        id: media_id.to_string(),
        kind: MediaKind::Video,
    });
    q
}

/// Context over the given mocks
pub fn test_context(
    questions: Arc<MockQuestionService>,
    media: Arc<MockMediaResolver>,
) -> ServiceContext {
    ServiceContext::new(questions, media)
}

// ===== MockQuestionService =====

/// In-memory question store with injectable failures
pub struct MockQuestionService {
    store: RwLock<HashMap<String, Question>>,
    /// IDs whose mutations fail
    failing_ids: RwLock<HashSet<String>>,
    /// If set, list() returns this error
    list_error: RwLock<Option<CoreError>>,
}

impl MockQuestionService {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            failing_ids: RwLock::new(HashSet::new()),
            list_error: RwLock::new(None),
        }
    }

    /// Seed a question; callable from sync setup before any contention
    pub fn insert(&self, q: Question) {
        self.store
            .try_write()
            .expect("uncontended in test setup")
            .insert(q.id.clone(), q);
    }

    pub async fn remove(&self, id: &str) {
        self.store.write().await.remove(id);
    }

    pub async fn fail_mutations_for(&self, id: &str) {
        self.failing_ids.write().await.insert(id.to_string());
    }

    pub async fn fail_listing(&self, error: CoreError) {
        *self.list_error.write().await = Some(error);
    }

    pub async fn status_of(&self, id: &str) -> Option<QuestionStatus> {
        self.store.read().await.get(id).map(|q| q.status)
    }
}

#[async_trait]
impl QuestionService for MockQuestionService {
    async fn list(&self, filter: &QuestionFilter) -> CoreResult<PaginatedResponse<Question>> {
        if let Some(ref e) = *self.list_error.read().await {
            return Err(e.clone());
        }
        let store = self.store.read().await;
        let mut items: Vec<Question> = store
            .values()
            .filter(|q| filter.status.accepts(q.status))
            .filter(|q| filter.search.is_empty() || q.body.contains(&filter.search))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        let total = items.len() as u64;
        Ok(PaginatedResponse::new(
            items,
            filter.page,
            filter.page_size,
            total,
        ))
    }

    async fn get(&self, id: &str) -> CoreResult<Question> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::QuestionNotFound(id.to_string()))
    }

    async fn mutate(&self, id: &str, patch: &QuestionPatch) -> CoreResult<Question> {
        if self.failing_ids.read().await.contains(id) {
            return Err(CoreError::NetworkError(format!("injected failure for {id}")));
        }
        let mut store = self.store.write().await;
        let q = store
            .get_mut(id)
            .ok_or_else(|| CoreError::QuestionNotFound(id.to_string()))?;
        if let Some(status) = patch.status {
            q.status = status;
        }
        Ok(q.clone())
    }
}

// ===== MockMediaResolver =====

/// Media resolver with per-reference scripted outcomes
pub struct MockMediaResolver {
    /// media id -> resolves (true) or fails (false)
    outcomes: RwLock<HashMap<String, bool>>,
}

impl MockMediaResolver {
    pub fn new() -> Self {
        Self {
            outcomes: RwLock::new(HashMap::new()),
        }
    }

    pub async fn resolve_ok(&self, media_id: &str) {
        self.outcomes.write().await.insert(media_id.to_string(), true);
    }

    pub async fn resolve_fail(&self, media_id: &str) {
        self.outcomes
            .write()
            .await
            .insert(media_id.to_string(), false);
    }
}

#[async_trait]
impl MediaResolver for MockMediaResolver {
    async fn resolve(&self, refs: &[MediaRef]) -> Vec<(MediaRef, Option<MediaSegment>)> {
        let outcomes = self.outcomes.read().await;
        refs.iter()
            .map(|r| {
                let segment = (outcomes.get(&r.id) == Some(&true)).then(|| MediaSegment {
                    url: format!("https://media.test/{}.mp4", r.id),
                    duration_ms: 12_000,
                    mime: "video/mp4".to_string(),
                });
                (r.clone(), segment)
            })
            .collect()
    }
}

// ===== RecordingLocation =====

/// Location port that records every write
pub struct RecordingLocation {
    current: Mutex<QueryParams>,
    writes: Mutex<Vec<(QueryParams, bool)>>,
    pending_navigation: Mutex<Vec<QueryParams>>,
}

impl RecordingLocation {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(QueryParams::new()),
            writes: Mutex::new(Vec::new()),
            pending_navigation: Mutex::new(Vec::new()),
        }
    }

    /// Recorded writes as (params, replace) pairs
    pub fn writes(&self) -> Vec<(QueryParams, bool)> {
        self.writes.lock().unwrap().clone()
    }

    /// Queue a back/forward replay
    pub fn push_navigation(&self, params: QueryParams) {
        self.pending_navigation.lock().unwrap().push(params);
    }
}

impl LocationPort for RecordingLocation {
    fn read(&self) -> QueryParams {
        self.current.lock().unwrap().clone()
    }

    fn write(&self, params: QueryParams, replace: bool) {
        *self.current.lock().unwrap() = params.clone();
        self.writes.lock().unwrap().push((params, replace));
    }

    fn take_navigation(&self) -> Option<QueryParams> {
        let mut pending = self.pending_navigation.lock().unwrap();
        if pending.is_empty() {
            None
        } else {
            Some(pending.remove(0))
        }
    }
}
