//! Question data service abstract trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{PaginatedResponse, Question, QuestionFilter, QuestionPatch};

/// Request/response contract for the external question store
///
/// Platform implementation:
/// - Production: `HttpQuestionService` (JSON over `reqwest`)
/// - Tests: `MockQuestionService` (in-memory map)
#[async_trait]
pub trait QuestionService: Send + Sync {
    /// List questions matching the filter (paginated)
    ///
    /// # Arguments
    /// * `filter` - Status bucket, search, sort and page criteria
    async fn list(&self, filter: &QuestionFilter) -> CoreResult<PaginatedResponse<Question>>;

    /// Fetch a single question by ID
    ///
    /// Used to freshen an item the UI is focusing on without refetching
    /// the whole page.
    async fn get(&self, id: &str) -> CoreResult<Question>;

    /// Apply a partial update to a question, returning its new state
    ///
    /// Setting a status the question already has is a no-op on the
    /// server and still succeeds.
    async fn mutate(&self, id: &str, patch: &QuestionPatch) -> CoreResult<Question>;
}
