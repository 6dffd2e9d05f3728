//! Question list controller
//!
//! Owns the filter/sort/search criteria and the cached page fetched
//! from the data service; the cache is read-mostly and only ever
//! replaced wholesale by a refresh. Refreshes carry a generation
//! number so a superseded fetch that lands late is dropped
//! (last-write-wins at the UI layer; no client-side cancellation).

use crate::error::CoreResult;
use crate::services::pins::PinSet;
use crate::services::ServiceContext;
use crate::types::{
    MediaRef, MediaState, PaginatedResponse, Question, QuestionFilter, SortKey, StatusFilter,
};

/// Filter state plus cached result page
#[derive(Debug)]
pub struct QuestionListController {
    filter: QuestionFilter,
    page: PaginatedResponse<Question>,
    cursor: usize,
    generation: u64,
    loaded_once: bool,
    /// A refresh is in flight
    pub loading: bool,
    /// Last refresh error, surfaced in the UI
    pub error: Option<String>,
}

impl QuestionListController {
    /// Controller with default criteria and no data
    pub fn new() -> Self {
        Self {
            filter: QuestionFilter::default(),
            page: PaginatedResponse::empty(),
            cursor: 0,
            generation: 0,
            loaded_once: false,
            loading: false,
            error: None,
        }
    }

    /// Current criteria
    pub fn filter(&self) -> &QuestionFilter {
        &self.filter
    }

    /// Whether at least one page has ever arrived
    ///
    /// Deep links resolve against the loaded set, so replay is
    /// deferred until this turns true.
    pub fn loaded_once(&self) -> bool {
        self.loaded_once
    }

    // ========== Refresh ==========

    /// Start a refresh: bumps the generation and marks loading
    ///
    /// The caller runs [`fetch`](Self::fetch) with the returned filter
    /// and reports back through [`apply_loaded`](Self::apply_loaded).
    pub fn begin_refresh(&mut self) -> (u64, QuestionFilter) {
        self.generation += 1;
        self.loading = true;
        (self.generation, self.filter.clone())
    }

    /// Fetch a page and enrich it with media segments
    ///
    /// Enrichment merges replace-by-identifier; a failed resolution
    /// degrades that question to "no media" without failing the page.
    pub async fn fetch(
        ctx: &ServiceContext,
        filter: &QuestionFilter,
    ) -> CoreResult<PaginatedResponse<Question>> {
        let mut page = ctx.questions.list(filter).await?;

        let refs: Vec<MediaRef> = page.items.iter().filter_map(|q| q.media.clone()).collect();
        if refs.is_empty() {
            return Ok(page);
        }
        for item in page.items.iter_mut().filter(|q| q.media.is_some()) {
            item.media_state = MediaState::Pending;
        }
        for (media_ref, segment) in ctx.media.resolve(&refs).await {
            let state = segment.map_or(MediaState::Failed, MediaState::Ready);
            for item in page
                .items
                .iter_mut()
                .filter(|q| q.media.as_ref() == Some(&media_ref))
            {
                item.media_state = state.clone();
            }
        }
        Ok(page)
    }

    /// Land a settled refresh; stale generations are dropped
    ///
    /// Returns whether the result was applied.
    pub fn apply_loaded(
        &mut self,
        generation: u64,
        result: CoreResult<PaginatedResponse<Question>>,
    ) -> bool {
        if generation != self.generation {
            log::debug!("dropping stale refresh (generation {generation} < {})", self.generation);
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = page;
                self.loaded_once = true;
                self.error = None;
                self.clamp_cursor();
            }
            Err(e) => {
                self.error = Some(e.to_string());
                log::warn!("question list refresh failed: {e}");
            }
        }
        true
    }

    // ========== Criteria ==========

    /// Switch the status bucket; resets to page 1
    ///
    /// Returns whether the criteria changed (the caller must then
    /// reconcile the selection and trigger a refresh).
    pub fn set_status(&mut self, status: StatusFilter) -> bool {
        if self.filter.status == status {
            return false;
        }
        self.filter.status = status;
        self.filter.page = 1;
        true
    }

    /// Cycle to the next status bucket
    pub fn cycle_status(&mut self) -> bool {
        self.set_status(self.filter.status.next())
    }

    /// Replace the search text; resets to page 1
    pub fn set_search(&mut self, search: String) -> bool {
        if self.filter.search == search {
            return false;
        }
        self.filter.search = search;
        self.filter.page = 1;
        true
    }

    /// Switch the sort order
    pub fn set_sort(&mut self, sort: SortKey) -> bool {
        if self.filter.sort == sort {
            return false;
        }
        self.filter.sort = sort;
        true
    }

    /// Advance one page, bounded by the total count
    pub fn next_page(&mut self) -> bool {
        let total = self.page.total_count;
        let last_page = total.div_ceil(u64::from(self.filter.page_size.max(1))).max(1);
        if u64::from(self.filter.page) >= last_page {
            return false;
        }
        self.filter.page += 1;
        true
    }

    /// Go back one page
    pub fn prev_page(&mut self) -> bool {
        if self.filter.page <= 1 {
            return false;
        }
        self.filter.page -= 1;
        true
    }

    // ========== Reads ==========

    /// Raw items of the cached page, service order
    pub fn items(&self) -> &[Question] {
        &self.page.items
    }

    /// Pin-ordered visible list
    pub fn visible<'a>(&'a self, pins: &PinSet) -> Vec<&'a Question> {
        pins.order(&self.page.items)
    }

    /// IDs of the visible list, pin order
    pub fn visible_ids(&self, pins: &PinSet) -> Vec<String> {
        self.visible(pins).iter().map(|q| q.id.clone()).collect()
    }

    /// Whether an ID is on the cached page
    pub fn contains(&self, id: &str) -> bool {
        self.page.items.iter().any(|q| q.id == id)
    }

    /// Question by ID on the cached page
    pub fn find(&self, id: &str) -> Option<&Question> {
        self.page.items.iter().find(|q| q.id == id)
    }

    /// Total items across all pages
    pub fn total_count(&self) -> u64 {
        self.page.total_count
    }

    /// Replace a cached item with a freshly fetched copy
    ///
    /// Single-item freshening (the detail view refetches its question);
    /// an item no longer on the page is ignored. Returns whether
    /// anything was replaced.
    pub fn merge_question(&mut self, question: Question) -> bool {
        match self.page.items.iter_mut().find(|q| q.id == question.id) {
            Some(slot) => {
                // Keep the enrichment already done for this page
                let media_state = std::mem::take(&mut slot.media_state);
                *slot = question;
                if slot.media.is_some() {
                    slot.media_state = media_state;
                }
                true
            }
            None => false,
        }
    }

    // ========== Cursor ==========

    /// Cursor position within the visible order
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor up
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.page.items.len() {
            self.cursor += 1;
        }
    }

    /// Jump to the first item
    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the last item
    pub fn cursor_last(&mut self) {
        self.cursor = self.page.items.len().saturating_sub(1);
    }

    /// Question under the cursor, in pin order
    pub fn question_at_cursor<'a>(&'a self, pins: &PinSet) -> Option<&'a Question> {
        self.visible(pins).into_iter().nth(self.cursor)
    }

    fn clamp_cursor(&mut self) {
        if self.page.items.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.page.items.len() {
            self.cursor = self.page.items.len() - 1;
        }
    }
}

impl Default for QuestionListController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{
        media_question, pending_question, test_context, MockMediaResolver, MockQuestionService,
    };
    use crate::types::QuestionStatus;
    use std::sync::Arc;

    #[tokio::test]
    async fn refresh_lands_and_marks_loaded() {
        let svc = Arc::new(MockQuestionService::new());
        svc.insert(pending_question("q1"));
        svc.insert(pending_question("q2"));
        let ctx = test_context(svc, Arc::new(MockMediaResolver::new()));

        let mut ctl = QuestionListController::new();
        let (generation, filter) = ctl.begin_refresh();
        assert!(ctl.loading);

        let result = QuestionListController::fetch(&ctx, &filter).await;
        assert!(ctl.apply_loaded(generation, result));
        assert!(!ctl.loading);
        assert!(ctl.loaded_once());
        assert_eq!(ctl.items().len(), 2);
    }

    #[tokio::test]
    async fn stale_refresh_is_dropped() {
        let svc = Arc::new(MockQuestionService::new());
        svc.insert(pending_question("old"));
        let ctx = test_context(svc.clone(), Arc::new(MockMediaResolver::new()));

        let mut ctl = QuestionListController::new();
        let (stale_generation, stale_filter) = ctl.begin_refresh();
        let stale = QuestionListController::fetch(&ctx, &stale_filter).await;

        // A second refresh supersedes the first before it lands
        svc.insert(pending_question("new"));
        let (fresh_generation, fresh_filter) = ctl.begin_refresh();
        let fresh = QuestionListController::fetch(&ctx, &fresh_filter).await;

        assert!(ctl.apply_loaded(fresh_generation, fresh));
        assert!(!ctl.apply_loaded(stale_generation, stale));
        assert_eq!(ctl.items().len(), 2);
    }

    #[tokio::test]
    async fn refresh_error_is_surfaced_not_fatal() {
        let svc = Arc::new(MockQuestionService::new());
        svc.fail_listing(CoreError::NetworkError("unreachable".to_string()))
            .await;
        let ctx = test_context(svc, Arc::new(MockMediaResolver::new()));

        let mut ctl = QuestionListController::new();
        let (generation, filter) = ctl.begin_refresh();
        let result = QuestionListController::fetch(&ctx, &filter).await;
        assert!(ctl.apply_loaded(generation, result));
        assert!(ctl.error.is_some());
        assert!(!ctl.loaded_once());
    }

    #[tokio::test]
    async fn media_enrichment_merges_by_identifier() {
        let svc = Arc::new(MockQuestionService::new());
        svc.insert(media_question("q1", "m1"));
        svc.insert(media_question("q2", "m2"));
        svc.insert(pending_question("q3"));
        let media = Arc::new(MockMediaResolver::new());
        media.resolve_ok("m1").await;
        media.resolve_fail("m2").await;
        let ctx = test_context(svc, media);

        let page = QuestionListController::fetch(&ctx, &QuestionFilter::default())
            .await
            .unwrap();

        let state_of = |id: &str| {
            page.items
                .iter()
                .find(|q| q.id == id)
                .map(|q| q.media_state.clone())
                .unwrap()
        };
        assert!(matches!(state_of("q1"), MediaState::Ready(_)));
        // Failed resolution degrades the item, not the page
        assert_eq!(state_of("q2"), MediaState::Failed);
        assert_eq!(state_of("q3"), MediaState::None);
    }

    #[test]
    fn criteria_changes_reset_the_page() {
        let mut ctl = QuestionListController::new();
        ctl.filter.page = 3;
        assert!(ctl.set_status(StatusFilter::Hidden));
        assert_eq!(ctl.filter().page, 1);

        ctl.filter.page = 2;
        assert!(ctl.set_search("latency".to_string()));
        assert_eq!(ctl.filter().page, 1);

        // Same criteria: no change signal
        assert!(!ctl.set_status(StatusFilter::Hidden));
        assert!(!ctl.set_search("latency".to_string()));
    }

    #[tokio::test]
    async fn merged_item_keeps_its_resolved_media() {
        let svc = Arc::new(MockQuestionService::new());
        svc.insert(media_question("q1", "m1"));
        let media = Arc::new(MockMediaResolver::new());
        media.resolve_ok("m1").await;
        let ctx = test_context(svc, media);

        let mut ctl = QuestionListController::new();
        let (generation, filter) = ctl.begin_refresh();
        let page = QuestionListController::fetch(&ctx, &filter).await;
        ctl.apply_loaded(generation, page);

        // A freshened copy arrives without enrichment
        let mut fresh = media_question("q1", "m1");
        fresh.status = QuestionStatus::Answered;
        assert!(ctl.merge_question(fresh));

        let merged = ctl.find("q1").unwrap();
        assert_eq!(merged.status, QuestionStatus::Answered);
        assert!(matches!(merged.media_state, MediaState::Ready(_)));

        assert!(!ctl.merge_question(pending_question("absent")));
    }

    #[tokio::test]
    async fn cursor_is_clamped_after_shrinking_refresh() {
        let svc = Arc::new(MockQuestionService::new());
        for i in 0..5 {
            svc.insert(pending_question(&format!("q{i}")));
        }
        let ctx = test_context(svc.clone(), Arc::new(MockMediaResolver::new()));

        let mut ctl = QuestionListController::new();
        let (generation, filter) = ctl.begin_refresh();
        let page = QuestionListController::fetch(&ctx, &filter).await;
        ctl.apply_loaded(generation, page);
        ctl.cursor_last();
        assert_eq!(ctl.cursor(), 4);

        for i in 1..5 {
            svc.remove(&format!("q{i}")).await;
        }
        let (generation, filter) = ctl.begin_refresh();
        let page = QuestionListController::fetch(&ctx, &filter).await;
        ctl.apply_loaded(generation, page);
        assert_eq!(ctl.cursor(), 0);
    }
}
