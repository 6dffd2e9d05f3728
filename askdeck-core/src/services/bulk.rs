//! Bulk action executor
//!
//! Issues one mutation per selected question, all concurrently, and
//! treats the batch as settled only once every request has completed.
//! The operations are idempotent server-side status flags, so the
//! policy is "fire all requests, reconcile by refetch" rather than
//! optimistic local patching.

use std::sync::Arc;

use futures::future::join_all;

use crate::error::CoreError;
use crate::traits::QuestionService;
use crate::types::{QuestionPatch, QuestionStatus};

/// Reversible bulk operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOp {
    /// Hide from the inbox
    Hide,
    /// Restore a hidden question to pending
    Unhide,
    /// Mark as answered
    MarkAnswered,
    /// Reopen an answered question
    MarkPending,
}

impl BulkOp {
    /// Patch this operation sends per question
    pub fn patch(self) -> QuestionPatch {
        let status = match self {
            Self::Hide => QuestionStatus::Hidden,
            Self::Unhide | Self::MarkPending => QuestionStatus::Pending,
            Self::MarkAnswered => QuestionStatus::Answered,
        };
        QuestionPatch::set_status(status)
    }

    /// Operation that reverses this one
    pub fn inverse(self) -> Self {
        match self {
            Self::Hide => Self::Unhide,
            Self::Unhide => Self::Hide,
            Self::MarkAnswered => Self::MarkPending,
            Self::MarkPending => Self::MarkAnswered,
        }
    }

    /// Past-tense verb for notices and undo descriptions
    pub fn verb(self) -> &'static str {
        match self {
            Self::Hide => "Hid",
            Self::Unhide => "Restored",
            Self::MarkAnswered => "Answered",
            Self::MarkPending => "Reopened",
        }
    }

    /// Human-readable description of a batch
    pub fn describe(self, count: usize) -> String {
        let noun = if count == 1 { "question" } else { "questions" };
        format!("{} {count} {noun}", self.verb())
    }
}

/// Settled result of a batch
#[derive(Debug)]
pub struct BulkOutcome {
    /// Operation that ran
    pub op: BulkOp,
    /// IDs whose mutation succeeded
    pub succeeded: Vec<String>,
    /// IDs whose mutation failed, with the cause
    pub failed: Vec<(String, CoreError)>,
}

impl BulkOutcome {
    /// Every mutation landed
    pub fn full_success(&self) -> bool {
        self.failed.is_empty() && !self.succeeded.is_empty()
    }

    /// Nothing landed
    pub fn total_failure(&self) -> bool {
        self.succeeded.is_empty() && !self.failed.is_empty()
    }

    /// Partial batch: some landed, some did not
    pub fn partial(&self) -> bool {
        !self.succeeded.is_empty() && !self.failed.is_empty()
    }
}

/// Run one operation over a set of questions, concurrently
///
/// Per-item requests are independent with no ordering guarantee
/// between them; the returned outcome is available only after every
/// request settled.
pub async fn execute_bulk(
    service: &Arc<dyn QuestionService>,
    op: BulkOp,
    ids: Vec<String>,
) -> BulkOutcome {
    let patch = op.patch();
    let results = join_all(ids.into_iter().map(|id| {
        let service = Arc::clone(service);
        let patch = patch.clone();
        async move {
            let result = service.mutate(&id, &patch).await;
            (id, result)
        }
    }))
    .await;

    let mut outcome = BulkOutcome {
        op,
        succeeded: Vec::new(),
        failed: Vec::new(),
    };
    for (id, result) in results {
        match result {
            Ok(_) => outcome.succeeded.push(id),
            Err(e) => {
                log::warn!("bulk {op:?} failed for {id}: {e}");
                outcome.failed.push((id, e));
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{pending_question, MockQuestionService};
    use crate::types::QuestionStatus;

    fn service_with(ids: &[&str]) -> Arc<MockQuestionService> {
        let svc = Arc::new(MockQuestionService::new());
        for id in ids {
            svc.insert(pending_question(id));
        }
        svc
    }

    #[tokio::test]
    async fn full_success_settles_every_id() {
        let mock = service_with(&["q1", "q2", "q3"]);
        let svc: Arc<dyn QuestionService> = mock.clone();

        let ids = vec!["q1".to_string(), "q2".to_string(), "q3".to_string()];
        let outcome = execute_bulk(&svc, BulkOp::Hide, ids).await;

        assert!(outcome.full_success());
        assert_eq!(outcome.succeeded.len(), 3);
        for id in ["q1", "q2", "q3"] {
            assert_eq!(mock.status_of(id).await, Some(QuestionStatus::Hidden));
        }
    }

    #[tokio::test]
    async fn hiding_an_already_hidden_question_still_succeeds() {
        let mock = service_with(&["q1"]);
        let svc: Arc<dyn QuestionService> = mock.clone();

        let first = execute_bulk(&svc, BulkOp::Hide, vec!["q1".to_string()]).await;
        let second = execute_bulk(&svc, BulkOp::Hide, vec!["q1".to_string()]).await;

        assert!(first.full_success());
        assert!(second.full_success(), "redundant state must not error");
    }

    #[tokio::test]
    async fn partial_failure_reports_both_sides() {
        let mock = service_with(&["q1", "q2"]);
        mock.fail_mutations_for("q2").await;
        let svc: Arc<dyn QuestionService> = mock.clone();

        let outcome = execute_bulk(
            &svc,
            BulkOp::Hide,
            vec!["q1".to_string(), "q2".to_string()],
        )
        .await;

        assert!(outcome.partial());
        assert_eq!(outcome.succeeded, vec!["q1".to_string()]);
        assert_eq!(outcome.failed.len(), 1);
        // The successful mutation is not rolled back
        assert_eq!(mock.status_of("q1").await, Some(QuestionStatus::Hidden));
    }

    #[tokio::test]
    async fn total_failure_when_nothing_lands() {
        let mock = service_with(&["q1"]);
        mock.fail_mutations_for("q1").await;
        let svc: Arc<dyn QuestionService> = mock.clone();

        let outcome = execute_bulk(&svc, BulkOp::Hide, vec!["q1".to_string()]).await;
        assert!(outcome.total_failure());
    }

    #[test]
    fn inverse_round_trips() {
        for op in [
            BulkOp::Hide,
            BulkOp::Unhide,
            BulkOp::MarkAnswered,
            BulkOp::MarkPending,
        ] {
            assert_eq!(op.inverse().inverse(), op);
        }
    }

    #[test]
    fn describe_pluralizes() {
        assert_eq!(BulkOp::Hide.describe(1), "Hid 1 question");
        assert_eq!(BulkOp::Hide.describe(3), "Hid 3 questions");
    }
}
