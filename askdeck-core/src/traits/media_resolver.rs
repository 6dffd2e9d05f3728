//! Media enrichment abstract trait

use async_trait::async_trait;

use crate::types::{MediaRef, MediaSegment};

/// Media-enrichment collaborator
///
/// Resolves opaque media references to playable-segment descriptors.
/// A failed resolution degrades that item to "no media"; it never fails
/// the whole batch.
#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Resolve a batch of references
    ///
    /// Returns one entry per input reference, `None` where resolution
    /// failed.
    async fn resolve(&self, refs: &[MediaRef]) -> Vec<(MediaRef, Option<MediaSegment>)>;
}
