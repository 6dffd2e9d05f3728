//! Address-bar abstract trait

use crate::types::QueryParams;

/// Browser-location style primitive
///
/// The URL synchronizer is the only writer. Back/forward navigation is
/// exposed poll-style: the host queues replayed states and the app
/// drains them with `take_navigation` once per tick, so the
/// synchronizer always observes a fully-settled panel stack.
///
/// In-process and non-blocking; unlike the data service this is not an
/// async port.
pub trait LocationPort: Send + Sync {
    /// Current query parameters
    fn read(&self) -> QueryParams;

    /// Write query parameters
    ///
    /// # Arguments
    /// * `params` - New parameters
    /// * `replace` - Replace the current history entry instead of pushing
    fn write(&self, params: QueryParams, replace: bool);

    /// Next pending back/forward navigation, if any
    fn take_navigation(&self) -> Option<QueryParams>;
}
