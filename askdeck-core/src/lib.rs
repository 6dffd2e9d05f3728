//! Askdeck Core Library
//!
//! Provides the state and orchestration layer for the question inbox,
//! including:
//! - Panel stack navigation (list / detail / answer)
//! - Address-bar synchronization and deep links
//! - Selection, pinning and the question list controller
//! - Undoable bulk mutations
//!
//! This library is platform-independent: every external collaborator
//! (data service, location, clipboard, notifications, media
//! enrichment, pin persistence) is abstracted behind a trait, so the
//! same core drives the terminal front end and the tests.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{
    ClipboardPort, LocationPort, MediaResolver, NoticeKind, Notifier, PinStore, QuestionService,
};
