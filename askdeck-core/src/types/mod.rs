//! Type definition module

mod filter;
mod media;
mod question;
mod response;
mod url;

pub use filter::{QuestionFilter, SortKey, StatusFilter};
pub use media::{MediaKind, MediaRef, MediaSegment};
pub use question::{MediaState, Question, QuestionPatch, QuestionStatus};
pub use response::PaginatedResponse;
pub use url::{QueryParams, UrlState};
