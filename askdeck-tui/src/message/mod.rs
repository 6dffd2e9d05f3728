//! Message layer: event message definitions
//!
//! Bridge between the event layer and the update layer: every user
//! action and every async completion is expressed as a message, and
//! the update layer is the only consumer.

mod app;
mod backend;
mod bulk;
mod list;
mod panel;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use bulk::BulkMessage;
pub use list::ListMessage;
pub use panel::PanelMessage;
