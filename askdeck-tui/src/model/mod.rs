//! Model layer: application state
//!
//! Single source of truth for the UI. This layer holds data only; all
//! mutation goes through the update layer, all reads through the view
//! layer. The inbox-specific state machines (panel stack, selection,
//! pins, undo, list controller) live in askdeck-core; the model wires
//! them together with the purely presentational state (focus, help
//! overlay, notices, layout gate).

mod app;
mod focus;
mod notice;

pub use app::App;
pub use focus::Focus;
pub use notice::Notice;

/// Narrowest terminal width (columns) that still gets the desktop
/// treatment: side-by-side panels and keyboard shortcuts. Below it,
/// panels go full-screen and shortcuts are disabled.
pub const WIDE_LAYOUT_MIN_COLS: u16 = 80;
