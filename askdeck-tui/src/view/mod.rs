//! View layer: rendering
//!
//! Reads the model, draws the frame, mutates nothing. The panel stack
//! decides which pages are visible; the layout decides where they go.

pub mod components;
pub mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
