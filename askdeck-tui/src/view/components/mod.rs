//! Reusable view components

pub mod help;
pub mod statusbar;
