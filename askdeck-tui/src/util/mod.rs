//! Infrastructure helpers: terminal init and restore

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
