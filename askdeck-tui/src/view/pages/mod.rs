//! Panel page renderers

pub mod answer;
pub mod detail;
pub mod inbox;
