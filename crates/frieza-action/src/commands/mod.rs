//! Action step implementations

pub mod clean;
pub mod run;
