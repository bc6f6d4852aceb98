//! Common test infrastructure for frieza-action-install tests
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: tags, platform names, test data
//! - `builders`: fluent builders for release JSON payloads
//! - `mock_server`: wiremock setup helpers for the release index and asset downloads
//! - `archives`: in-memory zip fixtures shaped like frieza release assets

// Allow unused code in test infrastructure - not every test file uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod archives;
pub mod builders;
pub mod constants;
pub mod mock_server;

pub use archives::*;
pub use builders::*;
pub use constants::*;
pub use mock_server::*;
