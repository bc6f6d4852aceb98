//! # frieza-action-core
//!
//! Core library for the frieza GitHub Action providing:
//! - Error types for the install and invocation pipeline
//! - Runtime configuration (release index location, network settings)

pub mod config;
pub mod error;

pub use config::{GitHubConfig, NetworkConfig, RuntimeConfig};
pub use error::{Error, Result};
