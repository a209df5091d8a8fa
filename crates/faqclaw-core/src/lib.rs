//! # FaqClaw Core
//! Shared foundation: error taxonomy, configuration, message types,
//! and the `Channel` trait all delivery surfaces implement.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::FaqClawConfig;
pub use error::{FaqClawError, Result};
