//! # dgsbot-core
//!
//! Shared foundation for the dgsbot workspace: the error type every crate
//! propagates and the operator-facing configuration.

pub mod config;
pub mod error;

pub use config::{BotConfig, UiConfig};
pub use error::{DgsbotError, Result};
