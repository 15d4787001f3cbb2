//! Shared utilities, configuration, and error handling for Mentionwatch
//!
//! This crate provides common functionality used across the Mentionwatch
//! client workspace:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Operation notices surfaced to the presentation layer

pub mod config;
pub mod error;
pub mod notice;

pub use config::Config;
pub use error::{Error, Result};
pub use notice::{Notice, NoticeKind};
