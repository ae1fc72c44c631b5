//! Marquee - a minimal JSON REST API skeleton
//!
//! Marquee exposes a small versioned HTTP surface and provides:
//! - Strict JSON request decoding with a caller-friendly error taxonomy
//! - Envelope-based JSON responses (tab-indented, newline-terminated)
//! - Environment-driven configuration that refuses to start incomplete
//! - Simple HTTP API built on axum

pub mod api;
pub mod config;
pub mod error;
pub mod json;

pub use error::{Error, Result};
