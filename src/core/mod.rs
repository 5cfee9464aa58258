//! Core module - configuration, formatting and shared helpers
//!
//! This module provides:
//! - Resolved run configuration and the extension filter
//! - Output block rendering
//! - Path helpers
//! - The error type
//! - Build metadata and logging setup

pub mod build_info;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod render;
