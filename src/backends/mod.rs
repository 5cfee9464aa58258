//! Backends module - filesystem traversal and output
//!
//! Provides:
//! - scan: sorted directory walk emitting output blocks
//! - output: file or stdout destination

pub mod output;
pub mod scan;
