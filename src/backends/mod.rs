//! Backends module - Filesystem traversal and conversion
//!
//! Provides:
//! - scan: Script finder with walkdir
//! - convert: Per-file conversion and the run driver

pub mod convert;
pub mod scan;
