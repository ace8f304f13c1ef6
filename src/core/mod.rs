//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Shared model (script kinds, errors, conversion report)
//! - The line classifier that renders Markdown fragments
//! - The notebook document model
//! - Output path derivation

pub mod model;
pub mod notebook;
pub mod paths;
pub mod render;
