//! File I/O for query documents.
//!
//! This module loads YAML and JSON documents from disk or stdin so compiled
//! paths can be evaluated against them.

pub mod loader;
