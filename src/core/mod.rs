//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (MCP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Request/response shapes
//! - **xdg**: XDG directory handling
//! - **filter**: Stopwords and token admission
//! - **segment**: Segmenter trait and implementations
//! - **keywords**: BM25 keyword extraction pipeline
//! - **engine**: The shared segmentation engine
//! - **services**: Unified service container

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod keywords;
pub mod segment;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use engine::Engine;
pub use error::{Result, SegkitError};
pub use services::Services;
