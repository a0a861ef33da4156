//! segkit - Chinese word segmentation and BM25 keyword extraction
//!
//! Segments Chinese text into words, tags parts of speech and ranks
//! keywords with BM25, for a single text or a batch of texts.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - segment (jieba and whitespace segmenters)
//!   - filter (stopwords and token validity)
//!   - keywords (corpus building, vocabulary, BM25, top-K)
//!   - engine, services (shared service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, protocol
//!
//! - **cli**: command-line adapter (depends on core)
//!
//! # Results
//!
//! Every operation answers with a mapping from input index to that
//! input's result. A single string is index 0; blank or non-string
//! batch entries map to an empty list.

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::engine::Engine;
pub use core::error::{Result, SegkitError};
pub use core::keywords::{CorpusMode, KeywordOptions, ScoringMode};
pub use core::services::Services;
pub use core::types::*;
