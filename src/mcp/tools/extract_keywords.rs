//! Keyword extraction tool handler

use super::handler::{json_content, McpToolHandler};
use super::helpers::{parse_args, parse_text, run_blocking};
use crate::core::keywords::{CorpusMode, KeywordOptions, ScoringMode};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ExtractKeywordsHandler {
    services: Arc<Services>,
}

impl ExtractKeywordsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[derive(Deserialize)]
struct ExtractKeywordsArgs {
    text: Value,
    top_k: Option<usize>,
    corpus_mode: Option<CorpusMode>,
    scoring: Option<ScoringMode>,
}

#[async_trait]
impl McpToolHandler for ExtractKeywordsHandler {
    fn name(&self) -> &str {
        "extract_keywords"
    }

    fn schema(&self) -> ToolSchema {
        let keywords = &self.services.config.keywords;

        ToolSchema {
            name: "extract_keywords".to_string(),
            description: "Extract the top-K keywords of Chinese text with BM25 ranking. \
                         Returns a JSON object mapping each input index to its keywords, best first. \
                         corpus_mode 'intra-document' treats the sentences of each text as the corpus \
                         (works for a single text); 'cross-document' treats the texts of a batch as \
                         the corpus, so words common to every text rank low. \
                         scoring 'tfidf' drops BM25 length normalization."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "text": {
                        "description": "Text to analyse, or a list of texts",
                        "oneOf": [
                            {"type": "string"},
                            {"type": "array", "items": {"type": "string"}}
                        ]
                    },
                    "top_k": {
                        "type": "integer",
                        "description": "Keywords per text",
                        "default": keywords.default_top_k,
                        "minimum": 1,
                        "maximum": keywords.max_top_k
                    },
                    "corpus_mode": {
                        "type": "string",
                        "enum": ["intra-document", "cross-document"],
                        "default": keywords.corpus_mode.as_str()
                    },
                    "scoring": {
                        "type": "string",
                        "enum": ["bm25", "tfidf"],
                        "default": keywords.scoring.as_str()
                    }
                },
                "required": ["text"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: ExtractKeywordsArgs = parse_args(args)?;
        let input = parse_text(args.text)?;

        let defaults = self.services.default_keyword_options();
        let options = KeywordOptions {
            top_k: args.top_k.unwrap_or(defaults.top_k),
            corpus_mode: args.corpus_mode.unwrap_or(defaults.corpus_mode),
            scoring: args.scoring.unwrap_or(defaults.scoring),
        };

        let engine = Arc::clone(&self.services.engine);
        let results = run_blocking(move || engine.extract_keywords(&input, &options)).await?;

        json_content(&results)
    }
}
