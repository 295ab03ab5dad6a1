//! Interface to the word tokenizer that consumes normalized text.
//!
//! Word segmentation itself lives outside this crate. `SpaceTokenizer` only
//! splits on the single spaces the pipeline leaves between words, which is
//! enough for the CLI and the request adapter to produce token lists.

use serde::{Deserialize, Serialize};

pub const SPACE_ENGINE: &str = "whitespace";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TokenizerOptions {
    #[serde(default = "default_engine")]
    pub engine: String,

    #[serde(default)]
    pub keep_whitespace: bool,
}

fn default_engine() -> String {
    SPACE_ENGINE.to_string()
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions {
            engine: default_engine(),
            keep_whitespace: false,
        }
    }
}

pub trait Tokenizer: Send + Sync {
    /// Engine identifier matched against `TokenizerOptions::engine`.
    fn engine(&self) -> &str;

    fn tokenize(&self, text: &str, options: &TokenizerOptions) -> Vec<String>;
}

pub struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
    fn engine(&self) -> &str {
        SPACE_ENGINE
    }

    fn tokenize(&self, text: &str, options: &TokenizerOptions) -> Vec<String> {
        let mut tokens = Vec::new();
        for word in text.split(' ').filter(|w| !w.is_empty()) {
            if options.keep_whitespace && !tokens.is_empty() {
                tokens.push(" ".to_string());
            }
            tokens.push(word.to_string());
        }
        tokens
    }
}

/// Tokenizer registered for `engine`, if any.
pub fn for_engine(engine: &str) -> Option<Box<dyn Tokenizer>> {
    match engine {
        SPACE_ENGINE => Some(Box::new(SpaceTokenizer)),
        _ => None,
    }
}
