use crate::tag::{Tag, DEFAULT_DROPOFF_WORD, DEFAULT_PICKUP_WORD};
use crate::tokenize::TokenizerOptions;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_pickup_word")]
    pub pickup_word: String,

    #[serde(default = "default_dropoff_word")]
    pub dropoff_word: String,

    #[serde(default = "default_strip_phone_hyphens")]
    pub strip_phone_hyphens: bool,

    /// Parenthetical names removed in addition to the built-in denylist.
    #[serde(default)]
    pub paren_denylist: Vec<String>,

    /// Extra parenthetical names mapped to a tag, without the parentheses.
    #[serde(default)]
    pub symbol_names: IndexMap<String, Tag>,

    /// Extra glyphs mapped to a tag.
    #[serde(default)]
    pub symbol_glyphs: IndexMap<String, Tag>,

    #[serde(default)]
    pub tokenizer: TokenizerOptions,
}

fn default_pickup_word() -> String {
    DEFAULT_PICKUP_WORD.to_string()
}
fn default_dropoff_word() -> String {
    DEFAULT_DROPOFF_WORD.to_string()
}
fn default_strip_phone_hyphens() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pickup_word: DEFAULT_PICKUP_WORD.to_string(),
            dropoff_word: DEFAULT_DROPOFF_WORD.to_string(),
            strip_phone_hyphens: true,
            paren_denylist: Vec::new(),
            symbol_names: IndexMap::new(),
            symbol_glyphs: IndexMap::new(),
            tokenizer: TokenizerOptions::default(),
        }
    }
}
