use crate::error::Result;
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PICKUP_WORD: &str = "ขึ้น";
pub const DEFAULT_DROPOFF_WORD: &str = "ลง";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Pickup,
    Dropoff,
}

impl Tag {
    pub const ALL: [Tag; 2] = [Tag::Pickup, Tag::Dropoff];

    /// ASCII marker standing in for the tag between symbol mapping and
    /// localization. Uppercase, so it cannot appear in lowercased input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Tag::Pickup => "<PICKUP>",
            Tag::Dropoff => "<DROPOFF>",
        }
    }
}

/// Replaces placeholders with their localized words in a single pass.
pub struct TagResolver {
    matcher: AhoCorasick,
    words: [String; 2],
}

impl TagResolver {
    pub fn new(pickup_word: &str, dropoff_word: &str) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(Tag::ALL.map(Tag::placeholder))?;
        Ok(TagResolver {
            matcher,
            words: [pickup_word.to_string(), dropoff_word.to_string()],
        })
    }

    pub fn word(&self, tag: Tag) -> &str {
        match tag {
            Tag::Pickup => &self.words[0],
            Tag::Dropoff => &self.words[1],
        }
    }

    pub fn resolve(&self, text: &str) -> String {
        self.matcher.replace_all(text, &self.words)
    }
}
