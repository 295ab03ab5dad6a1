pub mod batch;
pub mod boundary;
pub mod config;
pub mod emoji;
pub mod error;
pub mod numeral;
pub mod rules;
pub mod symbol;
pub mod tag;
pub mod tokenize;
pub mod whitespace;

use config::Config;
use numeral::NumeralNormalizer;
use std::io;
use std::path::PathBuf;
use symbol::SymbolNormalizer;
use tag::{Tag, TagResolver};
use tracing::{debug, trace, warn};
use unicode_normalization::UnicodeNormalization;

pub use error::{Error, Result};

/// Runs the normalization stages over one string at a time. Built once and
/// shared by reference; it holds no per-call state.
pub struct Normalizer {
    numerals: NumeralNormalizer,
    symbols: SymbolNormalizer,
    tags: TagResolver,
}

impl Normalizer {
    pub fn new(config: &Config) -> Result<Self> {
        let normalizer = Normalizer {
            numerals: NumeralNormalizer::new(config)?,
            symbols: SymbolNormalizer::new(config)?,
            tags: TagResolver::new(&config.pickup_word, &config.dropoff_word)?,
        };

        for tag in Tag::ALL {
            let word = normalizer.tags.word(tag);
            if word.is_empty() || normalizer.normalize(word) != word {
                return Err(Error::Configuration(format!(
                    "{tag:?} word {word:?} is not in normalized form"
                )));
            }
        }

        let (emoji_digits, word_numbers) = normalizer.numerals.table_sizes();
        let (glyphs, names, denylist) = normalizer.symbols.table_sizes();
        debug!(
            rules_version = rules::RULES_VERSION,
            emoji_digits, word_numbers, glyphs, names, denylist, "normalizer ready"
        );
        Ok(normalizer)
    }

    /// Normalizes `raw`, re-running the stages until the text stops changing.
    ///
    /// A later stage can expose input for an earlier one: stripping an emoji
    /// from `(o😀ne)` leaves `(one)`, and each level of nesting in
    /// `((o(a)ne))` needs one more pass. Settling keeps the output idempotent.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = self.pass(raw);
        // A pass that still changes settled text consumes input characters, so
        // the input length bounds the passes. The bound only trips on tables
        // whose words feed back into their own patterns.
        let limit = raw.chars().count() + 2;
        for pass in 1..limit {
            let next = self.pass(&text);
            if next == text {
                return text;
            }
            trace!(pass, "output changed on re-scan");
            text = next;
        }
        warn!(passes = limit, "normalization did not settle");
        text
    }

    /// Rejects invalid UTF-8 before any stage runs.
    pub fn normalize_bytes(&self, raw: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(raw)?;
        Ok(self.normalize(text))
    }

    fn pass(&self, text: &str) -> String {
        let text = text.nfc().collect::<String>().to_lowercase();
        let text = self.numerals.normalize(&text);
        let text = self.symbols.normalize(&text);
        let text = emoji::strip(&text);
        let text = whitespace::canonicalize(&text);
        self.tags.resolve(&text)
    }
}

pub fn list_files(inputs: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let re = regex::Regex::new(r"(?i)\.(txt|text)$").unwrap();
    let mut out: Vec<PathBuf> = Vec::new();

    for p in inputs {
        if p.is_dir() {
            for entry in std::fs::read_dir(p)? {
                let sub_path = entry?.path();
                if sub_path.is_dir() {
                    out.extend(list_files(&[sub_path])?);
                } else if sub_path.is_file()
                    && sub_path.to_str().is_some_and(|s| re.is_match(s))
                {
                    out.push(sub_path);
                }
            }
        } else if p.is_file() {
            // Explicitly named files are taken whatever their extension.
            out.push(p.clone());
        }
    }

    out.sort();
    Ok(out)
}
