use crate::config::Config;
use crate::error::Result;
use crate::rules::{self, PatternTable};
use fancy_regex::Regex as FancyRegex;
use std::sync::LazyLock;
use tracing::warn;
use unicode_normalization::UnicodeNormalization;

/// A run of digits and hyphens starting at a zero that no digit or hyphen
/// precedes.
static RE_PHONE_RUN: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<![0-9-])0[0-9-]+").unwrap());

/// Unifies numeral spellings to ASCII digits.
///
/// Steps run in a fixed order and each one scans its input exactly once:
/// emoji and enclosed digit glyphs, parenthesized word numbers, digit script
/// translation, then phone-number hyphen stripping.
pub struct NumeralNormalizer {
    glyphs: PatternTable,
    words: PatternTable,
    strip_phone_hyphens: bool,
}

impl NumeralNormalizer {
    pub fn new(config: &Config) -> Result<Self> {
        let symbolic = rules::SYMBOLIC_TOKENS
            .iter()
            .map(|&(token, reading)| (token.to_string(), reading.to_string()));
        let glyphs = PatternTable::build(
            "emoji digits",
            rules::emoji_digits().into_iter().chain(symbolic),
            false,
        )?;
        let words = PatternTable::build("word numbers", rules::parenthesized_numbers(), true)?;

        Ok(NumeralNormalizer {
            glyphs,
            words,
            strip_phone_hyphens: config.strip_phone_hyphens,
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        let text = self.glyphs.apply(text);
        let text = self.words.apply(&text);
        let text = translate_digits(&text);
        if self.strip_phone_hyphens {
            strip_phone_hyphens(&text)
        } else {
            text
        }
    }

    pub fn table_sizes(&self) -> (usize, usize) {
        (self.glyphs.len(), self.words.len())
    }
}

pub fn translate_digits(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(digit) = rules::ascii_digit(c) {
            out.push(digit);
        } else if !c.is_ascii() && c.is_numeric() {
            fold_compatibility_digits(c, &mut out);
        } else {
            out.push(c);
        }
    }
    out
}

/// Superscripts, digits with a comma or full stop and similar numeric forms
/// are written in their compatibility form when that form spells digits.
/// Numerals that do not, such as roman numerals, are kept.
fn fold_compatibility_digits(c: char, out: &mut String) {
    let folded: String = std::iter::once(c)
        .nfkc()
        .map(|f| rules::ascii_digit(f).unwrap_or(f))
        .collect();
    if folded.chars().any(|f| f.is_ascii_digit()) {
        out.push_str(&folded);
    } else {
        out.push(c);
    }
}

pub fn strip_phone_hyphens(text: &str) -> String {
    if !text.contains('-') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for found in RE_PHONE_RUN.find_iter(text) {
        let m = match found {
            Ok(m) => m,
            Err(e) => {
                warn!(error = %e, "phone number scan stopped early");
                break;
            }
        };
        out.push_str(&text[last..m.start()]);
        out.extend(m.as_str().chars().filter(|&c| c != '-'));
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
