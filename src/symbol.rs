use crate::config::Config;
use crate::error::{Error, Result};
use crate::rules::{self, PatternTable};
use crate::tag::Tag;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// A parenthetical group with no nested parentheses.
static RE_PAREN_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^()]*\)").unwrap());

/// Maps arrow glyphs and their parenthetical names to tag placeholders and
/// removes parentheticals that carry no meaning.
pub struct SymbolNormalizer {
    glyphs: PatternTable,
    names: PatternTable,
    denylist: HashSet<String>,
}

/// Form configured names take before matching lowercased input.
fn canonical_name(name: &str) -> String {
    name.trim().nfc().collect::<String>().to_lowercase()
}

impl SymbolNormalizer {
    pub fn new(config: &Config) -> Result<Self> {
        let glyph_entries: Vec<(String, Tag)> = rules::ARROW_GLYPHS
            .iter()
            .map(|&(glyph, tag)| (glyph.to_string(), tag))
            .chain(config.symbol_glyphs.iter().map(|(g, &tag)| (g.clone(), tag)))
            .collect();

        let mut name_entries: Vec<(String, Tag)> = Vec::new();
        for (name, tag) in rules::ARROW_NAMES
            .iter()
            .map(|&(name, tag)| (name.to_string(), tag))
            .chain(config.symbol_names.iter().map(|(n, &tag)| (n.clone(), tag)))
        {
            name_entries.push((format!("({})", checked_name(&name)?), tag));
        }

        for (glyph, _) in &glyph_entries {
            for (name, _) in &name_entries {
                let overlaps = name.contains(glyph.as_str()) || glyph.contains(name.as_str());
                if !glyph.is_empty() && overlaps {
                    return Err(Error::Configuration(format!(
                        "glyph {glyph:?} overlaps parenthetical name {name:?}"
                    )));
                }
            }
        }

        let mut denylist = HashSet::new();
        for name in rules::PAREN_DENYLIST
            .iter()
            .map(|n| n.to_string())
            .chain(config.paren_denylist.iter().cloned())
        {
            let name = checked_name(&name)?;
            let wrapped = format!("({name})");
            if name_entries.iter().any(|(n, _)| *n == wrapped) {
                return Err(Error::Configuration(format!(
                    "{wrapped:?} is both denylisted and mapped to a tag"
                )));
            }
            denylist.insert(name);
        }

        let glyphs = PatternTable::build(
            "symbol glyphs",
            glyph_entries.into_iter().map(|(g, tag)| (g, tag.placeholder())),
            false,
        )?;
        let names = PatternTable::build(
            "symbol names",
            name_entries.into_iter().map(|(n, tag)| (n, tag.placeholder())),
            true,
        )?;

        Ok(SymbolNormalizer {
            glyphs,
            names,
            denylist,
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        let text = self.glyphs.apply(text);
        let mut text = self.names.apply(&text);
        // Removing an inner group can expose an outer one, e.g. `((a))`.
        loop {
            let next = self.strip_parentheticals(&text);
            if next.len() == text.len() {
                return next;
            }
            text = next;
        }
    }

    pub fn table_sizes(&self) -> (usize, usize, usize) {
        (self.glyphs.len(), self.names.len(), self.denylist.len())
    }

    fn is_removable(&self, content: &str) -> bool {
        content.chars().count() <= 1 || self.denylist.contains(content)
    }

    /// One removal sweep. Groups directly adjacent to each other form a chain
    /// and all of them go. A lone group goes only when it is empty, a single
    /// character, or denylisted. Placeholders never join a chain, so the
    /// location written right after an arrow survives.
    fn strip_parentheticals(&self, text: &str) -> String {
        let items: Vec<regex::Match> = RE_PAREN_GROUP.find_iter(text).collect();
        if items.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut i = 0;
        while i < items.len() {
            let mut j = i + 1;
            while j < items.len() && items[j].start() == items[j - 1].end() {
                j += 1;
            }
            let chained = j - i > 1;

            for item in &items[i..j] {
                out.push_str(&text[last..item.start()]);
                let group = item.as_str();
                let content = &group[1..group.len() - 1];
                if !chained && !self.is_removable(content) {
                    out.push_str(group);
                }
                last = item.end();
            }
            i = j;
        }
        out.push_str(&text[last..]);
        out
    }
}

fn checked_name(name: &str) -> Result<String> {
    let name = canonical_name(name);
    if name.is_empty() || name.contains(['(', ')']) {
        return Err(Error::Configuration(format!(
            "invalid parenthetical name {name:?}"
        )));
    }
    Ok(name)
}
