use crate::rules;

/// Drops every code point in the decorative emoji ranges. Glyphs that carry
/// meaning must already have been mapped by the numeral and symbol stages.
pub fn strip(text: &str) -> String {
    text.chars().filter(|&c| !rules::is_emoji(c)).collect()
}
