use crate::rules;
use regex::Regex;
use std::sync::LazyLock;

static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub fn canonicalize(text: &str) -> String {
    let visible: String = text
        .chars()
        .filter(|&c| !rules::is_invisible(c))
        .map(rules::fold_quote)
        .collect();
    RE_MULTI_SPACE.replace_all(&visible, " ").trim().to_string()
}
