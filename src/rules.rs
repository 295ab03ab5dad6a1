//! Canonical rule tables shared by the normalization stages.
//!
//! Tables are plain data. Stages compile them into matchers once, at
//! construction, and only read them afterwards.

use crate::error::{Error, Result};
use crate::tag::Tag;
use aho_corasick::{AhoCorasick, MatchKind};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Bumped whenever any table below changes observable output.
pub const RULES_VERSION: u32 = 2;

// ---------------------------------------------------------------------------
// Numerals
// ---------------------------------------------------------------------------

/// Runs of enclosed numbers as (first code point, its value, run length).
/// Every enclosed number Unicode encodes from one to fifty is covered.
const ENCLOSED_RUNS: &[(u32, u32, u32)] = &[
    (0x2460, 1, 20),  // circled
    (0x2474, 1, 20),  // parenthesized
    (0x2488, 1, 20),  // with full stop
    (0x24EB, 11, 10), // negative circled
    (0x24F5, 1, 10),  // double circled
    (0x2776, 1, 10),  // dingbat negative circled
    (0x2780, 1, 10),  // dingbat circled sans-serif
    (0x278A, 1, 10),  // dingbat negative circled sans-serif
    (0x3251, 21, 15), // circled
    (0x32B1, 36, 15), // circled
];

const ENCLOSED_ZERO: &[char] = &['\u{24EA}', '\u{24FF}', '\u{1F10B}', '\u{1F10C}'];

const KEYCAP_TEN: char = '\u{1F51F}';

/// Literal tokens with a fixed symbolic reading.
pub const SYMBOLIC_TOKENS: &[(&str, &str)] = &[
    ("/", "/"),
    ("\u{FF0F}", "/"),
    ("\u{2044}", "/"),
    ("เคาท์ดาวน์", "$"),
];

pub const WORD_NUMBERS: &[(&str, char)] = &[
    ("zero", '0'),
    ("one", '1'),
    ("two", '2'),
    ("three", '3'),
    ("four", '4'),
    ("five", '5'),
    ("six", '6'),
    ("seven", '7'),
    ("eight", '8'),
    ("nine", '9'),
];

/// Zero of every run of ten decimal digits (general category Nd) outside
/// ASCII, sorted. Each run is translated to ASCII by offset.
pub const DIGIT_ZEROS: &[u32] = &[
    0x0660,  // Arabic-Indic
    0x06F0,  // extended Arabic-Indic
    0x07C0,  // NKo
    0x0966,  // Devanagari
    0x09E6,  // Bengali
    0x0A66,  // Gurmukhi
    0x0AE6,  // Gujarati
    0x0B66,  // Oriya
    0x0BE6,  // Tamil
    0x0C66,  // Telugu
    0x0CE6,  // Kannada
    0x0D66,  // Malayalam
    0x0DE6,  // Sinhala Lith
    0x0E50,  // Thai
    0x0ED0,  // Lao
    0x0F20,  // Tibetan
    0x1040,  // Myanmar
    0x1090,  // Myanmar Shan
    0x17E0,  // Khmer
    0x1810,  // Mongolian
    0x1946,  // Limbu
    0x19D0,  // New Tai Lue
    0x1A80,  // Tai Tham Hora
    0x1A90,  // Tai Tham Tham
    0x1B50,  // Balinese
    0x1BB0,  // Sundanese
    0x1C40,  // Lepcha
    0x1C50,  // Ol Chiki
    0xA620,  // Vai
    0xA8D0,  // Saurashtra
    0xA900,  // Kayah Li
    0xA9D0,  // Javanese
    0xA9F0,  // Myanmar Tai Laing
    0xAA50,  // Cham
    0xABF0,  // Meetei Mayek
    0xFF10,  // fullwidth
    0x104A0, // Osmanya
    0x10D30, // Hanifi Rohingya
    0x11066, // Brahmi
    0x110F0, // Sora Sompeng
    0x11136, // Chakma
    0x111D0, // Sharada
    0x112F0, // Khudawadi
    0x11450, // Newa
    0x114D0, // Tirhuta
    0x11650, // Modi
    0x116C0, // Takri
    0x11730, // Ahom
    0x118E0, // Warang Citi
    0x11950, // Dives Akuru
    0x11C50, // Bhaiksuki
    0x11D50, // Masaram Gondi
    0x11DA0, // Gunjala Gondi
    0x11F50, // Kawi
    0x16A60, // Mro
    0x16AC0, // Tangsa
    0x16B50, // Pahawh Hmong
    0x1D7CE, // mathematical bold
    0x1D7D8, // mathematical double-struck
    0x1D7E2, // mathematical sans-serif
    0x1D7EC, // mathematical sans-serif bold
    0x1D7F6, // mathematical monospace
    0x1E140, // Nyiakeng Puachue Hmong
    0x1E2F0, // Wancho
    0x1E4F0, // Nag Mundari
    0x1E950, // Adlam
    0x1FBF0, // segmented
];

/// Emoji and enclosed digit glyphs with their ASCII reading.
pub fn emoji_digits() -> Vec<(String, String)> {
    let mut out = Vec::new();
    for d in 0..10u8 {
        let digit = (b'0' + d) as char;
        out.push((format!("{digit}\u{FE0F}\u{20E3}"), digit.to_string()));
        out.push((format!("{digit}\u{20E3}"), digit.to_string()));
    }
    for &(first, value, len) in ENCLOSED_RUNS {
        for i in 0..len {
            if let Some(glyph) = char::from_u32(first + i) {
                out.push((glyph.to_string(), (value + i).to_string()));
            }
        }
    }
    out.extend(ENCLOSED_ZERO.iter().map(|c| (c.to_string(), "0".to_string())));
    out.push((KEYCAP_TEN.to_string(), "10".to_string()));
    out
}

/// `(one)`-style word numbers plus a parenthesized single digit of every
/// supported script, each mapped to its ASCII digit.
pub fn parenthesized_numbers() -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = WORD_NUMBERS
        .iter()
        .map(|(word, digit)| (format!("({word})"), digit.to_string()))
        .collect();
    for zero in std::iter::once(u32::from('0')).chain(DIGIT_ZEROS.iter().copied()) {
        for d in 0..10u32 {
            if let Some(glyph) = char::from_u32(zero + d) {
                out.push((format!("({glyph})"), d.to_string()));
            }
        }
    }
    out
}

/// ASCII digit for a non-ASCII decimal digit, `None` for anything else.
pub fn ascii_digit(c: char) -> Option<char> {
    let cp = u32::from(c);
    let i = DIGIT_ZEROS.partition_point(|&zero| zero <= cp);
    let zero = DIGIT_ZEROS[..i].last()?;
    char::from_digit(cp - zero, 10)
}

// ---------------------------------------------------------------------------
// Symbols
// ---------------------------------------------------------------------------

/// Arrow glyphs, matched before any parenthetical handling.
pub const ARROW_GLYPHS: &[(&str, Tag)] = &[
    ("🔼", Tag::Pickup),
    ("⏫", Tag::Pickup),
    ("⬆\u{FE0F}", Tag::Pickup),
    ("⬆", Tag::Pickup),
    ("⤴\u{FE0F}", Tag::Pickup),
    ("⤴", Tag::Pickup),
    ("🔽", Tag::Dropoff),
    ("⏬", Tag::Dropoff),
    ("⬇\u{FE0F}", Tag::Dropoff),
    ("⬇", Tag::Dropoff),
    ("⤵\u{FE0F}", Tag::Dropoff),
    ("⤵", Tag::Dropoff),
];

/// Names chat clients print in parentheses in place of the arrow glyphs.
pub const ARROW_NAMES: &[(&str, Tag)] = &[
    ("red arrow up", Tag::Pickup),
    ("red arrow curving up", Tag::Pickup),
    ("up arrow", Tag::Pickup),
    ("upwards button", Tag::Pickup),
    ("fast up button", Tag::Pickup),
    ("right arrow curving up", Tag::Pickup),
    ("red arrow down", Tag::Dropoff),
    ("red arrow curving down", Tag::Dropoff),
    ("down arrow", Tag::Dropoff),
    ("downwards button", Tag::Dropoff),
    ("fast down button", Tag::Dropoff),
    ("right arrow curving down", Tag::Dropoff),
];

/// Parenthetical names removed outright.
pub const PAREN_DENYLIST: &[&str] = &["yes", "cross mark"];

// ---------------------------------------------------------------------------
// Emoji and invisible characters
// ---------------------------------------------------------------------------

/// Decorative emoji, as sorted and disjoint closed intervals.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x00A9, 0x00A9),   // copyright
    (0x00AE, 0x00AE),   // registered
    (0x203C, 0x203C),   // double exclamation
    (0x2049, 0x2049),   // exclamation question
    (0x20E3, 0x20E3),   // combining enclosing keycap
    (0x2122, 0x2122),   // trade mark
    (0x2139, 0x2139),   // information source
    (0x2194, 0x2199),   // left-right and diagonal arrows
    (0x21A9, 0x21AA),   // hooked arrows
    (0x2300, 0x23FF),   // misc technical
    (0x25A0, 0x25FF),   // geometric shapes
    (0x2600, 0x26FF),   // misc symbols
    (0x2700, 0x27BF),   // dingbats
    (0x2934, 0x2935),   // curving arrows
    (0x2B05, 0x2B07),   // left, up, down arrows
    (0x2B1B, 0x2B1C),   // large squares
    (0x2B50, 0x2B50),   // star
    (0x2B55, 0x2B55),   // heavy circle
    (0x3030, 0x3030),   // wavy dash
    (0x303D, 0x303D),   // part alternation mark
    (0x3297, 0x3297),   // circled ideograph congratulation
    (0x3299, 0x3299),   // circled ideograph secret
    (0xFE00, 0xFE0F),   // variation selectors
    (0x1F000, 0x1F02F), // mahjong tiles
    (0x1F0A0, 0x1F0FF), // playing cards
    (0x1F1E6, 0x1F1FF), // regional indicators
    (0x1F300, 0x1F5FF), // misc symbols and pictographs
    (0x1F600, 0x1F64F), // emoticons
    (0x1F650, 0x1F67F), // ornamental dingbats
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F780, 0x1F7FF), // geometric shapes extended
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // symbols and pictographs extended-A
    (0xE0020, 0xE007F), // tag characters
    (0xE0100, 0xE01EF), // variation selectors supplement
];

pub fn is_emoji(c: char) -> bool {
    let cp = u32::from(c);
    EMOJI_RANGES
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Zero-width, formatting and non-whitespace control characters.
pub fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{2069}'
            | '\u{FEFF}'
    ) || (c.is_control() && !c.is_whitespace())
}

/// ASCII stand-in for apostrophe- and quote-like characters.
pub fn fold_quote(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' | '\u{02BC}' | '`'
        | '\u{00B4}' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => '"',
        _ => c,
    }
}

// ---------------------------------------------------------------------------
// Compiled tables
// ---------------------------------------------------------------------------

/// Replacement table compiled into one leftmost-longest automaton. Output is
/// never rescanned.
pub struct PatternTable {
    matcher: AhoCorasick,
    replacements: Vec<String>,
}

impl PatternTable {
    /// `table` names the table in configuration errors. Repeating a pattern
    /// with the same replacement is allowed; with a different one it is not.
    pub fn build<I, P, R>(table: &str, entries: I, case_insensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        let mut seen: IndexMap<String, String> = IndexMap::new();
        for (pattern, replacement) in entries {
            let pattern: String = pattern.into();
            let replacement: String = replacement.into();
            if pattern.is_empty() {
                return Err(Error::Configuration(format!("{table}: empty pattern")));
            }
            let key = if case_insensitive {
                pattern.to_ascii_lowercase()
            } else {
                pattern
            };
            match seen.get(&key) {
                Some(existing) if *existing != replacement => {
                    return Err(Error::Configuration(format!(
                        "{table}: {key:?} maps to both {existing:?} and {replacement:?}"
                    )));
                }
                Some(_) => {}
                None => {
                    seen.insert(key, replacement);
                }
            }
        }

        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .ascii_case_insensitive(case_insensitive)
            .build(seen.keys())?;
        Ok(PatternTable {
            matcher,
            replacements: seen.into_values().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        self.matcher.replace_all(text, &self.replacements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_ranges_sorted_and_disjoint() {
        for pair in EMOJI_RANGES.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0, "{:x?} overlaps {:x?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_is_emoji() {
        assert!(is_emoji('😀'));
        assert!(is_emoji('🚗'));
        assert!(is_emoji('✅'));
        assert!(is_emoji('\u{FE0F}'));
        assert!(is_emoji('🇹'));
        assert!(!is_emoji('ก'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('<'));
    }

    #[test]
    fn test_placeholders_outside_emoji_ranges() {
        for tag in Tag::ALL {
            assert!(!tag.placeholder().chars().any(is_emoji));
        }
    }

    #[test]
    fn test_digit_zeros_sorted_and_disjoint() {
        for pair in DIGIT_ZEROS.windows(2) {
            assert!(pair[0] + 10 <= pair[1], "{:x} overlaps {:x}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_every_digit_run_is_numeric() {
        for &zero in DIGIT_ZEROS {
            for d in 0..10 {
                let c = char::from_u32(zero + d).unwrap();
                assert!(c.is_numeric(), "U+{:04X}", zero + d);
                assert_eq!(ascii_digit(c), char::from_digit(d, 10));
            }
        }
    }

    #[test]
    fn test_ascii_digit_thai() {
        let digits: String = "๐๑๒๓๔๕๖๗๘๙".chars().filter_map(ascii_digit).collect();
        assert_eq!(digits, "0123456789");
    }

    #[test]
    fn test_ascii_digit_other_scripts() {
        assert_eq!(ascii_digit('７'), Some('7'));
        assert_eq!(ascii_digit('٣'), Some('3'));
        assert_eq!(ascii_digit('५'), Some('5'));
        assert_eq!(ascii_digit('১'), Some('1'));
        assert_eq!(ascii_digit('௬'), Some('6'));
        assert_eq!(ascii_digit('𝟏'), Some('1'));
        assert_eq!(ascii_digit('𝟿'), Some('9'));
        assert_eq!(ascii_digit('7'), None);
        assert_eq!(ascii_digit('ก'), None);
    }

    #[test]
    fn test_emoji_digits_cover_keycaps_and_circles() {
        let table = emoji_digits();
        let lookup = |glyph: &str| {
            table
                .iter()
                .find(|(p, _)| p == glyph)
                .map(|(_, d)| d.as_str())
        };
        assert_eq!(lookup("2️⃣"), Some("2"));
        assert_eq!(lookup("➀"), Some("1"));
        assert_eq!(lookup("➒"), Some("9"));
        assert_eq!(lookup("⓽"), Some("9"));
        assert_eq!(lookup("⓪"), Some("0"));
        assert_eq!(lookup("🔟"), Some("10"));
        assert_eq!(lookup("⑪"), Some("11"));
        assert_eq!(lookup("⑳"), Some("20"));
        assert_eq!(lookup("⓴"), Some("20"));
        assert_eq!(lookup("⒇"), Some("20"));
        assert_eq!(lookup("㉑"), Some("21"));
        assert_eq!(lookup("㊿"), Some("50"));
    }

    #[test]
    fn test_emoji_presentation_symbols() {
        for c in ['▶', '◀', '▪', '⬅', '↩', '↔', '©', '®', '‼', '⁉', '™', 'ℹ', '⤴'] {
            assert!(is_emoji(c), "{:?}", c);
        }
        assert!(!is_emoji('→'));
    }

    #[test]
    fn test_parenthesized_numbers() {
        let table = parenthesized_numbers();
        assert!(table.contains(&("(seven)".to_string(), "7".to_string())));
        assert!(table.contains(&("(๕)".to_string(), "5".to_string())));
        assert!(table.contains(&("(0)".to_string(), "0".to_string())));
    }

    #[test]
    fn test_invisible_set() {
        for c in ['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}', '\u{0007}'] {
            assert!(is_invisible(c), "{:?}", c);
        }
        assert!(!is_invisible(' '));
        assert!(!is_invisible('\n'));
        assert!(!is_invisible('ก'));
    }

    #[test]
    fn test_fold_quote() {
        assert_eq!(fold_quote('’'), '\'');
        assert_eq!(fold_quote('“'), '"');
        assert_eq!(fold_quote('x'), 'x');
    }

    #[test]
    fn test_arrow_tables_do_not_overlap() {
        for (glyph, _) in ARROW_GLYPHS {
            for (name, _) in ARROW_NAMES {
                assert!(!name.contains(glyph));
            }
        }
    }

    #[test]
    fn test_pattern_table_longest_match() {
        let table = PatternTable::build("t", [("ab", "1"), ("abc", "2")], false).unwrap();
        assert_eq!(table.apply("abcab"), "21");
    }

    #[test]
    fn test_pattern_table_no_rescan() {
        let table = PatternTable::build("t", [("a", "b"), ("b", "c")], false).unwrap();
        assert_eq!(table.apply("ab"), "bc");
    }

    #[test]
    fn test_pattern_table_case_insensitive() {
        let table = PatternTable::build("t", [("(One)", "1")], true).unwrap();
        assert_eq!(table.apply("(ONE) (one)"), "1 1");
    }

    #[test]
    fn test_pattern_table_conflict() {
        let err = PatternTable::build("arrows", [("x", "1"), ("x", "2")], false)
            .err()
            .unwrap();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("arrows"));
    }

    #[test]
    fn test_pattern_table_duplicate_same_value() {
        let table = PatternTable::build("t", [("x", "1"), ("x", "1")], false).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_pattern_table_empty_pattern() {
        let result = PatternTable::build("t", [("", "1")], false);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
