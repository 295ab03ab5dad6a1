//! Row-level records for batch export: the cleaned-data view and the NER
//! labeling view. Writing spreadsheets is left to the caller; NER rows can be
//! written as CSV.

use serde::Serialize;
use std::borrow::Cow;
use std::io::{self, Write};

pub const DEFAULT_LABEL: &str = "O";
pub const NER_HEADER: &str = "Sentence_ID,Token,Label";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedRow {
    pub original: String,
    pub processed: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NerRow {
    pub sentence_id: usize,
    pub token: String,
    pub label: String,
}

/// `None` marks the blank row after each sentence.
pub type NerLine = Option<NerRow>;

/// Numbers sentences from 1 and emits one row per token followed by a blank
/// separator. Sentences without tokens are skipped and take no id.
pub fn sentence_rows<I>(sentences: I) -> Vec<NerLine>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut out = Vec::new();
    let mut sentence_id = 0;
    for tokens in sentences {
        if tokens.is_empty() {
            continue;
        }
        sentence_id += 1;
        out.extend(tokens.into_iter().map(|token| {
            Some(NerRow {
                sentence_id,
                token,
                label: DEFAULT_LABEL.to_string(),
            })
        }));
        out.push(None);
    }
    out
}

fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

pub fn write_csv<W: Write>(lines: &[NerLine], out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", NER_HEADER)?;
    for line in lines {
        match line {
            Some(row) => writeln!(
                out,
                "{},{},{}",
                row.sentence_id,
                csv_field(&row.token),
                csv_field(&row.label)
            )?,
            None => writeln!(out, ",,")?,
        }
    }
    Ok(())
}
