use chatclean::batch;
use chatclean::config::Config;
use chatclean::rules;
use chatclean::tokenize::{SpaceTokenizer, Tokenizer};
use chatclean::Normalizer;
use std::fs;
use std::path::Path;

fn load_config() -> Config {
    let config_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("chatclean.config.json");
    let text = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("cannot read config at {}: {}", config_path.display(), e));
    serde_json::from_str(&text).unwrap()
}

fn read_sample(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("corpora")
        .join("samples")
        .join(name);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    // Normalize line endings for cross-platform comparison
    text.replace("\r\n", "\n")
}

#[test]
fn test_chat_sample_parity() {
    let normalizer = Normalizer::new(&load_config()).unwrap();
    let input = read_sample("chat.txt");
    let expected = read_sample("chat.expected.txt");
    let result: Vec<String> = input.lines().map(|l| normalizer.normalize(l)).collect();
    assert_eq!(result, expected.lines().collect::<Vec<_>>());
}

#[test]
fn test_chat_sample_idempotent() {
    let normalizer = Normalizer::new(&load_config()).unwrap();
    for line in read_sample("chat.txt").lines() {
        let once = normalizer.normalize(line);
        assert_eq!(normalizer.normalize(&once), once, "line {line:?}");
    }
}

#[test]
fn test_chat_sample_output_contract() {
    let normalizer = Normalizer::new(&load_config()).unwrap();
    for line in read_sample("chat.txt").lines() {
        let out = normalizer.normalize(line);
        assert!(!out.chars().any(rules::is_emoji), "emoji left in {out:?}");
        assert!(!out.chars().any(rules::is_invisible), "invisible left in {out:?}");
        assert!(!out.chars().any(|c| rules::ascii_digit(c).is_some()), "digit left in {out:?}");
        assert!(!out.contains("  "), "double space in {out:?}");
        assert_eq!(out.trim(), out);
    }
}

#[test]
fn test_chat_sample_ner_export() {
    let config = load_config();
    let normalizer = Normalizer::new(&config).unwrap();
    let sentences: Vec<Vec<String>> = read_sample("chat.txt")
        .lines()
        .map(|l| SpaceTokenizer.tokenize(&normalizer.normalize(l), &config.tokenizer))
        .collect();
    let lines = batch::sentence_rows(sentences);

    // 16 non-empty sentences, each followed by a separator.
    assert_eq!(lines.iter().filter(|l| l.is_none()).count(), 16);
    assert_eq!(lines.first().cloned().flatten().map(|r| r.token), Some("ขึ้น".to_string()));

    let mut buf = Vec::new();
    batch::write_csv(&lines, &mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    assert!(csv.starts_with("Sentence_ID,Token,Label\n1,ขึ้น,O\n1,ไปส่งลูกค้า,O\n,,\n2,ลง,O\n"));
}
