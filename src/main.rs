use chatclean::batch::{self, CleanedRow};
use chatclean::config::Config;
use chatclean::{boundary, tokenize, Normalizer};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum Format {
    /// One normalized line per input line
    Text,
    /// JSON line per row with the original and processed text
    Json,
    /// CSV of Sentence_ID,Token,Label with a blank row after each sentence
    Ner,
    /// Treat each input as a request body and print the endpoint response
    Api,
}

#[derive(Parser)]
#[command(
    name = "chatclean",
    about = "chatclean: normalize ride-hailing chat text for tokenization and NER"
)]
struct Cli {
    /// Input file(s) or directory (default: stdin)
    inputs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Word that replaces pickup arrows (default: from config or ขึ้น)
    #[arg(long)]
    pickup_word: Option<String>,

    /// Word that replaces dropoff arrows (default: from config or ลง)
    #[arg(long)]
    dropoff_word: Option<String>,

    /// Leave hyphens in phone numbers
    #[arg(long)]
    keep_phone_hyphens: bool,

    /// Emit whitespace tokens between words
    #[arg(long)]
    keep_whitespace: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn read_inputs(inputs: &[PathBuf]) -> Vec<(String, Vec<u8>)> {
    if inputs.is_empty() {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .unwrap_or_else(|e| die(&format!("cannot read stdin: {}", e)));
        return vec![("<stdin>".to_string(), buf)];
    }

    let files = chatclean::list_files(inputs).unwrap_or_else(|e| die(&format!("{}", e)));
    if files.is_empty() {
        die("no input files found");
    }
    files
        .iter()
        .map(|fp| {
            let bytes = fs::read(fp).unwrap_or_else(|e| die(&format!("cannot read {}: {}", fp.display(), e)));
            (fp.display().to_string(), bytes)
        })
        .collect()
}

/// One row per input line, each line being one cell.
fn clean_rows(inputs: &[(String, Vec<u8>)], normalizer: &Normalizer) -> Vec<CleanedRow> {
    let mut rows = Vec::new();
    for (name, body) in inputs {
        let text = std::str::from_utf8(body)
            .map_err(chatclean::Error::from)
            .unwrap_or_else(|e| die(&format!("{}: {}", name, e)));
        for line in text.lines() {
            rows.push(CleanedRow {
                original: line.to_string(),
                processed: normalizer.normalize(line),
            });
        }
    }
    rows
}

fn json_line<T: Serialize>(value: &T) -> String {
    let mut line = serde_json::to_string(value).unwrap_or_else(|e| die(&format!("{}", e)));
    line.push('\n');
    line
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["chatclean.config.json", "config/chatclean.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(word) = cli.pickup_word {
        config.pickup_word = word;
    }
    if let Some(word) = cli.dropoff_word {
        config.dropoff_word = word;
    }
    if cli.keep_phone_hyphens {
        config.strip_phone_hyphens = false;
    }
    if cli.keep_whitespace {
        config.tokenizer.keep_whitespace = true;
    }

    let normalizer = Normalizer::new(&config).unwrap_or_else(|e| die(&format!("{}", e)));
    let tokenizer = tokenize::for_engine(&config.tokenizer.engine).unwrap_or_else(|| {
        die(&format!("unsupported tokenizer engine: {}", config.tokenizer.engine))
    });

    let inputs = read_inputs(&cli.inputs);
    let mut result: Vec<u8> = Vec::new();
    let row_count;

    match cli.format {
        Format::Text => {
            let rows = clean_rows(&inputs, &normalizer);
            for row in &rows {
                result.extend_from_slice(row.processed.as_bytes());
                result.push(b'\n');
            }
            row_count = rows.len();
        }
        Format::Json => {
            let rows = clean_rows(&inputs, &normalizer);
            for row in &rows {
                result.extend_from_slice(json_line(row).as_bytes());
            }
            row_count = rows.len();
        }
        Format::Ner => {
            let rows = clean_rows(&inputs, &normalizer);
            let lines = batch::sentence_rows(
                rows.iter()
                    .map(|row| tokenizer.tokenize(&row.processed, &config.tokenizer)),
            );
            batch::write_csv(&lines, &mut result).unwrap_or_else(|e| die(&format!("{}", e)));
            row_count = rows.len();
        }
        Format::Api => {
            for (_, body) in &inputs {
                let response =
                    boundary::extract_word(body, &normalizer, tokenizer.as_ref(), &config.tokenizer);
                result.extend_from_slice(json_line(&response).as_bytes());
            }
            row_count = inputs.len();
        }
    }

    if let Some(ref output_path) = cli.output {
        fs::write(output_path, &result)
            .unwrap_or_else(|e| die(&format!("cannot write {}: {}", output_path.display(), e)));
        eprintln!(
            "normalized {} row(s) from {} input(s) -> {}",
            row_count,
            inputs.len(),
            output_path.display()
        );
    } else {
        io::stdout()
            .write_all(&result)
            .unwrap_or_else(|e| die(&format!("cannot write stdout: {}", e)));
    }
}
