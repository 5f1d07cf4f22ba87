//! Command-line interface for buntai-rs
//!
//! Usage:
//!   buntai -t "今日は晴れだ。"
//!   buntai -m polite-to-casual -t "本を読みません。"
//!   buntai -a -t "本を読む。"
//!   buntai --analyzer lexicon -d words.tsv -t "ググる。"

use std::fs;
use std::process;

use buntai_rs::{Analyzer, Converter, Direction};
use clap::{CommandFactory, Parser, ValueEnum};
use env_logger::Env;

/// Which morphological analyzer to convert with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AnalyzerKind {
    /// The embedded lexicon, optionally extended with --dict
    Lexicon,
    /// lindera with the full IPADIC dictionary (needs the ipadic feature)
    Ipadic,
}

impl Default for AnalyzerKind {
    fn default() -> Self {
        if cfg!(feature = "ipadic") {
            AnalyzerKind::Ipadic
        } else {
            AnalyzerKind::Lexicon
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "buntai")]
#[command(version, about = "Convert Japanese text between casual (常体) and polite (敬体) register")]
struct Cli {
    /// Conversion direction: casual-to-polite or polite-to-casual
    #[arg(short, long, default_value = "casual-to-polite")]
    mode: String,

    /// Text to convert
    #[arg(short, long)]
    text: Option<String>,

    /// Morphological analyzer
    #[arg(long, value_enum, default_value_t = AnalyzerKind::default())]
    analyzer: AnalyzerKind,

    /// Lexicon TSV layered over the embedded one (lexicon analyzer only)
    #[arg(short, long, value_name = "FILE")]
    dict: Option<String>,

    /// Print the morpheme analysis as JSON instead of converting
    #[arg(short, long)]
    analyze: bool,

    /// Log rule applications and other trace events
    #[arg(long)]
    debug: bool,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn print_usage() {
    if let Err(e) = Cli::command().write_help(&mut std::io::stderr()) {
        log::warn!("could not print usage: {}", e);
    }
}

/// Analyze or convert `text`, printing the result
fn run<A: Analyzer>(converter: Converter<A>, cli: &Cli, text: &str, direction: Direction) {
    if cli.analyze {
        let morphemes = converter.analyze(text).unwrap_or_else(|e| fail(e));
        match serde_json::to_string_pretty(&morphemes) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(format!("cannot serialize analysis: {}", e)),
        }
        return;
    }

    match converter.convert(text, direction) {
        Ok(converted) => println!("{}", converted),
        Err(e) => fail(e),
    }
}

fn lexicon_converter(dict: Option<&str>) -> Converter {
    let converter = match dict {
        Some(path) => {
            let tsv = match fs::read_to_string(path) {
                Ok(tsv) => tsv,
                Err(e) => fail(format!("cannot read lexicon '{}': {}", path, e)),
            };
            Converter::with_user_lexicon(&tsv)
        }
        None => Converter::new(),
    };
    converter.unwrap_or_else(|e| fail(e))
}

#[cfg(feature = "ipadic")]
fn run_ipadic(cli: &Cli, text: &str, direction: Direction) {
    let converter = Converter::ipadic().unwrap_or_else(|e| fail(e));
    run(converter, cli, text, direction);
}

#[cfg(not(feature = "ipadic"))]
fn run_ipadic(_cli: &Cli, _text: &str, _direction: Direction) {
    fail("the ipadic analyzer is not available; rebuild with --features ipadic");
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let text = match cli.text.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => {
            print_usage();
            fail("no input text provided");
        }
    };

    let direction: Direction = match cli.mode.parse() {
        Ok(d) => d,
        Err(e) => {
            print_usage();
            fail(e);
        }
    };

    match cli.analyzer {
        AnalyzerKind::Lexicon => {
            let converter = lexicon_converter(cli.dict.as_deref());
            run(converter, &cli, text, direction);
        }
        AnalyzerKind::Ipadic => {
            if cli.dict.is_some() {
                fail("--dict only applies to --analyzer lexicon");
            }
            run_ipadic(&cli, text, direction);
        }
    }
}
