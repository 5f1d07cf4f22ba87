//! # buntai-rs
//!
//! Convert Japanese text between casual (常体) and polite (敬体) register.
//!
//! Text is split into sentences, each sentence is analyzed into IPADIC-style
//! morphemes, and an ordered list of rewrite rules changes the sentence-final
//! predicate (verbs, adjectives, the copula, auxiliaries) and clause
//! conjunctions. Text inside 「…」 and 『…』 is never rewritten.
//!
//! ## Quick Start
//!
//! ```rust
//! use buntai_rs::{Converter, Direction};
//!
//! let converter = Converter::new().unwrap();
//!
//! let polite = converter
//!     .convert("今日は晴れだ。本を読む。", Direction::CasualToPolite)
//!     .unwrap();
//! assert_eq!(polite, "今日は晴れです。本を読みます。");
//!
//! let casual = converter
//!     .convert("本を読みません。", Direction::PoliteToCasual)
//!     .unwrap();
//! assert_eq!(casual, "本を読まない。");
//! ```
//!
//! ## Custom Lexicon
//!
//! The built-in analyzer uses a small embedded lexicon. Extra words can be
//! layered on top with a TSV in IPADIC feature order:
//!
//! ```rust
//! use buntai_rs::{Converter, Direction};
//!
//! let tsv = "ググる\t動詞\t自立\t*\t*\t五段・ラ行\t*\tググる";
//! let converter = Converter::with_user_lexicon(tsv).unwrap();
//! let out = converter.convert("ググる。", Direction::CasualToPolite).unwrap();
//! assert_eq!(out, "ググります。");
//! ```
//!
//! With the `ipadic` feature, `LinderaAnalyzer` analyzes with lindera's full
//! IPADIC dictionary instead.

pub mod char_categories;
pub mod chunker;
pub mod conjugation;
pub mod converter;
pub mod editor;
pub mod error;
pub mod rules;
pub mod sentence;
pub mod token;
pub mod tokenizer;
pub mod trace;
pub mod trie;

// Re-export main types for convenience
pub use char_categories::{get_char_category, CharCategory, JaString};
pub use chunker::{Chunk, Chunker};
pub use conjugation::{stem_for, TargetForm};
pub use converter::{Converter, Direction};
pub use error::{Error, Result};
pub use sentence::{is_fully_quoted, quote_spans, split_sentences, Span};
pub use token::{Morpheme, Pos};
pub use tokenizer::{Analyzer, LexiconAnalyzer};
pub use trace::{LogObserver, NullObserver, Observer, TraceEvent};
pub use trie::{Trie, TrieBuilder};

#[cfg(feature = "ipadic")]
pub use tokenizer::LinderaAnalyzer;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let converter = Converter::new().unwrap().with_observer(NullObserver);

        let polite = converter
            .convert("だから今日は晴れだ。元気か？", Direction::CasualToPolite)
            .unwrap();
        assert_eq!(polite, "ですから今日は晴れです。元気か？");

        let casual = converter
            .convert(&polite, Direction::PoliteToCasual)
            .unwrap();
        assert_eq!(casual, "だから今日は晴れだ。元気か？");
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
