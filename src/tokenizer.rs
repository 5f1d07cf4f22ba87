//! Morphological analysis: turning text into morphemes.
//!
//! The default [`LexiconAnalyzer`] walks the lexicon Trie with a greedy
//! longest-match, picking the first entry whose guard admits the previous
//! morpheme and the following text. Text the lexicon does not cover falls
//! back to character-class chunks. With the `ipadic` feature, [`LinderaAnalyzer`] delegates to
//! lindera's IPADIC dictionary instead.

use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

use crate::char_categories::CharCategory;
use crate::chunker::Chunker;
use crate::error::{Error, Result};
use crate::token::Morpheme;
use crate::trie::Trie;

/// Produces an ordered morpheme sequence whose surfaces reproduce the text
pub trait Analyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>>;
}

/// Lexicon-driven analyzer
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    /// The lexicon trie (shared reference)
    trie: Arc<Trie>,
}

impl LexiconAnalyzer {
    /// Create a new analyzer with the given trie
    pub fn new(trie: Trie) -> Self {
        LexiconAnalyzer {
            trie: Arc::new(trie),
        }
    }

    /// Create a new analyzer with a shared trie reference
    pub fn with_arc(trie: Arc<Trie>) -> Self {
        LexiconAnalyzer { trie }
    }

    /// Create an analyzer over the embedded lexicon
    pub fn embedded() -> Result<Self> {
        Ok(LexiconAnalyzer::new(Trie::embedded()?))
    }

    /// Get a reference to the trie
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Get the Arc reference to the trie (for sharing)
    pub fn trie_arc(&self) -> Arc<Trie> {
        Arc::clone(&self.trie)
    }

    /// Segment already-normalized text
    pub fn segment(&self, text: &str) -> Vec<Morpheme> {
        let chars: Vec<char> = text.chars().collect();

        // category and run end for every char index
        let mut categories = vec![CharCategory::Other; chars.len()];
        let mut run_end = vec![0; chars.len()];
        for chunk in Chunker::new(text).make_chunks() {
            for i in chunk.char_start..chunk.char_end() {
                categories[i] = chunk.category;
                run_end[i] = chunk.char_end();
            }
        }

        let mut morphemes: Vec<Morpheme> = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if let Some((len, morpheme)) = self.longest_match(&chars[i..], morphemes.last()) {
                morphemes.push(morpheme);
                i += len;
                continue;
            }

            let category = categories[i];
            let mut end = run_end[i].max(i + 1);

            // an unknown run stops where a known word begins
            if category.groups() && !category.is_symbol() {
                if let Some(j) = (i + 1..end).find(|&j| !self.trie.prefix_lengths(&chars[j..]).is_empty()) {
                    end = j;
                }
            }

            let surface: String = chars[i..end].iter().collect();
            morphemes.push(unknown(&surface, category));
            i = end;
        }

        morphemes
    }

    /// Find the longest lexicon match at the start of `chars` whose guard
    /// admits the previous morpheme and the text that follows
    fn longest_match(&self, chars: &[char], prev: Option<&Morpheme>) -> Option<(usize, Morpheme)> {
        for len in self.trie.prefix_lengths(chars) {
            let surface: String = chars[..len].iter().collect();
            let admitted = self
                .trie
                .entries(&surface)
                .iter()
                .find(|entry| entry.guard.admits(prev, &chars[len..]));

            if let Some(entry) = admitted {
                return Some((len, entry.morpheme.clone()));
            }
        }
        None
    }
}

impl Analyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>> {
        // Normalize Unicode (NFC normalization)
        let normalized: String = text.nfc().collect();
        let morphemes = self.segment(&normalized);
        check_round_trip(&normalized, &morphemes)?;
        Ok(morphemes)
    }
}

/// Morpheme for a stretch of text missing from the lexicon
fn unknown(surface: &str, category: CharCategory) -> Morpheme {
    if category.is_symbol() {
        return Morpheme::from_features(surface, &["記号", category.symbol_detail()]);
    }
    match category {
        CharCategory::Digit => Morpheme::from_features(surface, &["名詞", "数"]),
        _ => Morpheme::from_features(surface, &["名詞", "一般"]),
    }
}

/// Surfaces must concatenate back to the analyzed text
fn check_round_trip(text: &str, morphemes: &[Morpheme]) -> Result<()> {
    let rebuilt: String = morphemes.iter().map(|m| m.surface.as_str()).collect();
    if rebuilt != text {
        return Err(Error::analysis(
            text,
            format!("morpheme surfaces rebuild {:?}", rebuilt),
        ));
    }
    if morphemes.iter().any(|m| m.surface.is_empty()) {
        return Err(Error::analysis(text, "empty morpheme surface"));
    }
    Ok(())
}

#[cfg(feature = "ipadic")]
pub use self::ipadic::LinderaAnalyzer;

#[cfg(feature = "ipadic")]
mod ipadic {
    use lindera::{
        dictionary::{load_dictionary_from_kind, DictionaryKind},
        mode::Mode,
        segmenter::Segmenter,
        tokenizer::Tokenizer,
    };
    use unicode_normalization::UnicodeNormalization;

    use super::{check_round_trip, Analyzer};
    use crate::error::{Error, Result};
    use crate::token::Morpheme;

    /// Analyzer backed by lindera and its embedded IPADIC dictionary
    pub struct LinderaAnalyzer {
        tokenizer: Tokenizer,
    }

    impl LinderaAnalyzer {
        pub fn new() -> Result<Self> {
            let dictionary = load_dictionary_from_kind(DictionaryKind::IPADIC)
                .map_err(|e| Error::analysis("", format!("failed to load IPADIC: {}", e)))?;
            let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
            Ok(LinderaAnalyzer {
                tokenizer: Tokenizer::new(segmenter),
            })
        }
    }

    impl Analyzer for LinderaAnalyzer {
        fn analyze(&self, text: &str) -> Result<Vec<Morpheme>> {
            let normalized: String = text.nfc().collect();
            let mut tokens = self
                .tokenizer
                .tokenize(&normalized)
                .map_err(|e| Error::analysis(&normalized, e.to_string()))?;

            let morphemes: Vec<Morpheme> = tokens
                .iter_mut()
                .map(|token| {
                    let surface = normalized[token.byte_start..token.byte_end].to_string();
                    let details = token.details();
                    Morpheme::from_features(&surface, &details)
                })
                .collect();

            check_round_trip(&normalized, &morphemes)?;
            Ok(morphemes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Pos;
    use crate::trie::TrieBuilder;

    fn analyzer() -> LexiconAnalyzer {
        LexiconAnalyzer::embedded().unwrap()
    }

    fn surfaces(morphemes: &[Morpheme]) -> Vec<&str> {
        morphemes.iter().map(|m| m.surface.as_str()).collect()
    }

    #[test]
    fn test_simple_analysis() {
        let morphemes = analyzer().analyze("本を読む。").unwrap();

        assert_eq!(surfaces(&morphemes), vec!["本", "を", "読む", "。"]);
        assert_eq!(morphemes[2].pos, Pos::Verb);
        assert_eq!(morphemes[2].conjugation_form, "基本形");
        assert_eq!(morphemes[3].pos, Pos::Symbol);
        assert_eq!(morphemes[3].detail(), "句点");
    }

    #[test]
    fn test_polite_negative() {
        let morphemes = analyzer().analyze("本を読みません。").unwrap();
        assert_eq!(surfaces(&morphemes), vec!["本", "を", "読み", "ませ", "ん", "。"]);
        assert_eq!(morphemes[4].conjugation_type, "不変化型");
    }

    #[test]
    fn test_conjunction_only_at_clause_start() {
        let a = analyzer();

        let start = a.analyze("だから今日は晴れだ。").unwrap();
        assert_eq!(start[0].surface, "だから");
        assert_eq!(start[0].pos, Pos::Conjunction);

        let inner = a.analyze("晴れだから嬉しい。").unwrap();
        assert_eq!(surfaces(&inner), vec!["晴れ", "だ", "から", "嬉しい", "。"]);
        assert_eq!(inner[2].detail(), "接続助詞");
    }

    #[test]
    fn test_ga_after_predicate() {
        let a = analyzer();

        let connective = a.analyze("望ましいが、").unwrap();
        assert_eq!(connective[1].detail(), "接続助詞");

        let case = a.analyze("雨が降る").unwrap();
        assert_eq!(case[1].detail(), "格助詞");
    }

    #[test]
    fn test_past_auxiliary_after_verb() {
        let morphemes = analyzer().analyze("読んだ").unwrap();
        assert_eq!(surfaces(&morphemes), vec!["読ん", "だ"]);
        assert_eq!(morphemes[1].conjugation_type, "特殊・タ");

        let copula = analyzer().analyze("雨だ").unwrap();
        assert_eq!(copula[1].conjugation_type, "特殊・ダ");
    }

    #[test]
    fn test_node_before_desu() {
        let a = analyzer();

        let polite = a.analyze("雨なのです。").unwrap();
        assert_eq!(surfaces(&polite), vec!["雨", "な", "の", "です", "。"]);

        let past = a.analyze("雨なのでした。").unwrap();
        assert_eq!(surfaces(&past), vec!["雨", "な", "の", "でし", "た", "。"]);

        let connective = a.analyze("雨なので、").unwrap();
        assert_eq!(surfaces(&connective), vec!["雨", "な", "ので", "、"]);
        assert_eq!(connective[2].detail(), "接続助詞");
    }

    #[test]
    fn test_unknown_runs() {
        let morphemes = analyzer().analyze("プロセッサーはaaaを12個").unwrap();

        assert_eq!(
            surfaces(&morphemes),
            vec!["プロセッサー", "は", "aaa", "を", "12", "個"]
        );
        assert_eq!(morphemes[0].pos, Pos::Noun);
        assert_eq!(morphemes[4].detail(), "数");
    }

    #[test]
    fn test_unknown_run_stops_at_known_word() {
        let morphemes = analyzer().analyze("毎朝").unwrap();
        assert_eq!(surfaces(&morphemes), vec!["毎", "朝"]);
    }

    #[test]
    fn test_nfc_normalization() {
        // が written as か + combining voiced mark
        let morphemes = analyzer().analyze("雨か\u{3099}降る").unwrap();
        assert_eq!(morphemes[1].surface, "が");
    }

    #[test]
    fn test_custom_lexicon() {
        let mut builder = TrieBuilder::new();
        builder
            .load_tsv("猫\t名詞\t一般\t*\t*\t*\t*\t猫")
            .unwrap();
        let analyzer = LexiconAnalyzer::new(builder.build());

        let morphemes = analyzer.analyze("猫。").unwrap();
        assert_eq!(surfaces(&morphemes), vec!["猫", "。"]);
    }

    #[test]
    fn test_arc_sharing() {
        let a1 = analyzer();
        let a2 = LexiconAnalyzer::with_arc(a1.trie_arc());
        assert_eq!(a1.trie().len(), a2.trie().len());
    }

    #[test]
    fn test_empty_input() {
        assert!(analyzer().analyze("").unwrap().is_empty());
    }
}
