//! Top-level conversion between casual and polite register.
//!
//! A [`Converter`] splits text into sentences and converts each one. A
//! sentence that is entirely one quotation is left as it is; otherwise only
//! the text outside quotations is analyzed and rewritten.

use std::fmt;
use std::str::FromStr;

use crate::editor::reconstruct;
use crate::error::{Error, Result};
use crate::rules;
use crate::sentence::{contains_quote, is_fully_quoted, quote_spans, split_sentences, Span};
use crate::token::Morpheme;
use crate::tokenizer::{Analyzer, LexiconAnalyzer};
use crate::trace::{LogObserver, Observer, TraceEvent};
use crate::trie::{TrieBuilder, EMBEDDED_LEXICON};

/// Which way to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 常体 → 敬体
    CasualToPolite,
    /// 敬体 → 常体
    PoliteToCasual,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::CasualToPolite => "casual-to-polite",
            Direction::PoliteToCasual => "polite-to-casual",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "casual-to-polite" => Ok(Direction::CasualToPolite),
            "polite-to-casual" => Ok(Direction::PoliteToCasual),
            other => Err(Error::UnsupportedDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Register converter over an analyzer
pub struct Converter<A: Analyzer = LexiconAnalyzer> {
    analyzer: A,
    observer: Box<dyn Observer>,
}

impl Converter<LexiconAnalyzer> {
    /// Create a converter over the embedded lexicon
    pub fn new() -> Result<Self> {
        Ok(Converter::with_analyzer(LexiconAnalyzer::embedded()?))
    }

    /// Create a converter whose lexicon is `tsv` layered over the embedded
    /// one. User rows are tried before embedded rows with the same surface.
    pub fn with_user_lexicon(tsv: &str) -> Result<Self> {
        let mut builder = TrieBuilder::new();
        builder.load_tsv(tsv)?;
        builder.load_tsv(EMBEDDED_LEXICON)?;
        Ok(Converter::with_analyzer(LexiconAnalyzer::new(builder.build())))
    }
}

#[cfg(feature = "ipadic")]
impl Converter<crate::tokenizer::LinderaAnalyzer> {
    /// Create a converter analyzing with lindera's IPADIC dictionary
    pub fn ipadic() -> Result<Self> {
        Ok(Converter::with_analyzer(crate::tokenizer::LinderaAnalyzer::new()?))
    }
}

impl<A: Analyzer> Converter<A> {
    pub fn with_analyzer(analyzer: A) -> Self {
        Converter {
            analyzer,
            observer: Box::new(LogObserver),
        }
    }

    /// Replace the observer receiving trace events
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Analyze text into morphemes
    pub fn analyze(&self, text: &str) -> Result<Vec<Morpheme>> {
        let morphemes = self.analyzer.analyze(text)?;
        self.observer.event(&TraceEvent::Analyzed {
            text: text.to_string(),
            morphemes: morphemes.clone(),
        });
        Ok(morphemes)
    }

    /// Convert every sentence of `text` and join the results.
    ///
    /// The first sentence that fails to analyze aborts the whole call.
    pub fn convert(&self, text: &str, direction: Direction) -> Result<String> {
        let mut out = String::with_capacity(text.len() * 2);
        for sentence in split_sentences(text) {
            out.push_str(&self.convert_sentence(&sentence, direction)?);
        }
        Ok(out)
    }

    /// Like [`Converter::convert`], with the direction given by name
    pub fn convert_named(&self, text: &str, direction: &str) -> Result<String> {
        let direction = direction.parse()?;
        self.convert(text, direction)
    }

    /// Convert a single sentence, leaving quotations untouched
    pub fn convert_sentence(&self, sentence: &str, direction: Direction) -> Result<String> {
        if is_fully_quoted(sentence) {
            self.observer.event(&TraceEvent::QuotedSkipped {
                sentence: sentence.to_string(),
            });
            return Ok(sentence.to_string());
        }

        let converted = if contains_quote(sentence) {
            let mut converted = String::with_capacity(sentence.len() * 2);
            for span in quote_spans(sentence) {
                match span {
                    Span::Quoted(quoted) => converted.push_str(quoted),
                    Span::Plain(plain) => {
                        converted.push_str(&self.convert_span(plain, direction)?)
                    }
                }
            }
            converted
        } else {
            self.convert_span(sentence, direction)?
        };

        self.observer.event(&TraceEvent::SentenceConverted {
            original: sentence.to_string(),
            converted: converted.clone(),
        });
        Ok(converted)
    }

    /// Run the rule pipeline over text containing no quotations
    fn convert_span(&self, text: &str, direction: Direction) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        let morphemes = self.analyze(text)?;
        let rewritten = rules::run(direction, &morphemes, self.observer.as_ref());
        Ok(reconstruct(&rewritten))
    }
}

impl<A: Analyzer + fmt::Debug> fmt::Debug for Converter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("analyzer", &self.analyzer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::tests::Recorder;
    use crate::trace::NullObserver;
    use std::rc::Rc;

    fn converter() -> Converter {
        Converter::new().unwrap().with_observer(NullObserver)
    }

    /// Shares a Recorder with the converter that owns the observer
    struct Shared(Rc<Recorder>);

    impl Observer for Shared {
        fn event(&self, event: &TraceEvent) {
            self.0.event(event);
        }
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!(
            "casual-to-polite".parse::<Direction>().unwrap(),
            Direction::CasualToPolite
        );
        assert_eq!(
            "polite-to-casual".parse::<Direction>().unwrap(),
            Direction::PoliteToCasual
        );
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(Error::UnsupportedDirection(name)) if name == "sideways"
        ));
        assert_eq!(Direction::PoliteToCasual.to_string(), "polite-to-casual");
    }

    #[test]
    fn test_convert_sentences() {
        let c = converter();
        assert_eq!(
            c.convert("今日は晴れだ。本を読む。", Direction::CasualToPolite).unwrap(),
            "今日は晴れです。本を読みます。"
        );
    }

    #[test]
    fn test_empty_input() {
        let c = converter();
        assert_eq!(c.convert("", Direction::CasualToPolite).unwrap(), "");
        assert_eq!(c.convert("", Direction::PoliteToCasual).unwrap(), "");
        assert_eq!(c.convert("  ", Direction::PoliteToCasual).unwrap(), "");
    }

    #[test]
    fn test_unknown_direction_name() {
        let c = converter();
        assert!(matches!(
            c.convert_named("本を読む。", "upside-down"),
            Err(Error::UnsupportedDirection(_))
        ));
        assert_eq!(
            c.convert_named("本を読む。", "casual-to-polite").unwrap(),
            "本を読みます。"
        );
    }

    #[test]
    fn test_fully_quoted_sentence_is_skipped() {
        let recorder = Rc::new(Recorder::default());
        let c = Converter::new()
            .unwrap()
            .with_observer(Shared(Rc::clone(&recorder)));

        let out = c.convert_sentence("「明日は雨だ」", Direction::CasualToPolite).unwrap();

        assert_eq!(out, "「明日は雨だ」");
        let events = recorder.events.borrow();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TraceEvent::QuotedSkipped { .. }));
    }

    #[test]
    fn test_quoted_span_untouched() {
        let c = converter();
        assert_eq!(
            c.convert("彼は「明日雨だ」と言った。", Direction::CasualToPolite).unwrap(),
            "彼は「明日雨だ」と言いました。"
        );
        assert_eq!(
            c.convert("彼は『雨です』と言いました。", Direction::PoliteToCasual).unwrap(),
            "彼は『雨です』と言った。"
        );
    }

    #[test]
    fn test_events_in_order() {
        let recorder = Rc::new(Recorder::default());
        let c = Converter::new()
            .unwrap()
            .with_observer(Shared(Rc::clone(&recorder)));

        c.convert("雨だ。", Direction::CasualToPolite).unwrap();

        let events = recorder.events.borrow();
        assert!(matches!(events[0], TraceEvent::Analyzed { .. }));
        assert!(matches!(events[1], TraceEvent::RuleApplied { rule: "noun", .. }));
        assert!(matches!(
            &events[2],
            TraceEvent::SentenceConverted { converted, .. } if converted == "雨です。"
        ));
    }

    #[test]
    fn test_user_lexicon() {
        let c = Converter::with_user_lexicon("ググる\t動詞\t自立\t*\t*\t五段・ラ行\t*\tググる")
            .unwrap()
            .with_observer(NullObserver);
        assert_eq!(
            c.convert("彼はググる。", Direction::CasualToPolite).unwrap(),
            "彼はググります。"
        );
        assert!(matches!(
            Converter::with_user_lexicon("壊れた行"),
            Err(Error::Lexicon { line: 1, .. })
        ));
    }

    #[test]
    fn test_analysis_error_aborts() {
        struct Failing;
        impl Analyzer for Failing {
            fn analyze(&self, text: &str) -> Result<Vec<Morpheme>> {
                Err(Error::analysis(text, "unavailable"))
            }
        }

        let c = Converter::with_analyzer(Failing).with_observer(NullObserver);
        assert!(matches!(
            c.convert("雨だ。晴れだ。", Direction::CasualToPolite),
            Err(Error::Analysis { .. })
        ));
        // a fully quoted sentence never reaches the analyzer
        assert_eq!(
            c.convert("「雨だ」", Direction::CasualToPolite).unwrap(),
            "「雨だ」"
        );
    }
}
