//! Sentence splitting and quote detection.
//!
//! Text is split into sentences on 。？！, and each sentence is split into
//! spans that are either inside a 「…」/『…』 quotation or outside of one.
//! Quotations do not nest: the first closer of the opening style ends the
//! quotation, and a bracket of the other style inside it is plain content.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence-final mark plus any whitespace after it
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[。？！]\s*").unwrap_or_else(|e| panic!("invalid sentence regex: {}", e))
});

/// Split text into trimmed sentences, each keeping its final mark.
///
/// Whitespace-only pieces are dropped; text after the last mark forms a
/// final sentence of its own.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END.find_iter(text) {
        let sentence = text[start..m.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = m.end();
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }

    sentences
}

/// The two quotation styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// 「…」
    Kagi,
    /// 『…』
    DoubleKagi,
}

impl Bracket {
    /// The style opened by `c`, if `c` is an opener
    pub fn opened_by(c: char) -> Option<Self> {
        match c {
            '「' => Some(Bracket::Kagi),
            '『' => Some(Bracket::DoubleKagi),
            _ => None,
        }
    }

    /// The style closed by `c`, if `c` is a closer
    pub fn closed_by(c: char) -> Option<Self> {
        match c {
            '」' => Some(Bracket::Kagi),
            '』' => Some(Bracket::DoubleKagi),
            _ => None,
        }
    }

    pub fn closer(&self) -> char {
        match self {
            Bracket::Kagi => '」',
            Bracket::DoubleKagi => '』',
        }
    }
}

/// Whether the text contains any quotation bracket
pub fn contains_quote(text: &str) -> bool {
    text.chars()
        .any(|c| Bracket::opened_by(c).is_some() || Bracket::closed_by(c).is_some())
}

/// Whether the whole trimmed text is one quotation: it opens with a
/// bracket whose first matching closer is the last character
pub fn is_fully_quoted(text: &str) -> bool {
    let trimmed = text.trim();
    let mut chars = trimmed.char_indices();

    let Some(bracket) = chars.next().and_then(|(_, c)| Bracket::opened_by(c)) else {
        return false;
    };

    match chars.find(|&(_, c)| c == bracket.closer()) {
        Some((i, c)) => i + c.len_utf8() == trimmed.len(),
        None => false,
    }
}

/// A piece of a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Outside any quotation; eligible for rewriting
    Plain(&'a str),
    /// A quotation including its brackets, or a stray closing bracket
    Quoted(&'a str),
}

impl<'a> Span<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Span::Plain(s) | Span::Quoted(s) => s,
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self, Span::Quoted(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside(Bracket),
}

/// Split a sentence into plain and quoted spans.
///
/// The spans concatenate back to the input. An unclosed quotation runs to
/// the end of the text.
pub fn quote_spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut state = ScanState::Outside;
    let mut span_start = 0;

    for (i, c) in text.char_indices() {
        let next = i + c.len_utf8();
        match state {
            ScanState::Outside => {
                if let Some(bracket) = Bracket::opened_by(c) {
                    if i > span_start {
                        spans.push(Span::Plain(&text[span_start..i]));
                    }
                    span_start = i;
                    state = ScanState::Inside(bracket);
                } else if Bracket::closed_by(c).is_some() {
                    // stray closer, copied as is
                    if i > span_start {
                        spans.push(Span::Plain(&text[span_start..i]));
                    }
                    spans.push(Span::Quoted(&text[i..next]));
                    span_start = next;
                }
            }
            ScanState::Inside(bracket) => {
                if c == bracket.closer() {
                    spans.push(Span::Quoted(&text[span_start..next]));
                    span_start = next;
                    state = ScanState::Outside;
                }
            }
        }
    }

    if span_start < text.len() {
        let rest = &text[span_start..];
        spans.push(match state {
            ScanState::Outside => Span::Plain(rest),
            ScanState::Inside(_) => Span::Quoted(rest),
        });
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        assert_eq!(split_sentences("今日は晴れです。"), vec!["今日は晴れです。"]);
        assert_eq!(
            split_sentences("今日は晴れです。明日は雨です。"),
            vec!["今日は晴れです。", "明日は雨です。"]
        );
        assert_eq!(
            split_sentences("元気ですか？はい、元気です。"),
            vec!["元気ですか？", "はい、元気です。"]
        );
        assert_eq!(
            split_sentences("今日は晴れです。元気ですか？はい、元気です！"),
            vec!["今日は晴れです。", "元気ですか？", "はい、元気です！"]
        );
        assert_eq!(split_sentences("今日は晴れです"), vec!["今日は晴れです"]);
        assert_eq!(
            split_sentences("今日は晴れです。  明日は雨です。"),
            vec!["今日は晴れです。", "明日は雨です。"]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(split_sentences("。").len() == 1);
    }

    #[test]
    fn test_split_keeps_commas() {
        let text = "プロセッサーはオプションだが、いくつかは推奨です。";
        assert_eq!(split_sentences(text), vec![text]);
    }

    #[test]
    fn test_is_fully_quoted() {
        assert!(is_fully_quoted("「今日は晴れです」"));
        assert!(is_fully_quoted("『今日は晴れです』"));
        assert!(is_fully_quoted("「」"));
        assert!(is_fully_quoted("  「雨だ」 "));
        assert!(is_fully_quoted("「彼は『雨だ』と言った」"));
        assert!(!is_fully_quoted("今日は晴れです"));
        assert!(!is_fully_quoted("「今日は晴れです"));
        assert!(!is_fully_quoted("今日は晴れです」"));
        assert!(!is_fully_quoted("「今日は晴れです』"));
        assert!(!is_fully_quoted("「雨だ」と「晴れだ」"));
        assert!(!is_fully_quoted(""));
    }

    #[test]
    fn test_contains_quote() {
        assert!(contains_quote("彼は「雨だ」と言った。"));
        assert!(contains_quote("雨だ』"));
        assert!(!contains_quote("雨だ。"));
    }

    #[test]
    fn test_quote_spans() {
        let spans = quote_spans("彼は「明日雨だ」と言った。");
        assert_eq!(
            spans,
            vec![
                Span::Plain("彼は"),
                Span::Quoted("「明日雨だ」"),
                Span::Plain("と言った。"),
            ]
        );
    }

    #[test]
    fn test_quote_spans_other_style_is_content() {
        let spans = quote_spans("「彼は『雨だ」と』言った");
        assert_eq!(
            spans,
            vec![
                Span::Quoted("「彼は『雨だ」"),
                Span::Plain("と"),
                Span::Quoted("』"),
                Span::Plain("言った"),
            ]
        );
    }

    #[test]
    fn test_quote_spans_unclosed() {
        let spans = quote_spans("彼は「雨だ。");
        assert_eq!(spans, vec![Span::Plain("彼は"), Span::Quoted("「雨だ。")]);
        assert!(!spans[0].is_quoted());
        assert!(spans[1].is_quoted());
    }

    #[test]
    fn test_quote_spans_rebuild_input() {
        for text in ["", "雨だ。", "「」", "a「b」c『d』e", "」x「y", "『a「b』c」"] {
            let rebuilt: String = quote_spans(text).iter().map(|s| s.text()).collect();
            assert_eq!(rebuilt, text);
        }
    }
}
