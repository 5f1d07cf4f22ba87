//! Chunking of Japanese text into character-class runs.
//!
//! Kanji, katakana, Latin and digit runs become one chunk each. Hiragana,
//! punctuation and unclassified characters are emitted one character per
//! chunk, while whitespace runs stay together. The analyzer falls back to
//! these chunks for any stretch of text the lexicon does not cover.

use crate::char_categories::{CharCategory, JaString};

/// A chunk of text with its category and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The category shared by every character of the chunk
    pub category: CharCategory,
    /// Starting byte offset in the original string
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// Starting char index in the original string
    pub char_start: usize,
    /// Length in chars
    pub char_len: usize,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(
        category: CharCategory,
        start: usize,
        len: usize,
        char_start: usize,
        char_len: usize,
    ) -> Self {
        Chunk {
            category,
            start,
            len,
            char_start,
            char_len,
        }
    }

    /// Exclusive char index where this chunk ends
    pub fn char_end(&self) -> usize {
        self.char_start + self.char_len
    }

    /// Slice the chunk's text out of the string it was made from
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.start + self.len]
    }
}

/// Chunker for Japanese text
pub struct Chunker {
    /// The analyzed string
    js: JaString,
}

impl Chunker {
    /// Create a new chunker for the given string
    pub fn new(text: &str) -> Self {
        Chunker {
            js: JaString::new(text),
        }
    }

    /// Split the text into character-class runs
    pub fn make_chunks(&self) -> Vec<Chunk> {
        if self.js.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = self.js.string.chars().collect();
        let mut byte_positions: Vec<usize> = Vec::with_capacity(chars.len() + 1);

        let mut pos = 0;
        for c in &chars {
            byte_positions.push(pos);
            pos += c.len_utf8();
        }
        byte_positions.push(pos);

        let mut chunks = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let cat = self.js.categories[i];
            let next_i = if cat.groups() {
                self.read_run(cat, i)
            } else {
                i + 1
            };

            let start = byte_positions[i];
            let end = byte_positions[next_i];
            chunks.push(Chunk::new(cat, start, end - start, i, next_i - i));
            i = next_i;
        }

        chunks
    }

    /// Advance past every character sharing `cat`, starting at `start_i`
    fn read_run(&self, cat: CharCategory, start_i: usize) -> usize {
        let mut i = start_i;
        while i < self.js.len() && self.js.categories[i] == cat {
            i += 1;
        }
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_runs() {
        let text = "日本語を話す";
        let chunks = Chunker::new(text).make_chunks();

        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].text(text), "日本語");
        assert_eq!(chunks[0].category, CharCategory::Kanji);
        assert_eq!(chunks[1].text(text), "を");
        assert_eq!(chunks[2].text(text), "話");
        assert_eq!(chunks[3].text(text), "す");
    }

    #[test]
    fn test_hiragana_is_single() {
        let chunks = Chunker::new("ねこ").make_chunks();
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.char_len == 1));
    }

    #[test]
    fn test_mixed_content() {
        let text = "コーヒー 2杯、OK。";
        let chunks = Chunker::new(text).make_chunks();
        let parts: Vec<&str> = chunks.iter().map(|c| c.text(text)).collect();

        assert_eq!(parts, vec!["コーヒー", " ", "2", "杯", "、", "OK", "。"]);
        assert_eq!(chunks[1].category, CharCategory::Transparent);
        assert_eq!(chunks[6].category, CharCategory::Period);
    }

    #[test]
    fn test_punctuation_not_grouped() {
        let chunks = Chunker::new("！？").make_chunks();
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_chunk_positions() {
        let text = "本を";
        let chunks = Chunker::new(text).make_chunks();

        assert_eq!(chunks[1].start, "本".len());
        assert_eq!(chunks[1].char_start, 1);
        assert_eq!(chunks[1].char_end(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(Chunker::new("").make_chunks().is_empty());
    }
}
