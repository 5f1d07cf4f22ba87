//! Character classification for Japanese text.
//!
//! Every character of an input string is assigned a script or punctuation
//! class. The chunker groups same-class runs, and the analyzer uses those
//! runs to segment words that are missing from the lexicon.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Character categories used in Japanese text processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    /// Hiragana (ぁ-ゖ, ゝ, ゞ)
    Hiragana,
    /// Katakana, including the prolonged sound mark ー and half-width forms
    Katakana,
    /// CJK ideographs and the iteration mark 々
    Kanji,
    /// Latin letters, half-width and full-width
    Latin,
    /// Digits, half-width and full-width
    Digit,
    /// Sentence-final period (。．)
    Period,
    /// Comma (、，)
    Comma,
    /// Opening bracket or quotation mark
    OpenBracket,
    /// Closing bracket or quotation mark
    CloseBracket,
    /// Any other punctuation or symbol
    Punct,
    /// Whitespace
    Transparent,
    /// Anything not covered above
    #[default]
    Other,
}

impl CharCategory {
    /// Whether consecutive characters of this category form one unknown word
    pub fn groups(&self) -> bool {
        matches!(
            self,
            CharCategory::Katakana
                | CharCategory::Kanji
                | CharCategory::Latin
                | CharCategory::Digit
                | CharCategory::Transparent
        )
    }

    /// Whether this category is analyzed as a symbol (記号)
    pub fn is_symbol(&self) -> bool {
        matches!(
            self,
            CharCategory::Period
                | CharCategory::Comma
                | CharCategory::OpenBracket
                | CharCategory::CloseBracket
                | CharCategory::Punct
                | CharCategory::Transparent
                | CharCategory::Other
        )
    }

    /// The IPADIC sub-category (品詞細分類1) used for symbols of this class
    pub fn symbol_detail(&self) -> &'static str {
        match self {
            CharCategory::Period => "句点",
            CharCategory::Comma => "読点",
            CharCategory::OpenBracket => "括弧開",
            CharCategory::CloseBracket => "括弧閉",
            CharCategory::Transparent => "空白",
            _ => "一般",
        }
    }
}

/// Punctuation table: character followed by its category tag
static PUNCT_TABLE: &str = "\
。 PERIOD
． PERIOD
、 COMMA
， COMMA
「 OPEN
『 OPEN
（ OPEN
( OPEN
【 OPEN
〔 OPEN
［ OPEN
[ OPEN
｛ OPEN
{ OPEN
〈 OPEN
《 OPEN
」 CLOSE
』 CLOSE
） CLOSE
) CLOSE
】 CLOSE
〕 CLOSE
］ CLOSE
] CLOSE
｝ CLOSE
} CLOSE
〉 CLOSE
》 CLOSE
";

/// Lazily initialized map from bracket and stop characters to their category
static PUNCT_MAP: Lazy<HashMap<char, CharCategory>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for line in PUNCT_TABLE.lines() {
        let mut parts = line.split(' ');
        let (Some(ch), Some(tag)) = (parts.next(), parts.next()) else {
            continue;
        };
        let Some(c) = ch.chars().next() else {
            continue;
        };
        let category = match tag {
            "PERIOD" => CharCategory::Period,
            "COMMA" => CharCategory::Comma,
            "OPEN" => CharCategory::OpenBracket,
            "CLOSE" => CharCategory::CloseBracket,
            _ => CharCategory::Punct,
        };
        map.insert(c, category);
    }

    map
});

/// Get the category of a character
pub fn get_char_category(c: char) -> CharCategory {
    if c.is_whitespace() || c == '\u{200B}' || c == '\u{FEFF}' {
        return CharCategory::Transparent;
    }

    if let Some(category) = PUNCT_MAP.get(&c) {
        return *category;
    }

    match c {
        '\u{3041}'..='\u{3096}' | '\u{309D}' | '\u{309E}' => CharCategory::Hiragana,
        // ・ is a symbol even though it sits in the katakana block
        '\u{30FB}' => CharCategory::Punct,
        '\u{30A1}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}' => {
            CharCategory::Katakana
        }
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{3005}'
        | '\u{3006}' => CharCategory::Kanji,
        'a'..='z' | 'A'..='Z' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => {
            CharCategory::Latin
        }
        '0'..='9' | '\u{FF10}'..='\u{FF19}' => CharCategory::Digit,
        _ if c.is_ascii_punctuation() => CharCategory::Punct,
        '\u{3000}'..='\u{303F}' | '\u{FF01}'..='\u{FF0F}' | '\u{FF1A}'..='\u{FF20}' => {
            CharCategory::Punct
        }
        _ => CharCategory::Other,
    }
}

/// A string with category information for each character
#[derive(Debug, Clone)]
pub struct JaString {
    /// The original string
    pub string: String,
    /// Category for each character (by char index)
    pub categories: Vec<CharCategory>,
}

impl JaString {
    /// Create a new JaString from a string
    pub fn new(s: &str) -> Self {
        let categories: Vec<CharCategory> = s.chars().map(get_char_category).collect();
        JaString {
            string: s.to_string(),
            categories,
        }
    }

    /// Get the length (number of characters)
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Get the category at a specific char index
    pub fn get_category(&self, idx: usize) -> Option<CharCategory> {
        self.categories.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts() {
        assert_eq!(get_char_category('よ'), CharCategory::Hiragana);
        assert_eq!(get_char_category('ア'), CharCategory::Katakana);
        assert_eq!(get_char_category('ー'), CharCategory::Katakana);
        assert_eq!(get_char_category('ｱ'), CharCategory::Katakana);
        assert_eq!(get_char_category('読'), CharCategory::Kanji);
        assert_eq!(get_char_category('々'), CharCategory::Kanji);
    }

    #[test]
    fn test_latin_and_digits() {
        assert_eq!(get_char_category('a'), CharCategory::Latin);
        assert_eq!(get_char_category('Ｚ'), CharCategory::Latin);
        assert_eq!(get_char_category('7'), CharCategory::Digit);
        assert_eq!(get_char_category('７'), CharCategory::Digit);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(get_char_category('。'), CharCategory::Period);
        assert_eq!(get_char_category('、'), CharCategory::Comma);
        assert_eq!(get_char_category('「'), CharCategory::OpenBracket);
        assert_eq!(get_char_category('』'), CharCategory::CloseBracket);
        assert_eq!(get_char_category('！'), CharCategory::Punct);
        assert_eq!(get_char_category('？'), CharCategory::Punct);
        assert_eq!(get_char_category('・'), CharCategory::Punct);
    }

    #[test]
    fn test_space() {
        assert_eq!(get_char_category(' '), CharCategory::Transparent);
        assert_eq!(get_char_category('\u{3000}'), CharCategory::Transparent);
        assert_eq!(get_char_category('\t'), CharCategory::Transparent);
    }

    #[test]
    fn test_symbol_detail() {
        assert_eq!(CharCategory::Period.symbol_detail(), "句点");
        assert_eq!(CharCategory::OpenBracket.symbol_detail(), "括弧開");
        assert!(CharCategory::Comma.is_symbol());
        assert!(!CharCategory::Kanji.is_symbol());
    }

    #[test]
    fn test_ja_string() {
        let js = JaString::new("本を読む。");
        assert_eq!(js.len(), 5);
        assert_eq!(js.get_category(0), Some(CharCategory::Kanji));
        assert_eq!(js.get_category(1), Some(CharCategory::Hiragana));
        assert_eq!(js.get_category(4), Some(CharCategory::Period));
        assert_eq!(js.get_category(5), None);
    }
}
