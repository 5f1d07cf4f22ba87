//! Morpheme representation for Japanese text.
//!
//! A Morpheme is one analyzed unit of a sentence: its surface text plus the
//! IPADIC grammatical features the rewrite rules match on.

use serde::{Deserialize, Serialize};

/// Placeholder IPADIC uses for an empty feature
pub const UNSET: &str = "*";

/// Coarse part-of-speech (品詞)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pos {
    #[serde(rename = "名詞")]
    Noun,
    #[serde(rename = "動詞")]
    Verb,
    #[serde(rename = "形容詞")]
    Adjective,
    #[serde(rename = "助動詞")]
    Auxiliary,
    #[serde(rename = "助詞")]
    Particle,
    #[serde(rename = "接続詞")]
    Conjunction,
    #[serde(rename = "記号")]
    Symbol,
    #[serde(rename = "副詞")]
    Adverb,
    #[serde(rename = "連体詞")]
    Adnominal,
    #[serde(rename = "接頭詞")]
    Prefix,
    #[serde(rename = "感動詞")]
    Interjection,
    #[serde(rename = "フィラー")]
    Filler,
    #[default]
    #[serde(rename = "その他")]
    Other,
}

impl Pos {
    /// Parse an IPADIC part-of-speech tag; unknown tags map to `Other`
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "名詞" => Pos::Noun,
            "動詞" => Pos::Verb,
            "形容詞" => Pos::Adjective,
            "助動詞" => Pos::Auxiliary,
            "助詞" => Pos::Particle,
            "接続詞" => Pos::Conjunction,
            "記号" => Pos::Symbol,
            "副詞" => Pos::Adverb,
            "連体詞" => Pos::Adnominal,
            "接頭詞" => Pos::Prefix,
            "感動詞" => Pos::Interjection,
            "フィラー" => Pos::Filler,
            _ => Pos::Other,
        }
    }

    /// Convert to the IPADIC tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Pos::Noun => "名詞",
            Pos::Verb => "動詞",
            Pos::Adjective => "形容詞",
            Pos::Auxiliary => "助動詞",
            Pos::Particle => "助詞",
            Pos::Conjunction => "接続詞",
            Pos::Symbol => "記号",
            Pos::Adverb => "副詞",
            Pos::Adnominal => "連体詞",
            Pos::Prefix => "接頭詞",
            Pos::Interjection => "感動詞",
            Pos::Filler => "フィラー",
            Pos::Other => "その他",
        }
    }

    /// Whether this part of speech ends a predicate (verb, adjective, auxiliary)
    pub fn is_predicate(&self) -> bool {
        matches!(self, Pos::Verb | Pos::Adjective | Pos::Auxiliary)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single morpheme from the analysis process
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Morpheme {
    /// The raw text of the morpheme
    pub surface: String,

    /// Coarse part-of-speech
    pub pos: Pos,

    /// Part-of-speech sub-categories (品詞細分類1-3)
    pub pos_details: [String; 3],

    /// Conjugation paradigm (活用型), e.g. 五段・マ行
    pub conjugation_type: String,

    /// Conjugation form (活用形), e.g. 基本形
    pub conjugation_form: String,

    /// Dictionary form (基本形)
    pub base_form: String,
}

impl Morpheme {
    /// Build a morpheme from an IPADIC feature row:
    /// pos, pos1, pos2, pos3, ctype, cform, base.
    ///
    /// Missing trailing fields become `*`.
    pub fn from_features(surface: &str, features: &[&str]) -> Self {
        let field = |i: usize| -> String {
            features
                .get(i)
                .filter(|f| !f.is_empty())
                .map(|f| f.to_string())
                .unwrap_or_else(|| UNSET.to_string())
        };

        Morpheme {
            surface: surface.to_string(),
            pos: Pos::from_tag(features.first().copied().unwrap_or(UNSET)),
            pos_details: [field(1), field(2), field(3)],
            conjugation_type: field(4),
            conjugation_form: field(5),
            base_form: field(6),
        }
    }

    /// Build an auxiliary verb morpheme, as inserted by rewrite rules
    pub fn auxiliary(surface: &str, conjugation_type: &str, conjugation_form: &str, base: &str) -> Self {
        Morpheme::from_features(
            surface,
            &[
                "助動詞",
                UNSET,
                UNSET,
                UNSET,
                conjugation_type,
                conjugation_form,
                base,
            ],
        )
    }

    /// The dictionary form, or the surface when none was recorded
    pub fn base(&self) -> &str {
        if self.base_form.is_empty() || self.base_form == UNSET {
            &self.surface
        } else {
            &self.base_form
        }
    }

    /// First sub-category (品詞細分類1)
    pub fn detail(&self) -> &str {
        &self.pos_details[0]
    }

    /// Whether this is a symbol (記号)
    pub fn is_symbol(&self) -> bool {
        self.pos == Pos::Symbol
    }

    /// Whether this morpheme has the given part of speech and surface
    pub fn is(&self, pos: Pos, surface: &str) -> bool {
        self.pos == pos && self.surface == surface
    }

    /// Whether the conjugation form starts with `prefix`
    pub fn form_starts_with(&self, prefix: &str) -> bool {
        self.conjugation_form.starts_with(prefix)
    }

    /// The full feature row in IPADIC order, as a comma-separated string
    pub fn features(&self) -> String {
        [
            self.pos.as_str(),
            &self.pos_details[0],
            &self.pos_details[1],
            &self.pos_details[2],
            &self.conjugation_type,
            &self.conjugation_form,
            &self.base_form,
        ]
        .join(",")
    }
}

impl std::fmt::Display for Morpheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.surface, self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_features() {
        let m = Morpheme::from_features(
            "読む",
            &["動詞", "自立", "*", "*", "五段・マ行", "基本形", "読む"],
        );
        assert_eq!(m.pos, Pos::Verb);
        assert_eq!(m.detail(), "自立");
        assert_eq!(m.conjugation_type, "五段・マ行");
        assert_eq!(m.conjugation_form, "基本形");
        assert_eq!(m.base(), "読む");
    }

    #[test]
    fn test_missing_features() {
        let m = Morpheme::from_features("aaa", &["名詞"]);
        assert_eq!(m.pos, Pos::Noun);
        assert_eq!(m.pos_details[2], "*");
        assert_eq!(m.base_form, "*");
        assert_eq!(m.base(), "aaa");
    }

    #[test]
    fn test_morpheme_display() {
        let m = Morpheme::auxiliary("です", "特殊・デス", "基本形", "です");
        assert_eq!(format!("{}", m), "です/助動詞");
        assert_eq!(m.features(), "助動詞,*,*,*,特殊・デス,基本形,です");
    }

    #[test]
    fn test_pos_tags() {
        assert_eq!(Pos::from_tag("接続詞"), Pos::Conjunction);
        assert_eq!(Pos::from_tag("未知"), Pos::Other);
        assert_eq!(Pos::Symbol.as_str(), "記号");
        assert!(Pos::Auxiliary.is_predicate());
        assert!(!Pos::Noun.is_predicate());
    }

    #[test]
    fn test_serde_uses_ipadic_tags() {
        let m = Morpheme::from_features("本", &["名詞", "一般"]);
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"pos\":\"名詞\""));
        let back: Morpheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
