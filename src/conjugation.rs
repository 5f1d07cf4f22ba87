//! Verb and adjective conjugation tables.
//!
//! Every verb paradigm (活用型) maps to the dictionary ending it strips and
//! the endings that produce the continuative (連用形), past (タ形) and
//! irrealis (未然形) forms. Past endings carry the euphonic change (音便)
//! of their row, so 書く gives 書いた and 読む gives 読んだ.

use crate::token::Morpheme;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The form a stem is requested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetForm {
    /// 連用形, the stem used before ます
    Continuative,
    /// The full past form, ending in た or だ
    Past,
    /// 未然形, the stem used before ない
    NegativeIrrealis,
}

/// Endings for one conjugation paradigm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConjugationRow {
    /// Dictionary-form ending stripped from the base form
    pub ending: &'static str,
    pub continuative: &'static str,
    pub past: &'static str,
    pub irrealis: &'static str,
}

impl ConjugationRow {
    fn ending_for(&self, target: TargetForm) -> &'static str {
        match target {
            TargetForm::Continuative => self.continuative,
            TargetForm::Past => self.past,
            TargetForm::NegativeIrrealis => self.irrealis,
        }
    }
}

/// paradigm, dictionary ending, continuative, past, irrealis
static TABLE: &[(&str, &str, &str, &str, &str)] = &[
    ("五段・カ行イ音便", "く", "き", "いた", "か"),
    ("五段・カ行促音便", "く", "き", "った", "か"),
    ("五段・カ行促音便ユク", "く", "き", "った", "か"),
    ("五段・ガ行", "ぐ", "ぎ", "いだ", "が"),
    ("五段・サ行", "す", "し", "した", "さ"),
    ("五段・タ行", "つ", "ち", "った", "た"),
    ("五段・ナ行", "ぬ", "に", "んだ", "な"),
    ("五段・バ行", "ぶ", "び", "んだ", "ば"),
    ("五段・マ行", "む", "み", "んだ", "ま"),
    ("五段・ラ行", "る", "り", "った", "ら"),
    ("五段・ラ行特殊", "る", "り", "った", "ら"),
    ("五段・ラ行アル", "る", "り", "った", "ら"),
    ("五段・ワ行促音便", "う", "い", "った", "わ"),
    ("五段・ワ行ウ音便", "う", "い", "うた", "わ"),
    ("一段", "る", "", "た", ""),
    ("一段・クレル", "る", "", "た", ""),
    ("カ変・来ル", "来る", "来", "来た", "来"),
    ("カ変・クル", "くる", "き", "きた", "こ"),
    ("カ変", "来る", "来", "来た", "来"),
    ("サ変・スル", "する", "し", "した", "し"),
    ("サ変・−スル", "する", "し", "した", "さ"),
    ("サ変・−ズル", "ずる", "じ", "じた", "じ"),
    ("サ変", "する", "し", "した", "し"),
];

/// Lazily built lookup from paradigm tag to its row
static CONJUGATIONS: Lazy<HashMap<&'static str, ConjugationRow>> = Lazy::new(|| {
    TABLE
        .iter()
        .map(|&(class, ending, continuative, past, irrealis)| {
            (
                class,
                ConjugationRow {
                    ending,
                    continuative,
                    past,
                    irrealis,
                },
            )
        })
        .collect()
});

/// Look up the row for a conjugation paradigm
pub fn row_for(conjugation_type: &str) -> Option<&'static ConjugationRow> {
    CONJUGATIONS.get(conjugation_type)
}

/// Compute the requested form of a verb morpheme.
///
/// Unknown paradigms, or a base form that does not carry the paradigm's
/// ending, fall back to best effort: the surface when the morpheme is
/// already in the requested form, otherwise the base with a trailing る
/// stripped (plus た for the past).
pub fn stem_for(morpheme: &Morpheme, target: TargetForm) -> String {
    let base = morpheme.base();

    if let Some(row) = row_for(&morpheme.conjugation_type) {
        if let Some(stem) = base.strip_suffix(row.ending) {
            return format!("{}{}", stem, row.ending_for(target));
        }
    }

    log::debug!(
        "no conjugation row for {} ({}), using fallback",
        morpheme.surface,
        morpheme.conjugation_type
    );

    let already = match target {
        TargetForm::Continuative => morpheme.conjugation_form == "連用形",
        TargetForm::NegativeIrrealis => morpheme.form_starts_with("未然"),
        TargetForm::Past => false,
    };
    if already {
        return morpheme.surface.clone();
    }

    let stem = base.strip_suffix('る').unwrap_or(base);
    match target {
        TargetForm::Past => format!("{}た", stem),
        _ => stem.to_string(),
    }
}

/// The 連用タ接続 stem: the past form without its final た or だ
pub fn ta_connective(morpheme: &Morpheme) -> String {
    let past = stem_for(morpheme, TargetForm::Past);
    match past.strip_suffix('た').or_else(|| past.strip_suffix('だ')) {
        Some(stem) => stem.to_string(),
        None => past,
    }
}

/// Inflected surfaces of a verb lexeme, paired with their form tag.
///
/// Returns an empty list when the paradigm is unknown.
pub fn verb_forms(base: &str, conjugation_type: &str) -> Vec<(&'static str, String)> {
    let Some(row) = row_for(conjugation_type) else {
        return Vec::new();
    };
    let Some(stem) = base.strip_suffix(row.ending) else {
        return Vec::new();
    };

    let continuative = format!("{}{}", stem, row.continuative);
    let past = format!("{}{}", stem, row.past);
    let ta_stem = past
        .strip_suffix('た')
        .or_else(|| past.strip_suffix('だ'))
        .unwrap_or(&past)
        .to_string();

    let mut forms = vec![("基本形", base.to_string())];
    if !continuative.is_empty() {
        forms.push(("連用形", continuative.clone()));
    }
    if ta_stem != continuative && !ta_stem.is_empty() {
        forms.push(("連用タ接続", ta_stem));
    }
    let irrealis = format!("{}{}", stem, row.irrealis);
    if !irrealis.is_empty() {
        forms.push(("未然形", irrealis));
    }
    forms
}

/// Inflected surfaces of an i-adjective lexeme, paired with their form tag
pub fn adjective_forms(base: &str) -> Vec<(&'static str, String)> {
    let Some(stem) = base.strip_suffix('い') else {
        return vec![("基本形", base.to_string())];
    };
    vec![
        ("基本形", base.to_string()),
        ("連用テ接続", format!("{}く", stem)),
        ("連用タ接続", format!("{}かっ", stem)),
        ("仮定形", format!("{}けれ", stem)),
    ]
}

/// IPADIC adjective paradigm for a base form: イ段 when the kana before
/// い is in the i-row, アウオ段 otherwise
pub fn adjective_type(base: &str) -> &'static str {
    const I_ROW: &str = "いきしちにひみりぎじぢびぴ";
    let before = base.strip_suffix('い').and_then(|s| s.chars().last());
    match before {
        Some(c) if I_ROW.contains(c) => "形容詞・イ段",
        _ => "形容詞・アウオ段",
    }
}
