//! Predicate rewrite rules.
//!
//! A rule takes a morpheme sequence and returns a new one. Each direction
//! has an ordered rule list; later rules see the output of earlier ones, so
//! the order is part of the behavior.

mod phrases;
mod to_casual;
mod to_polite;

use crate::converter::Direction;
use crate::editor::skip_trailing_symbols;
use crate::token::{Morpheme, Pos};
use crate::trace::{Observer, TraceEvent};

/// A named rewrite over a morpheme sequence
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&[Morpheme]) -> Vec<Morpheme>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Casual to polite, in application order
pub static TO_POLITE: &[Rule] = &[
    Rule { name: "verb", apply: to_polite::verb },
    Rule { name: "adjective", apply: to_polite::adjective },
    Rule { name: "noun", apply: to_polite::noun },
    Rule { name: "auxiliary", apply: to_polite::auxiliary },
    Rule { name: "conjunction", apply: to_polite::conjunction },
];

/// Polite to casual, in application order
pub static TO_CASUAL: &[Rule] = &[
    Rule { name: "verb", apply: to_casual::verb },
    Rule { name: "auxiliary", apply: to_casual::auxiliary },
    Rule { name: "adjective", apply: to_casual::adjective },
    Rule { name: "noun", apply: to_casual::noun },
    Rule { name: "conjunction", apply: to_casual::conjunction },
    Rule { name: "negative", apply: to_casual::negative },
];

/// The rule list for a direction
pub fn rules_for(direction: Direction) -> &'static [Rule] {
    match direction {
        Direction::CasualToPolite => TO_POLITE,
        Direction::PoliteToCasual => TO_CASUAL,
    }
}

/// Run every rule of `direction` over `seq`, reporting each change
pub fn run(direction: Direction, seq: &[Morpheme], observer: &dyn Observer) -> Vec<Morpheme> {
    let mut current = seq.to_vec();
    for rule in rules_for(direction) {
        let next = (rule.apply)(&current);
        if next != current {
            observer.event(&TraceEvent::rule(rule.name, &current, &next));
        }
        current = next;
    }
    current
}

/// The last non-symbol morpheme and its index
fn last_content(seq: &[Morpheme]) -> Option<(usize, &Morpheme)> {
    skip_trailing_symbols(seq).map(|i| (i, &seq[i]))
}

/// The morpheme `n` places before `idx`
fn before(seq: &[Morpheme], idx: usize, n: usize) -> Option<&Morpheme> {
    idx.checked_sub(n).and_then(|i| seq.get(i))
}

/// 基本形, 終止形 or 連体形
fn is_plain_form(m: &Morpheme) -> bool {
    ["基本形", "終止形", "連体形"]
        .iter()
        .any(|form| m.form_starts_with(form))
}

/// The copula だ in any of its forms (but not the past auxiliary after 撥音便)
fn is_copula(m: &Morpheme) -> bool {
    m.pos == Pos::Auxiliary && m.base() == "だ" && m.conjugation_type != "特殊・タ"
}

fn is_copula_da(m: &Morpheme) -> bool {
    m.surface == "だ" && is_copula(m)
}

/// The plain past auxiliary た/だ
fn is_past_aux(m: &Morpheme) -> bool {
    m.pos == Pos::Auxiliary
        && m.conjugation_type == "特殊・タ"
        && m.form_starts_with("基本形")
        && matches!(m.surface.as_str(), "た" | "だ")
}

/// Whether the predicate ending at `idx` is already polite
fn ends_politely(seq: &[Morpheme], idx: usize) -> bool {
    let Some(m) = seq.get(idx) else {
        return false;
    };
    if ["です", "ます", "ません", "でした", "ました"]
        .iter()
        .any(|ending| m.surface.ends_with(ending))
    {
        return true;
    }
    m.surface == "ん" && before(seq, idx, 1).is_some_and(|p| p.surface == "ませ")
}

fn masu() -> Morpheme {
    Morpheme::auxiliary("ます", "特殊・マス", "基本形", "ます")
}

fn mashi() -> Morpheme {
    Morpheme::auxiliary("まし", "特殊・マス", "連用形", "ます")
}

fn masen() -> Morpheme {
    Morpheme::auxiliary("ません", "特殊・マス", "基本形", "ます")
}

fn desu() -> Morpheme {
    Morpheme::auxiliary("です", "特殊・デス", "基本形", "です")
}

fn deshi() -> Morpheme {
    Morpheme::auxiliary("でし", "特殊・デス", "連用形", "です")
}

fn ta(surface: &str) -> Morpheme {
    Morpheme::auxiliary(surface, "特殊・タ", "基本形", surface)
}

fn da() -> Morpheme {
    Morpheme::auxiliary("だ", "特殊・ダ", "基本形", "だ")
}

fn dat() -> Morpheme {
    Morpheme::auxiliary("だっ", "特殊・ダ", "連用タ接続", "だ")
}

fn daro() -> Morpheme {
    Morpheme::auxiliary("だろ", "特殊・ダ", "未然形", "だ")
}

fn nai() -> Morpheme {
    Morpheme::auxiliary("ない", "特殊・ナイ", "基本形", "ない")
}

fn nakat() -> Morpheme {
    Morpheme::auxiliary("なかっ", "特殊・ナイ", "連用タ接続", "ない")
}

/// ありません, kept as one morpheme
fn arimasen() -> Morpheme {
    Morpheme::from_features(
        "ありません",
        &["助動詞", "*", "*", "*", "五段・ラ行アル", "未然形", "ある"],
    )
}

/// The adjective ない that stands in for a negated ある
fn adjective_nai(surface: &str, form: &str) -> Morpheme {
    Morpheme::from_features(
        surface,
        &["形容詞", "自立", "*", "*", "形容詞・アウオ段", form, "ない"],
    )
}
