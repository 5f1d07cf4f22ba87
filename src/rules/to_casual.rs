//! Polite (敬体) to casual (常体) rules.

use super::{adjective_nai, before, da, daro, dat, last_content, nai, nakat, phrases, ta};
use crate::conjugation::{stem_for, TargetForm};
use crate::editor::{remove_range, replace_at, splice, substitute, Edit};
use crate::token::{Morpheme, Pos};

/// 言い → 言っ + た, 読み → 読ん + だ
fn past_pair(verb: &Morpheme) -> Vec<Morpheme> {
    let past = stem_for(verb, TargetForm::Past);
    let (stem, aux) = match past.strip_suffix('だ') {
        Some(stem) => (stem.to_string(), "だ"),
        None => (past.strip_suffix('た').unwrap_or(&past).to_string(), "た"),
    };

    let mut v = verb.clone();
    v.surface = stem;
    v.conjugation_form = "連用タ接続".to_string();
    vec![v, ta(aux)]
}

/// The irrealis form of a verb, or nothing for ある (whose negative is ない)
fn irrealis(verb: &Morpheme) -> Option<Morpheme> {
    if verb.base() == "ある" {
        return None;
    }
    let mut v = verb.clone();
    v.surface = stem_for(verb, TargetForm::NegativeIrrealis);
    v.conjugation_form = "未然形".to_string();
    Some(v)
}

/// The irrealis verb followed by `ends`, or `adjective` alone when the verb
/// is ある
fn negated(verb: &Morpheme, ends: Vec<Morpheme>, adjective: Vec<Morpheme>) -> Vec<Morpheme> {
    match irrealis(verb) {
        Some(v) => std::iter::once(v).chain(ends).collect(),
        None => adjective,
    }
}

/// 読みます → 読む, 読みました → 読んだ, 読みません → 読まない,
/// 読みませんでした → 読まなかった
pub(super) fn verb(seq: &[Morpheme]) -> Vec<Morpheme> {
    let Some((last, m)) = last_content(seq) else {
        return seq.to_vec();
    };
    let is_verb_at = |n: usize| before(seq, last, n).is_some_and(|v| v.pos == Pos::Verb);
    let surface_at = |n: usize| before(seq, last, n).map(|p| p.surface.as_str());

    // ませ + ん + でし + た
    if m.surface == "た"
        && surface_at(1) == Some("でし")
        && surface_at(2) == Some("ん")
        && surface_at(3) == Some("ませ")
        && is_verb_at(4)
    {
        let v = &seq[last - 4];
        let ends = negated(
            v,
            vec![nakat(), ta("た")],
            vec![adjective_nai("なかっ", "連用タ接続"), ta("た")],
        );
        return splice(seq, last - 4..last + 1, ends);
    }

    // まし + た
    if m.surface == "た" && surface_at(1) == Some("まし") && is_verb_at(2) {
        return splice(seq, last - 2..last + 1, past_pair(&seq[last - 2]));
    }

    // ました as one morpheme
    if m.surface == "ました" && is_verb_at(1) {
        return splice(seq, last - 1..last + 1, past_pair(&seq[last - 1]));
    }

    // ません as one morpheme
    if m.surface == "ません" && is_verb_at(1) {
        let ends = negated(&seq[last - 1], vec![nai()], vec![adjective_nai("ない", "基本形")]);
        return splice(seq, last - 1..last + 1, ends);
    }

    if m.is(Pos::Auxiliary, "ます") && m.form_starts_with("基本形") && is_verb_at(1) {
        let v = &seq[last - 1];
        let out = replace_at(seq, last - 1, &Edit::surface(v.base()).form("基本形"));
        return remove_range(&out, last, last + 1);
    }

    seq.to_vec()
}

/// Fixed phrases back to casual, then の/ん + です → の/ん + だ
pub(super) fn auxiliary(seq: &[Morpheme]) -> Vec<Morpheme> {
    let mut out = phrases::to_casual(seq);
    for i in 1..out.len() {
        if out[i].is(Pos::Auxiliary, "です") && matches!(out[i - 1].surface.as_str(), "の" | "ん") {
            out = substitute(&out, i, da());
        }
    }
    out
}

/// 美しいです → 美しい, 楽しかったです → 楽しかった, 美しくありません → 美しくない
pub(super) fn adjective(seq: &[Morpheme]) -> Vec<Morpheme> {
    let Some((last, m)) = last_content(seq) else {
        return seq.to_vec();
    };

    if m.is(Pos::Auxiliary, "です") {
        let after_adjective = before(seq, last, 1).is_some_and(|p| p.pos == Pos::Adjective);
        let after_adjective_past = before(seq, last, 1).is_some_and(|p| p.surface == "た")
            && before(seq, last, 2)
                .is_some_and(|p| p.pos == Pos::Adjective && p.conjugation_form == "連用タ接続");
        if after_adjective || after_adjective_past {
            return remove_range(seq, last, last + 1);
        }
    }

    if let Some(stem) = m.surface.strip_suffix("くありません") {
        return replace_at(seq, last, &Edit::surface(format!("{}くない", stem)));
    }

    seq.to_vec()
}

/// です → だ, でした → だった, でしょう → だろう, ではありません → ではない
pub(super) fn noun(seq: &[Morpheme]) -> Vec<Morpheme> {
    let Some((last, m)) = last_content(seq) else {
        return seq.to_vec();
    };

    if m.is(Pos::Auxiliary, "です") {
        return substitute(seq, last, da());
    }

    let fused = match m.surface.as_str() {
        "でした" => Some("だった"),
        "でしょう" => Some("だろう"),
        "ではありません" => Some("ではない"),
        _ => None,
    };
    if let Some(casual) = fused {
        return replace_at(seq, last, &Edit::surface(casual));
    }

    match (before(seq, last, 1).map(|p| p.surface.as_str()), m.surface.as_str()) {
        (Some("でし"), "た") => substitute(seq, last - 1, dat()),
        (Some("でしょ"), "う") => substitute(seq, last - 1, daro()),
        _ => seq.to_vec(),
    }
}

/// ですから → だから, ですが → だが, and the connective が after a
/// polite predicate
pub(super) fn conjunction(seq: &[Morpheme]) -> Vec<Morpheme> {
    let mut out = seq.to_vec();
    let mut i = 0;

    while i < out.len() {
        let m = &out[i];

        if m.pos == Pos::Conjunction {
            let casual = match m.surface.as_str() {
                "ですから" => Some("だから"),
                "ですが" => Some("だが"),
                _ => None,
            };
            if let Some(casual) = casual {
                out = replace_at(&out, i, &Edit::surface(casual).base(casual));
            }
        } else if m.is(Pos::Particle, "が") && m.detail() == "接続助詞" {
            let prev = before(&out, i, 1);
            let prev2 = before(&out, i, 2);

            if prev.is_some_and(|p| p.is(Pos::Auxiliary, "ます"))
                && prev2.is_some_and(|v| v.pos == Pos::Verb && v.base() == "いる")
            {
                out = replace_at(&out, i - 2, &Edit::surface("いる").form("基本形"));
                out = remove_range(&out, i - 1, i);
                i -= 1;
            } else if prev.is_some_and(|p| p.is(Pos::Auxiliary, "です")) {
                if prev2.is_some_and(|a| a.pos == Pos::Adjective) {
                    out = remove_range(&out, i - 1, i);
                    i -= 1;
                } else {
                    out = substitute(&out, i - 1, da());
                }
            }
        } else if m.is(Pos::Particle, "ですが") {
            if before(&out, i, 1).is_some_and(|a| a.pos == Pos::Adjective) {
                out = replace_at(&out, i, &Edit::surface("が"));
            } else {
                out = replace_at(&out, i, &Edit::surface("が"));
                out = splice(&out, i..i, vec![da()]);
                i += 1;
            }
        }

        i += 1;
    }

    out
}

/// 読みません → 読まない, ではありません → ではない
pub(super) fn negative(seq: &[Morpheme]) -> Vec<Morpheme> {
    let Some((last, m)) = last_content(seq) else {
        return seq.to_vec();
    };

    let split_masen = m.surface == "ん"
        && before(seq, last, 1).is_some_and(|p| p.surface == "ませ")
        && before(seq, last, 2).is_some_and(|v| v.pos == Pos::Verb);
    if !split_masen {
        return seq.to_vec();
    }

    let ends = negated(&seq[last - 2], vec![nai()], vec![adjective_nai("ない", "基本形")]);
    splice(seq, last - 2..last + 1, ends)
}
