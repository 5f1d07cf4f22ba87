//! Casual (常体) to polite (敬体) rules.

use super::{
    arimasen, before, deshi, desu, ends_politely, is_copula, is_copula_da, is_past_aux,
    is_plain_form, last_content, masen, mashi, masu, phrases, ta,
};
use crate::conjugation::{stem_for, TargetForm};
use crate::editor::{
    insert_after, reinsert_trailing, remove_range, replace_at, splice, substitute,
    trailing_symbols, Edit,
};
use crate::token::{Morpheme, Pos};

/// Continuative form of a verb, as a field edit
fn continuative(verb: &Morpheme) -> Edit {
    Edit::surface(stem_for(verb, TargetForm::Continuative)).form("連用形")
}

/// 読む → 読み + ます
pub(super) fn verb(seq: &[Morpheme]) -> Vec<Morpheme> {
    let Some((last, m)) = last_content(seq) else {
        return seq.to_vec();
    };
    if m.pos != Pos::Verb || !is_plain_form(m) {
        return seq.to_vec();
    }

    let out = replace_at(seq, last, &continuative(m));
    insert_after(&out, last, masu())
}

/// 美しい → 美しいです, 美しかった → 美しかったです, ではない → ではありません
pub(super) fn adjective(seq: &[Morpheme]) -> Vec<Morpheme> {
    let Some((last, m)) = last_content(seq) else {
        return seq.to_vec();
    };

    if m.pos == Pos::Adjective && m.detail() == "自立" && is_plain_form(m) {
        // ない standing for a negated ある
        if m.surface == "ない" && before(seq, last, 1).is_some_and(|p| p.surface == "は") {
            return substitute(seq, last, arimasen());
        }
        return replace_at(seq, last, &Edit::surface(format!("{}です", m.surface)));
    }

    let adjective_past = is_past_aux(m)
        && before(seq, last, 1)
            .is_some_and(|p| p.pos == Pos::Adjective && p.conjugation_form == "連用タ接続");
    if adjective_past {
        return insert_after(seq, last, desu());
    }

    seq.to_vec()
}

/// だ → です, である → です, だった → でした
pub(super) fn noun(seq: &[Morpheme]) -> Vec<Morpheme> {
    let Some((last, m)) = last_content(seq) else {
        return seq.to_vec();
    };

    if m.surface == "ある" && last > 0 && seq[last - 1].surface == "で" {
        let tail = trailing_symbols(seq);
        let head = remove_range(seq, last - 1, seq.len());
        let mut out = head;
        out.push(desu());
        return reinsert_trailing(&out, &tail);
    }

    if is_copula_da(m) && is_plain_form(m) {
        return substitute(seq, last, desu());
    }

    let copula_past = m.surface == "た"
        && before(seq, last, 1).is_some_and(|p| p.surface == "だっ" && is_copula(p));
    if copula_past {
        return substitute(seq, last - 1, deshi());
    }

    seq.to_vec()
}

/// のだ, past and negative endings, then fixed phrases
pub(super) fn auxiliary(seq: &[Morpheme]) -> Vec<Morpheme> {
    let out = explanatory(seq);
    let out = past(&out);
    let out = negative(&out);
    phrases::to_polite(&out)
}

/// の/ん + だ → の/ん + です, anywhere in the sequence
fn explanatory(seq: &[Morpheme]) -> Vec<Morpheme> {
    let mut out = seq.to_vec();
    for i in 1..out.len() {
        if is_copula_da(&out[i]) && matches!(out[i - 1].surface.as_str(), "の" | "ん") {
            out = substitute(&out, i, desu());
        }
    }
    out
}

/// 見た → 見ました, 読まなかった → 読みませんでした,
/// 美しくなかった → 美しくありませんでした
fn past(seq: &[Morpheme]) -> Vec<Morpheme> {
    let Some((last, m)) = last_content(seq) else {
        return seq.to_vec();
    };
    if !is_past_aux(m) {
        return seq.to_vec();
    }
    let Some(prev) = before(seq, last, 1) else {
        return seq.to_vec();
    };

    if prev.pos == Pos::Verb && prev.form_starts_with("連用") {
        let out = replace_at(seq, last - 1, &continuative(prev));
        return splice(&out, last..last + 1, vec![mashi(), ta("た")]);
    }

    if prev.is(Pos::Auxiliary, "なかっ") {
        match before(seq, last, 2) {
            Some(v) if v.pos == Pos::Verb => {
                let out = replace_at(seq, last - 2, &continuative(v));
                return splice(&out, last - 1..last + 1, vec![masen(), deshi(), ta("た")]);
            }
            Some(a) if a.pos == Pos::Adjective && a.surface.ends_with('く') => {
                return splice(seq, last - 1..last + 1, vec![arimasen(), deshi(), ta("た")]);
            }
            _ => {}
        }
    }

    seq.to_vec()
}

/// 読まない → 読みません, 美しくない → 美しくありません
fn negative(seq: &[Morpheme]) -> Vec<Morpheme> {
    let Some((last, m)) = last_content(seq) else {
        return seq.to_vec();
    };

    if m.pos == Pos::Auxiliary && m.surface == "ない" {
        match before(seq, last, 1) {
            Some(v) if v.pos == Pos::Verb => {
                let out = replace_at(seq, last - 1, &continuative(v));
                return substitute(&out, last, masen());
            }
            Some(a) if a.pos == Pos::Adjective && a.surface.ends_with('く') => {
                return substitute(seq, last, arimasen());
            }
            _ => {}
        }
    }

    // a single morpheme such as 美しくない
    if m.surface.len() > "くない".len() {
        if let Some(stem) = m.surface.strip_suffix("くない") {
            let edit = Edit::surface(format!("{}くありません", stem));
            return replace_at(seq, last, &edit);
        }
    }

    seq.to_vec()
}

/// だから → ですから, だが → ですが, connective が → ですが
pub(super) fn conjunction(seq: &[Morpheme]) -> Vec<Morpheme> {
    let mut out = seq.to_vec();
    let mut i = 0;

    while i < out.len() {
        let m = &out[i];

        if m.pos == Pos::Conjunction {
            let polite = match m.surface.as_str() {
                "だから" => Some("ですから"),
                "だが" => Some("ですが"),
                _ => None,
            };
            if let Some(polite) = polite {
                out = replace_at(&out, i, &Edit::surface(polite).base(polite));
            }
        } else if m.is(Pos::Particle, "が") && m.detail() == "接続助詞" {
            match before(&out, i, 1) {
                Some(p) if is_copula_da(p) => {
                    out = remove_range(&out, i - 1, i);
                    i -= 1;
                    out = replace_at(&out, i, &Edit::surface("ですが"));
                }
                Some(p) if p.is(Pos::Verb, "いる") => {
                    out = replace_at(&out, i - 1, &Edit::surface("い").form("連用形"));
                    out = insert_after(&out, i - 1, masu());
                    i += 1;
                }
                Some(_) if ends_politely(&out, i - 1) => {}
                _ => out = replace_at(&out, i, &Edit::surface("ですが")),
            }
        }

        i += 1;
    }

    out
}
