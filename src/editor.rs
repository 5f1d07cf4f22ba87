//! Primitive edits over a morpheme sequence.
//!
//! Every operation takes the sequence by reference and returns a fresh
//! `Vec`, so a rule never mutates a sequence someone else still holds.
//! Positions are plain indices into the vector.

use std::ops::Range;

use crate::token::Morpheme;

/// Field changes applied by [`replace_at`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edit {
    pub surface: String,
    pub base_form: Option<String>,
    pub conjugation_form: Option<String>,
}

impl Edit {
    /// Change only the surface
    pub fn surface(surface: impl Into<String>) -> Self {
        Edit {
            surface: surface.into(),
            ..Default::default()
        }
    }

    /// Also record a new conjugation form
    pub fn form(mut self, form: impl Into<String>) -> Self {
        self.conjugation_form = Some(form.into());
        self
    }

    /// Also record a new base form
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base_form = Some(base.into());
        self
    }
}

/// Index of the last morpheme that is not a symbol, if any
pub fn skip_trailing_symbols(seq: &[Morpheme]) -> Option<usize> {
    seq.iter().rposition(|m| !m.is_symbol())
}

/// Copy of `seq` with the morpheme at `idx` changed by `edit`
pub fn replace_at(seq: &[Morpheme], idx: usize, edit: &Edit) -> Vec<Morpheme> {
    let mut out = seq.to_vec();
    if let Some(m) = out.get_mut(idx) {
        m.surface = edit.surface.clone();
        if let Some(base) = &edit.base_form {
            m.base_form = base.clone();
        }
        if let Some(form) = &edit.conjugation_form {
            m.conjugation_form = form.clone();
        }
    }
    out
}

/// Copy of `seq` with `morpheme` substituted at `idx`
pub fn substitute(seq: &[Morpheme], idx: usize, morpheme: Morpheme) -> Vec<Morpheme> {
    splice(seq, idx..idx + 1, vec![morpheme])
}

/// Copy of `seq` without the morphemes in `start..end`
pub fn remove_range(seq: &[Morpheme], start: usize, end: usize) -> Vec<Morpheme> {
    splice(seq, start..end, Vec::new())
}

/// The symbols that follow the last non-symbol morpheme
pub fn trailing_symbols(seq: &[Morpheme]) -> Vec<Morpheme> {
    let from = skip_trailing_symbols(seq).map_or(0, |i| i + 1);
    seq[from..].to_vec()
}

/// Append a saved tail of symbols after `head`
pub fn reinsert_trailing(head: &[Morpheme], tail: &[Morpheme]) -> Vec<Morpheme> {
    let mut out = head.to_vec();
    out.extend_from_slice(tail);
    out
}

/// Copy of `seq` with `morpheme` inserted right after `idx`
pub fn insert_after(seq: &[Morpheme], idx: usize, morpheme: Morpheme) -> Vec<Morpheme> {
    let at = (idx + 1).min(seq.len());
    splice(seq, at..at, vec![morpheme])
}

/// Copy of `seq` with `morpheme` inserted right before `idx`
pub fn insert_before(seq: &[Morpheme], idx: usize, morpheme: Morpheme) -> Vec<Morpheme> {
    let at = idx.min(seq.len());
    splice(seq, at..at, vec![morpheme])
}

/// Copy of `seq` with `range` replaced by `items`.
///
/// The range is clamped to the sequence.
pub fn splice(seq: &[Morpheme], range: Range<usize>, items: Vec<Morpheme>) -> Vec<Morpheme> {
    let end = range.end.min(seq.len());
    let start = range.start.min(end);

    let mut out = Vec::with_capacity(seq.len() - (end - start) + items.len());
    out.extend_from_slice(&seq[..start]);
    out.extend(items);
    out.extend_from_slice(&seq[end..]);
    out
}

/// Concatenate the surfaces of a sequence
pub fn reconstruct(seq: &[Morpheme]) -> String {
    seq.iter().map(|m| m.surface.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(parts: &[(&str, &str)]) -> Vec<Morpheme> {
        parts
            .iter()
            .map(|(surface, pos)| Morpheme::from_features(surface, &[pos]))
            .collect()
    }

    #[test]
    fn test_skip_trailing_symbols() {
        let s = seq(&[("雨", "名詞"), ("だ", "助動詞"), ("。", "記号"), ("」", "記号")]);
        assert_eq!(skip_trailing_symbols(&s), Some(1));

        let only = seq(&[("。", "記号")]);
        assert_eq!(skip_trailing_symbols(&only), None);
        assert_eq!(skip_trailing_symbols(&[]), None);
    }

    #[test]
    fn test_replace_at_leaves_input() {
        let s = seq(&[("雨", "名詞"), ("だ", "助動詞")]);
        let out = replace_at(&s, 1, &Edit::surface("です").base("です").form("基本形"));

        assert_eq!(reconstruct(&out), "雨です");
        assert_eq!(out[1].base_form, "です");
        assert_eq!(out[1].conjugation_form, "基本形");
        assert_eq!(reconstruct(&s), "雨だ");
    }

    #[test]
    fn test_remove_and_reinsert_trailing() {
        let s = seq(&[("雨", "名詞"), ("で", "助詞"), ("ある", "動詞"), ("。", "記号")]);
        let tail = trailing_symbols(&s);
        let head = remove_range(&s, 1, s.len());
        let out = reinsert_trailing(&insert_after(&head, 0, Morpheme::from_features("です", &["助動詞"])), &tail);

        assert_eq!(reconstruct(&out), "雨です。");
    }

    #[test]
    fn test_insertions() {
        let s = seq(&[("読み", "動詞"), ("。", "記号")]);
        let out = insert_after(&s, 0, Morpheme::from_features("ます", &["助動詞"]));
        assert_eq!(reconstruct(&out), "読みます。");

        let out = insert_before(&s, 0, Morpheme::from_features("本を", &["名詞"]));
        assert_eq!(reconstruct(&out), "本を読み。");

        let out = insert_after(&s, 10, Morpheme::from_features("！", &["記号"]));
        assert_eq!(reconstruct(&out), "読み。！");
    }

    #[test]
    fn test_splice_clamps() {
        let s = seq(&[("a", "名詞"), ("b", "名詞"), ("c", "名詞")]);
        assert_eq!(reconstruct(&splice(&s, 1..2, seq(&[("x", "名詞"), ("y", "名詞")]))), "axyc");
        assert_eq!(reconstruct(&splice(&s, 2..9, Vec::new())), "ab");
        assert_eq!(reconstruct(&substitute(&s, 0, Morpheme::from_features("z", &["名詞"]))), "zbc");
    }
}
