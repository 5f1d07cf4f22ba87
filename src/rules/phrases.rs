//! Fixed-phrase substitutions.
//!
//! A phrase matches a contiguous run of whole morphemes whose surfaces
//! concatenate to it, so it is found whether the analyzer split it or not.

use crate::token::Morpheme;

/// Casual phrase and its polite counterpart
pub(super) static PHRASES: &[(&str, &str)] = &[
    ("だろう", "でしょう"),
    ("かもしれない", "かもしれません"),
    ("ようだ", "ようです"),
    ("わけだ", "わけです"),
    ("はずだ", "はずです"),
];

/// Length of the run starting at `start` that spells `phrase`, if any
fn match_run(seq: &[Morpheme], start: usize, phrase: &str) -> Option<usize> {
    let mut spelled = String::new();
    for (n, m) in seq[start..].iter().enumerate() {
        spelled.push_str(&m.surface);
        if spelled == phrase {
            return Some(n + 1);
        }
        if !phrase.starts_with(spelled.as_str()) {
            return None;
        }
    }
    None
}

/// Replace every run spelling a `from` phrase with one morpheme spelling
/// its `to` counterpart
fn substitute(seq: &[Morpheme], pairs: impl Iterator<Item = (&'static str, &'static str)> + Clone) -> Vec<Morpheme> {
    let mut out = Vec::with_capacity(seq.len());
    let mut i = 0;

    'scan: while i < seq.len() {
        for (from, to) in pairs.clone() {
            if let Some(len) = match_run(seq, i, from) {
                let mut merged = seq[i + len - 1].clone();
                merged.surface = to.to_string();
                merged.base_form = to.to_string();
                merged.conjugation_form = "基本形".to_string();
                out.push(merged);
                i += len;
                continue 'scan;
            }
        }
        out.push(seq[i].clone());
        i += 1;
    }

    out
}

pub(super) fn to_polite(seq: &[Morpheme]) -> Vec<Morpheme> {
    substitute(seq, PHRASES.iter().copied())
}

pub(super) fn to_casual(seq: &[Morpheme]) -> Vec<Morpheme> {
    substitute(seq, PHRASES.iter().map(|&(casual, polite)| (polite, casual)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::reconstruct;

    fn seq(parts: &[&str]) -> Vec<Morpheme> {
        parts
            .iter()
            .map(|s| Morpheme::from_features(s, &["助動詞"]))
            .collect()
    }

    #[test]
    fn test_split_phrase() {
        let out = to_polite(&seq(&["雨", "だろ", "う", "。"]));
        assert_eq!(reconstruct(&out), "雨でしょう。");
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].surface, "でしょう");
    }

    #[test]
    fn test_fused_phrase() {
        let out = to_casual(&seq(&["雨", "かもしれません"]));
        assert_eq!(reconstruct(&out), "雨かもしれない");
    }

    #[test]
    fn test_partial_run_does_not_match() {
        // ようだ ends inside だから
        let input = seq(&["よう", "だから"]);
        assert_eq!(to_polite(&input), input);
    }

    #[test]
    fn test_every_position() {
        let out = to_casual(&seq(&["はず", "です", "が", "わけ", "です"]));
        assert_eq!(reconstruct(&out), "はずだがわけだ");
    }
}
