//! Trie data structure for lexicon-based analysis.
//!
//! The Trie stores surfaces character by character and allows longest-match
//! lookups during analysis. Each surface can carry several entries (one per
//! reading of the word); entries keep the order they were added in.

use std::collections::{HashMap, HashSet};

use crate::conjugation::{adjective_forms, adjective_type, verb_forms};
use crate::error::{Error, Result};
use crate::token::{Morpheme, Pos, UNSET};

/// The lexicon shipped with the crate
pub static EMBEDDED_LEXICON: &str = include_str!("data/lexicon.tsv");

/// Context condition an entry places on its neighbours
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Guard {
    #[default]
    Any,
    /// First morpheme of the text, or right after a symbol
    ClauseStart,
    /// After a verb, adjective or auxiliary
    AfterPredicate,
    AfterVerb,
    AfterAux,
    /// After a verb, or an adjective in its く form
    AfterNegatable,
    /// After a morpheme with exactly this surface
    After(String),
    /// The text right after the entry starts with none of these
    NotBefore(Vec<String>),
    /// Every guard holds
    All(Vec<Guard>),
}

impl Guard {
    /// Parse the guard column of a lexicon row. Several whitespace-separated
    /// guards must all hold.
    pub fn parse(s: &str) -> Option<Self> {
        let mut guards = s
            .split_whitespace()
            .map(Guard::parse_one)
            .collect::<Option<Vec<_>>>()?;
        match guards.len() {
            0 => Some(Guard::Any),
            1 => guards.pop(),
            _ => Some(Guard::All(guards)),
        }
    }

    fn parse_one(s: &str) -> Option<Self> {
        let guard = match s {
            "*" => Guard::Any,
            "clause-start" => Guard::ClauseStart,
            "after-predicate" => Guard::AfterPredicate,
            "after-verb" => Guard::AfterVerb,
            "after-aux" => Guard::AfterAux,
            "after-negatable" => Guard::AfterNegatable,
            _ => {
                if let Some(list) = s.strip_prefix("not-before:") {
                    let following: Vec<String> = list
                        .split('|')
                        .filter(|f| !f.is_empty())
                        .map(str::to_string)
                        .collect();
                    if following.is_empty() {
                        return None;
                    }
                    Guard::NotBefore(following)
                } else {
                    Guard::After(s.strip_prefix("after:")?.to_string())
                }
            }
        };
        Some(guard)
    }

    /// Whether an entry with this guard may follow `prev` and precede `rest`
    pub fn admits(&self, prev: Option<&Morpheme>, rest: &[char]) -> bool {
        match self {
            Guard::Any => true,
            Guard::ClauseStart => prev.map_or(true, |p| p.is_symbol()),
            Guard::AfterPredicate => prev.is_some_and(|p| p.pos.is_predicate()),
            Guard::AfterVerb => prev.is_some_and(|p| p.pos == Pos::Verb),
            Guard::AfterAux => prev.is_some_and(|p| p.pos == Pos::Auxiliary),
            Guard::AfterNegatable => prev.is_some_and(|p| {
                p.pos == Pos::Verb || (p.pos == Pos::Adjective && p.surface.ends_with('く'))
            }),
            Guard::After(surface) => prev.is_some_and(|p| &p.surface == surface),
            Guard::NotBefore(following) => !following.iter().any(|f| starts_with(rest, f)),
            Guard::All(guards) => guards.iter().all(|g| g.admits(prev, rest)),
        }
    }
}

fn starts_with(chars: &[char], prefix: &str) -> bool {
    let mut rest = chars.iter();
    prefix.chars().all(|c| rest.next() == Some(&c))
}

/// One reading of a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The morpheme produced when this entry is chosen
    pub morpheme: Morpheme,
    pub guard: Guard,
}

/// A node in the Trie
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Children nodes, keyed by character
    pub children: HashMap<char, TrieNode>,
    /// Entries for the surface ending at this node
    pub entries: Vec<Entry>,
}

impl TrieNode {
    /// Create a new empty node
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Check if this node has any children
    pub fn can_walk(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if this node is a valid word ending
    pub fn is_match(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// A Trie for storing and looking up Japanese words
#[derive(Debug, Default, Clone)]
pub struct Trie {
    /// The root node
    root: TrieNode,
    /// Number of distinct surfaces in the trie
    word_count: usize,
}

impl Trie {
    /// Create a new empty Trie
    pub fn new() -> Self {
        Trie::default()
    }

    /// Build a Trie from the embedded lexicon
    pub fn embedded() -> Result<Self> {
        let mut builder = TrieBuilder::new();
        builder.load_tsv(EMBEDDED_LEXICON)?;
        Ok(builder.build())
    }

    /// Get the number of distinct surfaces in the trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Add an entry for a surface
    pub fn add(&mut self, surface: &str, entry: Entry) {
        let mut current = &mut self.root;

        for c in surface.chars() {
            current = current.children.entry(c).or_default();
        }

        if current.entries.is_empty() {
            self.word_count += 1;
        }
        current.entries.push(entry);
    }

    /// Walk the trie by one character, returning the next node if it exists
    pub fn walk<'a>(&'a self, c: char, current: Option<&'a TrieNode>) -> Option<&'a TrieNode> {
        let node = current.unwrap_or(&self.root);
        node.children.get(&c)
    }

    /// Check if a surface exists in the trie
    pub fn has_word(&self, surface: &str) -> bool {
        !self.entries(surface).is_empty()
    }

    /// Get the entries for a surface, in the order they were added
    pub fn entries(&self, surface: &str) -> &[Entry] {
        let mut current = &self.root;

        for c in surface.chars() {
            match current.children.get(&c) {
                Some(node) => current = node,
                None => return &[],
            }
        }

        &current.entries
    }

    /// Lengths (in chars) of every surface that starts at `chars[0]`,
    /// longest first
    pub fn prefix_lengths(&self, chars: &[char]) -> Vec<usize> {
        let mut lengths = Vec::new();
        let mut current: Option<&TrieNode> = None;

        for (i, c) in chars.iter().enumerate() {
            match self.walk(*c, current) {
                Some(node) => {
                    if node.is_match() {
                        lengths.push(i + 1);
                    }
                    if !node.can_walk() {
                        break;
                    }
                    current = Some(node);
                }
                None => break,
            }
        }

        lengths.reverse();
        lengths
    }
}

/// Builder for loading a Trie from TSV lexicons
pub struct TrieBuilder {
    trie: Trie,
}

impl TrieBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        TrieBuilder { trie: Trie::new() }
    }

    /// Load rows from a TSV string.
    ///
    /// Format: `surface pos pos1 pos2 pos3 ctype cform base [guard]`.
    /// Verb and adjective rows whose cform is `*` are expanded into their
    /// inflected forms.
    pub fn load_tsv(&mut self, tsv_content: &str) -> Result<()> {
        for (idx, raw) in tsv_content.lines().enumerate() {
            let line = idx + 1;
            let row = raw.trim_end_matches('\r');
            if row.trim().is_empty() || row.trim_start().starts_with('#') {
                continue;
            }

            let cols: Vec<&str> = row.split('\t').map(str::trim).collect();
            if cols.len() < 8 {
                return Err(Error::Lexicon {
                    line,
                    reason: format!("expected at least 8 columns, found {}", cols.len()),
                });
            }

            let surface = cols[0];
            if surface.is_empty() {
                return Err(Error::Lexicon {
                    line,
                    reason: "empty surface".to_string(),
                });
            }

            let guard_col = cols.get(8).copied().unwrap_or("");
            let guard = Guard::parse(guard_col).ok_or_else(|| Error::Lexicon {
                line,
                reason: format!("unknown guard {:?}", guard_col),
            })?;

            let features = &cols[1..8];
            let inflecting = features[5] == UNSET && matches!(features[0], "動詞" | "形容詞");
            if inflecting {
                self.add_lexeme(surface, features, guard)
                    .map_err(|reason| Error::Lexicon { line, reason })?;
            } else {
                let morpheme = Morpheme::from_features(surface, features);
                self.trie.add(surface, Entry { morpheme, guard });
            }
        }
        Ok(())
    }

    /// Expand a verb or adjective lexeme into its inflected entries
    fn add_lexeme(
        &mut self,
        surface: &str,
        features: &[&str],
        guard: Guard,
    ) -> std::result::Result<(), String> {
        let base = if features[6] == UNSET { surface } else { features[6] };

        let (conjugation_type, forms) = if features[0] == "動詞" {
            let forms = verb_forms(base, features[4]);
            if forms.is_empty() {
                return Err(format!(
                    "cannot inflect {} with conjugation type {:?}",
                    base, features[4]
                ));
            }
            (features[4], forms)
        } else {
            let ctype = if features[4] == UNSET {
                adjective_type(base)
            } else {
                features[4]
            };
            (ctype, adjective_forms(base))
        };

        let mut seen = HashSet::new();
        for (form, inflected) in forms {
            if !seen.insert(inflected.clone()) {
                continue;
            }
            let morpheme = Morpheme::from_features(
                &inflected,
                &[
                    features[0],
                    features[1],
                    features[2],
                    features[3],
                    conjugation_type,
                    form,
                    base,
                ],
            );
            self.trie.add(
                &inflected,
                Entry {
                    morpheme,
                    guard: guard.clone(),
                },
            );
        }
        Ok(())
    }

    /// Build and return the Trie
    pub fn build(self) -> Trie {
        self.trie
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}
