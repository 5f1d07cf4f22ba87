//! Trace events reported while converting.
//!
//! Rules and the converter describe what they did through an [`Observer`].
//! Observers only watch; nothing they do feeds back into conversion.

use crate::editor::reconstruct;
use crate::token::Morpheme;

/// Something that happened during conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A span was analyzed into morphemes
    Analyzed {
        text: String,
        morphemes: Vec<Morpheme>,
    },
    /// A rewrite rule changed the sequence
    RuleApplied {
        rule: &'static str,
        before: String,
        after: String,
    },
    /// A sentence was left alone because it is entirely quoted
    QuotedSkipped { sentence: String },
    /// A sentence finished converting
    SentenceConverted { original: String, converted: String },
}

impl TraceEvent {
    pub(crate) fn rule(rule: &'static str, before: &[Morpheme], after: &[Morpheme]) -> Self {
        TraceEvent::RuleApplied {
            rule,
            before: reconstruct(before),
            after: reconstruct(after),
        }
    }
}

impl std::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceEvent::Analyzed { text, morphemes } => {
                write!(f, "analyzed {:?}:", text)?;
                for m in morphemes {
                    write!(f, " {}", m)?;
                }
                Ok(())
            }
            TraceEvent::RuleApplied { rule, before, after } => {
                write!(f, "{}: {:?} -> {:?}", rule, before, after)
            }
            TraceEvent::QuotedSkipped { sentence } => write!(f, "quoted, skipped: {:?}", sentence),
            TraceEvent::SentenceConverted {
                original,
                converted,
            } => write!(f, "converted {:?} -> {:?}", original, converted),
        }
    }
}

/// Receives trace events
pub trait Observer {
    fn event(&self, event: &TraceEvent);
}

/// Forwards events to the `log` facade at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn event(&self, event: &TraceEvent) {
        log::debug!("{}", event);
    }
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn event(&self, _event: &TraceEvent) {}
}
