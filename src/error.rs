//! Error types. `thiserror` layering mirrors the teacher's
//! `NormyError`/`StageError` split: a thin crate-boundary error carrying
//! positional context, wrapping a plain `#[error("...")]` enum of kinds.

use crate::model::Codepoint;
use thiserror::Error;

/// The reason a label failed validation, with enough context to point at
/// the offending codepoint(s) without re-running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("disallowed character U+{cp:04X} at position {position}")]
    DisallowedCharacter { cp: Codepoint, position: usize },

    #[error("label is empty")]
    EmptyLabel,

    #[error("name is empty")]
    EmptyName,

    #[error("underscore may only appear at the start of a label")]
    UnderscoreMisplaced,

    #[error("hyphen not allowed at positions 3 and 4")]
    HyphenAtPositions34,

    #[error("label starts with a combining mark U+{cp:04X}")]
    LeadingCombiningMark { cp: Codepoint },

    #[error("combining mark U+{cp:04X} follows an emoji")]
    CombiningMarkAfterEmoji { cp: Codepoint },

    #[error("fenced character U+{cp:04X} at the start of the label")]
    FencedLeading { cp: Codepoint },

    #[error("fenced character U+{cp:04X} at the end of the label")]
    FencedTrailing { cp: Codepoint },

    #[error("adjacent fenced characters U+{cp1:04X} and U+{cp2:04X}")]
    FencedAdjacent { cp1: Codepoint, cp2: Codepoint },

    #[error("character U+{cp:04X} mixes scripts: {prior_groups:?} narrowed to none by {groups_containing_cp:?}")]
    IllegalMixture {
        cp: Codepoint,
        /// The script groups still in contention before `cp` was applied.
        prior_groups: Vec<&'static str>,
        /// The groups whose primary/secondary set actually contains `cp`.
        groups_containing_cp: Vec<&'static str>,
    },

    #[error("combining mark U+{cp:04X} is not allowed in group {group}")]
    DisallowedCombiningMark { cp: Codepoint, group: &'static str },

    #[error("duplicate non-spacing mark U+{cp:04X}")]
    DuplicateNsm { cp: Codepoint },

    #[error("more than the maximum number of consecutive non-spacing marks ({count})")]
    ExcessiveNsm { count: usize },

    #[error("whole-script confusable with group {group}")]
    WholeScriptConfusable { group: &'static str },
}

/// Top-level error returned by every public entry point. Wraps an
/// [`ErrorKind`] with the 0-based index of the offending label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("label {label_index}: {kind}")]
pub struct NormError {
    pub label_index: usize,
    pub kind: ErrorKind,
}

impl NormError {
    pub fn new(label_index: usize, kind: ErrorKind) -> Self {
        NormError { label_index, kind }
    }
}
