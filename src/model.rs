//! Core value types shared by every stage of the pipeline.
//!
//! Kept deliberately small and `Copy`/cheap-`Clone`, the way the teacher
//! keeps `Context`/`Lang` tiny — these are threaded through every call.

use smallvec::SmallVec;

/// A 21-bit Unicode scalar value. Surrogates and values above `0x10FFFF`
/// never appear in a stored `Codepoint` — they are rejected at decode time.
pub type Codepoint = u32;

/// Small inline buffer for the codepoints of one token. Most tokens (a
/// single letter, a short emoji sequence) fit inline; longer runs spill
/// to the heap transparently.
pub type CpBuf = SmallVec<[Codepoint; 8]>;

/// The class a codepoint belongs to outside of an emoji match. Exactly one
/// of these applies to every codepoint; membership is a pure function of
/// the codepoint (plus, for `EmojiComponent`, the fact that it was not
/// consumed by the emoji matcher first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Valid,
    Mapped,
    Ignored,
    Disallowed,
    EmojiComponent,
}

/// One token of a tokenized label.
///
/// Intentionally a two-case tagged enum (spec.md "Design Notes"): a bare
/// base type with subtypes would make the validator's match arms partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(CpBuf),
    Emoji {
        /// Canonical form, FE0F included where the registry requires it.
        fully_qualified: CpBuf,
        /// Lookup key / normalize-mode emission form, FE0F stripped.
        no_fe0f: CpBuf,
    },
}

impl Token {
    /// Codepoints as emitted in `normalize` mode (FE0F stripped from emoji).
    pub fn normalize_cps(&self) -> &[Codepoint] {
        match self {
            Token::Text(cps) => cps,
            Token::Emoji { no_fe0f, .. } => no_fe0f,
        }
    }

    /// Codepoints as emitted in `beautify` mode (FE0F preserved on emoji).
    pub fn beautify_cps(&self) -> &[Codepoint] {
        match self {
            Token::Text(cps) => cps,
            Token::Emoji {
                fully_qualified, ..
            } => fully_qualified,
        }
    }

    pub fn is_emoji(&self) -> bool {
        matches!(self, Token::Emoji { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }
}

/// The label type chosen by the validator, echoed back on `ProcessedName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelType {
    Ascii,
    Emoji,
    Group(&'static str),
    Restricted(&'static str),
}

impl LabelType {
    /// Name of the underlying script group, or `None` for `Ascii`/`Emoji`.
    pub fn group_name(&self) -> Option<&'static str> {
        match self {
            LabelType::Group(name) | LabelType::Restricted(name) => Some(name),
            LabelType::Ascii | LabelType::Emoji => None,
        }
    }
}

/// A validated label: its token stream plus the type the validator chose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub tokens: Vec<Token>,
    pub label_type: LabelType,
}

impl Label {
    /// Concatenation of every token's codepoints in `normalize` form.
    pub fn normalize_cps(&self) -> CpBuf {
        let mut out = CpBuf::new();
        for t in &self.tokens {
            out.extend_from_slice(t.normalize_cps());
        }
        out
    }

    /// Concatenation of every token's codepoints in `beautify` form.
    pub fn beautify_cps(&self) -> CpBuf {
        let mut out = CpBuf::new();
        for t in &self.tokens {
            out.extend_from_slice(t.beautify_cps());
        }
        out
    }

    /// Codepoints contributed by `Text` tokens only, in order — the `chars`
    /// sequence spec.md §4.4 feeds into script-group selection and the
    /// combining-mark/NSM checks.
    pub fn text_cps(&self) -> CpBuf {
        let mut out = CpBuf::new();
        for t in &self.tokens {
            if let Token::Text(cps) = t {
                out.extend_from_slice(cps);
            }
        }
        out
    }
}

/// Convert a sequence of codepoints back into a `String`. Panics only if a
/// surrogate or out-of-range value slipped through, which tokenization
/// never allows to happen.
pub fn cps_to_string(cps: &[Codepoint]) -> String {
    cps.iter()
        .map(|&cp| char::from_u32(cp).expect("codepoint out of range escaped validation"))
        .collect()
}
