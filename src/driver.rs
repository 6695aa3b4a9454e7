//! Driver: spec.md §4.6. Splits a name on U+002E, runs tokenize+validate
//! per label, and exposes the four public operations of spec.md §6
//! (`normalize`, `beautify`, `process`, `tokenize`) plus the internal
//! `Stop`-flattened stream spec.md §9's open question resolves into
//! (SPEC_FULL.md §3).

use crate::error::{ErrorKind, NormError};
use crate::model::{cps_to_string, CpBuf, Label, LabelType, Token};
use crate::tables::{self, EngineTables};
use crate::tokenizer;
use crate::validate;

const DOT: char = '\u{002E}';
/// Greek small letter xi / capital xi (spec.md §4.6 beautify rule).
const XI_LOWER: u32 = 0x3BE;
const XI_UPPER: u32 = 0x39E;

/// A label's token stream before validation — the diagnostic `tokenize()`
/// result (spec.md §6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTokens {
    pub tokens: Vec<Token>,
}

/// Flat per-name token stream with an explicit `Stop` marker at each label
/// boundary. Not exposed on the public `tokenize()` signature (which
/// returns one `LabelTokens` per label, per spec.md §6) but kept as the
/// internal shape diagnostic tooling can build on, per spec.md §9's open
/// question about a synthetic `Stop` token and SPEC_FULL.md §3's resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamToken {
    Token(Token),
    Stop,
}

fn decode_label(label: &str) -> CpBuf {
    label.chars().map(|c| c as u32).collect()
}

/// Tokenize every label of `name`, interleaving a `Stop` marker between
/// labels. Does not validate.
fn tokenize_stream(name: &str) -> Result<Vec<StreamToken>, NormError> {
    let tables = tables::tables();
    let mut out = Vec::new();
    for (idx, label_str) in name.split(DOT).enumerate() {
        if idx > 0 {
            out.push(StreamToken::Stop);
        }
        let cps = decode_label(label_str);
        let tokens =
            tokenizer::tokenize(&cps, &tables).map_err(|kind| NormError::new(idx, kind))?;
        out.extend(tokens.into_iter().map(StreamToken::Token));
    }
    Ok(out)
}

/// Diagnostic token stream per label, without running the validator
/// (spec.md §6's `tokenize` operation).
pub fn tokenize(name: &str) -> Result<Vec<LabelTokens>, NormError> {
    if name.is_empty() {
        return Err(NormError::new(0, ErrorKind::EmptyName));
    }
    let stream = tokenize_stream(name)?;
    let mut labels = Vec::new();
    let mut current = Vec::new();
    for item in stream {
        match item {
            StreamToken::Stop => labels.push(LabelTokens {
                tokens: std::mem::take(&mut current),
            }),
            StreamToken::Token(tok) => current.push(tok),
        }
    }
    labels.push(LabelTokens { tokens: current });
    Ok(labels)
}

/// A fully tokenized and validated name: `normalize()`/`beautify()` re-emit
/// without re-running tokenization or validation (spec.md §6's `process`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedName {
    labels: Vec<Label>,
}

impl ProcessedName {
    /// Label types in label order, for callers that want the classification
    /// without re-deriving the normalized/beautified string.
    pub fn label_types(&self) -> Vec<LabelType> {
        self.labels.iter().map(|l| l.label_type).collect()
    }

    /// Canonical normalized form: emoji tokens emit their FE0F-stripped form.
    pub fn normalize(&self) -> String {
        join_labels(&self.labels, Label::normalize_cps)
    }

    /// Display form: emoji tokens keep their fully-qualified FE0F, and every
    /// non-Greek label substitutes U+03BE ξ with U+039E Ξ (spec.md §4.6).
    pub fn beautify(&self) -> String {
        join_labels(&self.labels, beautify_label_cps)
    }
}

fn join_labels(labels: &[Label], emit: impl Fn(&Label) -> CpBuf) -> String {
    labels
        .iter()
        .map(|l| cps_to_string(&emit(l)))
        .collect::<Vec<_>>()
        .join(".")
}

fn beautify_label_cps(label: &Label) -> CpBuf {
    let mut cps = label.beautify_cps();
    // Literal name check per spec.md §9 open question #2 / SPEC_FULL.md §5.2:
    // the rule is "not literally named Greek", not "does not contain ξ in
    // its valid set".
    let is_greek = matches!(label.label_type.group_name(), Some("Greek"));
    if !is_greek {
        for cp in cps.iter_mut() {
            if *cp == XI_LOWER {
                *cp = XI_UPPER;
            }
        }
    }
    cps
}

/// Tokenize, validate and classify every label of `name` (spec.md §6's
/// `process`). The whole name fails the instant one label fails; no
/// best-effort partial output is ever produced (spec.md §7).
pub fn process(name: &str) -> Result<ProcessedName, NormError> {
    if name.is_empty() {
        return Err(NormError::new(0, ErrorKind::EmptyName));
    }
    let tables: EngineTables = tables::tables();
    let mut labels = Vec::with_capacity(name.matches(DOT).count() + 1);
    for (idx, label_str) in name.split(DOT).enumerate() {
        let cps = decode_label(label_str);
        let tokens =
            tokenizer::tokenize(&cps, &tables).map_err(|kind| NormError::new(idx, kind))?;
        let label_type =
            validate::validate_label(&tokens).map_err(|kind| NormError::new(idx, kind))?;
        labels.push(Label { tokens, label_type });
    }
    Ok(ProcessedName { labels })
}

/// Normalize `name` to its canonical form, or fail with a structured error
/// pointing at the offending label and codepoint (spec.md §6).
pub fn normalize(name: &str) -> Result<String, NormError> {
    Ok(process(name)?.normalize())
}

/// Produce the display ("beautified") form of `name` (spec.md §4.6).
pub fn beautify(name: &str) -> Result<String, NormError> {
    Ok(process(name)?.beautify())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_underscore_dollar_and_uppercase() {
        assert_eq!(normalize("_$A").unwrap(), "_$a");
    }

    #[test]
    fn normalizes_trademark_sign() {
        assert_eq!(normalize("a\u{2122}\u{FE0F}").unwrap(), "atm");
    }

    #[test]
    fn normalize_and_beautify_roundtrip_xi_keycap() {
        let input = "-\u{039E}1\u{FE0F}\u{20E3}";
        assert_eq!(normalize(input).unwrap(), "-\u{3BE}1\u{20E3}");
        assert_eq!(
            beautify("-\u{3BE}1\u{20E3}").unwrap(),
            "-\u{039E}1\u{FE0F}\u{20E3}"
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(normalize("").unwrap_err().kind, ErrorKind::EmptyName);
    }

    #[test]
    fn label_locality_holds_across_dot() {
        let a = normalize("a").unwrap();
        let b = normalize("abc123").unwrap();
        let joined = normalize("a.abc123").unwrap();
        assert_eq!(joined, format!("{a}.{b}"));
    }

    #[test]
    fn failing_label_reports_its_index() {
        let err = normalize("abc123.abc__").unwrap_err();
        assert_eq!(err.label_index, 1);
        assert_eq!(err.kind, ErrorKind::UnderscoreMisplaced);
    }

    #[test]
    fn tokenize_is_diagnostic_only_and_does_not_validate() {
        // "abc__" fails validation (UnderscoreMisplaced) but tokenizes fine.
        let labels = tokenize("abc__").unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].tokens.len(), 1);
        assert!(process("abc__").is_err());
    }

    #[test]
    fn tokenize_splits_multi_label_names() {
        let labels = tokenize("a.bb.ccc").unwrap();
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn process_exposes_label_types_without_retokenizing() {
        let processed = process("abc123.\u{13080}\u{1F438}").unwrap();
        let types = processed.label_types();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0], LabelType::Ascii);
        assert_eq!(types[1], LabelType::Restricted("Egyp"));
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("a\u{2122}\u{FE0F}.\u{13080}\u{1F438}").unwrap();
        let twice = normalize(&once).unwrap();
        assert_eq!(once, twice);
    }
}
