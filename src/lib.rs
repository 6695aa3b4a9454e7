//! ENSIP-15 name normalization core.
//!
//! Converts an arbitrary Unicode string representing an Ethereum Name
//! Service name into a canonical, security-validated form suitable for
//! hashing, or rejects it with a precise diagnostic. This crate is the
//! per-label pipeline only: emoji-aware tokenization, character-class
//! mapping, NFC under a restricted alphabet, script-group selection,
//! combining-mark/fenced-character rules and whole-script confusable
//! detection. It does not hash, decode punycode, or enforce DNS length
//! limits — callers compose those around [`normalize`]/[`process`].
//!
//! ```
//! assert_eq!(ensnorm::normalize("_$A").unwrap(), "_$a");
//! assert!(ensnorm::normalize("abc__").is_err());
//! ```
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod driver;
pub mod emoji;
pub mod error;
pub mod model;
pub mod nfc;
pub mod tables;
pub mod tokenizer;
pub mod validate;
pub mod wholes;

pub use driver::{beautify, normalize, process, tokenize, LabelTokens, ProcessedName};
pub use error::{ErrorKind, NormError};
pub use model::{Codepoint, Label, LabelType, Token};

#[cfg(test)]
mod tests {
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
