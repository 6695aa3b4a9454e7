//! Mapping/ignored/fenced/NSM membership tables.
//!
//! `phf::Map`/`phf::Set` give perfect-hash, zero-init-cost lookups, the same
//! way the teacher's `lang/data.rs` backs `LangEntry` lookups with
//! `phf_map!`. The real ENSIP-15 registry carries tens of thousands of
//! entries; what ships here is a representative slice sized to demonstrate
//! the algorithm, not a transcription of the full registry (see DESIGN.md).

use crate::model::Codepoint;
use phf::{phf_map, phf_set};

/// `Mapped` codepoints: each maps to the sequence of codepoints it is
/// replaced by before NFC. ASCII uppercase → lowercase is the bulk of this
/// table in any real build; a handful of non-ASCII examples round it out.
pub static MAPPED: phf::Map<u32, &'static [u32]> = phf_map! {
    0x41u32 => &[0x61], 0x42u32 => &[0x62], 0x43u32 => &[0x63], 0x44u32 => &[0x64],
    0x45u32 => &[0x65], 0x46u32 => &[0x66], 0x47u32 => &[0x67], 0x48u32 => &[0x68],
    0x49u32 => &[0x69], 0x4Au32 => &[0x6A], 0x4Bu32 => &[0x6B], 0x4Cu32 => &[0x6C],
    0x4Du32 => &[0x6D], 0x4Eu32 => &[0x6E], 0x4Fu32 => &[0x6F], 0x50u32 => &[0x70],
    0x51u32 => &[0x71], 0x52u32 => &[0x72], 0x53u32 => &[0x73], 0x54u32 => &[0x74],
    0x55u32 => &[0x75], 0x56u32 => &[0x76], 0x57u32 => &[0x77], 0x58u32 => &[0x78],
    0x59u32 => &[0x79], 0x5Au32 => &[0x7A],
    // apostrophe -> right single quotation mark
    0x27u32 => &[0x2019],
    // Greek capital Xi -> lowercase xi (handled specially at beautify time)
    0x39Eu32 => &[0x3BE],
    // trade mark sign -> "tm"
    0x2122u32 => &[0x74, 0x6D],
    // black-letter capital H -> "h"
    0x210Cu32 => &[0x68],
    // roman numeral six -> "vi"
    0x2165u32 => &[0x76, 0x69],
};

/// `Ignored` codepoints: dropped during tokenization, never appear in a
/// `Text` token. U+FE0F lives here rather than in `EMOJI_COMPONENT` — see
/// SPEC_FULL.md §5 point 3 for why.
pub static IGNORED: phf::Set<u32> = phf_set! {
    0xFE0Fu32, // variation selector-16 (emoji presentation)
    0xFE0Eu32, // variation selector-15 (text presentation)
    0x200Bu32, // zero width space
    0x00ADu32, // soft hyphen
};

/// `EmojiComponent` codepoints: legal only as part of a matched emoji
/// sequence, `DisallowedCharacter` anywhere else.
pub static EMOJI_COMPONENT: phf::Set<u32> = phf_set! {
    0x200Du32, // zero width joiner
    0x20E3u32, // combining enclosing keycap
    0x1F3FBu32, 0x1F3FCu32, 0x1F3FDu32, 0x1F3FEu32, 0x1F3FFu32, // skin tone modifiers
    0xE0020u32, 0xE0021u32, 0xE007Fu32, // tag characters (representative, not exhaustive)
};

/// Explicitly `Disallowed`, even though a group's primary range would
/// otherwise span it. A script group's membership is carved out as
/// contiguous Unicode blocks (see `GROUPS` below); the real ENSIP-15
/// registry instead enumerates individual codepoints, which is how a
/// handful of characters inside an otherwise-valid block end up explicitly
/// banned — the canonical example being the Turkish dotless/dotted I forms,
/// confusable with plain `i`/`I` and disallowed outright rather than folded.
/// Checked ahead of `is_valid` in the tokenizer's `classify`.
pub static DISALLOWED: phf::Set<u32> = phf_set! {
    0x0130u32, // LATIN CAPITAL LETTER I WITH DOT ABOVE
    0x0131u32, // LATIN SMALL LETTER DOTLESS I
};

/// Codepoints that may not open, close, or sit adjacent to another fenced
/// codepoint in a label (spec.md §4.4 rule c.2).
pub static FENCED: phf::Set<u32> = phf_set! {
    0x2019u32, // right single quotation mark (apostrophe target)
    0x30FBu32, // katakana middle dot
};

/// Non-spacing marks: subject to the run-length/duplicate checks in
/// spec.md §4.4 rule c.6. A representative set of common Latin/Cyrillic/
/// Greek combining marks.
pub static NSM: phf::Set<u32> = phf_set! {
    0x0300u32, 0x0301u32, 0x0302u32, 0x0303u32, 0x0304u32, 0x0308u32, 0x030Au32,
    0x0327u32, 0x0306u32, 0x0307u32, 0x0323u32,
    0x0483u32, 0x0484u32, // Cyrillic combining marks
    0x0313u32, 0x0314u32, 0x0345u32, // Greek combining marks
};

/// Maximum run of consecutive NSMs allowed after a base character.
pub const NSM_MAX: usize = 4;

/// Codepoint ranges shared by every script group: ASCII digits, ASCII
/// lowercase letters (so mixed labels like a CJK word with a Latin affix
/// remain classifiable), the hyphen, the two ASCII label punctuation marks
/// (`_`, `$`) and the fenced/apostrophe marks above that commonly co-occur
/// with any script. Real ENSIP-15 groups cross-list these the same way.
pub static COMMON_RANGES: &[(Codepoint, Codepoint)] = &[
    (0x30, 0x39), // digits
    (0x61, 0x7A), // ascii lowercase
    (0x0300, 0x036F), // combining diacritical marks block
];

pub static COMMON_EXTRA: &[Codepoint] = &[0x2D, 0x24, 0x5F, 0x2019, 0x30FB];

pub fn in_ranges(ranges: &[(Codepoint, Codepoint)], cp: Codepoint) -> bool {
    ranges.iter().any(|&(lo, hi)| cp >= lo && cp <= hi)
}

pub fn is_common(cp: Codepoint) -> bool {
    in_ranges(COMMON_RANGES, cp) || COMMON_EXTRA.contains(&cp)
}
