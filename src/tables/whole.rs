//! Whole-script confusable data, per spec.md §4.5 and the reference
//! `whole_map`/`check_whole` shape documented in SPEC_FULL.md §3.

use crate::model::Codepoint;
use phf::phf_map;

/// For a confusable codepoint, the set of *other* groups that contain a
/// visually confusable member for the same identity. A group never lists
/// itself — the convention the real ENS whole-confusable table follows,
/// and the reason `check_whole` can never report a group as confusable
/// with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WholeValue {
    /// Confusable with members of the named groups.
    Confusable(&'static [&'static str]),
    /// Visually ambiguous in the abstract but globally unique in context —
    /// short-circuits the whole check to "accept" per spec.md §4.5 step 3.
    Unique,
}

// Note: ASCII digits/hyphen are deliberately absent here even though the
// real Unicode confusables table does list look-alikes for some of them
// (e.g. digit zero vs. letter "O"). Those codepoints are members of every
// group's `COMMON_RANGES` (see tables/classes.rs), so their own confusable
// extent already spans every group; per spec.md §4.5 step 2 that makes the
// post-exclusion intersection empty and the whole check short-circuits to
// "accept" regardless. Listing them here would only add dead entries that
// `check_wholes` can never act on, so they are left out rather than
// modeled as a no-op. They still participate as ordinary (non-confused)
// codepoints in `check_wholes`'s `shared` buffer.
pub static WHOLE_MAP: phf::Map<u32, WholeValue> = phf_map! {
    // Cyrillic kha, confusable with Latin x/X
    0x445u32 => WholeValue::Confusable(&["Latin"]),
    // CJK ideograph "middle": visually distinctive enough in context that
    // the real registry marks it (and characters like it) globally unique
    // rather than tying it to a confusable identity at all.
    0x4E2Du32 => WholeValue::Unique,
};

pub fn lookup(cp: Codepoint) -> Option<WholeValue> {
    WHOLE_MAP.get(&cp).copied()
}
