//! Script groups: spec.md §3's `ScriptGroup` record plus the static list
//! used for label-type resolution (spec.md §4.4 step c.5).

use super::classes::{in_ranges, is_common};
use crate::model::Codepoint;

pub struct ScriptGroup {
    pub name: &'static str,
    pub restricted: bool,
    pub primary: &'static [(Codepoint, Codepoint)],
    pub primary_extra: &'static [Codepoint],
    pub secondary: &'static [(Codepoint, Codepoint)],
    pub secondary_extra: &'static [Codepoint],
    /// Combining-mark sequences explicitly allowlisted for this group,
    /// bypassing the NSM run-length/duplicate algorithm. Empty for every
    /// group shipped today (SPEC_FULL.md §5 point 1) but exposed as a real
    /// mechanism rather than hard-coded away.
    pub cm_whitelist: &'static [&'static [Codepoint]],
    pub check_nsm: bool,
}

impl ScriptGroup {
    pub fn contains(&self, cp: Codepoint) -> bool {
        in_ranges(self.primary, cp)
            || self.primary_extra.contains(&cp)
            || in_ranges(self.secondary, cp)
            || self.secondary_extra.contains(&cp)
            || is_common(cp)
    }
}

// Order matters: ties in group selection resolve to the first group in this
// list whose membership survives the filter (spec.md §4.4 step c.5). Latin
// is listed first and carries ξ as a secondary member so that a label whose
// only script-specific character is ξ alongside purely common punctuation
// (hyphen, digits) resolves to Latin rather than Greek — the case the
// beautify ξ→Ξ substitution rule (SPEC_FULL.md §5 point 2) exists for.
pub static GROUPS: &[ScriptGroup] = &[
    ScriptGroup {
        name: "Latin",
        restricted: false,
        primary: &[(0x61, 0x7A), (0x00C0, 0x02AF), (0x1E00, 0x1EFF)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[0x3BE], // ξ: see module doc above
        cm_whitelist: &[],
        check_nsm: true,
    },
    ScriptGroup {
        name: "Greek",
        restricted: false,
        primary: &[(0x0370, 0x03FF)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: true,
    },
    ScriptGroup {
        name: "Cyrillic",
        restricted: false,
        primary: &[(0x0400, 0x04FF)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: true,
    },
    ScriptGroup {
        name: "Han",
        restricted: false,
        primary: &[(0x4E00, 0x9FFF), (0x3400, 0x4DBF)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: false,
    },
    ScriptGroup {
        name: "Hiragana",
        restricted: false,
        primary: &[(0x3040, 0x309F)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: false,
    },
    ScriptGroup {
        name: "Katakana",
        restricted: false,
        primary: &[(0x30A0, 0x30FF)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: false,
    },
    ScriptGroup {
        name: "Hangul",
        restricted: false,
        primary: &[(0xAC00, 0xD7A3), (0x1100, 0x11FF)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: false,
    },
    ScriptGroup {
        name: "Arabic",
        restricted: false,
        primary: &[(0x0600, 0x06FF)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: true,
    },
    ScriptGroup {
        name: "Hebrew",
        restricted: false,
        primary: &[(0x0590, 0x05FF)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: true,
    },
    ScriptGroup {
        name: "Devanagari",
        restricted: false,
        primary: &[(0x0900, 0x097F)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: true,
    },
    ScriptGroup {
        name: "Thai",
        restricted: false,
        primary: &[(0x0E00, 0x0E7F)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: true,
    },
    ScriptGroup {
        name: "Armenian",
        restricted: false,
        primary: &[(0x0530, 0x058F)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: true,
    },
    ScriptGroup {
        name: "Egyp",
        restricted: true,
        primary: &[(0x13000, 0x1342F)],
        primary_extra: &[],
        secondary: &[],
        secondary_extra: &[],
        cm_whitelist: &[],
        check_nsm: false,
    },
];

pub fn group_by_name(name: &str) -> Option<&'static ScriptGroup> {
    GROUPS.iter().find(|g| g.name == name)
}

/// `Valid` class per spec.md §3: a codepoint is valid if some group's
/// primary/secondary/common membership contains it.
pub fn is_valid(cp: Codepoint) -> bool {
    GROUPS.iter().any(|g| g.contains(cp))
}
