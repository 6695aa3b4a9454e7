//! Whole-script confusable check: spec.md §4.5, implemented as the
//! reference's two-phase `get_groups_candidates_and_shared_cps`/
//! `check_whole` (see SPEC_FULL.md §3).

use crate::error::ErrorKind;
use crate::tables::groups::{group_by_name, ScriptGroup};
use crate::tables::whole::{lookup, WholeValue};
use std::collections::HashSet;

/// Check whether `text_cps`, having already been assigned to `group`,
/// could equally well be reconstructed entirely within some other single
/// group — the whole-script confusable attack spec.md §4.5 defends
/// against.
pub fn check_wholes(_group: &'static ScriptGroup, text_cps: &[u32]) -> Result<(), ErrorKind> {
    let unique: Vec<u32> = {
        let mut seen = HashSet::new();
        text_cps
            .iter()
            .copied()
            .filter(|cp| seen.insert(*cp))
            .collect()
    };

    let mut candidates: Option<HashSet<&'static str>> = None;
    let mut shared: Vec<u32> = Vec::new();

    for cp in &unique {
        match lookup(*cp) {
            Some(WholeValue::Unique) => return Ok(()),
            Some(WholeValue::Confusable(groups)) => {
                let this_set: HashSet<&'static str> = groups.iter().copied().collect();
                candidates = Some(match candidates {
                    None => this_set,
                    Some(prev) => prev.intersection(&this_set).copied().collect(),
                });
            }
            None => shared.push(*cp),
        }
    }

    let candidates = match candidates {
        Some(c) if !c.is_empty() => c,
        _ => return Ok(()),
    };

    for name in &candidates {
        if let Some(candidate_group) = group_by_name(name) {
            if shared.iter().all(|cp| candidate_group.contains(*cp)) {
                return Err(ErrorKind::WholeScriptConfusable {
                    group: candidate_group.name,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::groups::group_by_name;

    #[test]
    fn digit_zero_and_cyrillic_kha_is_confusable_with_latin() {
        let cyrillic = group_by_name("Cyrillic").unwrap();
        let text_cps = [0x30u32, 0x445]; // '0', х
        let err = check_wholes(cyrillic, &text_cps).unwrap_err();
        assert_eq!(err, ErrorKind::WholeScriptConfusable { group: "Latin" });
    }

    #[test]
    fn plain_cyrillic_word_is_not_confusable() {
        let cyrillic = group_by_name("Cyrillic").unwrap();
        let text_cps = [0x442u32, 0x44D]; // т, ӕ — unregistered, so "shared"
        assert!(check_wholes(cyrillic, &text_cps).is_ok());
    }

    #[test]
    fn empty_text_is_never_confusable() {
        let latin = group_by_name("Latin").unwrap();
        assert!(matches!(lookup(0x445), Some(WholeValue::Confusable(_))));
        assert!(check_wholes(latin, &[]).is_ok());
    }

    #[test]
    fn unique_codepoint_short_circuits_to_accept() {
        // Even paired with a flagged-confusable character, a `Unique`
        // member accepts the label outright (spec.md §4.5 step 3).
        let han = group_by_name("Han").unwrap();
        let text_cps = [0x4E2Du32, 0x445];
        assert!(check_wholes(han, &text_cps).is_ok());
    }

    #[test]
    fn pure_digit_label_is_never_confusable() {
        // '0' alone is common to every group; it must never be flagged on
        // its own just because some other group's lookalike of it exists.
        let latin = group_by_name("Latin").unwrap();
        let text_cps = [0x30u32];
        assert!(check_wholes(latin, &text_cps).is_ok());
    }
}
