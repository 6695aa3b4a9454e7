//! Label validator: spec.md §4.4. Rule order is load-bearing — it mirrors
//! the reference `validate_label`'s ordering (non-empty, emoji-only,
//! ASCII, else the full Unicode path) so that the *first* applicable
//! failure is always the one reported, not an arbitrary one found later.

use crate::error::ErrorKind;
use crate::model::{LabelType, Token};
use crate::nfc;
use crate::tables::classes::{is_common, FENCED, NSM, NSM_MAX};
use crate::tables::groups::{ScriptGroup, GROUPS};
use crate::wholes::check_wholes;

const UNDERSCORE: u32 = 0x5F;
const HYPHEN: u32 = 0x2D;

pub fn validate_label(tokens: &[Token]) -> Result<LabelType, ErrorKind> {
    if tokens.is_empty() {
        return Err(ErrorKind::EmptyLabel);
    }

    if tokens.iter().all(Token::is_emoji) {
        return Ok(LabelType::Emoji);
    }

    if let [Token::Text(cps)] = tokens {
        if cps.iter().all(|&cp| cp < 0x80) {
            check_underscore(cps)?;
            check_ascii_hyphen(cps)?;
            return Ok(LabelType::Ascii);
        }
    }

    validate_unicode_label(tokens)
}

fn check_underscore(cps: &[u32]) -> Result<(), ErrorKind> {
    let mut seen_non_underscore = false;
    for &cp in cps {
        if cp == UNDERSCORE {
            if seen_non_underscore {
                return Err(ErrorKind::UnderscoreMisplaced);
            }
        } else {
            seen_non_underscore = true;
        }
    }
    Ok(())
}

fn check_ascii_hyphen(cps: &[u32]) -> Result<(), ErrorKind> {
    if cps.len() >= 4 && cps[2] == HYPHEN && cps[3] == HYPHEN {
        return Err(ErrorKind::HyphenAtPositions34);
    }
    Ok(())
}

fn validate_unicode_label(tokens: &[Token]) -> Result<LabelType, ErrorKind> {
    let all_cps: Vec<u32> = tokens.iter().flat_map(|t| t.normalize_cps()).copied().collect();

    check_underscore(&all_cps)?;
    check_fenced(&all_cps)?;
    check_leading_combining_mark(tokens)?;

    let text_cps: Vec<u32> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Text(cps) => Some(cps.iter().copied()),
            Token::Emoji { .. } => None,
        })
        .flatten()
        .collect();

    let group = determine_group(&text_cps)?;
    check_group_marks(&text_cps, group)?;
    check_wholes(group, &text_cps)?;

    if group.restricted {
        Ok(LabelType::Restricted(group.name))
    } else {
        Ok(LabelType::Group(group.name))
    }
}

fn check_fenced(cps: &[u32]) -> Result<(), ErrorKind> {
    if let Some(&first) = cps.first() {
        if FENCED.contains(&first) {
            return Err(ErrorKind::FencedLeading { cp: first });
        }
    }
    if let Some(&last) = cps.last() {
        if FENCED.contains(&last) {
            return Err(ErrorKind::FencedTrailing { cp: last });
        }
    }
    for w in cps.windows(2) {
        if FENCED.contains(&w[0]) && FENCED.contains(&w[1]) {
            return Err(ErrorKind::FencedAdjacent {
                cp1: w[0],
                cp2: w[1],
            });
        }
    }
    Ok(())
}

/// spec.md §4.4 step c.4: no `Text` token may open on a combining mark —
/// this is what catches a mark that would otherwise visually attach to a
/// preceding emoji or to nothing at all. The embedded `NSM` set (non-spacing
/// marks, Mn/Me) stands in for the full combining-mark category (Mn/Mc/Me):
/// every shipped combining mark in this representative table is in fact an
/// NSM, so the two sets coincide here even though a full registry would
/// also carry spacing combining marks (Mc).
fn check_leading_combining_mark(tokens: &[Token]) -> Result<(), ErrorKind> {
    let mut prior_was_emoji = false;
    for token in tokens {
        match token {
            Token::Emoji { .. } => prior_was_emoji = true,
            Token::Text(cps) => {
                if let Some(&first) = cps.first() {
                    if NSM.contains(&first) {
                        if prior_was_emoji {
                            return Err(ErrorKind::CombiningMarkAfterEmoji { cp: first });
                        }
                        return Err(ErrorKind::LeadingCombiningMark { cp: first });
                    }
                }
                prior_was_emoji = false;
            }
        }
    }
    Ok(())
}

/// spec.md §4.4 step c.5: iteratively filter the group list to those whose
/// (primary ∪ secondary) membership contains each successive unique
/// codepoint of the label's text, in order of first appearance. The first
/// surviving group is chosen; an empty remaining set is `IllegalMixture`.
fn determine_group(text_cps: &[u32]) -> Result<&'static ScriptGroup, ErrorKind> {
    let mut remaining: Vec<&'static ScriptGroup> = GROUPS.iter().collect();
    let mut seen = std::collections::HashSet::new();

    for &cp in text_cps {
        if is_common(cp) {
            continue;
        }
        if !seen.insert(cp) {
            continue;
        }
        let before = remaining.clone();
        remaining.retain(|g| g.contains(cp));
        if remaining.is_empty() {
            let prior_groups: Vec<&'static str> = before.iter().map(|g| g.name).collect();
            let groups_containing_cp: Vec<&'static str> = GROUPS
                .iter()
                .filter(|g| g.contains(cp))
                .map(|g| g.name)
                .collect();
            return Err(ErrorKind::IllegalMixture {
                cp,
                prior_groups,
                groups_containing_cp,
            });
        }
    }

    // `remaining` can only be empty here if `text_cps` was empty (no
    // codepoint ever ran the filter above), which the empty-label check in
    // `validate_label` already rules out before this function is reached.
    Ok(remaining[0])
}

/// spec.md §4.4 step c.6: combining mark legality. A group's
/// `cm_whitelist` entries bypass this algorithm entirely when they match;
/// otherwise every combining mark must belong to a group whose
/// `check_nsm` flag is set, and NSM runs are capped at `NSM_MAX` with no
/// duplicate mark within a run.
///
/// Scanned over the NFD of `text_cps`, not the already-NFC'd text the
/// tokenizer produced: a precomposed letter like `é` hides the base+mark
/// split this rule needs to see, so the run/duplicate check must first
/// decompose back down (spec.md §4.4 step 6: "Compute NFD of `chars`").
fn check_group_marks(text_cps: &[u32], group: &'static ScriptGroup) -> Result<(), ErrorKind> {
    if group_cm_whitelist_matches(text_cps, group) {
        return Ok(());
    }

    let decomposed = nfc::nfd(text_cps);
    let mut run: Vec<u32> = Vec::new();
    for &cp in decomposed.iter() {
        if NSM.contains(&cp) {
            if !group.check_nsm {
                return Err(ErrorKind::DisallowedCombiningMark {
                    cp,
                    group: group.name,
                });
            }
            if run.contains(&cp) {
                return Err(ErrorKind::DuplicateNsm { cp });
            }
            run.push(cp);
            if run.len() > NSM_MAX {
                return Err(ErrorKind::ExcessiveNsm { count: run.len() });
            }
        } else {
            run.clear();
        }
    }
    Ok(())
}

fn group_cm_whitelist_matches(text_cps: &[u32], group: &'static ScriptGroup) -> bool {
    group
        .cm_whitelist
        .iter()
        .any(|seq| seq.len() <= text_cps.len() && text_cps.windows(seq.len()).any(|w| w == *seq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CpBuf;

    fn text(s: &str) -> Token {
        Token::Text(s.chars().map(|c| c as u32).collect::<CpBuf>())
    }

    #[test]
    fn empty_label_rejected() {
        assert_eq!(validate_label(&[]).unwrap_err(), ErrorKind::EmptyLabel);
    }

    #[test]
    fn all_ascii_label_is_ascii_type() {
        let toks = vec![text("abc123")];
        assert_eq!(validate_label(&toks).unwrap(), LabelType::Ascii);
    }

    #[test]
    fn underscore_only_at_start_is_allowed() {
        let toks = vec![text("__abc")];
        assert_eq!(validate_label(&toks).unwrap(), LabelType::Ascii);
    }

    #[test]
    fn underscore_after_letters_rejected() {
        let toks = vec![text("abc__")];
        assert_eq!(
            validate_label(&toks).unwrap_err(),
            ErrorKind::UnderscoreMisplaced
        );
    }

    #[test]
    fn hyphen_at_positions_3_4_rejected() {
        let toks = vec![text("xn--")];
        assert_eq!(
            validate_label(&toks).unwrap_err(),
            ErrorKind::HyphenAtPositions34
        );
    }

    #[test]
    fn fenced_leading_rejected() {
        let toks = vec![text("\u{30FB}a")];
        assert_eq!(
            validate_label(&toks).unwrap_err(),
            ErrorKind::FencedLeading { cp: 0x30FB }
        );
    }

    #[test]
    fn fenced_adjacent_rejected() {
        let toks = vec![text("a\u{30FB}\u{30FB}a")];
        assert_eq!(
            validate_label(&toks).unwrap_err(),
            ErrorKind::FencedAdjacent {
                cp1: 0x30FB,
                cp2: 0x30FB
            }
        );
    }

    #[test]
    fn single_fenced_interior_is_accepted() {
        let toks = vec![text("a\u{30FB}a\u{2019}s")];
        let label_type = validate_label(&toks).unwrap();
        assert!(matches!(label_type, LabelType::Group(_)));
    }

    #[test]
    fn egyptian_hieroglyph_is_restricted_group() {
        let toks = vec![text("\u{13080}")];
        assert_eq!(
            validate_label(&toks).unwrap(),
            LabelType::Restricted("Egyp")
        );
    }

    #[test]
    fn excessive_nsm_counted_after_decomposing_precomposed_letter() {
        // é (precomposed) hides a combining acute the NSM run-length check
        // must still see: four more explicit marks pushes the decomposed
        // run to 5, over NSM_MAX (spec.md §4.4 step 6 operates on NFD).
        let mut cps: CpBuf = CpBuf::new();
        cps.push(0xE9); // é = e + combining acute once decomposed
        cps.extend_from_slice(&[0x300, 0x302, 0x308, 0x30A]);
        let toks = vec![Token::Text(cps)];
        assert_eq!(
            validate_label(&toks).unwrap_err(),
            ErrorKind::ExcessiveNsm { count: 5 }
        );
    }

    #[test]
    fn disallowed_dotless_i_never_reaches_validator() {
        // U+0131 is rejected at tokenize time (Disallowed), so the
        // validator never sees it as a Text token; covered in
        // tokenizer::tests::disallowed_codepoint_is_rejected_with_position.
    }
}
