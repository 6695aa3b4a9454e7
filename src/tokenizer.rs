//! Per-label tokenizer: spec.md §4.3/§4.7's two-state machine
//! (`InText`/`AtBoundary`), producing a collapsed `Text`/`Emoji` stream
//! with per-text-run NFC already applied.

use crate::error::ErrorKind;
use crate::model::{CharClass, CpBuf, Token};
use crate::nfc;
use crate::tables::classes::{DISALLOWED, EMOJI_COMPONENT, IGNORED, MAPPED};
use crate::tables::groups::is_valid;
use crate::tables::EngineTables;

fn classify(cp: u32) -> CharClass {
    if MAPPED.contains_key(&cp) {
        CharClass::Mapped
    } else if IGNORED.contains(&cp) {
        CharClass::Ignored
    } else if DISALLOWED.contains(&cp) {
        CharClass::Disallowed
    } else if EMOJI_COMPONENT.contains(&cp) {
        CharClass::EmojiComponent
    } else if is_valid(cp) {
        CharClass::Valid
    } else {
        CharClass::Disallowed
    }
}

/// Tokenize one label's codepoints into a collapsed `Text`/`Emoji` stream.
///
/// Every `Text` token has already been through NFC (spec.md §4.1's
/// "per-text-token" requirement, not per-label): the tokenizer flushes and
/// NFC-normalizes its running buffer every time an emoji sequence
/// interrupts it, rather than normalizing the label as a whole.
pub fn tokenize(cps: &[u32], tables: &EngineTables) -> Result<Vec<Token>, ErrorKind> {
    let mut tokens = Vec::new();
    let mut buf: CpBuf = CpBuf::new();
    let mut i = 0usize;

    while i < cps.len() {
        if let Some((fq, nf, consumed)) = tables.emoji.longest_match(&cps[i..]) {
            flush_text(&mut buf, &mut tokens);
            tokens.push(Token::Emoji {
                fully_qualified: fq,
                no_fe0f: nf,
            });
            i += consumed;
            continue;
        }

        let cp = cps[i];
        match classify(cp) {
            CharClass::Valid => buf.push(cp),
            CharClass::Mapped => buf.extend_from_slice(MAPPED.get(&cp).unwrap()),
            CharClass::Ignored => {}
            CharClass::EmojiComponent | CharClass::Disallowed => {
                return Err(ErrorKind::DisallowedCharacter { cp, position: i });
            }
        }
        i += 1;
    }

    flush_text(&mut buf, &mut tokens);
    Ok(tokens)
}

fn flush_text(buf: &mut CpBuf, tokens: &mut Vec<Token>) {
    if buf.is_empty() {
        return;
    }
    let normalized = nfc::nfc(buf);
    tokens.push(Token::Text(normalized));
    buf.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;

    fn cps_of(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    #[test]
    fn collapses_mapped_and_ignored_into_one_text_token() {
        // "a™️" -> "atm": trademark sign maps to "tm", FE0F is ignored,
        // everything folds into a single ASCII text token.
        let input = cps_of("a\u{2122}\u{FE0F}");
        let toks = tokenize(&input, &tables::tables()).unwrap();
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].normalize_cps(), &[0x61, 0x74, 0x6D]);
    }

    #[test]
    fn composes_combining_tilde_across_ignored_fe0e() {
        // "E︎̃" -> single Latin text token "ẽ": E maps to e,
        // FE0E is dropped without breaking the run, and the combining
        // tilde composes with the buffered e once the run is flushed.
        let input = cps_of("E\u{FE0E}\u{0303}");
        let toks = tokenize(&input, &tables::tables()).unwrap();
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].normalize_cps(), &[0x1EBD]);
    }

    #[test]
    fn disallowed_codepoint_is_rejected_with_position() {
        let input = cps_of("n\u{0131}ck");
        let err = tokenize(&input, &tables::tables()).unwrap_err();
        assert_eq!(
            err,
            ErrorKind::DisallowedCharacter {
                cp: 0x0131,
                position: 1
            }
        );
    }

    #[test]
    fn bare_zwj_is_disallowed() {
        let input = cps_of("\u{200D}");
        let err = tokenize(&input, &tables::tables()).unwrap_err();
        assert_eq!(
            err,
            ErrorKind::DisallowedCharacter {
                cp: 0x200D,
                position: 0
            }
        );
    }

    #[test]
    fn emoji_interrupts_and_flushes_text_buffer() {
        let input = cps_of("a");
        let mut cps = input;
        cps.push(0x1F438); // 🐸
        cps.extend(cps_of("b"));
        let toks = tokenize(&cps, &tables::tables()).unwrap();
        assert_eq!(toks.len(), 3);
        assert!(toks[0].is_text());
        assert!(toks[1].is_emoji());
        assert!(toks[2].is_text());
    }
}
