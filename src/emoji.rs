//! Emoji sequence matcher: longest-match lookup against the FE0F-stripped
//! key set, FE0F optional in the input stream (spec.md §4.2).

use crate::model::{Codepoint, CpBuf};
use std::collections::HashMap;

#[derive(Default)]
struct TrieNode {
    children: HashMap<Codepoint, TrieNode>,
    /// Present when a no-FE0F key ends here: (fully_qualified, no_fe0f).
    terminal: Option<(CpBuf, CpBuf)>,
}

/// Trie over FE0F-stripped emoji sequences, built once from the static
/// registry and shared via `EngineTables`.
pub struct EmojiTrie {
    root: TrieNode,
}

impl EmojiTrie {
    pub fn build(sequences: &[&[Codepoint]]) -> Self {
        let mut root = TrieNode::default();
        for &seq in sequences {
            let no_fe0f: CpBuf = seq.iter().copied().filter(|&cp| cp != 0xFE0F).collect();
            let fully_qualified: CpBuf = seq.iter().copied().collect();
            let mut node = &mut root;
            for &cp in no_fe0f.iter() {
                node = node.children.entry(cp).or_default();
            }
            node.terminal = Some((fully_qualified, no_fe0f));
        }
        EmojiTrie { root }
    }

    /// Try to match the longest emoji sequence starting at `input[0]`,
    /// treating any U+FE0F in the input as optional (skippable without
    /// consuming a trie edge, but consumed from the input if present
    /// immediately after a matched base codepoint).
    ///
    /// Returns `(fully_qualified, no_fe0f, consumed_len)` on match, where
    /// `consumed_len` is the number of input codepoints the match ate
    /// (including any FE0F skipped along the way).
    pub fn longest_match(&self, input: &[Codepoint]) -> Option<(CpBuf, CpBuf, usize)> {
        let mut node = &self.root;
        let mut i = 0usize;
        let mut best: Option<(CpBuf, CpBuf, usize)> = None;

        loop {
            if let Some((fq, nf)) = &node.terminal {
                best = Some((fq.clone(), nf.clone(), i));
            }
            if i >= input.len() {
                break;
            }
            let cp = input[i];
            if cp == 0xFE0F {
                // Optional: try to continue matching past it without
                // consuming a trie edge, recording it as consumed input.
                i += 1;
                continue;
            }
            match node.children.get(&cp) {
                Some(next) => {
                    node = next;
                    i += 1;
                }
                None => break,
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> EmojiTrie {
        EmojiTrie::build(&[
            &[0x1F438],
            &[0x31, 0xFE0F, 0x20E3],
            &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466],
        ])
    }

    #[test]
    fn matches_simple_emoji() {
        let t = trie();
        let (fq, nf, len) = t.longest_match(&[0x1F438, 0x61]).unwrap();
        assert_eq!(fq.as_slice(), &[0x1F438]);
        assert_eq!(nf.as_slice(), &[0x1F438]);
        assert_eq!(len, 1);
    }

    #[test]
    fn matches_keycap_with_fe0f() {
        let t = trie();
        let input = [0x31u32, 0xFE0F, 0x20E3];
        let (fq, nf, len) = t.longest_match(&input).unwrap();
        assert_eq!(fq.as_slice(), &[0x31, 0xFE0F, 0x20E3]);
        assert_eq!(nf.as_slice(), &[0x31, 0x20E3]);
        assert_eq!(len, 3);
    }

    #[test]
    fn matches_keycap_without_fe0f() {
        let t = trie();
        let input = [0x31u32, 0x20E3];
        let (fq, nf, len) = t.longest_match(&input).unwrap();
        assert_eq!(fq.as_slice(), &[0x31, 0xFE0F, 0x20E3]);
        assert_eq!(nf.as_slice(), &[0x31, 0x20E3]);
        assert_eq!(len, 2);
    }

    #[test]
    fn no_match_on_unrelated_input() {
        let t = trie();
        assert!(t.longest_match(&[0x61, 0x62]).is_none());
    }

    #[test]
    fn matches_long_zwj_family_sequence() {
        let t = trie();
        let seq = [0x1F468u32, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466];
        let (_, _, len) = t.longest_match(&seq).unwrap();
        assert_eq!(len, 7);
    }
}
