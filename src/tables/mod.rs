//! Static table modules and the `EngineTables` handle threaded through the
//! pipeline — this crate's analogue of the teacher's `Context`/`LangEntry`.

pub mod classes;
pub mod emoji_data;
pub mod groups;
pub mod nfc_data;
pub mod whole;

use crate::emoji::EmojiTrie;
use std::sync::OnceLock;

/// Bundle of `'static` references to every table plus the built emoji trie.
/// `Copy` and cheap to pass by value, built exactly once.
#[derive(Clone, Copy)]
pub struct EngineTables {
    pub emoji: &'static EmojiTrie,
}

static TABLES: OnceLock<EngineTables> = OnceLock::new();

/// Build (on first call) and return the shared `EngineTables` handle.
pub fn tables() -> EngineTables {
    *TABLES.get_or_init(|| {
        let trie: &'static EmojiTrie =
            Box::leak(Box::new(EmojiTrie::build(emoji_data::EMOJI_SEQUENCES)));
        EngineTables { emoji: trie }
    })
}
