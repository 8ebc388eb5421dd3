//! Compiled-in opening book.
//!
//! Keys are the comma-joined coordinate encodings of every move played so
//! far (`""` for the initial position, `"e2e4,e7e5"` after 1.e4 e5). Each
//! key maps to candidate replies; popular replies are listed more than once,
//! so a uniform pick over the list is a weighted pick over the replies.

use std::collections::HashMap;
use std::sync::OnceLock;

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_types::MoveRecord;

const STANDARD_LINES: &[(&str, &[&str])] = &[
    // White's first move
    ("", &["e2e4", "e2e4", "e2e4", "d2d4", "d2d4", "d2d4", "c2c4", "g1f3"]),
    // 1.e4
    ("e2e4", &["e7e5", "e7e5", "c7c5", "c7c5", "e7e6", "d7d5", "c7c6", "g8f6"]),
    // Open game
    ("e2e4,e7e5", &["g1f3", "g1f3", "g1f3", "f1c4", "b1c3"]),
    ("e2e4,e7e5,g1f3", &["b8c6", "b8c6", "b8c6", "g8f6", "d7d6"]),
    ("e2e4,e7e5,g1f3,b8c6", &["f1b5", "f1b5", "f1c4", "d2d4", "b1c3"]),
    ("e2e4,e7e5,g1f3,b8c6,f1b5", &["a7a6", "g8f6", "f8c5", "d7d6"]),
    ("e2e4,e7e5,g1f3,b8c6,f1c4", &["f8c5", "g8f6", "d7d6"]),
    ("e2e4,e7e5,g1f3,b8c6,d2d4", &["e5d4"]),
    ("e2e4,e7e5,g1f3,g8f6", &["f3e5", "b1c3", "d2d4"]),
    ("e2e4,e7e5,f1c4", &["g8f6", "f8c5", "b8c6"]),
    ("e2e4,e7e5,b1c3", &["g8f6", "b8c6", "f8c5"]),
    // Sicilian
    ("e2e4,c7c5", &["g1f3", "g1f3", "b1c3", "c2c3", "f2f4"]),
    ("e2e4,c7c5,g1f3", &["d7d6", "d7d6", "b8c6", "e7e6"]),
    ("e2e4,c7c5,g1f3,d7d6", &["d2d4", "f1b5"]),
    ("e2e4,c7c5,g1f3,b8c6", &["d2d4", "f1b5", "b1c3"]),
    ("e2e4,c7c5,g1f3,e7e6", &["d2d4", "b1c3", "c2c3"]),
    // French
    ("e2e4,e7e6", &["d2d4"]),
    ("e2e4,e7e6,d2d4", &["d7d5"]),
    ("e2e4,e7e6,d2d4,d7d5", &["b1c3", "b1d2", "e4e5", "e4d5"]),
    // Caro-Kann
    ("e2e4,c7c6", &["d2d4", "b1c3", "g1f3"]),
    ("e2e4,c7c6,d2d4", &["d7d5"]),
    ("e2e4,c7c6,d2d4,d7d5", &["b1c3", "b1d2", "e4e5", "e4d5"]),
    // Scandinavian
    ("e2e4,d7d5", &["e4d5"]),
    ("e2e4,d7d5,e4d5", &["d8d5", "g8f6"]),
    // Alekhine
    ("e2e4,g8f6", &["e4e5", "b1c3", "d2d3"]),
    // 1.d4
    ("d2d4", &["d7d5", "d7d5", "g8f6", "g8f6", "e7e6", "f7f5"]),
    ("d2d4,d7d5", &["c2c4", "c2c4", "g1f3", "c1f4"]),
    ("d2d4,d7d5,c2c4", &["e7e6", "e7e6", "c7c6", "d5c4"]),
    ("d2d4,d7d5,c2c4,e7e6", &["b1c3", "g1f3", "c1g5"]),
    ("d2d4,d7d5,c2c4,c7c6", &["g1f3", "b1c3", "e2e3"]),
    ("d2d4,d7d5,c2c4,d5c4", &["g1f3", "e2e3", "e2e4"]),
    ("d2d4,d7d5,g1f3", &["g8f6", "e7e6", "c7c6"]),
    ("d2d4,d7d5,c1f4", &["g8f6", "e7e6", "c7c5"]),
    // Indian systems
    ("d2d4,g8f6", &["c2c4", "c2c4", "g1f3", "c1f4"]),
    ("d2d4,g8f6,c2c4", &["e7e6", "e7e6", "g7g6", "c7c5"]),
    ("d2d4,g8f6,c2c4,e7e6", &["b1c3", "g1f3", "g2g3"]),
    ("d2d4,g8f6,c2c4,g7g6", &["b1c3", "g1f3", "g2g3"]),
    ("d2d4,g8f6,g1f3", &["d7d5", "e7e6", "g7g6"]),
    ("d2d4,g8f6,c1f4", &["d7d5", "e7e6", "c7c5"]),
    ("d2d4,e7e6", &["c2c4", "g1f3", "e2e4"]),
    // English
    ("c2c4", &["e7e5", "g8f6", "c7c5", "e7e6"]),
    ("c2c4,e7e5", &["b1c3", "g1f3", "g2g3"]),
    ("c2c4,g8f6", &["b1c3", "g1f3", "d2d4"]),
    ("c2c4,c7c5", &["g1f3", "b1c3", "g2g3"]),
    // Reti
    ("g1f3", &["d7d5", "g8f6", "c7c5", "e7e6"]),
    ("g1f3,d7d5", &["d2d4", "c2c4", "g2g3"]),
    ("g1f3,g8f6", &["d2d4", "c2c4", "g2g3"]),
    ("g1f3,c7c5", &["c2c4", "e2e4", "d2d4"]),
];

static STANDARD_BOOK: OnceLock<OpeningBook> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningBook {
    by_key: HashMap<String, Vec<String>>,
}

impl OpeningBook {
    /// The built-in book, built once and shared read-only by every caller.
    pub fn standard() -> &'static OpeningBook {
        STANDARD_BOOK.get_or_init(|| {
            Self::from_entries(
                STANDARD_LINES
                    .iter()
                    .map(|&(key, replies)| (key, replies.iter().copied())),
            )
        })
    }

    pub fn from_entries<'a, I, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, C)>,
        C: IntoIterator<Item = &'a str>,
    {
        let by_key = entries
            .into_iter()
            .map(|(key, replies)| {
                let replies = replies.into_iter().map(str::to_owned).collect();
                (key.to_owned(), replies)
            })
            .collect();
        Self { by_key }
    }

    /// Book key for a played move sequence.
    pub fn history_key(history: &[MoveRecord]) -> String {
        history
            .iter()
            .map(|record| record.mv.book_token())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn candidates(&self, key: &str) -> Option<&[String]> {
        self.by_key
            .get(key)
            .map(|v| v.as_slice())
            .filter(|v| !v.is_empty())
    }

    /// Uniform pick over the listed replies for `key`.
    pub fn choose_candidate<R: Rng + ?Sized>(&self, key: &str, rng: &mut R) -> Option<&str> {
        self.candidates(key)?.choose(rng).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
