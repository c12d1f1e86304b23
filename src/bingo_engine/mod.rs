//! Core bingo engine — card generation, line evaluation, and game sessions.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: parks, items, squares, cards, requests |
//! | `rng`       | String-seeded xorshift32 generator behind every deterministic draw |
//! | `generator` | Single entry point `generate_card()` — sampling and grid assembly |
//! | `evaluator` | Line completion scanning: rows, columns, diagonals |
//! | `session`   | Current card, status updates, persistence, statistics |
//! | `stats`     | Lifetime play statistics (games, bingos, streaks) |
//! | `storage`   | Key-value persistence trait + in-memory implementation |
//! | `error`     | Crate error enum and `Result` alias |

pub mod error;
pub mod evaluator;
pub mod generator;
pub mod models;
pub mod rng;
pub mod session;
pub mod stats;
pub mod storage;

// Re-export the public API surface so callers can use
// `bingo_engine::generate_card` without reaching into sub-modules.
pub use error::{BingoError, Result};
pub use evaluator::{count_bingos, is_card_complete, LINE_COUNT};
pub use generator::generate_card;
pub use models::{
    BingoCard, CardRequest, ItemKind, Park, ParkItem, Square, SquareStatus, FREE_SPACE_ID,
    FREE_SPACE_POS, GRID_SIZE, ITEMS_PER_CARD,
};
pub use rng::SeededRng;
pub use session::{GameSession, SessionConfig};
pub use stats::GameStats;
pub use storage::{KeyValueStore, MemoryStore};
