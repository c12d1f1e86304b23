//! # park_bingo_gen
//!
//! A fully offline, deterministic bingo-card engine for theme-park
//! scavenger hunts.
//!
//! Players pick a park, get a 5x5 card of attractions with a free center
//! square, mark squares as they complete them, and earn a bingo for every
//! completed row, column, or diagonal. This crate is the engine behind
//! that loop: card generation, line counting, persistence, and play
//! statistics. Rendering and data fetching stay in the host application
//! (the companion client is an Angular/Capacitor app).
//!
//! ## How it works
//!
//! 1. Build a [`CardRequest`] for a [`Park`] — optionally with a stored
//!    seed to reconstruct an earlier card.
//! 2. Call [`generate_card`] — the engine seeds its xorshift generator
//!    from the seed string, draws 24 distinct items from the park's pool
//!    without replacement, and assembles the grid around the
//!    pre-completed free space at the center.
//! 3. Route square taps through a [`GameSession`] — it recounts completed
//!    lines from scratch after every change and persists the card and the
//!    player's statistics through an injected [`KeyValueStore`].
//!
//! ## Key properties
//!
//! - **Deterministic**: the same seed and the same ordered item pool
//!   always reproduce the exact same card, so stored games replay
//!   bit-for-bit and a seed doubles as a share code.
//! - **No partial cards**: a park with fewer than 24 items fails up front
//!   with [`BingoError::InsufficientItems`] naming the park and the
//!   available/required counts.
//! - **Stateless scoring**: the bingo count is recomputed from the full
//!   grid on every mutation, never incrementally maintained.
//!
//! ## Quick start
//!
//! ```rust
//! use park_bingo_gen::{
//!     generate_card, CardRequest, GameSession, ItemKind, MemoryStore, Park,
//!     ParkItem, SquareStatus,
//! };
//!
//! let items: Vec<ParkItem> = (0..24)
//!     .map(|i| ParkItem::new(format!("ride-{i}"), format!("Attraction {i}"), ItemKind::Ride))
//!     .collect();
//! let park = Park {
//!     id: "mk".to_string(),
//!     name: "Magic Kingdom".to_string(),
//!     icon: "castle".to_string(),
//!     free_space: "Cinderella Castle".to_string(),
//!     items,
//! };
//!
//! // Reconstruct a shared card from its seed — same seed, same grid:
//! let card = generate_card(CardRequest::replay(&park, "friend-code")).unwrap();
//! assert_eq!(card.squares[2][2].id, "free");
//!
//! // Or play a full session with persistence:
//! let mut session = GameSession::new(MemoryStore::new());
//! session.new_game(&park).unwrap();
//! let card = session.update_square(0, 0, SquareStatus::Completed).unwrap();
//! println!("bingos so far: {}", card.bingos);
//! ```

pub mod bingo_engine;
pub mod client_adapter;

// Convenience re-exports so callers can use `park_bingo_gen::generate_card`
// directly without reaching into `bingo_engine::`.
pub use bingo_engine::{
    count_bingos, generate_card, BingoCard, BingoError, CardRequest, GameSession, GameStats,
    ItemKind, KeyValueStore, MemoryStore, Park, ParkItem, Result, SeededRng, SessionConfig,
    Square, SquareStatus, FREE_SPACE_ID, GRID_SIZE, ITEMS_PER_CARD, LINE_COUNT,
};
