use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Grid constants
// ---------------------------------------------------------------------------

/// Cards are always 5x5.
pub const GRID_SIZE: usize = 5;

/// Zero-indexed (row, column) of the free space: the center of the grid.
pub const FREE_SPACE_POS: (usize, usize) = (2, 2);

/// Items drawn per card: 25 squares minus the free space.
pub const ITEMS_PER_CARD: usize = GRID_SIZE * GRID_SIZE - 1;

/// Sentinel id of the free-space square and its synthetic item.
pub const FREE_SPACE_ID: &str = "free";

// ---------------------------------------------------------------------------
// Park primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Ride,
    Show,
    Character,
    Food,
    Transportation,
    Detail,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemKind::Ride           => "ride",
            ItemKind::Show           => "show",
            ItemKind::Character      => "character",
            ItemKind::Food           => "food",
            ItemKind::Transportation => "transportation",
            ItemKind::Detail         => "detail",
        };
        write!(f, "{}", s)
    }
}

/// One attraction in a park's item pool.
///
/// Supplied by the host application's data layer; the engine copies items
/// into squares and never mutates the pool itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkItem {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub description: String,
    pub wait_time: Option<u32>,
    pub height_requirement: Option<String>,
    pub best_time: Option<String>,
    pub image_url: Option<String>,
    pub categories: Vec<String>,
}

impl ParkItem {
    /// Build an item with no description, metadata, or category labels.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        ParkItem {
            id: id.into(),
            name: name.into(),
            kind,
            description: String::new(),
            wait_time: None,
            height_requirement: None,
            best_time: None,
            image_url: None,
            categories: Vec::new(),
        }
    }
}

/// A park and its ordered pool of eligible items.
///
/// Card generation is order-sensitive: the same seed only reproduces the
/// same card while `items` has the same contents in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Park {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Display label for the free-space square (e.g. "Cinderella Castle").
    pub free_space: String,
    pub items: Vec<ParkItem>,
}

// ---------------------------------------------------------------------------
// Card / square types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SquareStatus {
    Unmarked,
    Completed,
    Skipped,
    InProgress,
}

impl fmt::Display for SquareStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SquareStatus::Unmarked   => "unmarked",
            SquareStatus::Completed  => "completed",
            SquareStatus::Skipped    => "skipped",
            SquareStatus::InProgress => "in-progress",
        };
        write!(f, "{}", s)
    }
}

/// One cell of the grid: an owned item copy plus its completion state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Square {
    /// `square-{row}-{col}`, or the literal `"free"` for the free space.
    pub id: String,
    pub item: ParkItem,
    pub status: SquareStatus,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Square {
    /// A drawn square at the given grid position, starting unmarked.
    pub fn new(row: usize, col: usize, item: ParkItem) -> Self {
        Square {
            id: format!("square-{}-{}", row, col),
            item,
            status: SquareStatus::Unmarked,
            completed_at: None,
        }
    }

    /// The fixed center square, completed from creation. `label` is the
    /// park's free-space display text.
    pub fn free_space(label: &str) -> Self {
        Square {
            id: FREE_SPACE_ID.to_string(),
            item: ParkItem {
                id: FREE_SPACE_ID.to_string(),
                name: label.to_string(),
                kind: ItemKind::Detail,
                description: "Free space!".to_string(),
                wait_time: None,
                height_requirement: None,
                best_time: None,
                image_url: None,
                categories: vec![FREE_SPACE_ID.to_string()],
            },
            status: SquareStatus::Completed,
            completed_at: None,
        }
    }

    pub fn is_free_space(&self) -> bool {
        self.id == FREE_SPACE_ID
    }

    pub fn is_completed(&self) -> bool {
        self.status == SquareStatus::Completed
    }
}

/// One generated 5x5 bingo card tied to a park and a seed.
///
/// `bingos` is a cache of the last full-grid recount; only
/// [`count_bingos`](crate::bingo_engine::evaluator::count_bingos) ever
/// produces the value assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BingoCard {
    pub id: String,
    pub park_id: String,
    /// The seed the grid was drawn from, kept for replay and sharing.
    pub seed: String,
    /// Row-major 5x5 grid.
    pub squares: Vec<Vec<Square>>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub bingos: u32,
}

impl BingoCard {
    /// The square at (row, col), if both are in range.
    pub fn square(&self, row: usize, col: usize) -> Option<&Square> {
        self.squares.get(row).and_then(|r| r.get(col))
    }

    /// The center free-space square.
    pub fn free_square(&self) -> &Square {
        &self.squares[FREE_SPACE_POS.0][FREE_SPACE_POS.1]
    }
}

// ---------------------------------------------------------------------------
// Generation request
// ---------------------------------------------------------------------------

/// Input to [`generate_card`](crate::bingo_engine::generator::generate_card).
#[derive(Debug, Clone)]
pub struct CardRequest<'a> {
    pub park: &'a Park,
    /// `None` starts a new game with a fresh UUIDv4 seed; `Some` reconstructs
    /// a previously generated card from its stored seed.
    pub seed: Option<String>,
}

impl<'a> CardRequest<'a> {
    /// A new-game request: a fresh random seed is generated at draw time.
    pub fn new(park: &'a Park) -> Self {
        CardRequest { park, seed: None }
    }

    /// A replay request: rebuild the exact card the seed produced.
    pub fn replay(park: &'a Park, seed: impl Into<String>) -> Self {
        CardRequest {
            park,
            seed: Some(seed.into()),
        }
    }
}
