use chrono::Utc;
use uuid::Uuid;

use crate::bingo_engine::{
    error::{BingoError, Result},
    models::{BingoCard, CardRequest, ParkItem, Square, FREE_SPACE_POS, GRID_SIZE, ITEMS_PER_CARD},
    rng::SeededRng,
};

/// Generate one card for the request's park.
///
/// A `None` seed starts a new game with a fresh UUIDv4 seed; a supplied
/// seed reconstructs the exact same grid, as long as the park's item pool
/// has the same contents in the same order as when the seed was first
/// drawn. The card id itself is always freshly generated and independent of
/// the seed.
pub fn generate_card(request: CardRequest<'_>) -> Result<BingoCard> {
    let park = request.park;
    if park.items.len() < ITEMS_PER_CARD {
        return Err(BingoError::InsufficientItems {
            park_id: park.id.clone(),
            available: park.items.len(),
            required: ITEMS_PER_CARD,
        });
    }

    let seed = request.seed.unwrap_or_else(|| Uuid::new_v4().to_string());
    let mut rng = SeededRng::new(&seed);
    let mut drawn = draw_items(&mut rng, &park.items).into_iter();

    let mut squares = Vec::with_capacity(GRID_SIZE);
    for row in 0..GRID_SIZE {
        let mut cells = Vec::with_capacity(GRID_SIZE);
        for col in 0..GRID_SIZE {
            if (row, col) == FREE_SPACE_POS {
                cells.push(Square::free_space(&park.free_space));
            } else {
                // draw_items returned exactly one item per non-center cell
                let item = drawn.next().expect("one drawn item per square");
                cells.push(Square::new(row, col, item));
            }
        }
        squares.push(cells);
    }

    Ok(BingoCard {
        id: Uuid::new_v4().to_string(),
        park_id: park.id.clone(),
        seed,
        squares,
        created_at: Utc::now(),
        completed_at: None,
        bingos: 0,
    })
}

/// Draw [`ITEMS_PER_CARD`] distinct items from the pool.
///
/// Splice-style removal from a working copy: each draw maps the next RNG
/// value onto the remaining pool and removes that item, so repeats are
/// impossible and every 24-item subset is equally likely (a partial
/// Fisher-Yates). Pool sizes are tens of items, so the O(n) removal is
/// irrelevant.
fn draw_items(rng: &mut SeededRng, pool: &[ParkItem]) -> Vec<ParkItem> {
    let mut working: Vec<ParkItem> = pool.to_vec();
    let mut drawn = Vec::with_capacity(ITEMS_PER_CARD);
    for _ in 0..ITEMS_PER_CARD {
        let idx = rng.next_index(working.len());
        drawn.push(working.remove(idx));
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bingo_engine::models::ItemKind;
    use std::collections::HashSet;

    fn pool(n: usize) -> Vec<ParkItem> {
        (0..n)
            .map(|i| ParkItem::new(format!("item-{}", i), format!("Attraction {}", i), ItemKind::Ride))
            .collect()
    }

    #[test]
    fn draws_are_unique_and_from_the_pool() {
        let pool = pool(40);
        let mut rng = SeededRng::new("unique");
        let drawn = draw_items(&mut rng, &pool);
        assert_eq!(drawn.len(), ITEMS_PER_CARD);

        let pool_ids: HashSet<&str> = pool.iter().map(|i| i.id.as_str()).collect();
        let mut seen = HashSet::new();
        for item in &drawn {
            assert!(pool_ids.contains(item.id.as_str()), "unknown item {}", item.id);
            assert!(seen.insert(item.id.clone()), "duplicate item {}", item.id);
        }
    }

    #[test]
    fn draws_are_deterministic_per_seed() {
        let pool = pool(30);
        let ids = |seed: &str| -> Vec<String> {
            let mut rng = SeededRng::new(seed);
            draw_items(&mut rng, &pool).into_iter().map(|i| i.id).collect()
        };
        assert_eq!(ids("replay-me"), ids("replay-me"));
        assert_ne!(ids("replay-me"), ids("something-else"));
    }

    #[test]
    fn minimum_pool_is_drawn_exhaustively() {
        let pool = pool(ITEMS_PER_CARD);
        let mut rng = SeededRng::new("exhaustive");
        let drawn = draw_items(&mut rng, &pool);
        let drawn_ids: HashSet<String> = drawn.into_iter().map(|i| i.id).collect();
        assert_eq!(drawn_ids.len(), ITEMS_PER_CARD);
    }
}
