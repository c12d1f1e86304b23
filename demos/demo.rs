//! Full walkthrough of one bingo game.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `park_bingo_gen` works end to end:
//!
//! 1. **New game** — a session generates a 5x5 card for a sample park with
//!    a fresh random seed and persists it through an in-memory store.
//! 2. **Marking squares** — the top row is completed one square at a time;
//!    the bingo count is recomputed from the full grid after every tap.
//! 3. **Statistics** — the session tracks games, bingos, and the streak.
//!
//! ## Key concepts demonstrated
//!
//! - `GameSession::new(store)` — the host hands over any `KeyValueStore`;
//!   the engine never touches platform storage directly.
//! - The center square is always the free space, completed from creation.
//! - `update_square(row, col, status)` returns the updated card with the
//!   recounted `bingos` value, ready to render.

use park_bingo_gen::{
    GameSession, ItemKind, MemoryStore, Park, ParkItem, SquareStatus, GRID_SIZE,
};

/// A sample park with enough attractions for a card.
fn sample_park() -> Park {
    let names = [
        "Space Mountain", "Splash Falls", "Big Thunder Railway", "Haunted Manor",
        "Pirate Cove", "Jungle Cruise", "Carousel Royale", "Teacup Spin",
        "Sky Tram", "Main Street Parade", "Fireworks Finale", "Castle Stage Show",
        "Churro Cart", "Turkey Leg Stand", "Dole Float Stand", "Frontier BBQ",
        "Meet the Mouse", "Princess Pavilion", "Pin Trading Post", "Penny Press",
        "Steam Train Loop", "Riverboat Landing", "Monorail Ride", "Ferry Crossing",
        "Hidden Emblem Hunt", "Topiary Garden", "Candy Kitchen", "Night Light Parade",
    ];
    let kinds = [
        ItemKind::Ride, ItemKind::Show, ItemKind::Food,
        ItemKind::Character, ItemKind::Transportation, ItemKind::Detail,
    ];

    let items = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut item = ParkItem::new(format!("item-{i}"), *name, kinds[i % kinds.len()]);
            item.description = format!("Find {name} and check it off!");
            item
        })
        .collect();

    Park {
        id: "demo-park".to_string(),
        name: "Adventure Park".to_string(),
        icon: "ferris-wheel".to_string(),
        free_space: "Park Gate Fountain".to_string(),
        items,
    }
}

/// Print the card as a 5x5 grid with completion markers.
fn print_card(session: &GameSession<MemoryStore>) {
    let card = session.current_card().expect("a card is active");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Card {}  Park: {}  Bingos: {}", card.id, card.park_id, card.bingos);
    println!("  Seed: {}", card.seed);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for row in &card.squares {
        for square in row {
            let marker = match square.status {
                SquareStatus::Completed  => "x",
                SquareStatus::Skipped    => "-",
                SquareStatus::InProgress => "~",
                SquareStatus::Unmarked   => " ",
            };
            let name: String = square.item.name.chars().take(18).collect();
            print!("  [{marker}] {name:<18}");
        }
        println!();
    }
    println!();
}

fn main() {
    let park = sample_park();
    let mut session = GameSession::new(MemoryStore::new());

    // ── New game ─────────────────────────────────────────────────────────────
    println!();
    println!("══ New game in {} ══", park.name);
    println!();
    session.new_game(&park).expect("the sample park has enough items");
    print_card(&session);

    // ── Complete the top row ─────────────────────────────────────────────────
    println!("══ Completing the top row ══");
    println!();
    for col in 0..GRID_SIZE {
        let card = session
            .update_square(0, col, SquareStatus::Completed)
            .expect("square is in range");
        let name = &card.squares[0][col].item.name;
        println!("  marked (0, {col}) {name}  →  bingos: {}", card.bingos);
    }
    println!();
    print_card(&session);
    println!("  BINGO! The top row is complete.");
    println!();

    // ── Statistics ───────────────────────────────────────────────────────────
    let stats = session.stats();
    println!("══ Statistics ══");
    println!();
    println!("  Games played:   {}", stats.total_games);
    println!("  Bingos earned:  {}", stats.total_bingos);
    println!("  Current streak: {}", stats.current_streak);
    println!("  Best streak:    {}", stats.best_streak);
    println!();

    // ── Client document ──────────────────────────────────────────────────────
    // The adapter produces the JSON the mobile client renders.
    let card = session.current_card().expect("a card is active");
    let doc = park_bingo_gen::client_adapter::to_client_card(card);
    println!("══ Client JSON (excerpt) ══");
    println!();
    println!("  parkId:    {}", doc["parkId"]);
    println!("  createdAt: {}", doc["createdAt"]);
    println!("  center:    {}", doc["squares"][2][2]["parkItem"]["name"]);
    println!();
}
