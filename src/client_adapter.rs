//! Conversion to the JSON shape the mobile client renders.
//!
//! The mobile client stores and displays cards as camelCase JSON with
//! ISO-8601 date strings. The engine's own types serialize with plain serde
//! derives; this adapter produces the exact client documents at the
//! boundary, so a host can hand them straight to the existing UI.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::bingo_engine::models::{BingoCard, ParkItem, Square};
use crate::bingo_engine::stats::GameStats;

/// Render a timestamp the way the client's `Date` values serialize:
/// millisecond precision with a `Z` suffix.
fn iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the `parkItem` object. Optional metadata keys are omitted
/// entirely when absent, matching the client's own data files.
fn item_json(item: &ParkItem) -> Value {
    let mut obj = json!({
        "id": &item.id,
        "name": &item.name,
        "type": item.kind.to_string(),
        "description": &item.description,
        "categories": &item.categories,
    });
    if let Some(wait) = item.wait_time {
        obj["waitTime"] = json!(wait);
    }
    if let Some(height) = &item.height_requirement {
        obj["heightRequirement"] = json!(height);
    }
    if let Some(best) = &item.best_time {
        obj["bestTime"] = json!(best);
    }
    if let Some(url) = &item.image_url {
        obj["imageUrl"] = json!(url);
    }
    obj
}

fn square_json(square: &Square) -> Value {
    let mut obj = json!({
        "id": &square.id,
        "parkItem": item_json(&square.item),
        "status": square.status.to_string(),
    });
    if let Some(ts) = &square.completed_at {
        obj["completedAt"] = json!(iso(ts));
    }
    obj
}

/// Map a [`BingoCard`] to the client's card document.
pub fn to_client_card(card: &BingoCard) -> Value {
    let squares: Vec<Value> = card
        .squares
        .iter()
        .map(|row| Value::Array(row.iter().map(square_json).collect()))
        .collect();

    let mut obj = json!({
        "id": &card.id,
        "parkId": &card.park_id,
        "seed": &card.seed,
        "squares": squares,
        "createdAt": iso(&card.created_at),
        "bingos": card.bingos,
    });
    if let Some(ts) = &card.completed_at {
        obj["completedAt"] = json!(iso(ts));
    }
    obj
}

/// Map [`GameStats`] to the client's stats document.
pub fn to_client_stats(stats: &GameStats) -> Value {
    let mut obj = json!({
        "totalGames": stats.total_games,
        "totalBingos": stats.total_bingos,
        "gamesPerPark": &stats.games_per_park,
        "bingosPerPark": &stats.bingos_per_park,
        "currentStreak": stats.current_streak,
        "bestStreak": stats.best_streak,
    });
    if let Some(ts) = &stats.last_played_at {
        obj["lastPlayedAt"] = json!(iso(ts));
    }
    obj
}
