//! Game session: the active card, status updates, persistence, statistics.
//!
//! This is the surface the host UI talks to. It calls [`GameSession::new_game`]
//! or [`GameSession::replay`], renders the returned card, and reports each
//! square tap through [`GameSession::update_square`]; the session recounts
//! completed lines from scratch after every change and persists both the
//! card list and the player's statistics through the injected
//! [`KeyValueStore`].

use chrono::Utc;

use crate::bingo_engine::{
    error::{BingoError, Result},
    evaluator::{count_bingos, is_card_complete},
    generator::generate_card,
    models::{BingoCard, CardRequest, Park, SquareStatus, GRID_SIZE},
    stats::GameStats,
    storage::KeyValueStore,
};

/// Storage keys used by a session. The defaults match the mobile client's
/// local-storage keys, so data saved by earlier app versions stays readable.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cards_key: String,
    pub stats_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cards_key: "park-bingo-cards".to_string(),
            stats_key: "park-bingo-stats".to_string(),
        }
    }
}

/// One player's game state: the active card, lifetime stats, and the store
/// both are persisted in.
///
/// A session owns its card; hosts serialize mutations by routing them all
/// through one session.
#[derive(Debug)]
pub struct GameSession<S: KeyValueStore> {
    store: S,
    config: SessionConfig,
    current: Option<BingoCard>,
    stats: GameStats,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Open a session with the default storage keys, restoring the most
    /// recently created saved card and the saved stats if the store has
    /// them.
    pub fn new(store: S) -> Self {
        Self::with_config(store, SessionConfig::default())
    }

    /// Open a session with explicit storage keys.
    pub fn with_config(store: S, config: SessionConfig) -> Self {
        let mut session = GameSession {
            store,
            config,
            current: None,
            stats: GameStats::default(),
        };
        session.current = session.most_recent_card();
        session.stats = session.load_stats();
        session
    }

    pub fn current_card(&self) -> Option<&BingoCard> {
        self.current.as_ref()
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Start a new game in `park`: fresh seed, fresh card, stats updated.
    pub fn new_game(&mut self, park: &Park) -> Result<&BingoCard> {
        let card = generate_card(CardRequest::new(park))?;
        self.stats.record_new_game(&park.id);
        self.save_stats()?;
        self.install(card)
    }

    /// Reconstruct a card from a stored seed and make it current.
    ///
    /// Does not count as a new game in the statistics -- it is the same
    /// game being restored or shared, not a fresh one.
    pub fn replay(&mut self, park: &Park, seed: &str) -> Result<&BingoCard> {
        let card = generate_card(CardRequest::replay(park, seed))?;
        self.install(card)
    }

    /// Set the status of the square at (row, col) and recount the card.
    ///
    /// Any status is accepted for any square; the status cycle is UI
    /// policy. Newly earned bingos are recorded in the stats, a blackout
    /// stamps the card's completion time, and the updated card is
    /// persisted before being returned.
    pub fn update_square(
        &mut self,
        row: usize,
        col: usize,
        status: SquareStatus,
    ) -> Result<&BingoCard> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BingoError::PositionOutOfBounds { row, col });
        }
        let card = self.current.as_mut().ok_or(BingoError::NoActiveCard)?;

        let square = &mut card.squares[row][col];
        square.status = status;
        square.completed_at = if status == SquareStatus::Completed {
            Some(Utc::now())
        } else {
            None
        };

        let previous = card.bingos;
        card.bingos = count_bingos(&card.squares);
        if is_card_complete(&card.squares) && card.completed_at.is_none() {
            card.completed_at = Some(Utc::now());
        }
        let earned = card.bingos.saturating_sub(previous);
        let park_id = card.park_id.clone();

        for _ in 0..earned {
            self.stats.record_bingo(&park_id);
        }
        if earned > 0 {
            self.save_stats()?;
        }
        self.persist_current()?;
        self.current.as_ref().ok_or(BingoError::NoActiveCard)
    }

    /// End the bingo streak, persisting the change.
    pub fn reset_streak(&mut self) -> Result<()> {
        self.stats.reset_streak();
        self.save_stats()
    }

    /// Zero all statistics and drop them from the store.
    pub fn clear_stats(&mut self) {
        self.stats = GameStats::default();
        self.store.remove(&self.config.stats_key);
    }

    /// All saved cards, in storage order. Corrupt stored JSON reads as
    /// empty rather than failing the session.
    pub fn saved_cards(&self) -> Vec<BingoCard> {
        self.store
            .get(&self.config.cards_key)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    fn most_recent_card(&self) -> Option<BingoCard> {
        self.saved_cards()
            .into_iter()
            .max_by_key(|card| card.created_at)
    }

    fn load_stats(&self) -> GameStats {
        self.store
            .get(&self.config.stats_key)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    fn save_stats(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.stats)?;
        self.store.set(&self.config.stats_key, json);
        Ok(())
    }

    fn install(&mut self, card: BingoCard) -> Result<&BingoCard> {
        self.current = Some(card);
        self.persist_current()?;
        self.current.as_ref().ok_or(BingoError::NoActiveCard)
    }

    /// Upsert the current card into the stored card list by id.
    fn persist_current(&mut self) -> Result<()> {
        let Some(card) = self.current.as_ref() else {
            return Ok(());
        };
        let mut cards = self.saved_cards();
        match cards.iter_mut().find(|c| c.id == card.id) {
            Some(existing) => *existing = card.clone(),
            None => cards.push(card.clone()),
        }
        let json = serde_json::to_string(&cards)?;
        self.store.set(&self.config.cards_key, json);
        Ok(())
    }
}
