//! Memo of built movements, keyed by configuration.
//!
//! Movements are immutable once built, so concurrent callers share one
//! `Arc`. Two callers racing on the same missing key may both build it; the
//! first insert wins and both results are identical.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use super::catalog::{MovementKey, MovementVersion};
use super::schedule::Movement;
use crate::errors::TournamentError;

pub struct MovementCache {
    movements: DashMap<MovementKey, Arc<Movement>>,
}

impl MovementCache {
    pub fn new() -> Self {
        Self {
            movements: DashMap::new(),
        }
    }

    /// Fast path: the cached movement, if any.
    pub fn get(&self, key: &MovementKey) -> Option<Arc<Movement>> {
        self.movements.get(key).map(|entry| entry.value().clone())
    }

    /// Returns the cached movement for `key`, building it on first use.
    pub fn get_or_create(&self, key: MovementKey) -> Result<Arc<Movement>, TournamentError> {
        if let Some(cached) = self.get(&key) {
            debug!(pair_count = key.pair_count, "movement served from cache");
            return Ok(cached);
        }
        let built = Arc::new(Movement::build(key)?);
        let entry = self.movements.entry(key).or_insert(built);
        Ok(entry.value().clone())
    }

    /// Looks up a movement from raw configuration values.
    pub fn create_movement(
        &self,
        pair_count: u32,
        hands_per_round: u32,
        round_count: u32,
        legacy_version: Option<u32>,
    ) -> Result<Arc<Movement>, TournamentError> {
        let version = MovementVersion::from_legacy_id(legacy_version)?;
        self.get_or_create(
            MovementKey::new(pair_count, hands_per_round, round_count).with_version(version),
        )
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    pub fn clear(&self) {
        self.movements.clear();
    }
}

impl Default for MovementCache {
    fn default() -> Self {
        Self::new()
    }
}
