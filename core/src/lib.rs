#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use sample::*;
pub use session::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod sample;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: Coord,
    pub challenge_size: CellCount,
    pub challenge_secs: u32,
    pub play_secs: u32,
    pub max_wrong_picks: u32,
}

impl GameConfig {
    pub const fn new_unchecked(
        grid_size: Coord,
        challenge_size: CellCount,
        challenge_secs: u32,
        play_secs: u32,
        max_wrong_picks: u32,
    ) -> Self {
        Self {
            grid_size,
            challenge_size,
            challenge_secs,
            play_secs,
            max_wrong_picks,
        }
    }

    /// Clamps every field into a playable range.
    pub fn new(
        grid_size: Coord,
        challenge_size: CellCount,
        challenge_secs: u32,
        play_secs: u32,
        max_wrong_picks: u32,
    ) -> Self {
        let grid_size = grid_size.clamp(1, Coord::MAX);
        let challenge_size = challenge_size.clamp(1, square(grid_size));
        Self::new_unchecked(
            grid_size,
            challenge_size,
            challenge_secs.max(1),
            play_secs.max(1),
            max_wrong_picks.max(1),
        )
    }

    /// Strict constructor, rejects what [`GameConfig::new`] would clamp.
    pub fn try_new(
        grid_size: Coord,
        challenge_size: CellCount,
        challenge_secs: u32,
        play_secs: u32,
        max_wrong_picks: u32,
    ) -> Result<Self> {
        if grid_size == 0 {
            return Err(GameError::EmptyGrid);
        }
        if challenge_size == 0 || challenge_size > square(grid_size) {
            return Err(GameError::ChallengeTooLarge);
        }
        if challenge_secs == 0 || play_secs == 0 || max_wrong_picks == 0 {
            return Err(GameError::InvalidTiming);
        }
        Ok(Self::new_unchecked(
            grid_size,
            challenge_size,
            challenge_secs,
            play_secs,
            max_wrong_picks,
        ))
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.grid_size)
    }
}

/// The immutable per-session draw: which cells of the grid the player has to
/// memorize. Fixed once constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengeLayout {
    grid_size: Coord,
    challenge: Vec<CellId>,
}

impl ChallengeLayout {
    pub fn from_cell_ids(grid_size: Coord, ids: &[CellId]) -> Result<Self> {
        let total = square(grid_size);
        let mut challenge = ids.to_vec();
        challenge.sort_unstable();
        challenge.dedup();
        if challenge.last().is_some_and(|&id| id >= total) {
            return Err(GameError::InvalidCellId);
        }
        Ok(Self {
            grid_size,
            challenge,
        })
    }

    pub fn validate_cell(&self, id: CellId) -> Result<CellId> {
        if id < self.total_cells() {
            Ok(id)
        } else {
            Err(GameError::InvalidCellId)
        }
    }

    pub fn grid_size(&self) -> Coord {
        self.grid_size
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.grid_size)
    }

    pub fn challenge_size(&self) -> CellCount {
        self.challenge.len().try_into().unwrap()
    }

    pub fn challenge_cells(&self) -> &[CellId] {
        &self.challenge
    }

    pub fn is_challenge(&self, id: CellId) -> bool {
        self.challenge.binary_search(&id).is_ok()
    }

    /// The full cell id sequence of the grid this challenge was drawn from.
    pub fn cell_ids(&self) -> Vec<CellId> {
        cell_sequence(self.total_cells())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_clamps_into_playable_range() {
        let config = GameConfig::new(0, 0, 0, 0, 0);
        assert_eq!(config.grid_size, 1);
        assert_eq!(config.challenge_size, 1);
        assert_eq!(config.challenge_secs, 1);
        assert_eq!(config.play_secs, 1);
        assert_eq!(config.max_wrong_picks, 1);

        let config = GameConfig::new(5, 100, 3, 10, 3);
        assert_eq!(config.challenge_size, 25);
    }

    #[test]
    fn config_try_new_rejects_what_new_clamps() {
        assert_eq!(GameConfig::try_new(0, 1, 3, 10, 3), Err(GameError::EmptyGrid));
        assert_eq!(
            GameConfig::try_new(5, 26, 3, 10, 3),
            Err(GameError::ChallengeTooLarge)
        );
        assert_eq!(
            GameConfig::try_new(5, 6, 3, 0, 3),
            Err(GameError::InvalidTiming)
        );
        assert!(GameConfig::try_new(5, 6, 3, 10, 3).is_ok());
    }

    #[test]
    fn layout_rejects_out_of_range_ids() {
        assert_eq!(
            ChallengeLayout::from_cell_ids(2, &[0, 4]),
            Err(GameError::InvalidCellId)
        );
    }

    #[test]
    fn layout_deduplicates_and_sorts() {
        let layout = ChallengeLayout::from_cell_ids(3, &[5, 1, 5, 7]).unwrap();
        assert_eq!(layout.challenge_cells(), &[1, 5, 7]);
        assert_eq!(layout.challenge_size(), 3);
        assert!(layout.is_challenge(5));
        assert!(!layout.is_challenge(2));
    }

    #[test]
    fn layout_exposes_the_full_cell_sequence() {
        let layout = ChallengeLayout::from_cell_ids(3, &[0]).unwrap();
        assert_eq!(layout.total_cells(), 9);
        assert_eq!(layout.cell_ids(), cell_sequence(9));
        assert_eq!(layout.validate_cell(8), Ok(8));
        assert_eq!(layout.validate_cell(9), Err(GameError::InvalidCellId));
    }
}
