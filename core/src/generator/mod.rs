use crate::*;
pub use random::*;

mod random;

/// Draws the challenge cells for a new session. Takes `&mut self` so one
/// generator can feed every reset of a session while staying reproducible
/// from its seed.
pub trait ChallengeGenerator {
    fn generate(&mut self, config: GameConfig) -> ChallengeLayout;
}
