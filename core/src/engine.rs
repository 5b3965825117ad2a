use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - New -> Challenge (start command)
/// - Challenge -> Playing (reveal timer)
/// - Playing -> Won (last challenge cell picked)
/// - Playing -> Lost (wrong-pick limit or countdown exhausted)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for a manual start.
    New,
    /// Challenge cells are on display, memorize them.
    Challenge,
    /// Recall phase, picks are accepted and the countdown runs.
    Playing,
    /// Game ended and player won.
    Won,
    /// Game ended and player lost.
    Lost,
}

impl GameStatus {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::New)
    }

    /// Indicates the game has ended and no picks can be made anymore.
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn accepts_picks(self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::New
    }
}

/// The two timers a session can have in flight: a one-shot covering the
/// challenge display and the periodic one-second countdown tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerKind {
    Reveal,
    Countdown,
}

/// A timer the driver must arm or cancel after a transition. At most one
/// timer of each kind exists at a time, so `Arm` replaces and `Cancel` drops.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerOp {
    Arm { kind: TimerKind, secs: u32 },
    Cancel(TimerKind),
}

/// Timer bookkeeping implied by a status change: cancel what belongs to the
/// state being left, arm what the state being entered needs.
pub fn transition_timer_ops(
    prev: GameStatus,
    next: GameStatus,
    config: &GameConfig,
) -> Vec<TimerOp> {
    use GameStatus::*;

    let mut ops = Vec::new();
    if prev == next {
        return ops;
    }
    match prev {
        Challenge => ops.push(TimerOp::Cancel(TimerKind::Reveal)),
        Playing => ops.push(TimerOp::Cancel(TimerKind::Countdown)),
        _ => {}
    }
    match next {
        Challenge => ops.push(TimerOp::Arm {
            kind: TimerKind::Reveal,
            secs: config.challenge_secs,
        }),
        Playing => ops.push(TimerOp::Arm {
            kind: TimerKind::Countdown,
            secs: 1,
        }),
        _ => {}
    }
    ops
}

/// Outcome of a pick attempt
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PickOutcome {
    NoChange,
    Picked,
    Won,
    Lost,
}

impl PickOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use PickOutcome::*;
        match self {
            NoChange => false,
            Picked => true,
            Won => true,
            Lost => true,
        }
    }
}

/// Outcome of a timer event
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    NoChange,
    PlayStarted,
    Ticked,
    TimedOut,
}

impl TickOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            PlayStarted => true,
            Ticked => true,
            TimedOut => true,
        }
    }
}

/// One play-through of the memory grid, from challenge display to win or
/// loss. Owns no timers; it consumes timer events and reports, through
/// [`transition_timer_ops`], what the driver has to arm or cancel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    layout: ChallengeLayout,
    picked: Vec<CellId>,
    countdown: u32,
    status: GameStatus,
}

impl Game {
    pub fn new(config: GameConfig, layout: ChallengeLayout, auto_start: bool) -> Self {
        debug_assert_eq!(config.grid_size, layout.grid_size());
        let status = if auto_start {
            GameStatus::Challenge
        } else {
            GameStatus::New
        };
        Self {
            config,
            layout,
            picked: Vec::new(),
            countdown: config.play_secs,
            status,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn ended(&self) -> bool {
        self.status.is_final()
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &ChallengeLayout {
        &self.layout
    }

    /// Cell ids the player has picked so far, in pick order.
    pub fn picked_cells(&self) -> &[CellId] {
        &self.picked
    }

    pub fn is_picked(&self, id: CellId) -> bool {
        self.picked.contains(&id)
    }

    /// How many picks so far hit the challenge and how many missed it.
    pub fn correct_wrong_counts(&self) -> (usize, usize) {
        cross_counts(&self.picked, self.layout.challenge_cells())
    }

    /// Leaves the initial state and puts the challenge on display. A no-op
    /// anywhere but in [`GameStatus::New`].
    pub fn start(&mut self) -> bool {
        if self.status.is_initial() {
            self.status = GameStatus::Challenge;
            log::debug!("challenge on display for {}s", self.config.challenge_secs);
            true
        } else {
            false
        }
    }

    /// Records a pick and re-evaluates the win and loss thresholds, win
    /// first. Out-of-range ids, repeated ids, and picks outside the recall
    /// phase fall through as [`PickOutcome::NoChange`].
    pub fn pick(&mut self, id: CellId) -> PickOutcome {
        use PickOutcome::*;

        if !self.status.accepts_picks() {
            log::trace!("pick {} ignored in {:?}", id, self.status);
            return NoChange;
        }
        if self.layout.validate_cell(id).is_err() {
            log::trace!("pick {} ignored, outside the grid", id);
            return NoChange;
        }
        if self.picked.contains(&id) {
            return NoChange;
        }
        self.picked.push(id);

        let (correct, wrong) = self.correct_wrong_counts();
        log::trace!("picked {}, correct {} / wrong {}", id, correct, wrong);
        if correct == usize::from(self.layout.challenge_size()) {
            self.status = GameStatus::Won;
            log::debug!("all {} challenge cells found", correct);
            return Won;
        }
        if wrong >= self.config.max_wrong_picks as usize {
            self.status = GameStatus::Lost;
            log::debug!("wrong-pick limit of {} reached", self.config.max_wrong_picks);
            return Lost;
        }
        Picked
    }

    /// Consumes a timer event. Pairings other than reveal-while-challenge
    /// and tick-while-playing are stale timers and fall through as
    /// [`TickOutcome::NoChange`].
    pub fn timer_fired(&mut self, kind: TimerKind) -> TickOutcome {
        use TickOutcome::*;

        match (self.status, kind) {
            (GameStatus::Challenge, TimerKind::Reveal) => {
                self.countdown = self.config.play_secs;
                self.status = GameStatus::Playing;
                log::debug!("challenge hidden, {}s to answer", self.countdown);
                PlayStarted
            }
            (GameStatus::Playing, TimerKind::Countdown) => {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    self.status = GameStatus::Lost;
                    log::debug!("out of time");
                    TimedOut
                } else {
                    log::trace!("{}s left", self.countdown);
                    Ticked
                }
            }
            _ => {
                log::trace!("{:?} timer ignored in {:?}", kind, self.status);
                NoChange
            }
        }
    }
}
