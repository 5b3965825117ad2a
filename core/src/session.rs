use alloc::vec;
use alloc::vec::Vec;

use crate::*;

/// Monotonically increasing identity telling one play-through apart from the
/// next. Never reused within a [`GameSession`].
pub type SessionId = u32;

/// Handle the driver hands back when a timer fires. The session id pins the
/// timer to the play-through that armed it, so a timer surviving a reset can
/// be recognized and dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimerToken {
    pub session: SessionId,
    pub kind: TimerKind,
}

/// Instruction for the timer driver. `Arm` replaces any existing timer of
/// the same kind; `Cancel` drops it. [`TimerKind::Reveal`] is a one-shot of
/// `secs` seconds, [`TimerKind::Countdown`] a periodic tick of `secs`
/// seconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerEffect {
    Arm { token: TimerToken, secs: u32 },
    Cancel(TimerKind),
}

/// Owns the current [`Game`] plus everything that outlives it: the
/// configuration, the challenge generator, and the session identity.
/// Commands return the [`TimerEffect`] list the driver has to apply.
#[derive(Clone, Debug)]
pub struct GameSession<G> {
    config: GameConfig,
    generator: G,
    game: Game,
    session_id: SessionId,
}

impl GameSession<RandomChallengeGenerator> {
    /// Session fed by the default seeded generator.
    pub fn with_seed(config: GameConfig, seed: u64, auto_start: bool) -> (Self, Vec<TimerEffect>) {
        Self::new(config, RandomChallengeGenerator::new(seed), auto_start)
    }
}

impl<G: ChallengeGenerator> GameSession<G> {
    pub fn new(config: GameConfig, mut generator: G, auto_start: bool) -> (Self, Vec<TimerEffect>) {
        let layout = generator.generate(config);
        let game = Game::new(config, layout, auto_start);
        let session = Self {
            config,
            generator,
            game,
            session_id: 1,
        };
        let effects =
            session.tag(transition_timer_ops(GameStatus::New, session.game.status(), &config));
        (session, effects)
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn countdown(&self) -> u32 {
        self.game.countdown()
    }

    pub fn grid_size(&self) -> Coord {
        self.config.grid_size
    }

    pub fn cell_ids(&self) -> Vec<CellId> {
        self.game.layout().cell_ids()
    }

    pub fn challenge_cells(&self) -> &[CellId] {
        self.game.layout().challenge_cells()
    }

    pub fn picked_cells(&self) -> &[CellId] {
        self.game.picked_cells()
    }

    pub fn is_challenge(&self, id: CellId) -> bool {
        self.game.layout().is_challenge(id)
    }

    pub fn is_picked(&self, id: CellId) -> bool {
        self.game.is_picked(id)
    }

    /// Leaves [`GameStatus::New`] and puts the challenge on display.
    pub fn start_game(&mut self) -> Vec<TimerEffect> {
        let (_, effects) = self.apply(|game| game.start());
        effects
    }

    /// Forwards a pick to the current game.
    pub fn pick_cell(&mut self, id: CellId) -> (PickOutcome, Vec<TimerEffect>) {
        self.apply(|game| game.pick(id))
    }

    /// Consumes a fired timer. Tokens from a discarded session are dropped
    /// here, before the game ever sees them.
    pub fn timer_fired(&mut self, token: TimerToken) -> (TickOutcome, Vec<TimerEffect>) {
        if token.session != self.session_id {
            log::trace!(
                "dropping stale {:?} timer of session {}",
                token.kind,
                token.session
            );
            return (TickOutcome::NoChange, Vec::new());
        }
        self.apply(|game| game.timer_fired(token.kind))
    }

    /// Discards the running play-through and begins a fresh one: new session
    /// id, freshly drawn challenge, empty picked set, full countdown. The
    /// new session skips the manual start and goes straight to the
    /// challenge display.
    pub fn reset_game(&mut self) -> Vec<TimerEffect> {
        self.session_id += 1;
        let layout = self.generator.generate(self.config);
        self.game = Game::new(self.config, layout, true);
        log::debug!("session {} begins", self.session_id);

        let mut effects = vec![
            TimerEffect::Cancel(TimerKind::Reveal),
            TimerEffect::Cancel(TimerKind::Countdown),
        ];
        effects.extend(self.tag(transition_timer_ops(
            GameStatus::New,
            GameStatus::Challenge,
            &self.config,
        )));
        effects
    }

    fn apply<R>(&mut self, command: impl FnOnce(&mut Game) -> R) -> (R, Vec<TimerEffect>) {
        let prev = self.game.status();
        let outcome = command(&mut self.game);
        let ops = transition_timer_ops(prev, self.game.status(), &self.config);
        (outcome, self.tag(ops))
    }

    fn tag(&self, ops: Vec<TimerOp>) -> Vec<TimerEffect> {
        ops.into_iter()
            .map(|op| match op {
                TimerOp::Arm { kind, secs } => TimerEffect::Arm {
                    token: TimerToken {
                        session: self.session_id,
                        kind,
                    },
                    secs,
                },
                TimerOp::Cancel(kind) => TimerEffect::Cancel(kind),
            })
            .collect()
    }
}
