use crate::utils::js_random_seed;
use gloo::timers::callback::{Interval, Timeout};
use memorito_core::{
    CellCount, CellId, Coord, GameConfig, GameSession, GameStatus, RandomChallengeGenerator,
    TimerEffect, TimerKind, TimerToken,
};
use yew::prelude::*;

const GRID_SIZE: Coord = 5;
const CHALLENGE_SIZE: CellCount = 6;
const CHALLENGE_SECS: u32 = 3;
const PLAY_SECS: u32 = 10;
const MAX_WRONG_PICKS: u32 = 3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartGame,
    CellClicked(CellId),
    ResetGame,
    TimerFired(TimerToken),
}

/// Background tone of one cell.
#[derive(Copy, Clone, Debug, PartialEq)]
enum CellTone {
    Plain,
    Highlight,
    Correct,
    Wrong,
}

impl CellTone {
    const fn class(self) -> Option<&'static str> {
        use CellTone::*;
        match self {
            Plain => None,
            Highlight => Some("highlight"),
            Correct => Some("correct"),
            Wrong => Some("wrong"),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    id: CellId,
    tone: CellTone,
    on_pick: Callback<CellId>,
}

#[function_component(Cell)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps { id, tone, on_pick } = props.clone();
    let class = classes!("cell", tone.class());
    let onclick = Callback::from(move |_: MouseEvent| on_pick.emit(id));

    html! {
        <td {class} {onclick}/>
    }
}

const fn status_message(status: GameStatus) -> &'static str {
    use GameStatus::*;
    match status {
        New => "You will have a few seconds to memorize the blue random cells",
        Challenge => "Remember these blue cells now",
        Playing => "Which cells were blue?",
        Won => "Victory!",
        Lost => "Game Over",
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    session: GameSession<RandomChallengeGenerator>,
    reveal_timer: Option<Timeout>,
    countdown_timer: Option<Interval>,
}

impl GameView {
    fn apply_timer_effects(&mut self, ctx: &Context<Self>, effects: Vec<TimerEffect>) {
        for effect in effects {
            match effect {
                TimerEffect::Arm { token, secs } => self.arm_timer(ctx, token, secs),
                TimerEffect::Cancel(kind) => self.cancel_timer(kind),
            }
        }
    }

    fn arm_timer(&mut self, ctx: &Context<Self>, token: TimerToken, secs: u32) {
        let link = ctx.link().clone();
        match token.kind {
            TimerKind::Reveal => {
                self.reveal_timer = Some(Timeout::new(secs * 1_000, move || {
                    link.send_message(Msg::TimerFired(token));
                }));
            }
            TimerKind::Countdown => {
                self.countdown_timer = Some(Interval::new(secs * 1_000, move || {
                    link.send_message(Msg::TimerFired(token));
                }));
            }
        }
    }

    fn cancel_timer(&mut self, kind: TimerKind) {
        // dropping a gloo timer clears it
        match kind {
            TimerKind::Reveal => self.reveal_timer = None,
            TimerKind::Countdown => self.countdown_timer = None,
        }
    }

    fn cell_tone(&self, id: CellId) -> CellTone {
        use GameStatus::*;

        let status = self.session.status();
        if status.is_initial() {
            return CellTone::Plain;
        }
        if self.session.is_picked(id) {
            return if self.session.is_challenge(id) {
                CellTone::Correct
            } else {
                CellTone::Wrong
            };
        }
        if self.session.is_challenge(id) && matches!(status, Challenge | Lost) {
            return CellTone::Highlight;
        }
        CellTone::Plain
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let config = GameConfig::new(
            GRID_SIZE,
            CHALLENGE_SIZE,
            CHALLENGE_SECS,
            PLAY_SECS,
            MAX_WRONG_PICKS,
        );
        let (session, effects) = GameSession::with_seed(config, seed, false);
        let mut view = Self {
            session,
            reveal_timer: None,
            countdown_timer: None,
        };
        view.apply_timer_effects(ctx, effects);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartGame => {
                let effects = self.session.start_game();
                self.apply_timer_effects(ctx, effects);
                true
            }
            CellClicked(id) => {
                log::debug!("cell {} clicked", id);
                let (outcome, effects) = self.session.pick_cell(id);
                self.apply_timer_effects(ctx, effects);
                outcome.has_update()
            }
            TimerFired(token) => {
                let (outcome, effects) = self.session.timer_fired(token);
                self.apply_timer_effects(ctx, effects);
                outcome.has_update()
            }
            ResetGame => {
                let effects = self.session.reset_game();
                self.apply_timer_effects(ctx, effects);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let grid = self.session.grid_size();
        let status = self.session.status();
        let on_pick = ctx.link().callback(CellClicked);
        let cb_start = ctx.link().callback(|_| StartGame);
        let cb_reset = ctx.link().callback(|_| ResetGame);

        let action = match status {
            GameStatus::New => html! {
                <button onclick={cb_start}>{"Start Game"}</button>
            },
            GameStatus::Challenge | GameStatus::Playing => html! {
                { self.session.countdown() }
            },
            GameStatus::Won | GameStatus::Lost => html! {
                <button onclick={cb_reset}>{"Play Again"}</button>
            },
        };

        html! {
            <div class="memorito">
                <table>
                    {
                        for (0..grid).map(|row| html! {
                            <tr>
                                {
                                    for (0..grid).map(|col| {
                                        let id = CellId::from(row) * CellId::from(grid) + CellId::from(col);
                                        let tone = self.cell_tone(id);
                                        html! {
                                            <Cell {id} {tone} on_pick={on_pick.clone()}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <footer>
                    <div class="message">{ status_message(status) }</div>
                    <div class="action">{ action }</div>
                </footer>
            </div>
        }
    }
}
