use crate::settings::SettingsView;
use crate::utils::*;
use ursa_core as game;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn outcome_message(outcome: game::MoveOutcome) -> String {
    use game::MoveOutcome::*;
    match outcome {
        AlreadyRevealed => "That cell is already revealed.".to_string(),
        Won { payout } => format!("Safe! +{} coins", payout),
        Lost => "Boom! The bear took your bet.".to_string(),
    }
}

fn error_message(err: game::GameError) -> &'static str {
    use game::GameError::*;
    match err {
        InvalidCoords => "That cell is outside the board.",
        TooManyBombs => "Too many bears for this board.",
        InvalidBet => "Invalid bet!",
        BetLocked => "Bets are locked once you start revealing.",
        InsufficientFunds => "Out of coins. Game over!",
        RoundNotActive => "No active round. Start a new one!",
    }
}

fn parse_seed(arg: Option<&str>) -> Option<u64> {
    arg.and_then(|s| s.parse().ok())
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellClicked(game::Coord2),
    PlaceBet,
    NewRound,
    ToggleSettings,
}

#[derive(Properties, Debug, Clone, PartialEq, Default)]
pub(crate) struct GameProps {
    /// Force a seed for the first round instead of random.
    #[prop_or_default]
    pub seed: Option<String>,
    /// Override the starting balance, e.g. "250" or "99.50".
    #[prop_or_default]
    pub balance: Option<String>,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: game::Coord,
    y: game::Coord,
    cell_state: game::CellState,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use game::CellState::*;

    let CellProps {
        x,
        y,
        cell_state,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell_state {
            Hidden => classes!(),
            Safe => classes!("open", "safe"),
            Bomb => classes!("open", "bear", "oops"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        callback.emit((x, y));
        log::trace!("({}, {}) clicked", x, y);
    });

    html! {
        <td {class} {onclick}/>
    }
}

pub(crate) struct GameView {
    engine: game::GameEngine,
    seed: u64,
    bet_input: NodeRef,
    message: String,
    settings_open: bool,
}

impl GameView {
    fn cell_state_at(&self, coords: game::Coord2) -> game::CellState {
        self.engine
            .board()
            .map_or(game::CellState::Hidden, |board| board.cell_at(coords))
    }

    fn round_state_class(&self) -> Classes {
        use game::RoundState::*;
        classes!(match self.engine.state() {
            Idle => "not-started",
            Active => "in-progress",
            Busted => "lose",
        })
    }

    fn bet_input_value(&self) -> String {
        self.bet_input
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn clear_bet_input(&self) {
        if let Some(input) = self.bet_input.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    fn place_bet(&mut self) {
        self.message = match self.bet_input_value().parse::<game::Coins>() {
            Err(_) => error_message(game::GameError::InvalidBet).to_string(),
            Ok(amount) => match self.engine.place_bet(amount) {
                Ok(()) => format!("Bet accepted: {} coins. Pick a cell!", amount),
                Err(err) => error_message(err).to_string(),
            },
        };
    }

    fn play_move(&mut self, coords: game::Coord2) {
        self.message = match self.engine.play_move(coords) {
            Ok(outcome) => outcome_message(outcome),
            Err(err) => error_message(err).to_string(),
        };
    }

    fn new_round(&mut self) {
        self.seed = js_random_seed();
        let generator = game::RandomLayoutGenerator::new(self.seed);
        self.message = match self.engine.new_round(generator) {
            Ok(()) => {
                self.clear_bet_input();
                "New round started. Place your bet!".to_string()
            }
            Err(err) => error_message(err).to_string(),
        };
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();

        let mut config = game::GameConfig::default();
        if let Some(balance) = props
            .balance
            .as_deref()
            .and_then(|s| s.parse::<game::Coins>().ok())
        {
            config.initial_balance = balance;
        }

        let seed = parse_seed(props.seed.as_deref()).unwrap_or_else(js_random_seed);
        let mut engine = game::GameEngine::new(config);
        let message = match engine.new_round(game::RandomLayoutGenerator::new(seed)) {
            Ok(()) => "Welcome! Place your bet and pick a cell.".to_string(),
            Err(err) => error_message(err).to_string(),
        };

        Self {
            engine,
            seed,
            bet_input: NodeRef::default(),
            message,
            settings_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            // The board ignores clicks outside an active round, like the
            // reference UI.
            CellClicked(_) if !self.engine.round_active() => false,
            CellClicked(pos) => {
                log::debug!("reveal cell: {:?}", pos);
                self.play_move(pos);
                true
            }
            PlaceBet => {
                self.place_bet();
                true
            }
            NewRound => {
                self.new_round();
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let (cols, rows) = self.engine.config().size;
        let round_active = self.engine.round_active();
        let balance = format!("{}", self.engine.balance());
        let current_bet = format!("{}", self.engine.current_bet());

        let cb_new_round = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewRound
        });
        let cb_place_bet = ctx.link().callback(|_| PlaceBet);
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);

        html! {
            <div class="ursa" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <small onclick={cb_show_settings}>{"···"}</small>
                <nav>
                    <aside class="balance">{balance}</aside>
                    <span>
                        <button
                            class={self.round_state_class()}
                            onclick={cb_new_round}
                            disabled={round_active}
                        />
                    </span>
                    <aside class="bet">{current_bet}</aside>
                </nav>
                <fieldset class="wager">
                    <input ref={self.bet_input.clone()} placeholder="bet"/>
                    <button onclick={cb_place_bet}>{"Bet"}</button>
                </fieldset>
                <p class="message">{self.message.clone()}</p>
                <table class={round_active.then_some("playable")}>
                    {
                        for (0..rows).map(|y| html! {
                            <tr>
                                {
                                    for (0..cols).map(|x| {
                                        let pos = (x, y);
                                        let cell_state = self.cell_state_at(pos);
                                        let locked = !round_active || cell_state.is_revealed();
                                        let callback = ctx.link().callback(Msg::CellClicked);
                                        html! {
                                            <CellView {x} {y} {cell_state} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <SettingsView open={self.settings_open}/>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ursa_core::{Coins, GameError, MoveOutcome};

    #[test]
    fn payout_message_includes_the_amount() {
        let msg = outcome_message(MoveOutcome::Won {
            payout: Coins::from_whole(30),
        });
        assert_eq!(msg, "Safe! +30.00 coins");
    }

    #[test]
    fn every_error_maps_to_a_status_line() {
        for err in [
            GameError::InvalidCoords,
            GameError::TooManyBombs,
            GameError::InvalidBet,
            GameError::BetLocked,
            GameError::InsufficientFunds,
            GameError::RoundNotActive,
        ] {
            assert!(!error_message(err).is_empty());
        }
    }

    #[test]
    fn seed_arg_parses_only_integers() {
        assert_eq!(parse_seed(Some("42")), Some(42));
        assert_eq!(parse_seed(Some("bear")), None);
        assert_eq!(parse_seed(None), None);
    }
}
