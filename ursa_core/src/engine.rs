use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    /// No round has been started yet.
    Idle,
    /// A round is in progress; cells can be revealed.
    Active,
    /// The round ended on a bomb; a new round must be started.
    Busted,
}

impl RoundState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    AlreadyRevealed,
    Won { payout: Coins },
    Lost,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            AlreadyRevealed => false,
            Won { .. } => true,
            Lost => true,
        }
    }
}

/// Balance, bet, and round bookkeeping around a [`Board`].
///
/// The balance persists across rounds; the board is replaced wholesale on each
/// new round and no history is kept. Every operation is a synchronous state
/// transition, and a failed operation leaves the engine untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    config: GameConfig,
    balance: Coins,
    current_bet: Coins,
    bet_locked: bool,
    board: Option<Board>,
    state: RoundState,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            balance: config.initial_balance,
            current_bet: Coins::ZERO,
            bet_locked: false,
            board: None,
            state: RoundState::default(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn balance(&self) -> Coins {
        self.balance
    }

    pub fn current_bet(&self) -> Coins {
        self.current_bet
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn round_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Starts a fresh round, discarding any previous board.
    ///
    /// The stale bet from the previous round is reset to zero; a new bet must
    /// be placed before safe reveals pay anything.
    pub fn new_round(&mut self, generator: impl LayoutGenerator) -> Result<()> {
        if self.balance.is_zero() {
            return Err(GameError::InsufficientFunds);
        }

        let layout = generator.generate(self.config);
        self.board = Some(Board::new(layout));
        self.state = RoundState::Active;
        self.current_bet = Coins::ZERO;
        self.bet_locked = false;
        log::debug!("New round started, balance {}", self.balance);
        Ok(())
    }

    /// Stakes `amount` for the current round, deducting it immediately.
    ///
    /// Rejected once any cell has been revealed this round. Betting again
    /// before the first reveal deducts again and replaces the recorded bet,
    /// matching the reference behavior.
    pub fn place_bet(&mut self, amount: Coins) -> Result<()> {
        if !self.state.is_active() {
            return Err(GameError::RoundNotActive);
        }
        if self.bet_locked {
            return Err(GameError::BetLocked);
        }
        if amount.is_zero() {
            return Err(GameError::InvalidBet);
        }
        let Some(remaining) = self.balance.checked_sub(amount) else {
            return Err(GameError::InvalidBet);
        };

        self.balance = remaining;
        self.current_bet = amount;
        Ok(())
    }

    /// Reveals one cell. Every safe reveal pays `payout_percent` of the
    /// original bet, so a round with many safe reveals compounds additively;
    /// this is the defined payout rule, preserved as-is.
    pub fn play_move(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        if !self.state.is_active() {
            return Err(GameError::RoundNotActive);
        }
        let Some(board) = self.board.as_mut() else {
            return Err(GameError::RoundNotActive);
        };

        Ok(match board.reveal(coords)? {
            RevealOutcome::AlreadyRevealed => MoveOutcome::AlreadyRevealed,
            RevealOutcome::Bomb => {
                // The bet was already deducted when placed; nothing is
                // returned.
                self.bet_locked = true;
                self.state = RoundState::Busted;
                log::debug!("Bomb at {:?}, round over", coords);
                MoveOutcome::Lost
            }
            RevealOutcome::Safe => {
                self.bet_locked = true;
                let payout = self.current_bet.scale_percent(self.config.payout_percent);
                self.balance = self.balance.saturating_add(payout);
                MoveOutcome::Won { payout }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands the engine a predetermined layout so tests can aim at known
    /// bombs.
    struct FixedLayout(BombLayout);

    impl LayoutGenerator for FixedLayout {
        fn generate(self, _config: GameConfig) -> BombLayout {
            self.0
        }
    }

    fn engine_with_bombs(bombs: &[Coord2]) -> GameEngine {
        let mut engine = GameEngine::new(GameConfig::default());
        let layout = BombLayout::from_bomb_coords((5, 5), bombs).unwrap();
        engine.new_round(FixedLayout(layout)).unwrap();
        engine
    }

    #[test]
    fn new_round_with_zero_balance_is_insufficient_funds() {
        let mut config = GameConfig::default();
        config.initial_balance = Coins::ZERO;
        let mut engine = GameEngine::new(config);

        assert_eq!(
            engine.new_round(RandomLayoutGenerator::new(1)),
            Err(GameError::InsufficientFunds)
        );
        assert!(engine.board().is_none());
        assert_eq!(engine.state(), RoundState::Idle);
    }

    #[test]
    fn invalid_bets_leave_state_unchanged() {
        let mut config = GameConfig::default();
        config.initial_balance = Coins::from_whole(10);
        let mut engine = GameEngine::new(config);
        engine.new_round(RandomLayoutGenerator::new(1)).unwrap();

        assert_eq!(
            engine.place_bet(Coins::from_whole(20)),
            Err(GameError::InvalidBet)
        );
        assert_eq!(engine.place_bet(Coins::ZERO), Err(GameError::InvalidBet));
        assert_eq!(engine.balance(), Coins::from_whole(10));
        assert_eq!(engine.current_bet(), Coins::ZERO);
    }

    #[test]
    fn bet_before_any_round_is_round_not_active() {
        let mut engine = GameEngine::new(GameConfig::default());

        assert_eq!(
            engine.place_bet(Coins::from_whole(10)),
            Err(GameError::RoundNotActive)
        );
    }

    #[test]
    fn safe_reveal_pays_then_bomb_forfeits_the_bet() {
        let mut engine = engine_with_bombs(&[(0, 0)]);

        engine.place_bet(Coins::from_whole(20)).unwrap();
        assert_eq!(engine.balance(), Coins::from_whole(80));
        assert_eq!(engine.current_bet(), Coins::from_whole(20));

        assert_eq!(
            engine.play_move((1, 1)).unwrap(),
            MoveOutcome::Won {
                payout: Coins::from_whole(30)
            }
        );
        assert_eq!(engine.balance(), Coins::from_whole(110));
        assert!(engine.round_active());

        assert_eq!(engine.play_move((0, 0)).unwrap(), MoveOutcome::Lost);
        assert_eq!(engine.state(), RoundState::Busted);
        // Bet already spent, no further deduction.
        assert_eq!(engine.balance(), Coins::from_whole(110));

        assert_eq!(engine.play_move((2, 2)), Err(GameError::RoundNotActive));
    }

    #[test]
    fn already_revealed_cell_is_a_no_op() {
        let mut engine = engine_with_bombs(&[(0, 0)]);
        engine.place_bet(Coins::from_whole(20)).unwrap();

        engine.play_move((1, 1)).unwrap();
        let balance = engine.balance();

        assert_eq!(
            engine.play_move((1, 1)).unwrap(),
            MoveOutcome::AlreadyRevealed
        );
        assert_eq!(engine.balance(), balance);
        assert!(engine.round_active());
    }

    #[test]
    fn bets_lock_after_the_first_reveal() {
        let mut engine = engine_with_bombs(&[(0, 0)]);
        engine.place_bet(Coins::from_whole(10)).unwrap();
        engine.play_move((1, 1)).unwrap();

        assert_eq!(
            engine.place_bet(Coins::from_whole(5)),
            Err(GameError::BetLocked)
        );
    }

    #[test]
    fn rebetting_before_the_first_reveal_deducts_again() {
        let mut engine = engine_with_bombs(&[(0, 0)]);

        engine.place_bet(Coins::from_whole(20)).unwrap();
        engine.place_bet(Coins::from_whole(30)).unwrap();

        assert_eq!(engine.balance(), Coins::from_whole(50));
        assert_eq!(engine.current_bet(), Coins::from_whole(30));
    }

    #[test]
    fn new_round_resets_the_stale_bet() {
        let mut engine = engine_with_bombs(&[(0, 0)]);
        engine.place_bet(Coins::from_whole(20)).unwrap();
        engine.play_move((0, 0)).unwrap();

        let layout = BombLayout::from_bomb_coords((5, 5), &[(0, 0)]).unwrap();
        engine.new_round(FixedLayout(layout)).unwrap();

        assert_eq!(engine.current_bet(), Coins::ZERO);
        assert!(engine.round_active());

        // A reveal without a fresh bet pays nothing.
        assert_eq!(
            engine.play_move((1, 1)).unwrap(),
            MoveOutcome::Won {
                payout: Coins::ZERO
            }
        );
    }

    #[test]
    fn revealing_every_safe_cell_compounds_additively() {
        let bombs = [(0_u8, 0_u8), (1, 0), (2, 0), (3, 0), (4, 0)];
        let mut engine = engine_with_bombs(&bombs);
        engine.place_bet(Coins::from_whole(20)).unwrap();

        for x in 0..5 {
            for y in 1..5 {
                assert_eq!(
                    engine.play_move((x, y)).unwrap(),
                    MoveOutcome::Won {
                        payout: Coins::from_whole(30)
                    }
                );
            }
        }

        // 100 - 20 + 20 * 30 = 680, and the round never ends on its own.
        assert_eq!(engine.balance(), Coins::from_whole(680));
        assert!(engine.round_active());
    }
}
