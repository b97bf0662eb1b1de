use std::cmp::Ordering;

use serde::Serialize;

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::{Deck, RandomSource, SeededRandom};
use crate::errors::GameError;
use crate::game::{BettingState, Round};
use crate::hand::evaluate_hand;
use crate::logger::{timestamp_now, ActionRecord, HandRecord, Outcome, OutcomeReason};
use crate::player::{HoleCards, PlayerAction, Seat, MAX_STARTING_CHIPS};
use crate::policy::{create_policy, ComputerDecision, ComputerPolicy, PolicyContext};
use crate::rules::{validate_action, ValidatedAction};

/// One heads-up session: the shuffled deck, both hands, the board, the chip
/// accounting and the computer policy.
///
/// Every action either applies completely and returns a fresh [`GameSnapshot`],
/// or is rejected with a [`GameError`] and leaves the session untouched.
///
/// # Examples
///
/// ```
/// use holdem_duel_engine::config::TableConfig;
/// use holdem_duel_engine::engine::Engine;
/// use holdem_duel_engine::game::Round;
///
/// let config = TableConfig { seed: Some(7), ..TableConfig::default() };
/// let mut engine = Engine::start(&config).expect("default policy exists");
///
/// let snap = engine.bet(10).expect("bet is legal pre-flop");
/// assert_eq!(snap.pot, 10);
/// assert_eq!(snap.player_chips, 90);
///
/// // The computer answers the raise immediately
/// let snap = engine.raise(10).expect("raise is legal while a bet is outstanding");
/// assert_eq!(snap.current_bet, 0);
/// assert_eq!(snap.pot, 50);
/// assert_eq!(snap.round, Round::PreFlop);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Cards left after the deal
    deck: Deck,
    player_hole: HoleCards,
    computer_hole: HoleCards,
    /// All five community cards; visibility depends on the round
    community: [Card; 5],
    round: Round,
    betting: BettingState,
    bet_unit: u32,
    /// Presentation flag, never consulted by the game logic
    computer_revealed: bool,
    policy: Box<dyn ComputerPolicy>,
    seed: Option<u64>,
    started_at: String,
    actions: Vec<ActionRecord>,
    outcome: Option<Outcome>,
}

/// Read-only view of a session handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub round: Round,
    pub cards_to_show: usize,
    pub pot: u32,
    pub player_chips: u32,
    pub computer_chips: u32,
    pub player_hand: [Card; 2],
    /// `None` until the computer's hand is revealed
    pub computer_hand: Option<[Card; 2]>,
    /// Community cards sliced to `cards_to_show`
    pub community: Vec<Card>,
    pub current_bet: u32,
    pub bet_unit: u32,
    pub player_folded: bool,
    pub computer_folded: bool,
    pub game_over: bool,
    /// Actions the player can take right now
    pub available_actions: Vec<PlayerAction>,
    pub outcome: Option<Outcome>,
}

impl Engine {
    /// Starts a session from `config`, shuffling with its seed or a fresh one.
    pub fn start(config: &TableConfig) -> Result<Self, GameError> {
        let policy = create_policy(&config.policy)?;
        let mut source = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_thread_rng(),
        };
        let seed = source.seed();
        let mut engine = Self::start_with(config, policy, &mut source)?;
        engine.seed = Some(seed);
        Ok(engine)
    }

    /// Starts a session shuffled by an explicit source. `config.seed` is ignored.
    pub fn start_with_source<R: RandomSource + ?Sized>(
        config: &TableConfig,
        source: &mut R,
    ) -> Result<Self, GameError> {
        let policy = create_policy(&config.policy)?;
        Self::start_with(config, policy, source)
    }

    /// Starts a session with a caller-supplied policy and random source.
    pub fn start_with<R: RandomSource + ?Sized>(
        config: &TableConfig,
        policy: Box<dyn ComputerPolicy>,
        source: &mut R,
    ) -> Result<Self, GameError> {
        if config.starting_chips == 0 || config.starting_chips > MAX_STARTING_CHIPS {
            return Err(GameError::InvalidStartingChips {
                amount: config.starting_chips,
                max: MAX_STARTING_CHIPS,
            });
        }
        let mut deck = Deck::new();
        deck.shuffle(source);
        let player_hole = HoleCards(take_cards(&mut deck)?);
        let computer_hole = HoleCards(take_cards(&mut deck)?);
        let community: [Card; 5] = take_cards(&mut deck)?;

        tracing::info!(
            policy = policy.name(),
            starting_chips = config.starting_chips,
            bet_unit = config.bet_unit,
            "session started"
        );

        Ok(Self {
            deck,
            player_hole,
            computer_hole,
            community,
            round: Round::PreFlop,
            betting: BettingState::new(config.starting_chips),
            bet_unit: config.bet_unit,
            computer_revealed: false,
            policy,
            seed: None,
            started_at: timestamp_now(),
            actions: Vec::new(),
            outcome: None,
        })
    }

    pub fn check(&mut self) -> Result<GameSnapshot, GameError> {
        self.apply(PlayerAction::Check)
    }

    pub fn bet(&mut self, amount: u32) -> Result<GameSnapshot, GameError> {
        self.apply(PlayerAction::Bet(amount))
    }

    pub fn call(&mut self) -> Result<GameSnapshot, GameError> {
        self.apply(PlayerAction::Call)
    }

    pub fn raise(&mut self, amount: u32) -> Result<GameSnapshot, GameError> {
        self.apply(PlayerAction::Raise(amount))
    }

    pub fn fold(&mut self) -> Result<GameSnapshot, GameError> {
        self.apply(PlayerAction::Fold)
    }

    /// Moves to the next round even with a bet outstanding.
    pub fn next_round(&mut self) -> Result<GameSnapshot, GameError> {
        self.apply(PlayerAction::NextRound)
    }

    /// Applies one player action.
    ///
    /// A plain `Bet` leaves the computer's answer pending; only a `Raise`
    /// consults the policy. Reaching the showdown, or folding, settles the pot
    /// within the same call.
    pub fn apply(&mut self, action: PlayerAction) -> Result<GameSnapshot, GameError> {
        let validated = match validate_action(&self.betting, action) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(?action, round = ?self.round, error = %err, "action rejected");
                return Err(err);
            }
        };

        match validated {
            ValidatedAction::Check => {
                self.record(Seat::Player, action);
                self.advance_round();
            }
            ValidatedAction::Bet(amount) => {
                self.betting.commit(Seat::Player, amount)?;
                self.betting.set_current_bet(amount);
                self.record(Seat::Player, action);
            }
            ValidatedAction::Call(amount) => {
                self.betting.commit(Seat::Player, amount)?;
                self.betting.set_current_bet(0);
                self.record(Seat::Player, action);
                self.advance_round();
            }
            ValidatedAction::Raise(cost) => {
                self.betting.commit(Seat::Player, cost)?;
                self.betting.set_current_bet(cost);
                self.record(Seat::Player, action);
                self.computer_respond()?;
            }
            ValidatedAction::Fold => {
                self.betting.mark_player_folded();
                self.record(Seat::Player, action);
                self.resolve();
            }
            ValidatedAction::NextRound => {
                self.record(Seat::Player, action);
                self.advance_round();
            }
        }

        tracing::debug!(
            ?action,
            round = ?self.round,
            pot = self.betting.pot(),
            player_chips = self.betting.player_chips(),
            computer_chips = self.betting.computer_chips(),
            current_bet = self.betting.current_bet(),
            "action applied"
        );
        Ok(self.snapshot())
    }

    /// Shows the computer's hole cards in subsequent snapshots.
    pub fn reveal_computer_hand(&mut self) -> GameSnapshot {
        self.computer_revealed = true;
        self.snapshot()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let cards_to_show = self.round.cards_to_show();
        GameSnapshot {
            round: self.round,
            cards_to_show,
            pot: self.betting.pot(),
            player_chips: self.betting.player_chips(),
            computer_chips: self.betting.computer_chips(),
            player_hand: self.player_hole.cards(),
            computer_hand: self.computer_revealed.then(|| self.computer_hole.cards()),
            community: self.community[..cards_to_show].to_vec(),
            current_bet: self.betting.current_bet(),
            bet_unit: self.bet_unit,
            player_folded: self.betting.player_folded(),
            computer_folded: self.betting.computer_folded(),
            game_over: self.betting.game_over(),
            available_actions: self.available_actions(),
            outcome: self.outcome.clone(),
        }
    }

    /// Player actions that would currently be accepted, sized with the bet unit.
    pub fn available_actions(&self) -> Vec<PlayerAction> {
        let candidates = if self.betting.current_bet() == 0 {
            [PlayerAction::Check, PlayerAction::Bet(self.bet_unit)]
        } else {
            [PlayerAction::Call, PlayerAction::Raise(self.bet_unit)]
        };
        candidates
            .into_iter()
            .chain([PlayerAction::Fold, PlayerAction::NextRound])
            .filter(|&a| validate_action(&self.betting, a).is_ok())
            .collect()
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn betting(&self) -> &BettingState {
        &self.betting
    }

    pub fn bet_unit(&self) -> u32 {
        self.bet_unit
    }

    pub fn is_game_over(&self) -> bool {
        self.betting.game_over()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Seed of the shuffle when the session came from [`Engine::start`].
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn hand_record(&self) -> HandRecord {
        HandRecord {
            seed: self.seed,
            started_at: self.started_at.clone(),
            player_hole: self.player_hole,
            computer_hole: self.computer_hole,
            board: self.community.to_vec(),
            actions: self.actions.clone(),
            outcome: self.outcome.clone(),
        }
    }

    fn record(&mut self, seat: Seat, action: PlayerAction) {
        self.actions.push(ActionRecord {
            seat,
            round: self.round,
            action,
            pot_after: self.betting.pot(),
        });
    }

    fn advance_round(&mut self) {
        if self.round == Round::Showdown {
            return;
        }
        self.round = self.round.next();
        if self.round == Round::Showdown {
            self.resolve();
        }
    }

    fn computer_respond(&mut self) -> Result<(), GameError> {
        let ctx = PolicyContext {
            current_bet: self.betting.current_bet(),
            computer_chips: self.betting.computer_chips(),
            pot: self.betting.pot(),
            round: self.round,
        };
        let decision = self.policy.respond(&ctx);
        tracing::debug!(
            policy = self.policy.name(),
            ?decision,
            to_call = ctx.current_bet,
            "computer decision"
        );

        match decision {
            ComputerDecision::Call if ctx.computer_chips >= ctx.current_bet => {
                self.betting.commit(Seat::Computer, ctx.current_bet)?;
                self.betting.set_current_bet(0);
                self.record(Seat::Computer, PlayerAction::Call);
            }
            _ => {
                self.betting.mark_computer_folded();
                self.record(Seat::Computer, PlayerAction::Fold);
                let pot = self.betting.award_pot(Seat::Player);
                self.finish(Outcome {
                    winner: Some(Seat::Player),
                    reason: OutcomeReason::ComputerFolded,
                    pot,
                    player_rank: None,
                    computer_rank: None,
                    split_remainder: 0,
                });
            }
        }
        Ok(())
    }

    // Settles the pot after a player fold or on reaching the showdown.
    fn resolve(&mut self) {
        if self.betting.player_folded() {
            let pot = self.betting.award_pot(Seat::Computer);
            self.finish(Outcome {
                winner: Some(Seat::Computer),
                reason: OutcomeReason::PlayerFolded,
                pot,
                player_rank: None,
                computer_rank: None,
                split_remainder: 0,
            });
            return;
        }

        let pot = self.betting.pot();
        let player_rank = evaluate_hand(&self.player_hole.with_board(&self.community));
        let computer_rank = evaluate_hand(&self.computer_hole.with_board(&self.community));
        let (winner, split_remainder) = match player_rank.cmp(&computer_rank) {
            Ordering::Greater => {
                self.betting.award_pot(Seat::Player);
                (Some(Seat::Player), 0)
            }
            Ordering::Less => {
                self.betting.award_pot(Seat::Computer);
                (Some(Seat::Computer), 0)
            }
            Ordering::Equal => {
                let (_, remainder) = self.betting.split_pot();
                (None, remainder)
            }
        };
        self.finish(Outcome {
            winner,
            reason: OutcomeReason::Showdown,
            pot,
            player_rank: Some(player_rank),
            computer_rank: Some(computer_rank),
            split_remainder,
        });
    }

    fn finish(&mut self, outcome: Outcome) {
        self.betting.finish();
        tracing::info!(
            winner = ?outcome.winner,
            reason = ?outcome.reason,
            pot = outcome.pot,
            player_rank = ?outcome.player_rank,
            computer_rank = ?outcome.computer_rank,
            "hand resolved"
        );
        self.outcome = Some(outcome);
    }
}

fn take_cards<const N: usize>(deck: &mut Deck) -> Result<[Card; N], GameError> {
    let remaining = deck.remaining();
    deck.deal(N)?
        .try_into()
        .map_err(|_| GameError::DeckExhausted {
            requested: N,
            remaining,
        })
}
