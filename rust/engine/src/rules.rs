use crate::errors::GameError;
use crate::game::BettingState;
use crate::player::PlayerAction as A;

/// A player action that passed [`validate_action`], carrying the chips it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Check,
    /// Opening bet; the amount becomes the outstanding bet.
    Bet(u32),
    /// Pays the outstanding bet.
    Call(u32),
    /// Pays the outstanding bet plus the raise; that total becomes the new outstanding bet.
    Raise(u32),
    Fold,
    NextRound,
}

/// Checks a player action against the current betting state.
///
/// Nothing is mutated here; the engine applies the returned [`ValidatedAction`]
/// only when this succeeds, which is what keeps rejected actions side-effect free.
///
/// # Errors
///
/// - [`GameError::InvalidActionForState`] - the session is over, or the action
///   does not fit the outstanding bet (check or bet while one is owed, call or
///   raise when nothing is owed)
/// - [`GameError::InvalidBetAmount`] - a bet or raise of zero chips
/// - [`GameError::InsufficientChips`] - the player cannot cover the cost
///
/// # Examples
///
/// ```
/// use holdem_duel_engine::errors::GameError;
/// use holdem_duel_engine::game::BettingState;
/// use holdem_duel_engine::player::PlayerAction;
/// use holdem_duel_engine::rules::{validate_action, ValidatedAction};
///
/// let state = BettingState::new(100);
/// assert_eq!(
///     validate_action(&state, PlayerAction::Bet(10)),
///     Ok(ValidatedAction::Bet(10))
/// );
/// assert!(matches!(
///     validate_action(&state, PlayerAction::Call),
///     Err(GameError::InvalidActionForState { .. })
/// ));
/// assert!(matches!(
///     validate_action(&state, PlayerAction::Bet(500)),
///     Err(GameError::InsufficientChips { .. })
/// ));
/// ```
pub fn validate_action(state: &BettingState, action: A) -> Result<ValidatedAction, GameError> {
    if state.game_over() {
        return Err(GameError::InvalidActionForState {
            action: action.name(),
            reason: "the hand is over",
        });
    }
    let stack = state.player_chips();
    let to_call = state.current_bet();

    match action {
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::InvalidActionForState {
                    action: action.name(),
                    reason: "a bet is outstanding",
                })
            }
        }
        A::Bet(amount) => {
            if to_call > 0 {
                return Err(GameError::InvalidActionForState {
                    action: action.name(),
                    reason: "a bet is already outstanding",
                });
            }
            if amount == 0 {
                return Err(GameError::InvalidBetAmount { amount });
            }
            ensure_covered(stack, amount)?;
            Ok(ValidatedAction::Bet(amount))
        }
        A::Call => {
            if to_call == 0 {
                return Err(GameError::InvalidActionForState {
                    action: action.name(),
                    reason: "there is no bet to call",
                });
            }
            ensure_covered(stack, to_call)?;
            Ok(ValidatedAction::Call(to_call))
        }
        A::Raise(amount) => {
            if to_call == 0 {
                return Err(GameError::InvalidActionForState {
                    action: action.name(),
                    reason: "there is no bet to raise",
                });
            }
            if amount == 0 {
                return Err(GameError::InvalidBetAmount { amount });
            }
            let cost = to_call.saturating_add(amount);
            ensure_covered(stack, cost)?;
            Ok(ValidatedAction::Raise(cost))
        }
        A::Fold => Ok(ValidatedAction::Fold),
        A::NextRound => Ok(ValidatedAction::NextRound),
    }
}

fn ensure_covered(stack: u32, required: u32) -> Result<(), GameError> {
    if stack >= required {
        Ok(())
    } else {
        Err(GameError::InsufficientChips {
            required,
            available: stack,
        })
    }
}
