//! Computer opponent decisions.
//!
//! The engine consults a [`ComputerPolicy`] whenever the player raises. Policies
//! are pure functions of the [`PolicyContext`] they are handed, so a session is
//! fully reproducible from its seed.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::Round;

/// What the computer sees when it has to answer a raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyContext {
    /// Chips the computer must put in to match
    pub current_bet: u32,
    /// The computer's remaining stack
    pub computer_chips: u32,
    /// Pot before the computer acts
    pub pot: u32,
    /// Round in which the raise happened
    pub round: Round,
}

/// The computer's answer to a pending bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputerDecision {
    Call,
    Fold,
}

/// Trait implemented by every computer opponent.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_duel_engine::policy::{ComputerDecision, ComputerPolicy, PolicyContext};
///
/// #[derive(Debug)]
/// struct AlwaysFold;
///
/// impl ComputerPolicy for AlwaysFold {
///     fn respond(&self, _ctx: &PolicyContext) -> ComputerDecision {
///         ComputerDecision::Fold
///     }
///
///     fn name(&self) -> &str {
///         "always_fold"
///     }
/// }
/// ```
pub trait ComputerPolicy: Debug + Send + Sync {
    /// Decide how to answer the bet described by `ctx`. A `Call` the computer
    /// cannot afford is treated by the engine as a fold.
    fn respond(&self, ctx: &PolicyContext) -> ComputerDecision;

    fn name(&self) -> &str;
}

/// Calls whenever the stack covers the bet and folds otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallWhenAble;

impl ComputerPolicy for CallWhenAble {
    fn respond(&self, ctx: &PolicyContext) -> ComputerDecision {
        if ctx.computer_chips >= ctx.current_bet {
            ComputerDecision::Call
        } else {
            ComputerDecision::Fold
        }
    }

    fn name(&self) -> &str {
        "call_when_able"
    }
}

/// Builds a policy from its configured name.
///
/// ```rust
/// use holdem_duel_engine::policy::create_policy;
///
/// let policy = create_policy("call_when_able").unwrap();
/// assert_eq!(policy.name(), "call_when_able");
/// assert!(create_policy("bluffer").is_err());
/// ```
pub fn create_policy(name: &str) -> Result<Box<dyn ComputerPolicy>, GameError> {
    match name {
        "call_when_able" => Ok(Box::new(CallWhenAble)),
        other => Err(GameError::UnknownPolicy(other.to_string())),
    }
}
