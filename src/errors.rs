use crate::battle::state::Side;
use std::fmt;

/// Main error type for the snapdex battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEngineError {
    /// A submitted action was rejected; battle state is unchanged
    InvalidAction(InvalidActionError),
    /// A supplied creature definition violates an invariant
    MalformedCreature(MalformedCreatureError),
}

/// Errors for actions rejected by the turn state machine.
/// Always recoverable by the caller; the battle state is never mutated
/// before validation passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidActionError {
    /// The match has reached a terminal status and accepts no actions
    MatchOver,
    /// The submitting side does not own the current turn
    NotYourTurn(Side),
    /// The named move is not among the active combatant's 4 moves
    UnknownMove(String),
    /// The bench index is outside the roster
    BenchIndexOutOfRange(usize),
    /// The targeted bench member has fainted
    FaintedBenchMember(usize),
    /// The targeted bench member is already the active combatant
    AlreadyActive(usize),
    /// The acting combatant has fainted and cannot act
    ActorFainted,
}

/// Errors for creature definitions that fail validation.
/// Fatal to starting a match; rejected before a roster is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedCreatureError {
    /// A creature must know exactly 4 moves
    WrongMoveCount { name: String, count: usize },
    /// The 4 move names must be unique
    DuplicateMove { name: String, move_name: String },
    /// A creature carries 1 or 2 type tags
    WrongTypeCount { name: String, count: usize },
    /// Level must be in 1-65
    LevelOutOfRange { name: String, level: u8 },
    /// Every base stat must be in 1-255
    StatOutOfRange {
        name: String,
        stat: &'static str,
        value: u16,
    },
    /// A roster holds 1-6 creatures
    InvalidRosterSize(usize),
}

impl fmt::Display for BattleEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEngineError::InvalidAction(err) => write!(f, "Invalid action: {}", err),
            BattleEngineError::MalformedCreature(err) => {
                write!(f, "Malformed creature: {}", err)
            }
        }
    }
}

impl fmt::Display for InvalidActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidActionError::MatchOver => write!(f, "the match is already over"),
            InvalidActionError::NotYourTurn(side) => {
                write!(f, "it is not {}'s turn", side)
            }
            InvalidActionError::UnknownMove(name) => {
                write!(f, "the active creature does not know {}", name)
            }
            InvalidActionError::BenchIndexOutOfRange(index) => {
                write!(f, "bench index {} is out of range", index)
            }
            InvalidActionError::FaintedBenchMember(index) => {
                write!(f, "bench member {} has fainted", index)
            }
            InvalidActionError::AlreadyActive(index) => {
                write!(f, "bench member {} is already active", index)
            }
            InvalidActionError::ActorFainted => {
                write!(f, "the acting creature has fainted")
            }
        }
    }
}

impl fmt::Display for MalformedCreatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedCreatureError::WrongMoveCount { name, count } => {
                write!(f, "{} knows {} moves, expected exactly 4", name, count)
            }
            MalformedCreatureError::DuplicateMove { name, move_name } => {
                write!(f, "{} lists {} more than once", name, move_name)
            }
            MalformedCreatureError::WrongTypeCount { name, count } => {
                write!(f, "{} carries {} types, expected 1 or 2", name, count)
            }
            MalformedCreatureError::LevelOutOfRange { name, level } => {
                write!(f, "{} has level {}, expected 1-65", name, level)
            }
            MalformedCreatureError::StatOutOfRange { name, stat, value } => {
                write!(f, "{} has {} = {}, expected 1-255", name, stat, value)
            }
            MalformedCreatureError::InvalidRosterSize(count) => {
                write!(f, "roster holds {} creatures, expected 1-6", count)
            }
        }
    }
}

impl std::error::Error for BattleEngineError {}
impl std::error::Error for InvalidActionError {}
impl std::error::Error for MalformedCreatureError {}

impl From<InvalidActionError> for BattleEngineError {
    fn from(err: InvalidActionError) -> Self {
        BattleEngineError::InvalidAction(err)
    }
}

impl From<MalformedCreatureError> for BattleEngineError {
    fn from(err: MalformedCreatureError) -> Self {
        BattleEngineError::MalformedCreature(err)
    }
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using InvalidActionError
pub type ActionResult<T> = Result<T, InvalidActionError>;
