pub mod battle;
pub mod combatant;
pub mod errors;
pub mod prefab_creatures;
pub mod roster;
pub mod trainer_stats;

pub use battle::ai::{MovePolicy, RandomMovePolicy};
pub use battle::engine::{forfeit, start_battle, submit_move, submit_swap};
pub use battle::state::{
    BattleEvent, BattleRules, BattleState, BattleStatus, EventBus, Side, TurnRng,
};
pub use combatant::CombatantState;
pub use errors::{BattleEngineError, BattleResult, InvalidActionError, MalformedCreatureError};
pub use roster::RosterState;
pub use trainer_stats::{calculate_trainer_stats, TrainerStats};
