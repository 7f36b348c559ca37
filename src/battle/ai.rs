use crate::battle::engine;
use crate::battle::state::{BattleState, EventBus, Side, TurnRng};
use crate::errors::BattleResult;
use crate::roster::RosterState;

/// How a non-player side picks its action. Kept as a trait so scripted
/// opponents can slot in later without touching the engine.
pub trait MovePolicy {
    fn choose_move(&self, roster: &RosterState, rng: &mut TurnRng) -> String;
}

/// The wild-encounter opponent: a uniform pick from the active
/// combatant's four moves. Consumes one roll.
pub struct RandomMovePolicy;

impl MovePolicy for RandomMovePolicy {
    fn choose_move(&self, roster: &RosterState, rng: &mut TurnRng) -> String {
        let moves = &roster.active().definition.moves;
        let roll = rng.next_roll("wild move selection");
        let index = ((roll * moves.len() as f64) as usize).min(moves.len() - 1);
        moves[index].clone()
    }
}

/// Pick and submit a move for `side` in one step. Used for the wild
/// side of an encounter, and by demos driving both seats.
pub fn take_auto_action(
    state: &mut BattleState,
    side: Side,
    policy: &dyn MovePolicy,
    rng: &mut TurnRng,
) -> BattleResult<EventBus> {
    let move_name = policy.choose_move(state.roster(side), rng);
    engine::submit_move(state, side, &move_name, rng)
}
