use crate::battle::ai::{MovePolicy, RandomMovePolicy};
use crate::battle::ailments;
use crate::battle::calculators;
use crate::battle::state::{
    BattleEvent, BattleRules, BattleState, BattleStatus, EventBus, Side, TurnRng,
};
use crate::errors::{BattleResult, InvalidActionError};
use crate::roster::RosterState;
use schema::BattleMove;

/// Create a new battle. Player 1 always owns the opening turn.
pub fn start_battle(
    battle_id: impl Into<String>,
    side1: RosterState,
    side2: RosterState,
    rules: BattleRules,
) -> BattleState {
    let battle_id = battle_id.into();
    let latest_log = format!(
        "{} challenges {}!",
        side1.trainer_name, side2.trainer_name
    );
    BattleState {
        battle_id,
        sides: [side1, side2],
        turn: Side::Player1,
        turn_number: 1,
        latest_log,
        status: BattleStatus::Ongoing,
        rules,
    }
}

/// Resolve one attack by `side`'s active combatant.
///
/// Validation happens before any mutation: a rejected action leaves the
/// state untouched. On success the turn passes to the opponent and the
/// returned bus holds every event the action produced, in order.
pub fn submit_move(
    state: &mut BattleState,
    side: Side,
    move_name: &str,
    rng: &mut TurnRng,
) -> BattleResult<EventBus> {
    validate_window(state, side)?;

    let actor = state.roster(side).active();
    if actor.is_fainted() {
        return Err(InvalidActionError::ActorFainted.into());
    }
    if !actor.definition.knows_move(move_name) {
        return Err(InvalidActionError::UnknownMove(move_name.to_string()).into());
    }

    let mut bus = EventBus::new();
    resolve_move_action(state, side, move_name, &mut bus, rng);
    finish_action(state, Some(side.opponent()), bus)
}

/// Swap `side`'s active combatant for the bench member at `bench_index`.
///
/// Ailments that gate attacking never gate a swap, but chip damage still
/// ticks. Under the default rules the swap costs the turn; with
/// `swap_ends_turn` off the opponent instead takes one automatic action
/// inside this call and the turn stays with the swapper.
pub fn submit_swap(
    state: &mut BattleState,
    side: Side,
    bench_index: usize,
    rng: &mut TurnRng,
) -> BattleResult<EventBus> {
    validate_window(state, side)?;

    let roster = state.roster(side);
    if bench_index >= roster.members.len() {
        return Err(InvalidActionError::BenchIndexOutOfRange(bench_index).into());
    }
    if bench_index == roster.active_index {
        return Err(InvalidActionError::AlreadyActive(bench_index).into());
    }
    if roster.members[bench_index].is_fainted() {
        return Err(InvalidActionError::FaintedBenchMember(bench_index).into());
    }

    let mut bus = EventBus::new();
    match run_upkeep(state, side, &mut bus, rng, false) {
        Upkeep::Proceed => {
            let roster = state.roster_mut(side);
            roster.switch_to(bench_index);
            bus.push(BattleEvent::Swapped {
                side,
                creature: roster.active().name().to_string(),
            });
        }
        // Chip damage fainted the outgoing member; the forced
        // replacement already brought someone in and consumed the swap.
        Upkeep::ActionLost => {}
    }

    if state.rules.swap_ends_turn {
        return finish_action(state, Some(side.opponent()), bus);
    }

    // Free-swap rules: the opponent answers immediately with a random
    // move, and the swapper keeps the turn.
    let opponent = side.opponent();
    if !state.status.is_terminal() {
        let move_name = RandomMovePolicy.choose_move(state.roster(opponent), rng);
        resolve_move_action(state, opponent, &move_name, &mut bus, rng);
    }
    finish_action(state, None, bus)
}

/// Concede the match. Recorded as a draw: nobody wins a battle that the
/// other trainer walked away from.
pub fn forfeit(state: &mut BattleState, side: Side) -> BattleResult<EventBus> {
    validate_window(state, side)?;

    let mut bus = EventBus::new();
    bus.push(BattleEvent::Fled { side });
    state.status = BattleStatus::Draw;
    bus.push(BattleEvent::BattleEnded { winner: None });
    state.latest_log = bus.describe(state);
    Ok(bus)
}

fn validate_window(state: &BattleState, side: Side) -> BattleResult<()> {
    if state.status.is_terminal() {
        return Err(InvalidActionError::MatchOver.into());
    }
    if state.turn != side {
        return Err(InvalidActionError::NotYourTurn(side).into());
    }
    Ok(())
}

enum Upkeep {
    Proceed,
    /// The action was consumed by the ailment (skip or tick faint).
    ActionLost,
}

/// One side's full attack: upkeep first, then the move if the actor
/// still gets to act.
fn resolve_move_action(
    state: &mut BattleState,
    side: Side,
    move_name: &str,
    bus: &mut EventBus,
    rng: &mut TurnRng,
) {
    match run_upkeep(state, side, bus, rng, true) {
        Upkeep::Proceed => execute_move(state, side, move_name, bus, rng),
        Upkeep::ActionLost => {}
    }
}

/// Start-of-action ailment upkeep for the acting side: chip damage
/// first, then at most one skip roll, then the duration countdown.
/// `gate_action` is false for swaps, which an ailment can never block.
fn run_upkeep(
    state: &mut BattleState,
    side: Side,
    bus: &mut EventBus,
    rng: &mut TurnRng,
    gate_action: bool,
) -> Upkeep {
    let actor = state.roster_mut(side).active_mut();
    let Some(ailment) = actor.ailment else {
        return Upkeep::Proceed;
    };
    let kind = ailment.kind;
    let name = actor.name().to_string();

    let tick = ailments::tick_damage(kind);
    if tick > 0 {
        let fainted = actor.take_damage(tick);
        let remaining_hp = actor.current_hp;
        bus.push(BattleEvent::AilmentTick {
            target: name.clone(),
            kind,
            damage: tick,
        });
        bus.push(BattleEvent::DamageDealt {
            target: name.clone(),
            damage: tick,
            remaining_hp,
        });
        if fainted {
            bus.push(BattleEvent::Fainted {
                side,
                creature: name,
            });
            replace_or_defeat(state, side, bus);
            return Upkeep::ActionLost;
        }
    }

    let skipped = if gate_action {
        match ailments::skip_chance(kind) {
            p if p >= 1.0 => true,
            p if p <= 0.0 => false,
            p => rng.roll_chance(p, "paralysis check"),
        }
    } else {
        false
    };
    if skipped {
        bus.push(BattleEvent::TurnSkipped {
            creature: name.clone(),
            kind,
        });
    }

    let actor = state.roster_mut(side).active_mut();
    if let Some(ailment) = actor.ailment.as_mut() {
        ailment.turns_remaining -= 1;
        if ailment.turns_remaining == 0 {
            actor.ailment = None;
            bus.push(BattleEvent::AilmentCleared { target: name, kind });
        }
    }

    if skipped {
        Upkeep::ActionLost
    } else {
        Upkeep::Proceed
    }
}

fn execute_move(
    state: &mut BattleState,
    side: Side,
    move_name: &str,
    bus: &mut EventBus,
    rng: &mut TurnRng,
) {
    let attacker = state.roster(side).active();
    let battle_move = BattleMove::basic(move_name, attacker.definition.primary_type());
    let attacker_definition = attacker.definition.clone();
    let attacker_ailment = attacker.ailment;

    bus.push(BattleEvent::MoveUsed {
        side,
        creature: attacker.name().to_string(),
        move_name: move_name.to_string(),
    });

    let defender_side = side.opponent();
    let defender = state.roster(defender_side).active();
    let effectiveness = crate::battle::type_chart::effectiveness(
        battle_move.move_type,
        &defender.definition.types,
    );

    if effectiveness == 0.0 {
        // An immune defender takes no damage at all, but the move's
        // status rider is still rolled (and type immunity usually voids
        // that too).
        bus.push(BattleEvent::Effectiveness { multiplier: 0.0 });
    } else {
        let outcome = calculators::resolve_damage(
            &battle_move,
            &attacker_definition,
            &state.roster(defender_side).active().definition,
            attacker_ailment.as_ref(),
            rng,
        );

        if outcome.is_critical {
            bus.push(BattleEvent::CriticalHit);
        }
        if outcome.effectiveness != 1.0 {
            bus.push(BattleEvent::Effectiveness {
                multiplier: outcome.effectiveness,
            });
        }

        let defender = state.roster_mut(defender_side).active_mut();
        let defender_name = defender.name().to_string();
        let fainted = defender.take_damage(outcome.damage);
        bus.push(BattleEvent::DamageDealt {
            target: defender_name.clone(),
            damage: outcome.damage,
            remaining_hp: defender.current_hp,
        });

        if fainted {
            bus.push(BattleEvent::Fainted {
                side: defender_side,
                creature: defender_name,
            });
            replace_or_defeat(state, defender_side, bus);
            return;
        }
    }

    let defender = state.roster(defender_side).active();
    if let Some(ailment) = ailments::roll_ailment(battle_move.move_type, defender, rng) {
        let kind = ailment.kind;
        let defender = state.roster_mut(defender_side).active_mut();
        let target = defender.name().to_string();
        defender.inflict(ailment);
        bus.push(BattleEvent::AilmentInflicted { target, kind });
    }
}

/// After a faint: bring in the first able bench member, or declare the
/// side defeated and settle the match outcome.
fn replace_or_defeat(state: &mut BattleState, fainted_side: Side, bus: &mut EventBus) {
    if let Some(bench_index) = state.roster(fainted_side).first_able_bench() {
        let roster = state.roster_mut(fainted_side);
        roster.switch_to(bench_index);
        bus.push(BattleEvent::Swapped {
            side: fainted_side,
            creature: roster.active().name().to_string(),
        });
        return;
    }

    bus.push(BattleEvent::SideDefeated { side: fainted_side });
    let opponent_wiped = state.roster(fainted_side.opponent()).is_wiped();
    state.status = if opponent_wiped {
        BattleStatus::Draw
    } else {
        match fainted_side {
            Side::Player1 => BattleStatus::Player2Won,
            Side::Player2 => BattleStatus::Player1Won,
        }
    };
    bus.push(BattleEvent::BattleEnded {
        winner: state.status.winner(),
    });
}

/// Advance the turn counter, hand the turn to `next_turn` if the rules
/// pass it (unless the action ended the match), and stamp the log.
fn finish_action(
    state: &mut BattleState,
    next_turn: Option<Side>,
    bus: EventBus,
) -> BattleResult<EventBus> {
    if !state.status.is_terminal() {
        if let Some(next) = next_turn {
            state.turn = next;
        }
        state.turn_number += 1;
    }
    state.latest_log = bus.describe(state);
    Ok(bus)
}
