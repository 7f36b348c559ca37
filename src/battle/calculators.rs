use crate::battle::state::TurnRng;
use crate::battle::type_chart;
use schema::{AilmentKind, BattleMove, CreatureDefinition, MoveCategory, StatusAilment};

pub const CRIT_CHANCE: f64 = 0.0625;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const VARIANCE_FLOOR: f64 = 0.85;

/// Result of one damage calculation. The engine turns this into events;
/// callers never recompute any part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageOutcome {
    pub damage: u16,
    pub effectiveness: f64,
    pub is_critical: bool,
}

/// Full damage pipeline for one hit: the level-50 base formula, then
/// type effectiveness, then a critical roll, then variance, each stage
/// floored to an integer before the next applies. A connecting hit never
/// deals less than 1.
///
/// Consumes exactly two rolls: critical, then variance. A burned
/// attacker fights with its physical attack halved.
pub fn resolve_damage(
    battle_move: &BattleMove,
    attacker: &CreatureDefinition,
    defender: &CreatureDefinition,
    attacker_ailment: Option<&StatusAilment>,
    rng: &mut TurnRng,
) -> DamageOutcome {
    let (mut attack, defense) = match battle_move.category {
        MoveCategory::Physical => (
            attacker.base_stats.attack as u32,
            defender.base_stats.defense as u32,
        ),
        MoveCategory::Special => (
            attacker.base_stats.special_attack as u32,
            defender.base_stats.special_defense as u32,
        ),
    };

    if battle_move.category == MoveCategory::Physical
        && attacker_ailment.map(|a| a.kind) == Some(AilmentKind::Burn)
    {
        attack /= 2;
    }

    // floor(((2 * 50 / 5 + 2) * power * attack / defense) / 50) + 2
    let base = (22 * battle_move.power as u32 * attack) / (defense.max(1) * 50) + 2;

    let effectiveness = type_chart::effectiveness(battle_move.move_type, &defender.types);
    let mut damage = (base as f64 * effectiveness).floor() as u32;

    let is_critical = rng.roll_chance(CRIT_CHANCE, "critical hit");
    if is_critical {
        damage = (damage as f64 * CRIT_MULTIPLIER).floor() as u32;
    }

    let variance = VARIANCE_FLOOR + rng.next_roll("damage variance") * (1.0 - VARIANCE_FLOOR);
    damage = (damage as f64 * variance).floor() as u32;

    DamageOutcome {
        damage: damage.max(1) as u16,
        effectiveness,
        is_critical,
    }
}
