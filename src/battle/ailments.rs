use crate::battle::state::TurnRng;
use crate::combatant::CombatantState;
use schema::{AilmentKind, StatusAilment, TypeTag};

/// How an attack type can afflict its target.
pub struct AilmentRule {
    pub kind: AilmentKind,
    /// Probability of infliction on a damaging hit.
    pub chance: f64,
    /// Defender types that shrug the ailment off entirely.
    pub immune_types: &'static [TypeTag],
}

/// The attack types that carry a status rider. All other types never
/// inflict anything.
pub fn rule_for(move_type: TypeTag) -> Option<&'static AilmentRule> {
    use TypeTag::*;
    match move_type {
        Fire => Some(&AilmentRule {
            kind: AilmentKind::Burn,
            chance: 0.30,
            immune_types: &[Fire, Water],
        }),
        Poison => Some(&AilmentRule {
            kind: AilmentKind::Poison,
            chance: 0.40,
            immune_types: &[Poison, Steel],
        }),
        Electric => Some(&AilmentRule {
            kind: AilmentKind::Paralyze,
            chance: 0.30,
            immune_types: &[Electric, Ground],
        }),
        Psychic => Some(&AilmentRule {
            kind: AilmentKind::Sleep,
            chance: 0.25,
            immune_types: &[Psychic, Dark],
        }),
        Ice => Some(&AilmentRule {
            kind: AilmentKind::Freeze,
            chance: 0.20,
            immune_types: &[Ice, Fire],
        }),
        _ => None,
    }
}

/// Chip damage the ailment deals at the afflicted side's turn start.
pub fn tick_damage(kind: AilmentKind) -> u16 {
    match kind {
        AilmentKind::Burn => 10,
        AilmentKind::Poison => 8,
        _ => 0,
    }
}

/// Probability that the ailment costs the afflicted combatant its action
/// this turn. Sleep and freeze are guaranteed skips.
pub fn skip_chance(kind: AilmentKind) -> f64 {
    match kind {
        AilmentKind::Paralyze => 0.25,
        AilmentKind::Sleep | AilmentKind::Freeze => 1.0,
        _ => 0.0,
    }
}

/// Roll the status rider of a damaging hit against `defender`.
///
/// Fails silently (no event, no roll consumed for immunity) when the
/// move's type carries no rider, the defender is already afflicted, or
/// the defender's types grant immunity. The infliction roll itself is
/// only consumed when an infliction is actually possible.
pub fn roll_ailment(
    move_type: TypeTag,
    defender: &CombatantState,
    rng: &mut TurnRng,
) -> Option<StatusAilment> {
    let rule = rule_for(move_type)?;

    if defender.is_fainted() || defender.ailment.is_some() {
        return None;
    }
    if defender
        .types()
        .iter()
        .any(|t| rule.immune_types.contains(t))
    {
        return None;
    }

    if rng.roll_chance(rule.chance, "ailment infliction") {
        Some(StatusAilment::new(rule.kind))
    } else {
        None
    }
}
