use crate::roster::RosterState;
use schema::AilmentKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the battle an action or event belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    pub fn index(&self) -> usize {
        match self {
            Side::Player1 => 0,
            Side::Player2 => 1,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player1 => write!(f, "player 1"),
            Side::Player2 => write!(f, "player 2"),
        }
    }
}

/// Lifecycle of a match. Terminal states are absorbing: once the status
/// leaves `Ongoing` no further action is accepted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Ongoing,
    Player1Won,
    Player2Won,
    Draw,
}

impl BattleStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattleStatus::Ongoing)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            BattleStatus::Player1Won => Some(Side::Player1),
            BattleStatus::Player2Won => Some(Side::Player2),
            _ => None,
        }
    }
}

/// Variant knobs where the two original arenas disagreed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleRules {
    /// Whether a swap costs the turn. True in trainer-vs-trainer matches;
    /// false in wild encounters, where the wild side acts immediately
    /// after the swap instead.
    pub swap_ends_turn: bool,
}

impl Default for BattleRules {
    fn default() -> Self {
        BattleRules {
            swap_ends_turn: true,
        }
    }
}

/// Full state of one match. Owned by exactly one caller and mutated only
/// by the turn resolution functions in `battle::engine`. Pure data: no
/// presentation or timing state lives here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleState {
    pub battle_id: String,
    pub sides: [RosterState; 2],
    /// The side whose action the engine is waiting for.
    pub turn: Side,
    pub turn_number: u32,
    /// Human-readable description of the latest resolved action.
    pub latest_log: String,
    pub status: BattleStatus,
    pub rules: BattleRules,
}

impl BattleState {
    pub fn roster(&self, side: Side) -> &RosterState {
        &self.sides[side.index()]
    }

    pub fn roster_mut(&mut self, side: Side) -> &mut RosterState {
        &mut self.sides[side.index()]
    }

    pub fn trainer_name(&self, side: Side) -> &str {
        &self.sides[side.index()].trainer_name
    }
}

/// Everything observable that can happen while resolving one action.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    MoveUsed {
        side: Side,
        creature: String,
        move_name: String,
    },
    CriticalHit,
    Effectiveness {
        multiplier: f64,
    },
    DamageDealt {
        target: String,
        damage: u16,
        remaining_hp: u16,
    },
    AilmentInflicted {
        target: String,
        kind: AilmentKind,
    },
    AilmentTick {
        target: String,
        kind: AilmentKind,
        damage: u16,
    },
    AilmentCleared {
        target: String,
        kind: AilmentKind,
    },
    TurnSkipped {
        creature: String,
        kind: AilmentKind,
    },
    Swapped {
        side: Side,
        creature: String,
    },
    Fainted {
        side: Side,
        creature: String,
    },
    SideDefeated {
        side: Side,
    },
    Fled {
        side: Side,
    },
    BattleEnded {
        winner: Option<Side>,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string using battle
    /// context. Returns None for silent events.
    pub fn format(&self, battle: &BattleState) -> Option<String> {
        match self {
            BattleEvent::MoveUsed {
                side,
                creature,
                move_name,
            } => Some(format!(
                "{}'s {} used {}!",
                battle.trainer_name(*side),
                creature,
                move_name
            )),
            BattleEvent::CriticalHit => Some("A critical hit!".to_string()),
            BattleEvent::Effectiveness { multiplier } => {
                let m = *multiplier;
                if m == 0.0 {
                    Some("It had no effect...".to_string())
                } else if m > 1.0 {
                    Some("It's super effective!".to_string())
                } else if m < 1.0 {
                    Some("It's not very effective...".to_string())
                } else {
                    None
                }
            }
            // Silent: the HP bars carry the number in the original UI.
            BattleEvent::DamageDealt { .. } => None,
            BattleEvent::AilmentInflicted { target, kind } => {
                Some(format!("{} {}", target, describe_onset(*kind)))
            }
            BattleEvent::AilmentTick {
                target,
                kind,
                damage,
            } => Some(format!(
                "{} is hurt by its {}! ({} damage)",
                target, kind, damage
            )),
            BattleEvent::AilmentCleared { target, kind } => match kind {
                AilmentKind::Sleep => Some(format!("{} woke up!", target)),
                AilmentKind::Freeze => Some(format!("{} thawed out!", target)),
                _ => Some(format!("{} recovered from its {}!", target, kind)),
            },
            BattleEvent::TurnSkipped { creature, kind } => match kind {
                AilmentKind::Sleep => Some(format!("{} is fast asleep.", creature)),
                AilmentKind::Freeze => Some(format!("{} is frozen solid!", creature)),
                AilmentKind::Paralyze => {
                    Some(format!("{} is paralyzed and can't move!", creature))
                }
                _ => None,
            },
            BattleEvent::Swapped { side, creature } => Some(format!(
                "{} sends out {}!",
                battle.trainer_name(*side),
                creature
            )),
            BattleEvent::Fainted { creature, .. } => Some(format!("{} fainted!", creature)),
            BattleEvent::SideDefeated { side } => Some(format!(
                "{}'s team was defeated!",
                battle.trainer_name(*side)
            )),
            BattleEvent::Fled { .. } => Some("Got away safely!".to_string()),
            BattleEvent::BattleEnded { winner } => match winner {
                Some(side) => Some(format!(
                    "{} has won the battle!",
                    battle.trainer_name(*side)
                )),
                None => Some("The battle ended in a draw!".to_string()),
            },
        }
    }
}

fn describe_onset(kind: AilmentKind) -> &'static str {
    match kind {
        AilmentKind::Burn => "was burned!",
        AilmentKind::Poison => "was poisoned!",
        AilmentKind::Paralyze => "is paralyzed! It may be unable to move!",
        AilmentKind::Sleep => "fell asleep!",
        AilmentKind::Freeze => "was frozen solid!",
    }
}

/// Collects the events produced while resolving one action.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Formatted lines for every non-silent event, in order.
    pub fn format_lines(&self, battle: &BattleState) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.format(battle))
            .collect()
    }

    /// The combined one-line description stored in `latest_log`.
    pub fn describe(&self, battle: &BattleState) -> String {
        self.format_lines(battle).join(" ")
    }

    /// Print all formatted events with indentation. Debug aid for bins
    /// and tests.
    pub fn print_formatted(&self, battle: &BattleState) {
        for line in self.format_lines(battle) {
            println!("  {}", line);
        }
    }
}

impl fmt::Display for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Injectable random source: pre-drawn rolls in [0, 1) consumed one at a
/// time with a reason string. Tests force outcomes with `new_for_test`;
/// callers in production wrap `rand` via `new_random`.
#[derive(Debug, Clone)]
pub struct TurnRng {
    rolls: Vec<f64>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(rolls: Vec<f64>) -> Self {
        Self { rolls, index: 0 }
    }

    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        // Enough draws for the longest possible single action.
        let rolls: Vec<f64> = (0..32).map(|_| rng.random::<f64>()).collect();
        Self { rolls, index: 0 }
    }

    /// Consume the next roll. Panics when exhausted so a test that
    /// under-provisions outcomes fails loudly with the reason.
    pub fn next_roll(&mut self, reason: &str) -> f64 {
        if self.index >= self.rolls.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let roll = self.rolls[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", roll, reason);

        self.index += 1;
        roll
    }

    /// True with probability `chance`.
    pub fn roll_chance(&mut self, chance: f64, reason: &str) -> bool {
        self.next_roll(reason) < chance
    }

    /// Number of rolls consumed so far. Lets tests assert how much
    /// randomness an action used.
    pub fn consumed(&self) -> usize {
        self.index
    }
}
