use crate::battle::engine::submit_move;
use crate::battle::state::{BattleEvent, BattleStatus, Side};
use crate::battle::tests::common::{create_test_battle, predictable_rng, TestCreatureBuilder};
use crate::errors::{BattleEngineError, InvalidActionError};
use pretty_assertions::assert_eq;

/// Hits hard enough to faint a 1-HP-stat creature in one blow.
fn bruiser() -> schema::CreatureDefinition {
    TestCreatureBuilder::new("Bruiser").attack(255).build()
}

fn frail(name: &str) -> schema::CreatureDefinition {
    TestCreatureBuilder::new(name).hp(1).build()
}

#[test]
fn test_faint_forces_first_able_bench_member_in() {
    let mut battle = create_test_battle(vec![bruiser()], vec![frail("First"), frail("Second")]);

    let bus = submit_move(&mut battle, Side::Player1, "Tackle", &mut predictable_rng()).unwrap();

    assert!(bus.events().contains(&BattleEvent::Fainted {
        side: Side::Player2,
        creature: "First".to_string(),
    }));
    assert!(bus.events().contains(&BattleEvent::Swapped {
        side: Side::Player2,
        creature: "Second".to_string(),
    }));
    assert_eq!(battle.status, BattleStatus::Ongoing);
    assert_eq!(battle.roster(Side::Player2).active().name(), "Second");
    // The replacement is automatic; the turn passes as usual.
    assert_eq!(battle.turn, Side::Player2);
}

#[test]
fn test_replacement_skips_fainted_bench_members() {
    let mut battle = create_test_battle(
        vec![bruiser()],
        vec![frail("First"), frail("Second"), frail("Third")],
    );
    battle.roster_mut(Side::Player2).members[1].take_damage(u16::MAX);

    submit_move(&mut battle, Side::Player1, "Tackle", &mut predictable_rng()).unwrap();

    assert_eq!(battle.roster(Side::Player2).active().name(), "Third");
}

#[test]
fn test_wiping_the_last_member_ends_the_match() {
    let mut battle = create_test_battle(vec![bruiser()], vec![frail("Last")]);

    let bus = submit_move(&mut battle, Side::Player1, "Tackle", &mut predictable_rng()).unwrap();

    assert_eq!(battle.status, BattleStatus::Player1Won);
    assert!(bus.events().contains(&BattleEvent::Fainted {
        side: Side::Player2,
        creature: "Last".to_string(),
    }));
    assert!(bus
        .events()
        .contains(&BattleEvent::SideDefeated { side: Side::Player2 }));
    assert!(bus.events().contains(&BattleEvent::BattleEnded {
        winner: Some(Side::Player1),
    }));

    let lines = bus.format_lines(&battle);
    assert!(lines.contains(&"Last fainted!".to_string()));
    assert!(lines.contains(&"Red has won the battle!".to_string()));
}

#[test]
fn test_no_actions_after_the_match_is_decided() {
    let mut battle = create_test_battle(vec![bruiser()], vec![frail("Last")]);
    submit_move(&mut battle, Side::Player1, "Tackle", &mut predictable_rng()).unwrap();

    let err = submit_move(&mut battle, Side::Player2, "Tackle", &mut predictable_rng())
        .unwrap_err();
    assert_eq!(
        err,
        BattleEngineError::InvalidAction(InvalidActionError::MatchOver)
    );
}

#[test]
fn test_fainted_defender_gets_no_status_roll() {
    use crate::battle::state::TurnRng;
    use schema::TypeTag;

    let torch = TestCreatureBuilder::new("Torch")
        .types(&[TypeTag::Fire])
        .attack(255)
        .build();
    let mut battle = create_test_battle(vec![torch], vec![frail("Last")]);

    // Only crit and variance rolls are provisioned; a rider roll against
    // the fainted defender would panic the test rng.
    let mut rng = TurnRng::new_for_test(vec![0.5, 0.5]);
    submit_move(&mut battle, Side::Player1, "Tackle", &mut rng).unwrap();
    assert_eq!(battle.status, BattleStatus::Player1Won);
    assert_eq!(rng.consumed(), 2);
}
