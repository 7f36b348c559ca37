use snapdex_battle::battle::ai::{take_auto_action, RandomMovePolicy};
use snapdex_battle::prefab_creatures;
use snapdex_battle::{start_battle, BattleRules, RosterState, Side, TurnRng};

/// Scripted wild encounter: both seats pick random moves until the
/// match settles. Useful for eyeballing event formatting and pacing.
fn main() {
    let guest = match RosterState::new("Guest", prefab_creatures::guest_team()) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("bad guest team: {}", err);
            return;
        }
    };
    let wild = match RosterState::new("Wild", vec![prefab_creatures::voltmouse()]) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("bad wild encounter: {}", err);
            return;
        }
    };

    let mut battle = start_battle(
        "wild-demo",
        guest,
        wild,
        BattleRules {
            swap_ends_turn: false,
        },
    );
    println!("{}", battle.latest_log);
    println!(
        "A wild {} appeared!",
        battle.roster(Side::Player2).active().name()
    );

    let policy = RandomMovePolicy;
    while !battle.status.is_terminal() && battle.turn_number <= 200 {
        let side = battle.turn;
        let mut rng = TurnRng::new_random();
        println!("\n--- Turn {} ({}) ---", battle.turn_number, side);
        match take_auto_action(&mut battle, side, &policy, &mut rng) {
            Ok(bus) => bus.print_formatted(&battle),
            Err(err) => {
                eprintln!("engine rejected the action: {}", err);
                return;
            }
        }
    }

    println!("\nFinal status: {:?}", battle.status);
}
