/// End-to-end sweep of one simulated round: joins, team assignment,
/// spawns, vehicle occupancy, objective flow, deaths, ticks, leaves —
/// driven purely through the host entry points, observed purely through
/// the game-global channels.

use std::{cell::RefCell, rc::Rc};

use frontline_sdk::{EntityKind, Game, TeamId};
use frontline_test::MockHost;

#[derive(Default)]
struct RoundLog {
    joins: u32,
    leaves: u32,
    deaths: u32,
    objectives: u32,
    ticks: u32,
}

#[test]
fn full_round_flows_through_the_global_channels() {
    let _ = env_logger::builder().is_test(true).try_init();

    let host = MockHost::new();
    let game = Game::new(host.clone());

    let log = Rc::new(RefCell::new(RoundLog::default()));
    {
        let log = log.clone();
        game.on_player_joined().subscribe_fn(move |_| {
            log.borrow_mut().joins += 1;
            Ok(())
        });
    }
    {
        let log = log.clone();
        game.on_player_left().subscribe_fn(move |_| {
            log.borrow_mut().leaves += 1;
            Ok(())
        });
    }
    {
        let log = log.clone();
        game.on_player_died().subscribe_fn(move |event| {
            assert!(event.killer.is_some(), "this round scripts a killer for every death");
            log.borrow_mut().deaths += 1;
            Ok(())
        });
    }
    {
        let log = log.clone();
        game.on_objective_taken().subscribe_fn(move |event| {
            assert_eq!(event.team, TeamId(1));
            log.borrow_mut().objectives += 1;
            Ok(())
        });
    }
    {
        let log = log.clone();
        game.on_tick().subscribe_fn(move |_| {
            log.borrow_mut().ticks += 1;
            Ok(())
        });
    }

    // World setup as the host reports it.
    let team = host.add_entity(1, 1, EntityKind::Team);
    let point = host.add_entity(2, 5, EntityKind::CapturePoint);
    let mcom = host.add_entity(3, 6, EntityKind::Mcom);
    let vehicle = host.add_entity(4, 7, EntityKind::Vehicle);
    let attacker = host.add_entity(5, 10, EntityKind::Player);
    let defender = host.add_entity(6, 11, EntityKind::Player);

    game.handle_player_joined(attacker);
    game.handle_player_joined(defender);
    game.handle_team_joined(attacker, team);
    game.handle_spawned(attacker, None);
    game.handle_spawned(defender, None);

    game.handle_vehicle_entered(attacker, vehicle);
    game.handle_vehicle_exited(attacker, vehicle);

    game.handle_capture_progress(point, TeamId(1));
    game.handle_captured(point, TeamId(1));

    game.handle_mcom_armed(mcom, Some(attacker));
    game.handle_mcom_destroyed(mcom, Some(attacker));

    game.handle_player_died(defender, Some(attacker));

    game.handle_tick(0.05);
    game.handle_tick(0.05);

    game.handle_player_left(defender);

    let log = log.borrow();
    assert_eq!(log.joins, 2);
    assert_eq!(log.leaves, 1);
    assert_eq!(log.deaths, 1);
    assert_eq!(log.objectives, 1);
    assert_eq!(log.ticks, 2);

    // Everyone the round touched is registered except the defender, whose
    // entry was removed after the leave dispatch.
    assert_eq!(game.entity_count(), 5);
    assert!(host.errors().is_empty());
}
