/// Pending personality bindings and the behavior routines they install:
/// a binding is consumed by at most one confirmed spawn, and routines run
/// until their continuation predicate says otherwise.

use std::{cell::Cell, rc::Rc};

use frontline_sdk::{
    BehaviorKind, EntityKind, Game, GameConfig, HandlerError, Personality, Routine, Vec3,
};
use frontline_test::{HostCall, MockHost};

fn skill_calls(host: &MockHost) -> Vec<HostCall> {
    host.calls_of(|call| matches!(call, HostCall::SetAiSkill(_, _, _)))
}

fn move_orders(host: &MockHost) -> Vec<HostCall> {
    host.calls_of(|call| matches!(call, HostCall::OrderMoveTo(_, _)))
}

#[test]
fn binding_is_consumed_by_exactly_one_spawn() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let spawner_handle = host.add_entity(1, 50, EntityKind::Spawner);
    let first_ai = host.add_entity(2, 60, EntityKind::AiPlayer);
    let second_ai = host.add_entity(3, 61, EntityKind::AiPlayer);

    let spawner = game.resolve(spawner_handle);
    let blueprint = Personality::new("sentry").with_accuracy(0.9);
    game.bind_personality(&spawner, blueprint.clone());

    game.handle_spawned(first_ai, Some(spawner_handle));

    let first = game.resolve(first_ai);
    assert_eq!(
        first.as_player().expect("ai wrapper").personality(),
        Some(blueprint),
        "the spawned wrapper carries the bound personality"
    );
    assert_eq!(skill_calls(&host).len(), 1);

    // No fresh binding: the second spawn from the same spawner is plain.
    game.handle_spawned(second_ai, Some(spawner_handle));

    let second = game.resolve(second_ai);
    assert_eq!(second.as_player().expect("ai wrapper").personality(), None);
    assert_eq!(skill_calls(&host).len(), 1, "skill is applied once per binding");
}

#[test]
fn rebinding_a_spawner_overwrites_the_pending_blueprint() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let spawner_handle = host.add_entity(1, 50, EntityKind::Spawner);
    let ai_handle = host.add_entity(2, 60, EntityKind::AiPlayer);

    let spawner = game.resolve(spawner_handle);
    game.bind_personality(&spawner, Personality::new("old"));
    game.bind_personality(&spawner, Personality::new("new"));

    game.handle_spawned(ai_handle, Some(spawner_handle));

    let spawned = game.resolve(ai_handle);
    let applied = spawned
        .as_player()
        .expect("ai wrapper")
        .personality()
        .expect("personality applied");
    assert_eq!(applied.name(), "new");
}

#[test]
fn spawn_dispatches_soldier_channel_before_spawner_channel() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let spawner_handle = host.add_entity(1, 50, EntityKind::Spawner);
    let ai_handle = host.add_entity(2, 60, EntityKind::AiPlayer);

    let spawner = game.resolve(spawner_handle);
    let soldier = game.resolve(ai_handle);

    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    let soldier_order = order.clone();
    soldier
        .as_player()
        .expect("ai wrapper")
        .on_spawned()
        .subscribe_fn(move |_| {
            soldier_order.borrow_mut().push("soldier");
            Ok(())
        });
    let spawner_order = order.clone();
    spawner
        .as_spawner()
        .expect("spawner wrapper")
        .on_spawned_entity()
        .subscribe_fn(move |event| {
            assert!(event.spawner.is_some());
            spawner_order.borrow_mut().push("spawner");
            Ok(())
        });

    game.handle_spawned(ai_handle, Some(spawner_handle));
    assert_eq!(*order.borrow(), vec!["soldier", "spawner"]);
}

#[test]
fn patrol_routine_orders_movement_until_the_soldier_dies() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let spawner_handle = host.add_entity(1, 50, EntityKind::Spawner);
    let ai_handle = host.add_entity(2, 60, EntityKind::AiPlayer);
    host.script_alive(ai_handle, true);
    host.script_position(ai_handle, Vec3::new(100.0, 0.0, 100.0));

    let spawner = game.resolve(spawner_handle);
    game.bind_personality(
        &spawner,
        Personality::new("wanderer").with_behavior(BehaviorKind::Patrol),
    );
    game.handle_spawned(ai_handle, Some(spawner_handle));
    assert_eq!(game.routine_count(), 1);

    game.handle_tick(0.05);
    game.handle_tick(0.05);
    let orders = move_orders(&host);
    assert_eq!(orders.len(), 2, "one movement order per tick");
    assert_ne!(orders[0], orders[1], "patrol cycles distinct waypoints");

    // The loop observes its continuation condition, not a cancel call.
    host.script_alive(ai_handle, false);
    game.handle_tick(0.05);
    assert_eq!(game.routine_count(), 0, "dead soldier retires the routine");
    assert_eq!(move_orders(&host).len(), 2);
}

#[test]
fn assault_routine_pushes_toward_the_nearest_objective() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let near_handle = host.add_entity(1, 10, EntityKind::CapturePoint);
    let far_handle = host.add_entity(2, 11, EntityKind::CapturePoint);
    host.script_position(near_handle, Vec3::new(10.0, 0.0, 0.0));
    host.script_position(far_handle, Vec3::new(500.0, 0.0, 0.0));
    game.resolve(near_handle);
    game.resolve(far_handle);

    let spawner_handle = host.add_entity(3, 50, EntityKind::Spawner);
    let ai_handle = host.add_entity(4, 60, EntityKind::AiPlayer);
    host.script_alive(ai_handle, true);
    host.script_position(ai_handle, Vec3::ZERO);

    let spawner = game.resolve(spawner_handle);
    game.bind_personality(
        &spawner,
        Personality::new("pusher").with_behavior(BehaviorKind::Assault),
    );
    game.handle_spawned(ai_handle, Some(spawner_handle));

    game.handle_tick(0.05);
    assert_eq!(
        move_orders(&host),
        vec![HostCall::OrderMoveTo(ai_handle, Vec3::new(10.0, 0.0, 0.0))],
        "assault heads for the nearest capture point"
    );
}

#[test]
fn routine_installs_beyond_the_per_entity_cap_are_dropped() {
    let host = MockHost::new();
    let config = GameConfig {
        max_routines_per_entity: 1,
        ..GameConfig::default()
    };
    let game = Game::with_config(host.clone(), config);
    let handle = host.add_entity(1, 10, EntityKind::Player);
    let player = game.resolve(handle);

    game.install_routine(Routine::new(player.clone(), |_| true, |_, _| Ok(())));
    game.install_routine(Routine::new(player.clone(), |_| true, |_, _| Ok(())));

    assert_eq!(game.routine_count(), 1);
    assert_eq!(host.errors().len(), 1);
    assert!(host.errors()[0].contains("routine cap"));
}

#[test]
fn failing_routine_step_is_reported_but_keeps_running() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let handle = host.add_entity(1, 10, EntityKind::Player);
    let player = game.resolve(handle);

    let steps = Rc::new(Cell::new(0));
    let count = steps.clone();
    game.install_routine(Routine::new(
        player,
        |_| true,
        move |_, _| {
            count.set(count.get() + 1);
            Err(HandlerError::new("nav mesh unavailable"))
        },
    ));

    game.handle_tick(0.05);
    game.handle_tick(0.05);

    assert_eq!(steps.get(), 2, "a failing step does not retire the routine");
    assert_eq!(host.errors().len(), 2);
}
