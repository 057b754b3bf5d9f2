/// Raycast correlation: pending requests are keyed by requester id, the
/// latest request wins, and the entry is consumed on either outcome.

use std::{cell::Cell, rc::Rc};

use frontline_sdk::{EntityKind, Game, Handler, RaycastHit, RaycastMiss, Vec3};
use frontline_test::MockHost;

fn hit_flag(flag: &Rc<Cell<u32>>) -> Handler<RaycastHit> {
    let flag = flag.clone();
    Rc::new(move |_| {
        flag.set(flag.get() + 1);
        Ok(())
    })
}

fn miss_flag(flag: &Rc<Cell<u32>>) -> Handler<RaycastMiss> {
    let flag = flag.clone();
    Rc::new(move |_| {
        flag.set(flag.get() + 1);
        Ok(())
    })
}

#[test]
fn reissued_trace_overwrites_the_pending_request() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let handle = host.add_entity(1, 70, EntityKind::Player);
    let player = game.resolve(handle);

    let first_hits = Rc::new(Cell::new(0));
    let first_misses = Rc::new(Cell::new(0));
    let second_hits = Rc::new(Cell::new(0));
    let second_misses = Rc::new(Cell::new(0));

    game.trace(
        &player,
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 100.0),
        hit_flag(&first_hits),
        miss_flag(&first_misses),
    );
    game.trace(
        &player,
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 200.0),
        hit_flag(&second_hits),
        miss_flag(&second_misses),
    );

    game.handle_raycast_hit(handle, Vec3::new(0.0, 0.0, 50.0), Vec3::new(0.0, 1.0, 0.0), None);

    assert_eq!(second_hits.get(), 1, "only the latest request may fire");
    assert_eq!(first_hits.get(), 0, "the overwritten request must never fire");
    assert_eq!(first_misses.get(), 0);
    assert_eq!(second_misses.get(), 0);

    // Both requests reached the host, in order.
    assert_eq!(host.traces().len(), 2);
}

#[test]
fn outcome_consumes_the_pending_entry() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let handle = host.add_entity(1, 70, EntityKind::Player);
    let player = game.resolve(handle);

    let hits = Rc::new(Cell::new(0));
    let misses = Rc::new(Cell::new(0));
    game.trace(
        &player,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        hit_flag(&hits),
        miss_flag(&misses),
    );

    game.handle_raycast_hit(handle, Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), None);
    assert_eq!(hits.get(), 1);

    // A stray second report finds nothing pending.
    game.handle_raycast_hit(handle, Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), None);
    game.handle_raycast_miss(handle);
    assert_eq!(hits.get(), 1);
    assert_eq!(misses.get(), 0);
}

#[test]
fn miss_reaches_the_miss_callback_only() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let handle = host.add_entity(1, 70, EntityKind::Player);
    let player = game.resolve(handle);

    let hits = Rc::new(Cell::new(0));
    let misses = Rc::new(Cell::new(0));
    game.trace(
        &player,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        hit_flag(&hits),
        miss_flag(&misses),
    );

    game.handle_raycast_miss(handle);
    assert_eq!(misses.get(), 1);
    assert_eq!(hits.get(), 0);
}

#[test]
fn hit_resolves_the_struck_entity_through_the_registry() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let shooter_handle = host.add_entity(1, 70, EntityKind::Player);
    let target_handle = host.add_entity(2, 71, EntityKind::Vehicle);
    let shooter = game.resolve(shooter_handle);
    let target = game.resolve(target_handle);

    let observed = Rc::new(Cell::new(false));
    let seen = observed.clone();
    let expected = target.clone();
    let on_hit: Handler<RaycastHit> = Rc::new(move |event| {
        assert_eq!(event.target.as_ref(), Some(&expected));
        seen.set(true);
        Ok(())
    });
    game.trace(
        &shooter,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        on_hit,
        Rc::new(|_| Ok(())),
    );

    game.handle_raycast_hit(
        shooter_handle,
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Some(target_handle),
    );
    assert!(observed.get());
}

#[test]
fn trace_without_an_id_is_reported_and_dropped() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let handle = host.add_idless(1, EntityKind::Player);
    let slot = game.resolve(handle);

    game.trace(
        &slot,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Rc::new(|_| Ok(())),
        Rc::new(|_| Ok(())),
    );

    assert!(host.traces().is_empty(), "no trace may reach the host");
    assert_eq!(host.errors().len(), 1);
}
