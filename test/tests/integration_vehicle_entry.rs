/// The two-channel vehicle occupancy scenario: one host occurrence
/// notifies the player's channel and the vehicle's channel, in that
/// order, with registry-identical wrappers in the payload.

use std::{cell::RefCell, rc::Rc};

use frontline_sdk::{EntityKind, Game};
use frontline_test::MockHost;

#[test]
fn vehicle_entry_notifies_both_parties_in_a_fixed_order() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let player_handle = host.add_entity(1, 10, EntityKind::Player);
    let vehicle_handle = host.add_entity(2, 20, EntityKind::Vehicle);

    let player = game.resolve(player_handle);
    let vehicle = game.resolve(vehicle_handle);

    let order = Rc::new(RefCell::new(Vec::new()));

    {
        let order = order.clone();
        let expected_vehicle = vehicle.clone();
        player
            .as_player()
            .expect("player wrapper")
            .on_entered_vehicle()
            .subscribe_fn(move |event| {
                assert_eq!(
                    event.vehicle, expected_vehicle,
                    "payload must carry the canonical vehicle wrapper"
                );
                order.borrow_mut().push("player");
                Ok(())
            });
    }
    {
        let order = order.clone();
        let expected_player = player.clone();
        vehicle
            .as_vehicle()
            .expect("vehicle wrapper")
            .on_player_entered()
            .subscribe_fn(move |event| {
                assert_eq!(
                    event.player, expected_player,
                    "payload must carry the canonical player wrapper"
                );
                order.borrow_mut().push("vehicle");
                Ok(())
            });
    }

    game.handle_vehicle_entered(player_handle, vehicle_handle);

    assert_eq!(
        *order.borrow(),
        vec!["player", "vehicle"],
        "entity-perspective channel dispatches before the other party's"
    );
}

#[test]
fn vehicle_exit_mirrors_the_entry_order() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let player_handle = host.add_entity(3, 30, EntityKind::Player);
    let vehicle_handle = host.add_entity(4, 40, EntityKind::Vehicle);

    let player = game.resolve(player_handle);
    let vehicle = game.resolve(vehicle_handle);

    let order = Rc::new(RefCell::new(Vec::new()));

    let player_order = order.clone();
    player
        .as_player()
        .expect("player wrapper")
        .on_exited_vehicle()
        .subscribe_fn(move |_| {
            player_order.borrow_mut().push("player");
            Ok(())
        });
    let vehicle_order = order.clone();
    vehicle
        .as_vehicle()
        .expect("vehicle wrapper")
        .on_player_exited()
        .subscribe_fn(move |_| {
            vehicle_order.borrow_mut().push("vehicle");
            Ok(())
        });

    game.handle_vehicle_exited(player_handle, vehicle_handle);
    game.handle_vehicle_exited(player_handle, vehicle_handle);

    assert_eq!(*order.borrow(), vec!["player", "vehicle", "player", "vehicle"]);
}

#[test]
fn occurrence_for_unsubscribed_parties_is_harmless() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let player_handle = host.add_entity(5, 50, EntityKind::Player);
    let vehicle_handle = host.add_entity(6, 60, EntityKind::Vehicle);

    // Nobody subscribed, and the wrappers are not even resolved yet.
    game.handle_vehicle_entered(player_handle, vehicle_handle);

    assert_eq!(game.entity_count(), 2, "entry point must still resolve and register");
    assert!(host.errors().is_empty());
}
