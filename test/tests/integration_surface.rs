/// Configuration and loadout surfaces: scoreboard arity policy, the
/// permanent icon read-back gap, and weapon ownership links.

use frontline_sdk::{EntityKind, Game, ReadError, ScoreboardConfig, WeaponSlot, WeaponSpec};
use frontline_test::{HostCall, MockHost};

#[test]
fn scoreboard_with_a_supported_column_count_reaches_the_host() {
    let host = MockHost::new();
    let game = Game::new(host.clone());

    let config = ScoreboardConfig::new("Conquest")
        .with_column("Kills", 80)
        .with_column("Deaths", 80)
        .with_column("Score", 120);
    game.configure_scoreboard(&config);

    assert_eq!(host.scoreboards(), vec![("Conquest".to_string(), 3)]);
    assert!(host.errors().is_empty());
}

#[test]
fn scoreboard_with_an_out_of_range_column_count_is_dropped() {
    let host = MockHost::new();
    let game = Game::new(host.clone());

    game.configure_scoreboard(&ScoreboardConfig::new("Empty"));

    let mut six = ScoreboardConfig::new("Crowded");
    for label in ["A", "B", "C", "D", "E", "F"] {
        six = six.with_column(label, 40);
    }
    game.configure_scoreboard(&six);

    assert!(host.scoreboards().is_empty(), "neither call may reach the host");
    assert_eq!(host.errors().len(), 2);
    assert!(host.errors()[0].contains("scoreboard"));
}

#[test]
fn icon_text_read_back_is_a_permanent_gap() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let handle = host.add_entity(1, 10, EntityKind::WorldIcon);

    let icon = game.resolve(handle);
    let icon = icon.as_world_icon().expect("icon wrapper");

    icon.set_text("Objective Alpha");
    assert_eq!(
        host.calls(),
        vec![HostCall::SetIconText(handle, "Objective Alpha".to_string())]
    );

    // Write-only surface: retrying can never succeed.
    assert_eq!(icon.text(), Err(ReadError::Unsupported { what: "icon text" }));
    assert_eq!(icon.text(), Err(ReadError::Unsupported { what: "icon text" }));
}

#[test]
fn equipping_forwards_the_grant_and_links_the_weapon() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let handle = host.add_entity(1, 10, EntityKind::Player);

    let entity = game.resolve(handle);
    let player = entity.as_player().expect("player wrapper");

    let spec = WeaponSpec::new("M5A3").optic("XDR Holo").magazine("Extended");
    let weapon = player.inventory().equip(WeaponSlot::Primary, spec);

    assert_eq!(
        host.calls(),
        vec![HostCall::GrantWeapon(
            handle,
            WeaponSlot::Primary,
            "M5A3".to_string(),
            2
        )]
    );
    assert_eq!(weapon.owner(), Some(entity.id()));

    weapon.set_ammo(30, 120);
    assert!(host
        .calls()
        .contains(&HostCall::SetAmmo(handle, WeaponSlot::Primary, 30, 120)));
}

#[test]
fn removal_clears_the_weapon_owner_link() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let handle = host.add_entity(1, 10, EntityKind::Player);

    let entity = game.resolve(handle);
    let player = entity.as_player().expect("player wrapper");

    let weapon = player
        .inventory()
        .equip(WeaponSlot::Secondary, WeaponSpec::new("G57"));
    assert_eq!(weapon.owner(), Some(entity.id()));

    let removed = player.inventory().remove(WeaponSlot::Secondary);
    assert!(removed.is_some());
    assert_eq!(weapon.owner(), None, "the back-link is cleared on removal");
    assert!(player.inventory().weapon(WeaponSlot::Secondary).is_none());
    assert!(host
        .calls()
        .contains(&HostCall::RemoveWeapon(handle, WeaponSlot::Secondary)));
}

#[test]
fn replacing_a_slot_orphans_the_previous_weapon() {
    let host = MockHost::new();
    let game = Game::new(host.clone());
    let handle = host.add_entity(1, 10, EntityKind::Player);

    let entity = game.resolve(handle);
    let player = entity.as_player().expect("player wrapper");

    let old = player
        .inventory()
        .equip(WeaponSlot::Primary, WeaponSpec::new("M5A3"));
    let new = player
        .inventory()
        .equip(WeaponSlot::Primary, WeaponSpec::new("SWS-10"));

    assert_eq!(old.owner(), None);
    assert_eq!(new.owner(), Some(entity.id()));
    assert_eq!(
        player
            .inventory()
            .weapon(WeaponSlot::Primary)
            .expect("slot filled")
            .spec()
            .name(),
        "SWS-10"
    );
}
