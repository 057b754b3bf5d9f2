use crate::{
    kind::EntityKind,
    types::{
        EntityId, HostHandle, InputRestriction, Rotation, ScoreboardColumn, SquadTag, TeamId, Vec3,
        WeaponSlot,
    },
};

/// Out-of-band reporting surface for faults that must not propagate into
/// the dispatch path. The host's implementation never fails.
pub trait ErrorSink {
    fn report_error(&self, message: &str);
}

/// The procedural surface of the game host runtime.
///
/// Identity and type queries are required; the mutation surface carries
/// default no-op bodies so an embedding (or a mock) overrides only the calls
/// it actually implements. Mutation calls are fire-and-forget: the host
/// reports their consequences back through the occurrence entry points, not
/// through return values.
pub trait Host: ErrorSink {
    /// Integer id behind a handle, or `None` when the host reports the
    /// "no id" sentinel for it.
    fn entity_id(&self, handle: HostHandle) -> Option<EntityId>;

    /// Membership test for one of the closed capability kinds.
    /// `EntityKind::Unknown` never matches.
    fn is_kind(&self, handle: HostHandle, kind: EntityKind) -> bool;

    // Transform

    fn position_of(&self, _handle: HostHandle) -> Vec3 {
        Vec3::ZERO
    }

    fn rotation_of(&self, _handle: HostHandle) -> Rotation {
        Rotation::ZERO
    }

    fn set_position(&self, _handle: HostHandle, _position: Vec3) {}

    fn set_rotation(&self, _handle: HostHandle, _rotation: Rotation) {}

    // Lifecycle

    fn destroy(&self, _handle: HostHandle) {}

    // Soldier

    fn health_of(&self, _handle: HostHandle) -> f32 {
        0.0
    }

    fn set_health(&self, _handle: HostHandle, _health: f32) {}

    fn set_max_health(&self, _handle: HostHandle, _max_health: f32) {}

    fn is_alive(&self, _handle: HostHandle) -> bool {
        false
    }

    fn kill(&self, _handle: HostHandle) {}

    fn force_deploy(&self, _handle: HostHandle) {}

    fn team_of(&self, _handle: HostHandle) -> TeamId {
        TeamId(0)
    }

    fn squad_of(&self, _handle: HostHandle) -> SquadTag {
        SquadTag(0)
    }

    fn set_input_restriction(
        &self,
        _handle: HostHandle,
        _restriction: InputRestriction,
        _enabled: bool,
    ) {
    }

    // AI soldier

    fn set_ai_skill(&self, _handle: HostHandle, _accuracy: f32, _aggression: f32) {}

    fn order_move_to(&self, _handle: HostHandle, _target: Vec3) {}

    fn assign_path(&self, _soldier: HostHandle, _path: HostHandle) {}

    // Loadout

    fn grant_weapon(
        &self,
        _handle: HostHandle,
        _slot: WeaponSlot,
        _weapon: &str,
        _attachments: &[String],
    ) {
    }

    fn remove_weapon(&self, _handle: HostHandle, _slot: WeaponSlot) {}

    fn set_ammo(&self, _handle: HostHandle, _slot: WeaponSlot, _magazine: u32, _reserve: u32) {}

    // Vehicle

    fn vehicle_health_of(&self, _handle: HostHandle) -> f32 {
        0.0
    }

    fn set_vehicle_health(&self, _handle: HostHandle, _health: f32) {}

    fn occupant_count_of(&self, _handle: HostHandle) -> u8 {
        0
    }

    // Objectives

    fn owner_team_of(&self, _handle: HostHandle) -> TeamId {
        TeamId(0)
    }

    fn set_objective_enabled(&self, _handle: HostHandle, _enabled: bool) {}

    fn neutralize(&self, _handle: HostHandle) {}

    fn is_armed(&self, _handle: HostHandle) -> bool {
        false
    }

    fn sector_points_of(&self, _handle: HostHandle) -> Vec<EntityId> {
        Vec::new()
    }

    fn set_sector_locked(&self, _handle: HostHandle, _locked: bool) {}

    // Spawners

    fn set_spawner_enabled(&self, _handle: HostHandle, _enabled: bool) {}

    fn request_spawn(&self, _handle: HostHandle) {}

    fn vehicle_blueprint_of(&self, _handle: HostHandle) -> String {
        String::new()
    }

    // Triggers & interaction

    fn set_trigger_enabled(&self, _handle: HostHandle, _enabled: bool) {}

    fn set_interaction_enabled(&self, _handle: HostHandle, _enabled: bool) {}

    fn set_interaction_prompt(&self, _handle: HostHandle, _text: &str) {}

    // Waypoints

    fn waypoint_nodes_of(&self, _handle: HostHandle) -> Vec<Vec3> {
        Vec::new()
    }

    // World icons & effects

    fn set_icon_text(&self, _handle: HostHandle, _text: &str) {}

    fn set_icon_image(&self, _handle: HostHandle, _image: &str) {}

    fn set_icon_visible(&self, _handle: HostHandle, _visible: bool) {}

    fn play_effect(&self, _handle: HostHandle) {}

    fn stop_effect(&self, _handle: HostHandle) {}

    fn set_effect_parameter(&self, _handle: HostHandle, _name: &str, _value: f32) {}

    // Teams

    fn ticket_count_of(&self, _handle: HostHandle) -> i32 {
        0
    }

    fn adjust_tickets(&self, _handle: HostHandle, _delta: i32) {}

    // Raycast

    fn trace_line(&self, _requester: EntityId, _from: Vec3, _to: Vec3) {}

    // Scoreboard

    fn apply_scoreboard(&self, _header: &str, _columns: &[ScoreboardColumn]) {}
}
