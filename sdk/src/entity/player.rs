use std::{cell::RefCell, rc::Rc};

use frontline_core::{
    EntityId, EntityKind, EventChannel, Host, HostHandle, InputRestriction, Rotation, SquadTag,
    TeamId, Vec3,
};

use crate::{
    ai::Personality,
    events::{DiedEvent, GoingEvent, LeaveEvent, SpawnEvent, VehicleEvent},
    loadout::Inventory,
};

use super::{base::EntityBase, support::WaypointPath};

// Player

/// One soldier slot, human or AI. AI soldiers answer `is_ai` and narrow
/// to [`AiPlayerRef`] for the operations only the AI backend accepts.
pub struct Player {
    base: EntityBase,
    personality: RefCell<Option<Personality>>,
    inventory: Inventory,
    on_died: EventChannel<DiedEvent>,
    on_spawned: EventChannel<SpawnEvent>,
    on_left: EventChannel<LeaveEvent>,
    on_entered_vehicle: EventChannel<VehicleEvent>,
    on_exited_vehicle: EventChannel<VehicleEvent>,
}

impl Player {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>, ai: bool) -> Self {
        let kind = if ai {
            EntityKind::AiPlayer
        } else {
            EntityKind::Player
        };
        Self {
            inventory: Inventory::new(id, handle, host.clone()),
            base: EntityBase::new(id, handle, kind, host),
            personality: RefCell::new(None),
            on_died: EventChannel::new(),
            on_spawned: EventChannel::new(),
            on_left: EventChannel::new(),
            on_entered_vehicle: EventChannel::new(),
            on_exited_vehicle: EventChannel::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.base.id()
    }

    pub fn kind(&self) -> EntityKind {
        self.base.kind()
    }

    pub fn position(&self) -> Vec3 {
        self.base.position()
    }

    pub fn rotation(&self) -> Rotation {
        self.base.rotation()
    }

    pub fn teleport(&self, position: Vec3) {
        self.base.teleport(position);
    }

    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base.on_going()
    }

    pub(crate) fn base(&self) -> &EntityBase {
        &self.base
    }

    pub(crate) fn handle(&self) -> HostHandle {
        self.base.handle()
    }

    // Soldier state

    pub fn health(&self) -> f32 {
        self.base.host().health_of(self.base.handle())
    }

    pub fn set_health(&self, health: f32) {
        self.base.host().set_health(self.base.handle(), health);
    }

    pub fn set_max_health(&self, max_health: f32) {
        self.base.host().set_max_health(self.base.handle(), max_health);
    }

    pub fn is_alive(&self) -> bool {
        self.base.host().is_alive(self.base.handle())
    }

    pub fn kill(&self) {
        self.base.host().kill(self.base.handle());
    }

    pub fn force_deploy(&self) {
        self.base.host().force_deploy(self.base.handle());
    }

    pub fn team(&self) -> TeamId {
        self.base.host().team_of(self.base.handle())
    }

    pub fn squad_tag(&self) -> SquadTag {
        self.base.host().squad_of(self.base.handle())
    }

    pub fn restrict_input(&self, restriction: InputRestriction, enabled: bool) {
        self.base
            .host()
            .set_input_restriction(self.base.handle(), restriction, enabled);
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    // AI

    pub fn is_ai(&self) -> bool {
        self.base.kind() == EntityKind::AiPlayer
    }

    /// Narrows to the AI-only surface; `None` for a human soldier.
    pub fn as_ai(&self) -> Option<AiPlayerRef<'_>> {
        if self.is_ai() {
            Some(AiPlayerRef { player: self })
        } else {
            None
        }
    }

    /// Blueprint applied by the spawn that produced this soldier, if any.
    pub fn personality(&self) -> Option<Personality> {
        self.personality.borrow().clone()
    }

    pub(crate) fn store_personality(&self, personality: Personality) {
        *self.personality.borrow_mut() = Some(personality);
    }

    // Channels

    pub fn on_died(&self) -> &EventChannel<DiedEvent> {
        &self.on_died
    }

    pub fn on_spawned(&self) -> &EventChannel<SpawnEvent> {
        &self.on_spawned
    }

    pub fn on_left(&self) -> &EventChannel<LeaveEvent> {
        &self.on_left
    }

    pub fn on_entered_vehicle(&self) -> &EventChannel<VehicleEvent> {
        &self.on_entered_vehicle
    }

    pub fn on_exited_vehicle(&self) -> &EventChannel<VehicleEvent> {
        &self.on_exited_vehicle
    }
}

// AiPlayerRef

/// Borrowed view of a [`Player`] whose handle answers the AI capability
/// query. Obtained through [`Player::as_ai`].
pub struct AiPlayerRef<'p> {
    player: &'p Player,
}

impl<'p> AiPlayerRef<'p> {
    pub fn player(&self) -> &Player {
        self.player
    }

    pub fn set_skill(&self, accuracy: f32, aggression: f32) {
        self.player
            .base
            .host()
            .set_ai_skill(self.player.base.handle(), accuracy, aggression);
    }

    pub fn order_move_to(&self, target: Vec3) {
        self.player
            .base
            .host()
            .order_move_to(self.player.base.handle(), target);
    }

    pub fn follow_path(&self, path: &WaypointPath) {
        self.player
            .base
            .host()
            .assign_path(self.player.base.handle(), path.handle());
    }
}
