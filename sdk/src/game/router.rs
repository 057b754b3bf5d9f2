use frontline_core::{HostHandle, TeamId, Vec3};

use crate::events::{
    CaptureEvent, DiedEvent, GoingEvent, InteractEvent, JoinEvent, LeaveEvent, McomEvent,
    RaycastHit, RaycastMiss, SpawnEvent, TeamJoinEvent, TickEvent, TriggerEvent,
    VehicleDestroyedEvent, VehicleEvent,
};

use super::game::Game;

/// Host-invoked occurrence entry points.
///
/// Each entry point resolves its raw handles to wrappers, performs the
/// occurrence's bookkeeping, and dispatches channels in a fixed order:
/// the entity-perspective channel first, then the other party's channel,
/// then any game-global channel. Entry points return promptly and never
/// raise — handler faults stop at the channel boundary.
impl Game {
    pub fn handle_player_joined(&self, player: HostHandle) {
        let player = self.resolve(player);
        let event = JoinEvent { player };
        self.on_player_joined.dispatch(&event, self.sink());
    }

    /// Registry removal happens strictly after dispatch, so handlers for
    /// the leave occurrence still observe the canonical wrapper.
    pub fn handle_player_left(&self, player: HostHandle) {
        let player = self.resolve(player);
        let event = LeaveEvent {
            player: player.clone(),
        };
        if let Some(wrapper) = player.as_player() {
            wrapper.on_left().dispatch(&event, self.sink());
        }
        self.on_player_left.dispatch(&event, self.sink());

        let id = player.id();
        if id.is_valid() {
            self.registry.borrow_mut().remove(id);
            self.pending_raycasts.borrow_mut().remove(&id);
        }
    }

    pub fn handle_player_died(&self, victim: HostHandle, killer: Option<HostHandle>) {
        let victim = self.resolve(victim);
        let killer = killer.map(|handle| self.resolve(handle));
        let event = DiedEvent {
            victim: victim.clone(),
            killer,
        };
        if let Some(wrapper) = victim.as_player() {
            wrapper.on_died().dispatch(&event, self.sink());
        }
        self.on_player_died.dispatch(&event, self.sink());
    }

    /// Consumes the spawner's pending personality binding, if one is
    /// armed — at most once; a second spawn from the same spawner with no
    /// fresh binding carries no personality.
    pub fn handle_spawned(&self, spawned: HostHandle, spawner: Option<HostHandle>) {
        let spawned = self.resolve(spawned);
        let spawner = spawner.map(|handle| self.resolve(handle));

        if let Some(spawner) = &spawner {
            let pending = self
                .pending_personalities
                .borrow_mut()
                .remove(&spawner.id());
            if let Some(personality) = pending {
                self.apply_personality(&spawned, personality);
            }
        }

        let event = SpawnEvent {
            spawned: spawned.clone(),
            spawner: spawner.clone(),
        };
        if let Some(wrapper) = spawned.as_player() {
            wrapper.on_spawned().dispatch(&event, self.sink());
        }
        match &spawner {
            Some(spawner) => {
                if let Some(wrapper) = spawner.as_spawner() {
                    wrapper.on_spawned_entity().dispatch(&event, self.sink());
                } else if let Some(wrapper) = spawner.as_vehicle_spawner() {
                    wrapper.on_spawned_entity().dispatch(&event, self.sink());
                }
            }
            None => {}
        }
    }

    /// Player-perspective channel first, vehicle channel second.
    pub fn handle_vehicle_entered(&self, player: HostHandle, vehicle: HostHandle) {
        let player = self.resolve(player);
        let vehicle = self.resolve(vehicle);
        let event = VehicleEvent {
            player: player.clone(),
            vehicle: vehicle.clone(),
        };
        if let Some(wrapper) = player.as_player() {
            wrapper.on_entered_vehicle().dispatch(&event, self.sink());
        }
        if let Some(wrapper) = vehicle.as_vehicle() {
            wrapper.on_player_entered().dispatch(&event, self.sink());
        }
    }

    pub fn handle_vehicle_exited(&self, player: HostHandle, vehicle: HostHandle) {
        let player = self.resolve(player);
        let vehicle = self.resolve(vehicle);
        let event = VehicleEvent {
            player: player.clone(),
            vehicle: vehicle.clone(),
        };
        if let Some(wrapper) = player.as_player() {
            wrapper.on_exited_vehicle().dispatch(&event, self.sink());
        }
        if let Some(wrapper) = vehicle.as_vehicle() {
            wrapper.on_player_exited().dispatch(&event, self.sink());
        }
    }

    /// Vehicle ids are recycled by the host; the registry entry is
    /// removed after dispatch so a later spawn maps to a fresh wrapper.
    pub fn handle_vehicle_destroyed(&self, vehicle: HostHandle) {
        let vehicle = self.resolve(vehicle);
        let event = VehicleDestroyedEvent {
            vehicle: vehicle.clone(),
        };
        if let Some(wrapper) = vehicle.as_vehicle() {
            wrapper.on_destroyed().dispatch(&event, self.sink());
        }
        let id = vehicle.id();
        if id.is_valid() {
            self.registry.borrow_mut().remove(id);
        }
    }

    pub fn handle_trigger_entered(&self, entity: HostHandle, trigger: HostHandle) {
        let entity = self.resolve(entity);
        let trigger = self.resolve(trigger);
        let event = TriggerEvent {
            entity,
            trigger: trigger.clone(),
        };
        if let Some(wrapper) = trigger.as_area_trigger() {
            wrapper.on_entered().dispatch(&event, self.sink());
        }
    }

    pub fn handle_trigger_exited(&self, entity: HostHandle, trigger: HostHandle) {
        let entity = self.resolve(entity);
        let trigger = self.resolve(trigger);
        let event = TriggerEvent {
            entity,
            trigger: trigger.clone(),
        };
        if let Some(wrapper) = trigger.as_area_trigger() {
            wrapper.on_exited().dispatch(&event, self.sink());
        }
    }

    pub fn handle_interact(&self, player: HostHandle, point: HostHandle) {
        let player = self.resolve(player);
        let point = self.resolve(point);
        let event = InteractEvent {
            player,
            point: point.clone(),
        };
        if let Some(wrapper) = point.as_interact_point() {
            wrapper.on_interact().dispatch(&event, self.sink());
        }
    }

    pub fn handle_capture_progress(&self, point: HostHandle, team: TeamId) {
        let point = self.resolve(point);
        let event = CaptureEvent {
            point: point.clone(),
            team,
        };
        if let Some(wrapper) = point.as_capture_point() {
            wrapper.on_capture_progress().dispatch(&event, self.sink());
        }
    }

    /// Point-perspective channel first, then the game-global channel.
    pub fn handle_captured(&self, point: HostHandle, team: TeamId) {
        let point = self.resolve(point);
        let event = CaptureEvent {
            point: point.clone(),
            team,
        };
        if let Some(wrapper) = point.as_capture_point() {
            wrapper.on_captured().dispatch(&event, self.sink());
        }
        self.on_objective_taken.dispatch(&event, self.sink());
    }

    pub fn handle_point_lost(&self, point: HostHandle, team: TeamId) {
        let point = self.resolve(point);
        let event = CaptureEvent {
            point: point.clone(),
            team,
        };
        if let Some(wrapper) = point.as_capture_point() {
            wrapper.on_lost().dispatch(&event, self.sink());
        }
    }

    pub fn handle_mcom_armed(&self, mcom: HostHandle, player: Option<HostHandle>) {
        let mcom = self.resolve(mcom);
        let player = player.map(|handle| self.resolve(handle));
        let event = McomEvent {
            mcom: mcom.clone(),
            player,
        };
        if let Some(wrapper) = mcom.as_mcom() {
            wrapper.on_armed().dispatch(&event, self.sink());
        }
    }

    pub fn handle_mcom_disarmed(&self, mcom: HostHandle, player: Option<HostHandle>) {
        let mcom = self.resolve(mcom);
        let player = player.map(|handle| self.resolve(handle));
        let event = McomEvent {
            mcom: mcom.clone(),
            player,
        };
        if let Some(wrapper) = mcom.as_mcom() {
            wrapper.on_disarmed().dispatch(&event, self.sink());
        }
    }

    pub fn handle_mcom_destroyed(&self, mcom: HostHandle, player: Option<HostHandle>) {
        let mcom = self.resolve(mcom);
        let player = player.map(|handle| self.resolve(handle));
        let event = McomEvent {
            mcom: mcom.clone(),
            player,
        };
        if let Some(wrapper) = mcom.as_mcom() {
            wrapper.on_destroyed().dispatch(&event, self.sink());
        }
    }

    pub fn handle_team_joined(&self, player: HostHandle, team: HostHandle) {
        let player = self.resolve(player);
        let team = self.resolve(team);
        let event = TeamJoinEvent {
            player,
            team: team.clone(),
        };
        if let Some(wrapper) = team.as_team() {
            wrapper.on_player_joined_team().dispatch(&event, self.sink());
        }
    }

    /// Per-entity periodic report.
    pub fn handle_ongoing(&self, entity: HostHandle) {
        let entity = self.resolve(entity);
        let event = GoingEvent {
            entity: entity.clone(),
        };
        entity.on_going().dispatch(&event, self.sink());
    }

    /// Game-wide tick: dispatches the global tick channel, then steps
    /// every installed routine. Routines installed by a handler or a step
    /// during this tick start running on the next one.
    pub fn handle_tick(&self, dt: f32) {
        self.on_tick.dispatch(&TickEvent { dt }, self.sink());

        let mut running = self.routines.borrow_mut().take_active();
        running.retain_mut(|routine| routine.run_once(dt, self.sink()));
        self.routines.borrow_mut().restore(running);
    }

    /// Consumes the requester's pending trace. Only the most recent
    /// request for an entity is live; anything it replaced never fires.
    pub fn handle_raycast_hit(
        &self,
        requester: HostHandle,
        point: Vec3,
        normal: Vec3,
        target: Option<HostHandle>,
    ) {
        let requester = self.resolve(requester);
        let Some(request) = self.pending_raycasts.borrow_mut().remove(&requester.id()) else {
            return;
        };
        let target = target.map(|handle| self.resolve(handle));
        let event = RaycastHit {
            requester,
            point,
            normal,
            target,
        };
        if let Err(fault) = request.on_hit.as_ref()(&event) {
            self.sink()
                .report_error(&format!("raycast hit handler failed: {fault}"));
        }
    }

    pub fn handle_raycast_miss(&self, requester: HostHandle) {
        let requester = self.resolve(requester);
        let Some(request) = self.pending_raycasts.borrow_mut().remove(&requester.id()) else {
            return;
        };
        let event = RaycastMiss { requester };
        if let Err(fault) = request.on_miss.as_ref()(&event) {
            self.sink()
                .report_error(&format!("raycast miss handler failed: {fault}"));
        }
    }
}
