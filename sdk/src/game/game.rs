use std::{cell::RefCell, cmp::Ordering, collections::HashMap, rc::Rc};

use log::warn;

use frontline_core::{
    EntityId, EntityKind, EntityRegistry, ErrorSink, EventChannel, Handler, Host, HostHandle,
    SquadTag, TeamId, Vec3,
};

use crate::{
    ai::{BehaviorKind, Personality, Routine, RoutineScheduler},
    entity::{
        AreaTrigger, CapturePoint, Entity, GenericEntity, Hq, InteractPoint, Mcom, Player, Sector,
        Sfx, Spawner, Squad, Team, Vehicle, VehicleSpawner, Vfx, WaypointPath, WorldIcon,
    },
    events::{CaptureEvent, DiedEvent, JoinEvent, LeaveEvent, RaycastHit, RaycastMiss, TickEvent},
    scoreboard::ScoreboardConfig,
};

use super::config::GameConfig;

pub(super) struct RaycastRequest {
    pub(super) on_hit: Handler<RaycastHit>,
    pub(super) on_miss: Handler<RaycastMiss>,
}

/// Façade over one host runtime session.
///
/// Owns the identity registry, the game-global channels, and the
/// correlation state the occurrence entry points consume (pending
/// personality bindings, pending raycasts, installed routines). The host
/// drives it exclusively through the `handle_*` entry points; everything
/// here runs on that single callback thread.
pub struct Game {
    pub(super) host: Rc<dyn Host>,
    pub(super) sink: Rc<dyn ErrorSink>,
    pub(super) config: GameConfig,
    pub(super) registry: RefCell<EntityRegistry<Entity>>,
    pub(super) pending_personalities: RefCell<HashMap<EntityId, Personality>>,
    pub(super) pending_raycasts: RefCell<HashMap<EntityId, RaycastRequest>>,
    pub(super) routines: RefCell<RoutineScheduler>,
    pub(super) squad_reps: RefCell<HashMap<(TeamId, SquadTag), EntityId>>,
    pub(super) on_player_joined: EventChannel<JoinEvent>,
    pub(super) on_player_left: EventChannel<LeaveEvent>,
    pub(super) on_player_died: EventChannel<DiedEvent>,
    pub(super) on_objective_taken: EventChannel<CaptureEvent>,
    pub(super) on_tick: EventChannel<TickEvent>,
}

impl Game {
    pub fn new(host: impl Host + 'static) -> Self {
        Self::with_config(host, GameConfig::default())
    }

    pub fn with_config(host: impl Host + 'static, config: GameConfig) -> Self {
        let host = Rc::new(host);
        let sink: Rc<dyn ErrorSink> = host.clone();
        let host: Rc<dyn Host> = host;
        Self {
            routines: RefCell::new(RoutineScheduler::new(config.max_routines_per_entity)),
            host,
            sink,
            config,
            registry: RefCell::new(EntityRegistry::new()),
            pending_personalities: RefCell::new(HashMap::new()),
            pending_raycasts: RefCell::new(HashMap::new()),
            squad_reps: RefCell::new(HashMap::new()),
            on_player_joined: EventChannel::new(),
            on_player_left: EventChannel::new(),
            on_player_died: EventChannel::new(),
            on_objective_taken: EventChannel::new(),
            on_tick: EventChannel::new(),
        }
    }

    pub(super) fn sink(&self) -> &dyn ErrorSink {
        self.sink.as_ref()
    }

    // Resolution

    /// Maps a raw host handle to its canonical wrapper, constructing and
    /// registering one on first sight. Total: an unknown kind degrades to
    /// a generic wrapper and an id-less handle yields a usable,
    /// unregistered one — resolution sits on the dispatch hot path and a
    /// failure here would silently drop gameplay occurrences.
    pub fn resolve(&self, handle: HostHandle) -> Entity {
        let id = self.host.entity_id(handle).unwrap_or(EntityId::INVALID);

        // First-seen kind wins for the id's lifetime, even if the handle
        // now answers a different capability query.
        if id.is_valid() {
            if let Some(existing) = self.registry.borrow().lookup(id) {
                return existing.clone();
            }
        }

        let entity = self.construct_wrapper(id, handle);
        if id.is_valid() {
            self.registry.borrow_mut().register(id, entity.clone());
        }
        entity
    }

    fn construct_wrapper(&self, id: EntityId, handle: HostHandle) -> Entity {
        for kind in EntityKind::PROBE_ORDER {
            if !self.host.is_kind(handle, kind) {
                continue;
            }
            let host = self.host.clone();
            return match kind {
                EntityKind::AiPlayer => Entity::Player(Rc::new(Player::new(id, handle, host, true))),
                EntityKind::Player => Entity::Player(Rc::new(Player::new(id, handle, host, false))),
                EntityKind::Vehicle => Entity::Vehicle(Rc::new(Vehicle::new(id, handle, host))),
                EntityKind::CapturePoint => {
                    Entity::CapturePoint(Rc::new(CapturePoint::new(id, handle, host)))
                }
                EntityKind::Mcom => Entity::Mcom(Rc::new(Mcom::new(id, handle, host))),
                EntityKind::Hq => Entity::Hq(Rc::new(Hq::new(id, handle, host))),
                EntityKind::Sector => Entity::Sector(Rc::new(Sector::new(id, handle, host))),
                EntityKind::Spawner => Entity::Spawner(Rc::new(Spawner::new(id, handle, host))),
                EntityKind::VehicleSpawner => {
                    Entity::VehicleSpawner(Rc::new(VehicleSpawner::new(id, handle, host)))
                }
                EntityKind::AreaTrigger => {
                    Entity::AreaTrigger(Rc::new(AreaTrigger::new(id, handle, host)))
                }
                EntityKind::InteractPoint => {
                    Entity::InteractPoint(Rc::new(InteractPoint::new(id, handle, host)))
                }
                EntityKind::WaypointPath => {
                    Entity::WaypointPath(Rc::new(WaypointPath::new(id, handle, host)))
                }
                EntityKind::WorldIcon => Entity::WorldIcon(Rc::new(WorldIcon::new(id, handle, host))),
                EntityKind::Vfx => Entity::Vfx(Rc::new(Vfx::new(id, handle, host))),
                EntityKind::Sfx => Entity::Sfx(Rc::new(Sfx::new(id, handle, host))),
                EntityKind::Team => Entity::Team(Rc::new(Team::new(id, handle, host))),
                // Unknown is not a probe; fall through to the generic wrapper.
                EntityKind::Unknown => continue,
            };
        }

        if self.config.warn_on_unknown_kind {
            warn!(
                "no capability probe matched handle {:?}; using generic wrapper",
                handle
            );
        }
        Entity::Generic(Rc::new(GenericEntity::new(id, handle, self.host.clone())))
    }

    /// The wrapper registered under `id`, if one is live.
    pub fn lookup(&self, id: EntityId) -> Option<Entity> {
        self.registry.borrow().lookup(id).cloned()
    }

    pub fn entity_count(&self) -> usize {
        self.registry.borrow().len()
    }

    // Raycast

    /// Issues a host line trace on behalf of `requester`. The eventual
    /// hit/miss report is correlated back by the requester's id; a second
    /// trace issued before the first resolves replaces it, and the
    /// earlier callbacks are silently dropped (last request wins).
    pub fn trace(
        &self,
        requester: &Entity,
        from: Vec3,
        to: Vec3,
        on_hit: Handler<RaycastHit>,
        on_miss: Handler<RaycastMiss>,
    ) {
        let id = requester.id();
        if !id.is_valid() {
            self.sink
                .report_error("raycast requester has no id; request dropped");
            return;
        }
        self.pending_raycasts
            .borrow_mut()
            .insert(id, RaycastRequest { on_hit, on_miss });
        self.host.trace_line(id, from, to);
    }

    // AI

    /// Arms `personality` against `spawner`. The next confirmed spawn
    /// from that spawner consumes the binding; re-binding before then
    /// overwrites it.
    pub fn bind_personality(&self, spawner: &Entity, personality: Personality) {
        let id = spawner.id();
        if !id.is_valid() {
            self.sink
                .report_error("personality bound to a spawner with no id; binding dropped");
            return;
        }
        self.pending_personalities
            .borrow_mut()
            .insert(id, personality);
    }

    pub(super) fn apply_personality(&self, spawned: &Entity, personality: Personality) {
        let Some(player) = spawned.as_player() else {
            self.sink
                .report_error("personality binding consumed by a non-soldier spawn");
            return;
        };
        player.store_personality(personality.clone());
        if !player.is_ai() {
            return;
        }

        self.host
            .set_ai_skill(player.handle(), personality.accuracy(), personality.aggression());

        let anchor = spawned.position();
        let waypoints = match personality.behavior() {
            BehaviorKind::Hold => return,
            BehaviorKind::Patrol => vec![
                Vec3::new(anchor.x + 10.0, anchor.y, anchor.z),
                Vec3::new(anchor.x, anchor.y, anchor.z + 10.0),
                Vec3::new(anchor.x - 10.0, anchor.y, anchor.z),
                Vec3::new(anchor.x, anchor.y, anchor.z - 10.0),
            ],
            BehaviorKind::Assault => vec![self.nearest_capture_point(anchor).unwrap_or(anchor)],
        };

        let mut leg = 0usize;
        self.install_routine(Routine::new(
            spawned.clone(),
            |entity| entity.as_player().map(Player::is_alive).unwrap_or(false),
            move |entity, _dt| {
                if let Some(ai) = entity.as_player().and_then(|player| player.as_ai()) {
                    ai.order_move_to(waypoints[leg % waypoints.len()]);
                    leg += 1;
                }
                Ok(())
            },
        ));
    }

    fn nearest_capture_point(&self, from: Vec3) -> Option<Vec3> {
        self.registry
            .borrow()
            .values()
            .filter_map(|entity| entity.as_capture_point().map(CapturePoint::position))
            .min_by(|a, b| {
                a.distance_to(&from)
                    .partial_cmp(&b.distance_to(&from))
                    .unwrap_or(Ordering::Equal)
            })
    }

    /// Installs a behavior routine, stepped once per host tick until its
    /// continuation predicate answers false.
    pub fn install_routine(&self, routine: Routine) {
        let id = routine.entity_id();
        if !self.routines.borrow_mut().install(routine) {
            self.sink.report_error(&format!(
                "routine cap reached for entity {}; install dropped",
                id.to_raw()
            ));
        }
    }

    pub fn routine_count(&self) -> usize {
        self.routines.borrow().len()
    }

    // Squads

    /// Derived squad identity for `player`'s squad. The proxy key is a
    /// representative member elected at first lookup; see [`Squad`] for
    /// the stability caveat.
    pub fn squad_of(&self, player: &Player) -> Squad {
        let team = player.team();
        let tag = player.squad_tag();
        let key = (team, tag);

        let mut representatives = self.squad_reps.borrow_mut();
        if let Some(representative) = representatives.get(&key) {
            if self.registry.borrow().contains(*representative) {
                return Squad::new(*representative, team, tag);
            }
        }
        representatives.insert(key, player.id());
        Squad::new(player.id(), team, tag)
    }

    /// Live players currently sharing `squad`'s team and tag.
    pub fn squad_members(&self, squad: &Squad) -> Vec<Entity> {
        self.registry
            .borrow()
            .values()
            .filter(|entity| {
                entity
                    .as_player()
                    .map(|player| player.team() == squad.team() && player.squad_tag() == squad.tag())
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    // Scoreboard

    /// Pushes the scoreboard layout to the host. The host accepts one to
    /// five columns; anything else is reported to the error sink and the
    /// call is dropped without reaching the host.
    pub fn configure_scoreboard(&self, config: &ScoreboardConfig) {
        let count = config.columns().len();
        if !(1..=5).contains(&count) {
            self.sink.report_error(&format!(
                "scoreboard supports 1..=5 columns, got {count}; call dropped"
            ));
            return;
        }
        self.host.apply_scoreboard(config.header(), config.columns());
    }

    // Global channels

    pub fn on_player_joined(&self) -> &EventChannel<JoinEvent> {
        &self.on_player_joined
    }

    pub fn on_player_left(&self) -> &EventChannel<LeaveEvent> {
        &self.on_player_left
    }

    pub fn on_player_died(&self) -> &EventChannel<DiedEvent> {
        &self.on_player_died
    }

    pub fn on_objective_taken(&self) -> &EventChannel<CaptureEvent> {
        &self.on_objective_taken
    }

    pub fn on_tick(&self) -> &EventChannel<TickEvent> {
        &self.on_tick
    }
}
