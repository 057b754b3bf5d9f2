use std::{fmt, rc::Rc};

use frontline_core::{EntityId, EntityKind, EventChannel, Rotation, Vec3};

use crate::events::GoingEvent;

use super::{
    base::EntityBase,
    objective::{CapturePoint, Hq, Mcom, Sector},
    player::Player,
    spawner::{Spawner, VehicleSpawner},
    support::{GenericEntity, Sfx, Vfx, WaypointPath, WorldIcon},
    team::Team,
    trigger::{AreaTrigger, InteractPoint},
    vehicle::Vehicle,
};

/// Canonical wrapper handle for one host object.
///
/// Cloning is cheap and clones refer to the same wrapper: for any valid
/// id, resolution hands out the single instance registered under it, so
/// equality is instance identity. Narrow to a concrete surface with the
/// `as_*` accessors; the first resolution of an id fixes its variant for
/// that id's lifetime.
#[derive(Clone)]
pub enum Entity {
    Player(Rc<Player>),
    Vehicle(Rc<Vehicle>),
    CapturePoint(Rc<CapturePoint>),
    Mcom(Rc<Mcom>),
    Hq(Rc<Hq>),
    Sector(Rc<Sector>),
    Spawner(Rc<Spawner>),
    VehicleSpawner(Rc<VehicleSpawner>),
    AreaTrigger(Rc<AreaTrigger>),
    InteractPoint(Rc<InteractPoint>),
    WaypointPath(Rc<WaypointPath>),
    WorldIcon(Rc<WorldIcon>),
    Vfx(Rc<Vfx>),
    Sfx(Rc<Sfx>),
    Team(Rc<Team>),
    Generic(Rc<GenericEntity>),
}

impl Entity {
    pub(crate) fn base(&self) -> &EntityBase {
        match self {
            Entity::Player(inner) => inner.base(),
            Entity::Vehicle(inner) => inner.base(),
            Entity::CapturePoint(inner) => inner.base(),
            Entity::Mcom(inner) => inner.base(),
            Entity::Hq(inner) => inner.base(),
            Entity::Sector(inner) => inner.base(),
            Entity::Spawner(inner) => inner.base(),
            Entity::VehicleSpawner(inner) => inner.base(),
            Entity::AreaTrigger(inner) => inner.base(),
            Entity::InteractPoint(inner) => inner.base(),
            Entity::WaypointPath(inner) => inner.base(),
            Entity::WorldIcon(inner) => inner.base(),
            Entity::Vfx(inner) => inner.base(),
            Entity::Sfx(inner) => inner.base(),
            Entity::Team(inner) => inner.base(),
            Entity::Generic(inner) => inner.base(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.base().id()
    }

    pub fn kind(&self) -> EntityKind {
        self.base().kind()
    }

    pub fn position(&self) -> Vec3 {
        self.base().position()
    }

    pub fn rotation(&self) -> Rotation {
        self.base().rotation()
    }

    pub fn teleport(&self, position: Vec3) {
        self.base().teleport(position);
    }

    pub fn set_rotation(&self, rotation: Rotation) {
        self.base().set_rotation(rotation);
    }

    pub fn destroy(&self) {
        self.base().destroy();
    }

    /// Per-entity periodic channel, dispatched once per host tick report
    /// for this entity.
    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base().on_going()
    }

    // Narrowing

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Entity::Player(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_vehicle(&self) -> Option<&Vehicle> {
        match self {
            Entity::Vehicle(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_capture_point(&self) -> Option<&CapturePoint> {
        match self {
            Entity::CapturePoint(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_mcom(&self) -> Option<&Mcom> {
        match self {
            Entity::Mcom(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_hq(&self) -> Option<&Hq> {
        match self {
            Entity::Hq(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_sector(&self) -> Option<&Sector> {
        match self {
            Entity::Sector(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_spawner(&self) -> Option<&Spawner> {
        match self {
            Entity::Spawner(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_vehicle_spawner(&self) -> Option<&VehicleSpawner> {
        match self {
            Entity::VehicleSpawner(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_area_trigger(&self) -> Option<&AreaTrigger> {
        match self {
            Entity::AreaTrigger(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_interact_point(&self) -> Option<&InteractPoint> {
        match self {
            Entity::InteractPoint(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_waypoint_path(&self) -> Option<&WaypointPath> {
        match self {
            Entity::WaypointPath(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_world_icon(&self) -> Option<&WorldIcon> {
        match self {
            Entity::WorldIcon(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_vfx(&self) -> Option<&Vfx> {
        match self {
            Entity::Vfx(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_sfx(&self) -> Option<&Sfx> {
        match self {
            Entity::Sfx(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_team(&self) -> Option<&Team> {
        match self {
            Entity::Team(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_generic(&self) -> Option<&GenericEntity> {
        match self {
            Entity::Generic(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Instance identity: two handles are equal iff they point at the same
/// wrapper allocation.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Entity::Player(a), Entity::Player(b)) => Rc::ptr_eq(a, b),
            (Entity::Vehicle(a), Entity::Vehicle(b)) => Rc::ptr_eq(a, b),
            (Entity::CapturePoint(a), Entity::CapturePoint(b)) => Rc::ptr_eq(a, b),
            (Entity::Mcom(a), Entity::Mcom(b)) => Rc::ptr_eq(a, b),
            (Entity::Hq(a), Entity::Hq(b)) => Rc::ptr_eq(a, b),
            (Entity::Sector(a), Entity::Sector(b)) => Rc::ptr_eq(a, b),
            (Entity::Spawner(a), Entity::Spawner(b)) => Rc::ptr_eq(a, b),
            (Entity::VehicleSpawner(a), Entity::VehicleSpawner(b)) => Rc::ptr_eq(a, b),
            (Entity::AreaTrigger(a), Entity::AreaTrigger(b)) => Rc::ptr_eq(a, b),
            (Entity::InteractPoint(a), Entity::InteractPoint(b)) => Rc::ptr_eq(a, b),
            (Entity::WaypointPath(a), Entity::WaypointPath(b)) => Rc::ptr_eq(a, b),
            (Entity::WorldIcon(a), Entity::WorldIcon(b)) => Rc::ptr_eq(a, b),
            (Entity::Vfx(a), Entity::Vfx(b)) => Rc::ptr_eq(a, b),
            (Entity::Sfx(a), Entity::Sfx(b)) => Rc::ptr_eq(a, b),
            (Entity::Team(a), Entity::Team(b)) => Rc::ptr_eq(a, b),
            (Entity::Generic(a), Entity::Generic(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Entity {}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("kind", &self.kind().name())
            .field("id", &self.id().to_raw())
            .finish()
    }
}
