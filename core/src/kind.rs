/// Closed set of capability variants an entity handle can resolve to.
///
/// `Unknown` is never probed for; it is the fallback the resolver lands on
/// when no capability query matches a handle.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum EntityKind {
    Player,
    AiPlayer,
    Vehicle,
    CapturePoint,
    Mcom,
    Hq,
    Sector,
    Spawner,
    VehicleSpawner,
    AreaTrigger,
    InteractPoint,
    WaypointPath,
    WorldIcon,
    Vfx,
    Sfx,
    Team,
    Unknown,
}

impl EntityKind {
    /// Fixed capability probe order used during resolution. Most specific
    /// first: an AI soldier also answers the player query, and a vehicle
    /// spawner also answers the spawner query, so those pairs must be
    /// probed in this order.
    pub const PROBE_ORDER: [EntityKind; 16] = [
        EntityKind::AiPlayer,
        EntityKind::Player,
        EntityKind::VehicleSpawner,
        EntityKind::Spawner,
        EntityKind::Vehicle,
        EntityKind::CapturePoint,
        EntityKind::Mcom,
        EntityKind::Hq,
        EntityKind::Sector,
        EntityKind::AreaTrigger,
        EntityKind::InteractPoint,
        EntityKind::WaypointPath,
        EntityKind::WorldIcon,
        EntityKind::Vfx,
        EntityKind::Sfx,
        EntityKind::Team,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Player => "Player",
            EntityKind::AiPlayer => "AiPlayer",
            EntityKind::Vehicle => "Vehicle",
            EntityKind::CapturePoint => "CapturePoint",
            EntityKind::Mcom => "Mcom",
            EntityKind::Hq => "Hq",
            EntityKind::Sector => "Sector",
            EntityKind::Spawner => "Spawner",
            EntityKind::VehicleSpawner => "VehicleSpawner",
            EntityKind::AreaTrigger => "AreaTrigger",
            EntityKind::InteractPoint => "InteractPoint",
            EntityKind::WaypointPath => "WaypointPath",
            EntityKind::WorldIcon => "WorldIcon",
            EntityKind::Vfx => "Vfx",
            EntityKind::Sfx => "Sfx",
            EntityKind::Team => "Team",
            EntityKind::Unknown => "Unknown",
        }
    }

    /// Whether this kind carries a soldier capability set.
    pub fn is_player(&self) -> bool {
        matches!(self, EntityKind::Player | EntityKind::AiPlayer)
    }
}
