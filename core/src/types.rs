// EntityId

/// Host-assigned identifier for one game object. Non-negative for the
/// lifetime of a live object; the host reports `-1` for slots that have no
/// object behind them yet (e.g. an unfilled player slot before a match
/// assigns it).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct EntityId(i32);

impl EntityId {
    /// The host's "no id" sentinel.
    pub const INVALID: EntityId = EntityId(-1);

    pub fn from_raw(value: i32) -> Self {
        EntityId(value)
    }

    pub fn to_raw(&self) -> i32 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

// HostHandle

/// Opaque reference to a host-managed object. Never inspected directly;
/// everything about the object behind it goes through host queries.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct HostHandle(u64);

impl HostHandle {
    pub fn from_raw(value: u64) -> Self {
        HostHandle(value)
    }

    pub fn to_raw(&self) -> u64 {
        self.0
    }
}

// Scalar tags

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamId(pub u8);

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct SquadTag(pub u8);

// Transform

#[derive(PartialEq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Vec3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[derive(PartialEq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Rotation {
    pub const ZERO: Rotation = Rotation {
        yaw: 0.0,
        pitch: 0.0,
        roll: 0.0,
    };
}

// Host call vocabulary

/// Soldier input classes the host can restrict per player.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub enum InputRestriction {
    Fire,
    Sprint,
    Movement,
    EnterVehicles,
    Interact,
}

/// Loadout slots a soldier carries.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponSlot {
    Primary,
    Secondary,
    Gadget,
    Throwable,
    Melee,
}

/// One column of the host scoreboard. The host supports between one and
/// five of these per board.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreboardColumn {
    pub label: String,
    pub width: u16,
}

impl ScoreboardColumn {
    pub fn new(label: &str, width: u16) -> Self {
        Self {
            label: label.to_string(),
            width,
        }
    }
}
