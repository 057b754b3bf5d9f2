/// Movement posture an AI soldier takes after spawning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorKind {
    /// Stay near the spawn point.
    Hold,
    /// Cycle waypoints around the spawn point.
    Patrol,
    /// Push toward the nearest objective.
    Assault,
}

/// Reusable behavior+attribute blueprint applied to a newly spawned AI
/// soldier. Bound to a spawner with [`crate::Game::bind_personality`] and
/// consumed by at most one confirmed spawn from that spawner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct Personality {
    name: String,
    accuracy: f32,
    aggression: f32,
    behavior: BehaviorKind,
}

impl Personality {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            accuracy: 0.5,
            aggression: 0.5,
            behavior: BehaviorKind::Hold,
        }
    }

    pub fn with_accuracy(mut self, accuracy: f32) -> Self {
        self.accuracy = accuracy.clamp(0.0, 1.0);
        self
    }

    pub fn with_aggression(mut self, aggression: f32) -> Self {
        self.aggression = aggression.clamp(0.0, 1.0);
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorKind) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accuracy(&self) -> f32 {
        self.accuracy
    }

    pub fn aggression(&self) -> f32 {
        self.aggression
    }

    pub fn behavior(&self) -> BehaviorKind {
        self.behavior
    }
}
