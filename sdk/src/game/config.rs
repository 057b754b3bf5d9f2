use std::default::Default;

/// Contains Config properties which will be used by the Game
#[derive(Clone)]
pub struct GameConfig {
    /// Log a warning whenever a handle matches no capability probe and
    /// resolution degrades to a generic wrapper.
    pub warn_on_unknown_kind: bool,
    /// Upper bound on concurrently installed routines per entity.
    /// Installs beyond it are reported to the host error sink and dropped.
    pub max_routines_per_entity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            warn_on_unknown_kind: true,
            max_routines_per_entity: 8,
        }
    }
}
