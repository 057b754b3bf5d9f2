use frontline_core::{EntityId, SquadTag, TeamId};

/// Derived squad identity. The host assigns no id to a squad, so the
/// proxy key is the id of a representative member elected at first
/// lookup. The key is only as stable as that member: if the
/// representative leaves before the next lookup, a new one is elected
/// and values holding the old key go stale — their member scan simply
/// reflects whatever players are live at call time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Squad {
    representative: EntityId,
    team: TeamId,
    tag: SquadTag,
}

impl Squad {
    pub(crate) fn new(representative: EntityId, team: TeamId, tag: SquadTag) -> Self {
        Self {
            representative,
            team,
            tag,
        }
    }

    pub fn representative(&self) -> EntityId {
        self.representative
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    pub fn tag(&self) -> SquadTag {
        self.tag
    }
}
