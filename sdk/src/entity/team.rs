use std::rc::Rc;

use frontline_core::{EntityId, EntityKind, EventChannel, Host, HostHandle, TeamId};

use crate::events::{GoingEvent, TeamJoinEvent};

use super::base::EntityBase;

pub struct Team {
    base: EntityBase,
    on_player_joined_team: EventChannel<TeamJoinEvent>,
}

impl Team {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::Team, host),
            on_player_joined_team: EventChannel::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.base.id()
    }

    pub fn kind(&self) -> EntityKind {
        self.base.kind()
    }

    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base.on_going()
    }

    pub(crate) fn base(&self) -> &EntityBase {
        &self.base
    }

    pub fn team_id(&self) -> TeamId {
        self.base.host().owner_team_of(self.base.handle())
    }

    pub fn tickets(&self) -> i32 {
        self.base.host().ticket_count_of(self.base.handle())
    }

    pub fn adjust_tickets(&self, delta: i32) {
        self.base.host().adjust_tickets(self.base.handle(), delta);
    }

    pub fn on_player_joined_team(&self) -> &EventChannel<TeamJoinEvent> {
        &self.on_player_joined_team
    }
}
