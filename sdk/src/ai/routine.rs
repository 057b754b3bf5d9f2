use frontline_core::{EntityId, ErrorSink, HandlerResult};

use crate::entity::Entity;

/// Cooperative per-entity behavior loop, driven one step per host tick.
///
/// The loop is the explicit form of "repeat while the entity is valid,
/// yielding between iterations": each tick the continuation predicate is
/// re-checked first, and a false answer retires the routine. There is no
/// external cancel — termination is exit-by-condition only.
pub struct Routine {
    entity: Entity,
    should_continue: Box<dyn Fn(&Entity) -> bool>,
    step: Box<dyn FnMut(&Entity, f32) -> HandlerResult>,
}

impl Routine {
    pub fn new(
        entity: Entity,
        should_continue: impl Fn(&Entity) -> bool + 'static,
        step: impl FnMut(&Entity, f32) -> HandlerResult + 'static,
    ) -> Self {
        Self {
            entity,
            should_continue: Box::new(should_continue),
            step: Box::new(step),
        }
    }

    pub(crate) fn entity_id(&self) -> EntityId {
        self.entity.id()
    }

    /// One scheduler resume: predicate first, then a single step. Returns
    /// whether the routine stays installed. A failing step is reported to
    /// the sink but does not retire the routine.
    pub(crate) fn run_once(&mut self, dt: f32, sink: &dyn ErrorSink) -> bool {
        if !(self.should_continue)(&self.entity) {
            return false;
        }
        if let Err(fault) = (self.step)(&self.entity, dt) {
            sink.report_error(&format!("routine step failed: {fault}"));
        }
        true
    }
}

// RoutineScheduler

pub(crate) struct RoutineScheduler {
    active: Vec<Routine>,
    max_per_entity: usize,
}

impl RoutineScheduler {
    pub(crate) fn new(max_per_entity: usize) -> Self {
        Self {
            active: Vec::new(),
            max_per_entity,
        }
    }

    /// Returns false when the per-entity cap refuses the install.
    pub(crate) fn install(&mut self, routine: Routine) -> bool {
        let id = routine.entity_id();
        let installed = self
            .active
            .iter()
            .filter(|active| active.entity_id() == id)
            .count();
        if installed >= self.max_per_entity {
            return false;
        }
        self.active.push(routine);
        true
    }

    /// Hands the active set to the tick loop. Routines installed while
    /// the loop runs accumulate here and are appended on `restore`.
    pub(crate) fn take_active(&mut self) -> Vec<Routine> {
        std::mem::take(&mut self.active)
    }

    pub(crate) fn restore(&mut self, mut survivors: Vec<Routine>) {
        std::mem::swap(&mut self.active, &mut survivors);
        self.active.append(&mut survivors);
    }

    pub(crate) fn len(&self) -> usize {
        self.active.len()
    }
}
