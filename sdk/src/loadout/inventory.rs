use std::{cell::RefCell, collections::HashMap, rc::Rc};

use frontline_core::{EntityId, Host, HostHandle, WeaponSlot};

use super::weapon::{Weapon, WeaponSpec};

/// One soldier's five loadout slots. The inventory owns its slot
/// contents; a [`Weapon`]'s link back here is an id cleared on removal.
pub struct Inventory {
    host: Rc<dyn Host>,
    handle: HostHandle,
    owner: EntityId,
    slots: RefCell<HashMap<WeaponSlot, Rc<Weapon>>>,
}

impl Inventory {
    pub(crate) fn new(owner: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            host,
            handle,
            owner,
            slots: RefCell::new(HashMap::new()),
        }
    }

    /// Grants `spec` into `slot`, replacing and orphaning whatever the
    /// slot held before.
    pub fn equip(&self, slot: WeaponSlot, spec: WeaponSpec) -> Rc<Weapon> {
        self.host
            .grant_weapon(self.handle, slot, spec.name(), &spec.attachments());

        let weapon = Rc::new(Weapon::new(
            self.host.clone(),
            self.handle,
            slot,
            spec,
            self.owner,
        ));
        if let Some(previous) = self.slots.borrow_mut().insert(slot, weapon.clone()) {
            previous.clear_owner();
        }
        weapon
    }

    pub fn weapon(&self, slot: WeaponSlot) -> Option<Rc<Weapon>> {
        self.slots.borrow().get(&slot).cloned()
    }

    /// Removes the slot content, if any, and clears its owner link.
    pub fn remove(&self, slot: WeaponSlot) -> Option<Rc<Weapon>> {
        let removed = self.slots.borrow_mut().remove(&slot);
        if let Some(weapon) = &removed {
            self.host.remove_weapon(self.handle, slot);
            weapon.clear_owner();
        }
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}
