use std::{cell::Cell, rc::Rc};

use frontline_core::{EntityId, Host, HostHandle, WeaponSlot};

// WeaponSpec

/// Data-only description of a weapon and its attachments, assembled
/// fluently and handed to [`super::Inventory::equip`]:
///
/// ```
/// use frontline_sdk::WeaponSpec;
///
/// let spec = WeaponSpec::new("M5A3")
///     .optic("XDR Holo")
///     .barrel("Extended")
///     .magazine("Drum");
/// assert_eq!(spec.attachments().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSpec {
    name: String,
    optic: Option<String>,
    barrel: Option<String>,
    magazine: Option<String>,
    underbarrel: Option<String>,
}

impl WeaponSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            optic: None,
            barrel: None,
            magazine: None,
            underbarrel: None,
        }
    }

    pub fn optic(mut self, optic: &str) -> Self {
        self.optic = Some(optic.to_string());
        self
    }

    pub fn barrel(mut self, barrel: &str) -> Self {
        self.barrel = Some(barrel.to_string());
        self
    }

    pub fn magazine(mut self, magazine: &str) -> Self {
        self.magazine = Some(magazine.to_string());
        self
    }

    pub fn underbarrel(mut self, underbarrel: &str) -> Self {
        self.underbarrel = Some(underbarrel.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attachment names in fixed mount order.
    pub fn attachments(&self) -> Vec<String> {
        [&self.optic, &self.barrel, &self.magazine, &self.underbarrel]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }
}

// Weapon

/// Live slot content of one soldier's inventory. The link back to its
/// owner is an id, not an owning reference; removal from the inventory
/// clears it.
pub struct Weapon {
    host: Rc<dyn Host>,
    handle: HostHandle,
    slot: WeaponSlot,
    spec: WeaponSpec,
    owner: Cell<Option<EntityId>>,
}

impl Weapon {
    pub(crate) fn new(
        host: Rc<dyn Host>,
        handle: HostHandle,
        slot: WeaponSlot,
        spec: WeaponSpec,
        owner: EntityId,
    ) -> Self {
        Self {
            host,
            handle,
            slot,
            spec,
            owner: Cell::new(Some(owner)),
        }
    }

    pub fn spec(&self) -> &WeaponSpec {
        &self.spec
    }

    pub fn slot(&self) -> WeaponSlot {
        self.slot
    }

    /// Id of the soldier currently carrying this weapon, `None` once it
    /// has been removed from its inventory.
    pub fn owner(&self) -> Option<EntityId> {
        self.owner.get()
    }

    pub fn set_ammo(&self, magazine: u32, reserve: u32) {
        self.host.set_ammo(self.handle, self.slot, magazine, reserve);
    }

    pub(crate) fn clear_owner(&self) {
        self.owner.set(None);
    }
}
