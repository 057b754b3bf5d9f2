mod inventory;
mod weapon;

pub use inventory::Inventory;
pub use weapon::{Weapon, WeaponSpec};
