//! Catalog item records - weapons, ammunition and armor

mod ammo;
mod armor;
mod weapon;

pub use ammo::{AmmoProfile, RangeTable};
pub use armor::{ArmorProfile, ProtectiveData};
pub use weapon::WeaponProfile;

use serde::{Deserialize, Serialize};

/// A catalog item, tagged by category
///
/// Items share an id and a name; everything else is category specific.
/// Use the capability accessors to narrow to the stat shape you need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Item {
    Weapon(WeaponProfile),
    Ammo(AmmoProfile),
    Armor(ArmorProfile),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Weapon(w) => &w.id,
            Item::Ammo(a) => &a.id,
            Item::Armor(a) => &a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(w) => &w.name,
            Item::Ammo(a) => &a.name,
            Item::Armor(a) => &a.name,
        }
    }

    /// Category label as used in the `category` tag
    pub fn category(&self) -> &'static str {
        match self {
            Item::Weapon(_) => "weapon",
            Item::Ammo(_) => "ammo",
            Item::Armor(_) => "armor",
        }
    }

    pub fn as_weapon(&self) -> Option<&WeaponProfile> {
        match self {
            Item::Weapon(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_ammo(&self) -> Option<&AmmoProfile> {
        match self {
            Item::Ammo(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_armor(&self) -> Option<&ArmorProfile> {
        match self {
            Item::Armor(a) => Some(a),
            _ => None,
        }
    }

    pub fn is_weapon(&self) -> bool {
        self.as_weapon().is_some()
    }

    pub fn is_ammo(&self) -> bool {
        self.as_ammo().is_some()
    }

    pub fn is_armor(&self) -> bool {
        self.as_armor().is_some()
    }
}
