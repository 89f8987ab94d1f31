//! Item catalog loading

use super::ConfigError;
use crate::item::{AmmoProfile, ArmorProfile, Item, WeaponProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Container for catalog files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(rename = "items")]
    pub items: Vec<Item>,
}

/// Items keyed by id, iterated in id order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: BTreeMap<String, Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item; a later item with the same id replaces the earlier one
    pub fn register(&mut self, item: Item) {
        if let Some(previous) = self.items.insert(item.id().to_string(), item) {
            warn!(id = previous.id(), "duplicate catalog id, keeping the later entry");
        }
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn weapon(&self, id: &str) -> Result<&WeaponProfile, ConfigError> {
        self.lookup(id)?
            .as_weapon()
            .ok_or_else(|| wrong_category(id, "weapon"))
    }

    pub fn ammo(&self, id: &str) -> Result<&AmmoProfile, ConfigError> {
        self.lookup(id)?
            .as_ammo()
            .ok_or_else(|| wrong_category(id, "ammo"))
    }

    pub fn armor(&self, id: &str) -> Result<&ArmorProfile, ConfigError> {
        self.lookup(id)?
            .as_armor()
            .ok_or_else(|| wrong_category(id, "armor"))
    }

    /// All ammunition a weapon chambers, ordered by id
    pub fn ammo_for<'a>(&'a self, weapon: &'a WeaponProfile) -> impl Iterator<Item = &'a AmmoProfile> + 'a {
        self.items
            .values()
            .filter_map(Item::as_ammo)
            .filter(move |ammo| weapon.accepts(ammo))
    }

    fn lookup(&self, id: &str) -> Result<&Item, ConfigError> {
        self.items
            .get(id)
            .ok_or_else(|| ConfigError::UnknownItem(id.to_string()))
    }

    fn from_file(file: CatalogFile) -> Self {
        let mut catalog = Catalog::new();
        for item in file.items {
            catalog.register(item);
        }
        catalog
    }
}

fn wrong_category(id: &str, expected: &'static str) -> ConfigError {
    ConfigError::WrongCategory {
        id: id.to_string(),
        expected,
    }
}

/// Load a catalog from a JSON string (`{"items": [...]}`)
pub fn parse_catalog_json(content: &str) -> Result<Catalog, ConfigError> {
    let file: CatalogFile = super::parse_json(content)?;
    Ok(Catalog::from_file(file))
}

/// Load a catalog from a TOML string (`[[items]]` tables)
pub fn parse_catalog_toml(content: &str) -> Result<Catalog, ConfigError> {
    let file: CatalogFile = super::parse_toml(content)?;
    Ok(Catalog::from_file(file))
}

/// Load a catalog file, picking the format from the extension (JSON unless `.toml`)
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_catalog_toml(&content),
        _ => parse_catalog_json(&content),
    }
}
