use crate::types::HeroId;
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

const HERO_NAME_PREFIX: &str = "npc_dota_hero_";

/// A hero.
///
/// Heroes are compared by `id` only. The same hero fetched in two languages is equal even though
/// the localized names differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    /// The ID of the hero.
    pub id: HeroId,
    /// The internal name e.g. `npc_dota_hero_huskar`. `None` when the hero was only referenced
    /// by its ID.
    #[serde(default)]
    pub name: Option<String>,
    /// The name in the requested language e.g. `Huskar`. `None` when the hero was only referenced
    /// by its ID.
    #[serde(default)]
    pub localized_name: Option<String>,
}

impl Hero {
    /// Creates a hero known only by its ID.
    pub fn new(id: HeroId) -> Self {
        Self {
            id,
            name: None,
            localized_name: None,
        }
    }

    /// The internal name without the `npc_dota_hero_` prefix e.g. `huskar`.
    pub fn short_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(|name| name.strip_prefix(HERO_NAME_PREFIX).unwrap_or(name))
    }

    /// Whether the names for this hero are known.
    pub fn is_resolved(&self) -> bool {
        self.name.is_some()
    }
}

impl PartialEq for Hero {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Hero {}

impl Hash for Hero {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
