use super::Hero;
use crate::types::HeroId;
use serde::{Deserialize, Serialize};

/// All heroes from a GetHeroes response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Heroes {
    pub heroes: Vec<Hero>,
}

impl Heroes {
    /// Gets a hero by its ID.
    pub fn get(&self, id: HeroId) -> Option<&Hero> {
        self.heroes
            .iter()
            .find(|hero| hero.id == id)
    }

    /// Gets a hero by its internal name e.g. `npc_dota_hero_huskar`.
    pub fn get_by_name(&self, name: &str) -> Option<&Hero> {
        self.heroes
            .iter()
            .find(|hero| hero.name.as_deref() == Some(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter()
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}

impl IntoIterator for Heroes {
    type Item = Hero;
    type IntoIter = std::vec::IntoIter<Hero>;

    fn into_iter(self) -> Self::IntoIter {
        self.heroes.into_iter()
    }
}
