use super::Item;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};

/// All items from a GetGameItems response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameItems {
    pub items: Vec<Item>,
}

impl GameItems {
    /// Gets an item by its ID.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
    }

    /// Gets an item by its internal name e.g. `item_tango`.
    pub fn get_by_name(&self, name: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.name.as_deref() == Some(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for GameItems {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
