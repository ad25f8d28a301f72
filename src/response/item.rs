use crate::types::ItemId;
use crate::serialize::into_bool;
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

/// The item ID the API uses for an empty inventory slot.
pub const EMPTY_ITEM_ID: ItemId = 0;

/// An item.
///
/// Items are compared by `id` only. Metadata is only present on items from a
/// [`GameItems`](super::GameItems) response or items resolved against one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// The ID of the item.
    pub id: ItemId,
    /// The internal name e.g. `item_tango`.
    #[serde(default)]
    pub name: Option<String>,
    /// The name in the requested language e.g. `Tango`.
    #[serde(default)]
    pub localized_name: Option<String>,
    /// The gold cost.
    #[serde(default)]
    pub cost: Option<u32>,
    /// Whether the item is sold in the secret shop.
    #[serde(default, deserialize_with = "into_bool")]
    pub secret_shop: bool,
    /// Whether the item is sold in the side shop.
    #[serde(default, deserialize_with = "into_bool")]
    pub side_shop: bool,
    /// Whether the item is a recipe.
    #[serde(default, deserialize_with = "into_bool")]
    pub recipe: bool,
}

impl Item {
    /// Creates an item known only by its ID.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: None,
            localized_name: None,
            cost: None,
            secret_shop: false,
            side_shop: false,
            recipe: false,
        }
    }

    /// Creates an item from an inventory slot. Returns `None` for an empty slot.
    pub fn from_slot(id: ItemId) -> Option<Self> {
        if id == EMPTY_ITEM_ID {
            None
        } else {
            Some(Self::new(id))
        }
    }

    /// Whether the names for this item are known.
    pub fn is_resolved(&self) -> bool {
        self.name.is_some()
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
