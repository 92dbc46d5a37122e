//! Items and inventories.
//!
//! An inventory payload is a separator-joined list of occupied slots:
//!
//! ```text
//! 0:DIAMOND_SWORD;Excalibur:1𝇉4:STONE:64
//! │ │             │         │
//! │ │             │         └ amount
//! │ │             └ display name (optional, may be empty)
//! │ └ material
//! └ slot index
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::parse_field;
use crate::{Material, MaterialType, ProtocolError, join_fields, split_fields};

/// Looking up a slot that holds no item.
///
/// Raised for every absent slot, whether or not the index exists in a
/// real inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("inventory slot {0} is empty")]
pub struct SlotEmpty(pub i32);

/// An item: a material plus an optional custom display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub kind: MaterialType,
    pub display_name: Option<String>,
}

impl Item {
    /// An item without a custom name.
    pub fn new(kind: impl Into<MaterialType>) -> Self {
        Self {
            kind: kind.into(),
            display_name: None,
        }
    }

    /// An item with a custom name.
    pub fn named(kind: impl Into<MaterialType>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            display_name: Some(name.into()),
        }
    }

    /// Decodes `TYPE` or `TYPE;display name`. An empty name is absent.
    pub fn from_wire(raw: &str) -> Self {
        let (kind, name) = raw.split_once(';').unwrap_or((raw, ""));
        Self {
            kind: MaterialType::from_wire(kind),
            display_name: (!name.is_empty()).then(|| name.to_string()),
        }
    }

    /// Encodes as `TYPE;display name`, or just `TYPE` without a name.
    pub fn to_wire(&self) -> String {
        match &self.display_name {
            Some(name) => format!("{};{name}", self.kind.as_wire()),
            None => self.kind.as_wire().to_string(),
        }
    }
}

/// What to hand to a player: a bare material or a fully described item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Kind(Material),
    Named(Item),
}

impl ItemRef {
    /// The material name sent on the wire.
    pub fn wire_kind(&self) -> &str {
        match self {
            Self::Kind(material) => material.as_wire(),
            Self::Named(item) => item.kind.as_wire(),
        }
    }

    /// The custom name carried by the reference, if any.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Kind(_) => None,
            Self::Named(item) => item.display_name.as_deref(),
        }
    }
}

impl From<Material> for ItemRef {
    fn from(material: Material) -> Self {
        Self::Kind(material)
    }
}

impl From<Item> for ItemRef {
    fn from(item: Item) -> Self {
        Self::Named(item)
    }
}

/// One occupied inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryField {
    /// Slot number.
    pub index: i32,
    pub item: Item,
    pub amount: i32,
}

impl InventoryField {
    /// Decodes `index:item:amount`.
    ///
    /// The index ends at the first `:` and the amount starts after the
    /// last one, so display names may contain colons.
    pub fn from_wire(raw: &str) -> Result<Self, ProtocolError> {
        let malformed = || ProtocolError::Malformed {
            model: "inventory field",
            record: raw.to_string(),
        };
        let (index, rest) = raw.split_once(':').ok_or_else(malformed)?;
        let (item, amount) = rest.rsplit_once(':').ok_or_else(malformed)?;
        if item.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            index: parse_field("inventory.index", index)?,
            item: Item::from_wire(item),
            amount: parse_field("inventory.amount", amount)?,
        })
    }

    pub fn to_wire(&self) -> String {
        format!("{}:{}:{}", self.index, self.item.to_wire(), self.amount)
    }
}

/// A player's inventory, keyed by slot. Empty slots are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    fields: HashMap<i32, InventoryField>,
}

impl Inventory {
    /// Decodes an inventory payload.
    ///
    /// An empty payload is an empty inventory. Empty records (e.g. from a
    /// trailing separator) and zero-amount slots are skipped.
    pub fn from_wire(text: &str) -> Result<Self, ProtocolError> {
        let mut inventory = Self::default();
        for record in split_fields(text).filter(|r| !r.is_empty()) {
            let field = InventoryField::from_wire(record)?;
            if field.amount > 0 {
                inventory.fields.insert(field.index, field);
            }
        }
        Ok(inventory)
    }

    /// Encodes in slot order.
    pub fn to_wire(&self) -> String {
        let mut fields: Vec<&InventoryField> = self.fields.values().collect();
        fields.sort_by_key(|f| f.index);
        join_fields(fields.into_iter().map(InventoryField::to_wire))
    }

    /// Returns the field at `slot`.
    ///
    /// # Errors
    /// [`SlotEmpty`] if nothing is stored there.
    pub fn get(&self, slot: i32) -> Result<&InventoryField, SlotEmpty> {
        self.fields.get(&slot).ok_or(SlotEmpty(slot))
    }

    /// Whether any slot holds an item of the same material.
    /// Display names are ignored.
    pub fn contains(&self, item: &Item) -> bool {
        self.fields.values().any(|f| f.item.kind == item.kind)
    }

    /// Whether any slot holds `material`.
    pub fn contains_material(&self, material: Material) -> bool {
        self.fields.values().any(|f| f.item.kind == material)
    }

    /// Total amount of `material` across all slots.
    pub fn count(&self, material: Material) -> i32 {
        self.fields
            .values()
            .filter(|f| f.item.kind == material)
            .map(|f| f.amount)
            .sum()
    }

    /// Occupied slots, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &InventoryField> {
        self.fields.values()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
