//! Giving items and reading inventories.

use blockwire_protocol::{CommandLine, Inventory, ItemRef, Player, PlayerId, tagged};
use blockwire_transport::Connection;

use crate::{BlockwireError, Client};

/// Optional extras for [`Client::give_item`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiveOptions {
    /// Custom display name. Falls back to the name carried by the
    /// [`ItemRef`], if any.
    pub name: Option<String>,
    /// Inventory slot to place the item in.
    pub slot: Option<i32>,
    pub unbreakable: bool,
}

impl GiveOptions {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn slot(mut self, slot: i32) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn unbreakable(mut self) -> Self {
        self.unbreakable = true;
        self
    }
}

fn get_inventory_line(id: PlayerId) -> CommandLine {
    CommandLine::new("getInv").arg(id)
}

fn give_line(
    id: PlayerId,
    item: &ItemRef,
    amount: i32,
    options: &GiveOptions,
) -> CommandLine {
    let name = options.name.as_deref().or_else(|| item.display_name());
    CommandLine::new("addInv")
        .arg(id)
        .arg(item.wire_kind())
        .arg(amount)
        .arg_opt(name.map(|n| tagged("name", n)))
        .arg_opt(options.slot.map(|s| tagged("slot", s)))
        .arg_opt(options.unbreakable.then_some("unbreakable"))
}

impl<C: Connection> Client<C> {
    /// Gives `amount` of `item` to `player` and returns the inventory
    /// afterwards.
    pub async fn give_item(
        &self,
        player: &Player,
        item: impl Into<ItemRef>,
        amount: i32,
        options: &GiveOptions,
    ) -> Result<Inventory, BlockwireError> {
        let line = give_line(player.id, &item.into(), amount, options);
        let text = self.mutate(vec![line], get_inventory_line(player.id)).await?;
        Ok(Inventory::from_wire(&text)?)
    }

    pub async fn get_inventory(
        &self,
        player: &Player,
    ) -> Result<Inventory, BlockwireError> {
        let text = self.query(get_inventory_line(player.id)).await?;
        Ok(Inventory::from_wire(&text)?)
    }
}
