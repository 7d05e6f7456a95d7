use super::catalog::{Coin, Item};
use super::money::Cents;
use crate::error::Result;

/// Result of asking the machine to select an item.
///
/// A sold-out item is a soft outcome, not an error: the selection is left as it was.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Selection {
    Selected(Item),
    SoldOut(Item),
}

/// A settled purchase: the item handed out and the change returned with it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Purchase {
    pub item: Item,
    pub change: Vec<Coin>,
}

/// Something observable that happened inside the machine.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum MachineEvent {
    ItemSelected(Item),
    ItemSoldOut(Item),
    CoinInserted { coin: Coin, balance: Cents },
    ItemDispensed { item: Item, change: Vec<Coin> },
    Refunded { coins: Vec<Coin> },
    Reset,
}

/// The operation surface a host program drives a vending machine through.
pub trait Selector {
    fn select_item(&mut self, item: Item) -> Selection;
    fn check_price(&self, item: Item) -> Cents;
    fn insert_coin(&mut self, coin: Coin) -> Result<()>;
    fn purchase_item(&mut self) -> Result<Purchase>;
    fn refund(&mut self) -> Result<Vec<Coin>>;
    fn reset(&mut self);
    fn balance(&self) -> Cents;
}

/// Receives machine events, e.g. to narrate them on a console or record them.
pub trait MachineObserver: Send + Sync {
    fn on_event(&self, event: &MachineEvent);
}

pub type SelectorBox = Box<dyn Selector>;
pub type ObserverBox = Box<dyn MachineObserver>;

impl<S: Selector + ?Sized> Selector for Box<S> {
    fn select_item(&mut self, item: Item) -> Selection {
        (**self).select_item(item)
    }

    fn check_price(&self, item: Item) -> Cents {
        (**self).check_price(item)
    }

    fn insert_coin(&mut self, coin: Coin) -> Result<()> {
        (**self).insert_coin(coin)
    }

    fn purchase_item(&mut self) -> Result<Purchase> {
        (**self).purchase_item()
    }

    fn refund(&mut self) -> Result<Vec<Coin>> {
        (**self).refund()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn balance(&self) -> Cents {
        (**self).balance()
    }
}
