use crate::application::change::plan_change;
use crate::config::MachineConfig;
use crate::domain::catalog::{Coin, Item};
use crate::domain::ledger::StockLedger;
use crate::domain::money::Cents;
use crate::domain::ports::{MachineEvent, ObserverBox, Purchase, Selection, Selector};
use crate::error::{Result, VendingError};
use crate::infrastructure::observer::NoopObserver;

/// Stock held for one kind, as reported by [`VendingMachine::stock_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockLevel {
    Coin(Coin, u32),
    Item(Item, u32),
}

/// A single coin-operated vending machine.
///
/// Owns the running balance, the current selection and two stock ledgers: the
/// coins available for change and the items available for sale. Settlement
/// plans change against the coin ledger first and only mutates state once the
/// whole plan is known to be payable, so a failed purchase or refund leaves the
/// machine exactly as it was.
pub struct VendingMachine {
    config: MachineConfig,
    coin_stock: StockLedger<Coin>,
    item_stock: StockLedger<Item>,
    balance: Cents,
    selection: Option<Item>,
    observer: ObserverBox,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    /// Creates a machine seeded with the default stock levels.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    /// Creates a machine seeded from `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Stock levels loaded now and restored by every `reset`.
    pub fn with_config(config: MachineConfig) -> Self {
        let mut machine = Self {
            config,
            coin_stock: StockLedger::new(),
            item_stock: StockLedger::new(),
            balance: Cents::ZERO,
            selection: None,
            observer: Box::new(NoopObserver),
        };
        machine.seed();
        machine
    }

    /// Replaces the observer that is told about every state change.
    pub fn with_observer(mut self, observer: ObserverBox) -> Self {
        self.observer = observer;
        self
    }

    pub fn selection(&self) -> Option<Item> {
        self.selection
    }

    pub fn coin_stock(&self) -> &StockLedger<Coin> {
        &self.coin_stock
    }

    pub fn item_stock(&self) -> &StockLedger<Item> {
        &self.item_stock
    }

    /// Current stock of every coin and item, in catalog order.
    pub fn stock_report(&self) -> Vec<StockLevel> {
        let coins = Coin::ALL
            .into_iter()
            .map(|coin| StockLevel::Coin(coin, self.coin_stock.quantity(coin)));
        let items = Item::ALL
            .into_iter()
            .map(|item| StockLevel::Item(item, self.item_stock.quantity(item)));
        coins.chain(items).collect()
    }

    fn seed(&mut self) {
        self.coin_stock.seed(Coin::ALL, self.config.coin_stock);
        self.item_stock.seed(Item::ALL, self.config.item_stock);
    }

    fn notify(&self, event: MachineEvent) {
        self.observer.on_event(&event);
    }
}

impl Selector for VendingMachine {
    fn select_item(&mut self, item: Item) -> Selection {
        if self.item_stock.has_item(item) {
            self.selection = Some(item);
            self.notify(MachineEvent::ItemSelected(item));
            Selection::Selected(item)
        } else {
            self.notify(MachineEvent::ItemSoldOut(item));
            Selection::SoldOut(item)
        }
    }

    fn check_price(&self, item: Item) -> Cents {
        item.price()
    }

    fn insert_coin(&mut self, coin: Coin) -> Result<()> {
        let balance = self
            .balance
            .checked_add(coin.denomination())
            .ok_or_else(|| VendingError::Overflow("balance".to_string()))?;
        self.coin_stock.add(coin, 1)?;
        self.balance = balance;
        self.notify(MachineEvent::CoinInserted {
            coin,
            balance: self.balance,
        });
        Ok(())
    }

    fn purchase_item(&mut self) -> Result<Purchase> {
        let item = self
            .selection
            .ok_or_else(|| VendingError::InvalidState("No item selected".to_string()))?;

        if !self.item_stock.has_item(item) {
            return Err(VendingError::SoldOut(item));
        }

        let price = item.price();
        if self.balance < price {
            return Err(VendingError::InsufficientFunds {
                balance: self.balance,
                price,
            });
        }

        let plan = plan_change(self.balance - price, &self.coin_stock)?;

        // Nothing has been mutated up to here.
        plan.commit(&mut self.coin_stock)?;
        self.item_stock.deduct(item)?;
        self.balance = Cents::ZERO;
        self.selection = None;

        let change = plan.into_coins();
        self.notify(MachineEvent::ItemDispensed {
            item,
            change: change.clone(),
        });
        Ok(Purchase { item, change })
    }

    fn refund(&mut self) -> Result<Vec<Coin>> {
        let plan = plan_change(self.balance, &self.coin_stock)?;
        plan.commit(&mut self.coin_stock)?;
        self.balance = Cents::ZERO;

        let coins = plan.into_coins();
        self.notify(MachineEvent::Refunded {
            coins: coins.clone(),
        });
        Ok(coins)
    }

    fn reset(&mut self) {
        self.item_stock.clear();
        self.coin_stock.clear();
        self.balance = Cents::ZERO;
        self.selection = None;
        self.seed();
        self.notify(MachineEvent::Reset);
    }

    fn balance(&self) -> Cents {
        self.balance
    }
}
