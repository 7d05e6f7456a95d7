use crate::domain::catalog::{Coin, Item};
use crate::domain::money::Cents;
use crate::domain::ports::{Selection, Selector};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// One step of a scripted interaction with a machine.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Select(Item),
    Price(Item),
    Insert(Coin),
    Purchase,
    Refund,
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Select(_) => "select",
            Action::Price(_) => "price",
            Action::Insert(_) => "insert",
            Action::Purchase => "purchase",
            Action::Refund => "refund",
            Action::Reset => "reset",
        }
    }

    pub fn target(&self) -> Option<String> {
        match self {
            Action::Select(item) | Action::Price(item) => Some(item.to_string()),
            Action::Insert(coin) => Some(coin.to_string()),
            Action::Purchase | Action::Refund | Action::Reset => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(target) => write!(f, "{} {}", self.name(), target),
            None => f.write_str(self.name()),
        }
    }
}

/// What a single action did, flattened into one output row.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Outcome {
    pub step: usize,
    pub action: &'static str,
    pub target: Option<String>,
    /// Status label, the quoted price in cents for `price`, or the failure kind.
    pub result: String,
    /// Balance in cents after the action.
    pub balance: Cents,
    /// Item handed out by a purchase.
    pub item: Option<String>,
    /// Coins handed back, space separated.
    pub change: String,
}

/// Replays actions against a machine, one at a time.
///
/// Hard failures do not stop the run: they are logged and recorded in the
/// outcome, and the machine is left as the failed operation found it.
pub struct Driver<S: Selector> {
    selector: S,
    step: usize,
}

impl<S: Selector> Driver<S> {
    /// Creates a driver around `selector`, starting the step count at zero.
    pub fn new(selector: S) -> Self {
        Self { selector, step: 0 }
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    pub fn into_inner(self) -> S {
        self.selector
    }

    /// Applies one action and reports what it did.
    ///
    /// Failures are logged at warn level and show up as the error kind in `result`.
    pub fn apply(&mut self, action: Action) -> Outcome {
        self.step += 1;
        let mut item = None;
        let mut change = Vec::new();

        let result = match action {
            Action::Select(target) => match self.selector.select_item(target) {
                Selection::Selected(_) => Ok("selected".to_string()),
                Selection::SoldOut(_) => Ok("sold_out".to_string()),
            },
            Action::Price(target) => Ok(self.selector.check_price(target).value().to_string()),
            Action::Insert(coin) => self
                .selector
                .insert_coin(coin)
                .map(|()| "inserted".to_string()),
            Action::Purchase => self.selector.purchase_item().map(|purchase| {
                item = Some(purchase.item.to_string());
                change = purchase.change;
                "dispensed".to_string()
            }),
            Action::Refund => self.selector.refund().map(|coins| {
                change = coins;
                "refunded".to_string()
            }),
            Action::Reset => {
                self.selector.reset();
                Ok("reset".to_string())
            }
        };

        let result = result.unwrap_or_else(|e| {
            warn!(step = self.step, action = %action, error = %e, "Action failed");
            e.kind().to_string()
        });

        let change: Vec<String> = change.iter().map(Coin::to_string).collect();
        Outcome {
            step: self.step,
            action: action.name(),
            target: action.target(),
            result,
            balance: self.selector.balance(),
            item,
            change: change.join(" "),
        }
    }

    /// Applies every action in order, collecting one outcome per action.
    pub fn run(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<Outcome> {
        actions
            .into_iter()
            .map(|action| self.apply(action))
            .collect()
    }
}

/// The canonical demonstration: buy a Twix with two quarters, then ask for a refund.
pub fn demo_script() -> Vec<Action> {
    vec![
        Action::Select(Item::Twix),
        Action::Insert(Coin::Quarter),
        Action::Insert(Coin::Quarter),
        Action::Purchase,
        Action::Refund,
    ]
}
