use crate::domain::money::Cents;
use crate::error::{Result, VendingError};
use std::fmt;
use std::str::FromStr;

/// Coin denominations accepted and dispensed by the machine.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Coin {
    Penny,
    Nickel,
    Dime,
    Quarter,
}

impl Coin {
    /// Every denomination, largest first. This is the order change is paid out in.
    pub const ALL: [Coin; 4] = [Coin::Quarter, Coin::Dime, Coin::Nickel, Coin::Penny];

    pub fn denomination(&self) -> Cents {
        match self {
            Coin::Penny => Cents(1),
            Coin::Nickel => Cents(5),
            Coin::Dime => Cents(10),
            Coin::Quarter => Cents(25),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Coin::Penny => "PENNY",
            Coin::Nickel => "NICKEL",
            Coin::Dime => "DIME",
            Coin::Quarter => "QUARTER",
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Coin {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self> {
        Coin::ALL
            .into_iter()
            .find(|coin| coin.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VendingError::ValidationError(format!("Unknown coin: {s}")))
    }
}

/// Products stocked by the machine, each with a fixed price.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Item {
    Skittles,
    Twix,
    Snickers,
}

impl Item {
    pub const ALL: [Item; 3] = [Item::Skittles, Item::Twix, Item::Snickers];

    pub fn name(&self) -> &'static str {
        match self {
            Item::Skittles => "Skittles",
            Item::Twix => "Twix",
            Item::Snickers => "Snickers",
        }
    }

    pub fn price(&self) -> Cents {
        match self {
            Item::Skittles => Cents(15),
            Item::Twix => Cents(35),
            Item::Snickers => Cents(25),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Item {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self> {
        Item::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VendingError::ValidationError(format!("Unknown item: {s}")))
    }
}

/// Sums the face value of a list of coins.
pub fn total(coins: &[Coin]) -> Cents {
    coins.iter().map(Coin::denomination).sum()
}
