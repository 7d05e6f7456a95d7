use crate::domain::catalog::Coin;
use crate::domain::ledger::StockLedger;
use crate::domain::money::Cents;
use crate::error::{Result, VendingError};
use std::collections::HashMap;

/// Coins chosen to pay out an amount, not yet taken from the coin ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangePlan {
    coins: Vec<Coin>,
}

impl ChangePlan {
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn into_coins(self) -> Vec<Coin> {
        self.coins
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Removes every planned coin from `stock`.
    ///
    /// The plan was built against the same ledger, so each deduction succeeds
    /// as long as the ledger was not touched in between.
    pub fn commit(&self, stock: &mut StockLedger<Coin>) -> Result<()> {
        for coin in &self.coins {
            stock.deduct(*coin)?;
        }
        Ok(())
    }
}

/// Plans change for `amount`, largest denomination first.
///
/// Coins already placed in the plan count against what `stock` holds. If some
/// remainder cannot be paid the whole plan is discarded.
pub fn plan_change(amount: Cents, stock: &StockLedger<Coin>) -> Result<ChangePlan> {
    let mut remaining = amount;
    let mut taken: HashMap<Coin, u32> = HashMap::new();
    let mut coins = Vec::new();

    while !remaining.is_zero() {
        let next = Coin::ALL.into_iter().find(|coin| {
            let used = taken.get(coin).copied().unwrap_or(0);
            remaining >= coin.denomination() && stock.quantity(*coin) > used
        });

        match next {
            Some(coin) => {
                *taken.entry(coin).or_insert(0) += 1;
                coins.push(coin);
                remaining -= coin.denomination();
            }
            None => return Err(VendingError::InsufficientChange { remaining }),
        }
    }

    Ok(ChangePlan { coins })
}
