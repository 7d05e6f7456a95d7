use crate::error::{Result, VendingError};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Per-kind stock counter used for both the coin float and the item inventory.
///
/// Counts are unsigned and `deduct` refuses to go below zero, so a quantity is
/// never observed as negative. Kinds that were never added report zero.
#[derive(Debug, Clone)]
pub struct StockLedger<K> {
    counts: HashMap<K, u32>,
}

impl<K> Default for StockLedger<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> PartialEq for StockLedger<K> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K: Eq + Hash> Eq for StockLedger<K> {}

impl<K: Eq + Hash + Copy + Debug> StockLedger<K> {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger holding `quantity` of every kind in `kinds`.
    pub fn seeded(kinds: impl IntoIterator<Item = K>, quantity: u32) -> Self {
        let mut ledger = Self::new();
        ledger.seed(kinds, quantity);
        ledger
    }

    /// Sets the count of every kind in `kinds` to `quantity`, replacing what was there.
    pub fn seed(&mut self, kinds: impl IntoIterator<Item = K>, quantity: u32) {
        for kind in kinds {
            self.counts.insert(kind, quantity);
        }
    }

    /// Returns the current count of `kind`, zero if it was never added.
    pub fn quantity(&self, kind: K) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Adds `quantity` units of `kind`.
    ///
    /// Fails with `Overflow` and leaves the count unchanged if it would exceed `u32::MAX`.
    pub fn add(&mut self, kind: K, quantity: u32) -> Result<()> {
        let count = self.counts.entry(kind).or_insert(0);
        *count = count
            .checked_add(quantity)
            .ok_or_else(|| VendingError::Overflow(format!("stock of {kind:?}")))?;
        Ok(())
    }

    /// Removes a single unit of `kind`.
    ///
    /// An empty kind is left untouched and reported as `Depleted`.
    pub fn deduct(&mut self, kind: K) -> Result<()> {
        match self.counts.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(VendingError::Depleted(format!("{kind:?}"))),
        }
    }

    /// True when at least one unit of `kind` is in stock.
    pub fn has_item(&self, kind: K) -> bool {
        self.quantity(kind) > 0
    }

    /// Removes every entry; all kinds report zero afterwards.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Iterates over `(kind, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (K, u32)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}
