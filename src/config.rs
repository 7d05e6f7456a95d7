/// Stock levels a machine is seeded with at start-up and on every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Coins of each denomination available for change.
    pub coin_stock: u32,
    /// Units of each item available for sale.
    pub item_stock: u32,
}

impl MachineConfig {
    pub const DEFAULT_COIN_STOCK: u32 = 10;
    pub const DEFAULT_ITEM_STOCK: u32 = 5;

    pub fn new(coin_stock: u32, item_stock: u32) -> Self {
        Self {
            coin_stock,
            item_stock,
        }
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COIN_STOCK, Self::DEFAULT_ITEM_STOCK)
    }
}
