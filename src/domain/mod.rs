//! Domain layer: the static catalog, money, stock ledgers and the ports a
//! machine exposes to its host.

pub mod catalog;
pub mod ledger;
pub mod money;
pub mod ports;
