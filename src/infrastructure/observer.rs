use crate::domain::catalog::Coin;
use crate::domain::ports::{MachineEvent, MachineObserver};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

/// Ignores every event. The default for a freshly built machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MachineObserver for NoopObserver {
    fn on_event(&self, _event: &MachineEvent) {}
}

/// Narrates machine events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl MachineObserver for TracingObserver {
    fn on_event(&self, event: &MachineEvent) {
        match event {
            MachineEvent::ItemSelected(item) => info!(%item, "Selected item"),
            MachineEvent::ItemSoldOut(item) => warn!(%item, "Item is out of stock"),
            MachineEvent::CoinInserted { coin, balance } => {
                info!(%coin, %balance, "Inserted coin")
            }
            MachineEvent::ItemDispensed { item, change } => {
                info!(%item, change = %format_coins(change), "Dispensing item")
            }
            MachineEvent::Refunded { coins } => {
                info!(coins = %format_coins(coins), "Refunded coins")
            }
            MachineEvent::Reset => info!("Machine reset to initial stock"),
        }
    }
}

/// Collects events for later inspection.
///
/// Clones share the same buffer, so one handle can be given to a machine and
/// another kept by the caller.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<MachineEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<MachineEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl MachineObserver for RecordingObserver {
    fn on_event(&self, event: &MachineEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

/// Renders coins as a bracketed list, e.g. `[DIME, NICKEL]`.
pub fn format_coins(coins: &[Coin]) -> String {
    let names: Vec<String> = coins.iter().map(Coin::to_string).collect();
    format!("[{}]", names.join(", "))
}
