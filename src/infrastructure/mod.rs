//! Infrastructure layer: concrete observers plugged into a machine.

pub mod observer;
