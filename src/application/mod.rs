//! Application layer: the vending machine itself, the change planner it
//! settles with, and the driver that replays scripted interactions.

pub mod change;
pub mod driver;
pub mod machine;
