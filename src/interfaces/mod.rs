//! Interfaces layer: how scripts come in and outcomes go out.

pub mod csv;
