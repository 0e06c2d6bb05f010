//! Domain layer: value objects, wallet state, and storage ports.

pub mod money;
pub mod ports;
pub mod snapshot;
pub mod transaction;
pub mod wallet;
