//! Application layer containing the core business logic.
//!
//! This module defines the `LedgerEngine`, the single authority over all
//! balance mutations. Every operation validates its preconditions in order,
//! applies the transition, and commits the resulting snapshot through the
//! storage port.

pub mod engine;
