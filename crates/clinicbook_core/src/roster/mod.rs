//! Roster store: the `Model` contract and its in-memory implementation.
//!
//! # Responsibility
//! - Own the mutable collection of people and its filtered projection.
//! - Keep identity and appointment-pairing rules out of command code.
//!
//! # Invariants
//! - All access happens on one control thread; no locking is needed.
//! - The store is an explicit value passed to each command, never a global.

pub mod filter;
pub mod model;
pub mod model_manager;
pub mod prefs;
