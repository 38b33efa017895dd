//! # Exploit Simulations
//!
//! Attempts to steal or lock funds by misusing the state machine:
//! replays, races against the time lock and identifier confusion.

pub mod identifier_confusion;
pub mod timelock_race;
