//! # Integration Flows
//!
//! End-to-end scenarios through `BridgeApi` with real adapters.

pub mod persistence;
