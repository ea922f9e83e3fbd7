//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Canonical domain types (validated, render-ready)
//! - `wire.rs` — Raw serde structs matching provider responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation

pub mod candles;
pub mod supply;
pub mod ticker;
