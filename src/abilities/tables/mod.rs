//! Per-family command tables for the shipped roster.
//!
//! Each table is a list of `(title, command)` pairs folded into
//! [`AbilityRegistry::standard`](super::AbilityRegistry::standard).

pub mod kings;
pub mod saints;
pub mod support;
pub mod units;
