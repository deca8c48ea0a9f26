//! Stockwatch Core — domain types for tracking a single security holding.
//!
//! The heart of the crate is [`domain::Position`]: one held security, its
//! acquisition cost, its current market price, and the derived gain/loss
//! computed on demand.

pub mod domain;
