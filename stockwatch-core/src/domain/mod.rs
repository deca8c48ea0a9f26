//! Domain types for Stockwatch.

pub mod position;

pub use position::Position;
