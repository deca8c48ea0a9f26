//! Position — a single security holding with cost basis and market price.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One held security: ticker symbol, company name, per-share cost basis,
/// and per-share current price.
///
/// A flat mutable record. Prices are unvalidated — zero, negative, and NaN
/// values are all accepted — and the derived gain/loss is recomputed on
/// demand from whatever the fields currently hold, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    symbol: String,
    name: String,
    cost_basis: f64,
    current_price: f64,
}

impl Position {
    /// Open a position at its purchase price.
    ///
    /// The current price starts equal to the cost basis, so the change
    /// reads exactly zero until the first price update.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, cost_basis: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            cost_basis,
            current_price: cost_basis,
        }
    }

    /// Ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Company name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-share purchase price.
    pub fn cost_basis(&self) -> f64 {
        self.cost_basis
    }

    /// Per-share current market price.
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Rebase the position to a new per-share purchase price.
    pub fn set_cost_basis(&mut self, cost_basis: f64) {
        self.cost_basis = cost_basis;
    }

    /// Record a new per-share market price.
    pub fn set_current_price(&mut self, current_price: f64) {
        self.current_price = current_price;
    }

    /// Fractional change from cost basis to current price (`0.20` == +20%).
    ///
    /// A zero cost basis is defined to have zero change regardless of the
    /// current price. That is domain policy: free shares have no meaningful
    /// percentage gain, so the fallback is `0.0`, not infinity or an error.
    pub fn change_percent(&self) -> f64 {
        if self.cost_basis == 0.0 {
            return 0.0;
        }
        (self.current_price - self.cost_basis) / self.cost_basis
    }
}

impl fmt::Display for Position {
    /// Two-line summary: name and current price, then gain/loss percent.
    ///
    /// The bracket placement (`[` before the newline, `]` after) is the
    /// historical report layout downstream consumers match on — keep it
    /// verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[ Current Price: $ {:.2}\n] Gain/Loss: {:.2}%",
            self.name,
            self.current_price,
            self.change_percent() * 100.0
        )
    }
}
