//! Order book types

use std::fmt;
use thiserror::Error;

/// Integer price tick
pub type Price = i64;

/// Integer quantity of resting liquidity
pub type Size = i64;

/// Side of the book a resting level belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookSide {
    /// Bid ladder, best is the highest price
    Bid,
    /// Ask ladder, best is the lowest price
    Ask,
}

impl BookSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookSide::Bid => "bid",
            BookSide::Ask => "ask",
        }
    }
}

impl fmt::Display for BookSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of an aggressing market order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketSide {
    Buy,
    Sell,
}

impl MarketSide {
    /// The ladder this order consumes
    pub fn contra(&self) -> BookSide {
        match self {
            MarketSide::Buy => BookSide::Ask,
            MarketSide::Sell => BookSide::Bid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketSide::Buy => "buy",
            MarketSide::Sell => "sell",
        }
    }
}

impl fmt::Display for MarketSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order book errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderBookError {
    /// Best price requested from a ladder with no levels
    #[error("{0} ladder is empty, no best price")]
    EmptyBook(BookSide),
}
