//! Order book module
//!
//! Bid and ask price ladders for a single instrument, with the
//! price-priority walk used by market orders

mod book;
mod types;

pub use book::OrderBook;
pub use types::{BookSide, MarketSide, OrderBookError, Price, Size};

/// A price level in the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLevel {
    /// Price at this level
    pub price: Price,
    /// Resting size at this price
    pub size: Size,
}

impl PriceLevel {
    pub fn new(price: Price, size: Size) -> Self {
        Self { price, size }
    }
}
