//! Order book state management

use super::types::{BookSide, MarketSide, OrderBookError, Price, Size};
use super::PriceLevel;
use std::collections::BTreeMap;

/// L2 aggregated order book for a single instrument
///
/// Each ladder maps price to resting size with at most one entry per price.
/// The two ladders are independent: the same price may rest on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    /// Bid ladder, best is the last key
    bids: BTreeMap<Price, Size>,
    /// Ask ladder, best is the first key
    asks: BTreeMap<Price, Size>,
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new() -> Self {
        Self::default()
    }

    fn ladder(&self, side: BookSide) -> &BTreeMap<Price, Size> {
        match side {
            BookSide::Bid => &self.bids,
            BookSide::Ask => &self.asks,
        }
    }

    fn ladder_mut(&mut self, side: BookSide) -> &mut BTreeMap<Price, Size> {
        match side {
            BookSide::Bid => &mut self.bids,
            BookSide::Ask => &mut self.asks,
        }
    }

    /// Set the resting size at `price`, replacing any previous size.
    ///
    /// Sizes are stored as given. A zero size leaves the level in place.
    pub fn update(&mut self, side: BookSide, price: Price, size: Size) {
        self.ladder_mut(side).insert(price, size);
    }

    /// Get best bid (highest price) and its size
    pub fn best_bid(&self) -> Result<PriceLevel, OrderBookError> {
        self.best(BookSide::Bid)
    }

    /// Get best ask (lowest price) and its size
    pub fn best_ask(&self) -> Result<PriceLevel, OrderBookError> {
        self.best(BookSide::Ask)
    }

    /// Get the best level on `side`, even when its size is zero
    pub fn best(&self, side: BookSide) -> Result<PriceLevel, OrderBookError> {
        let ladder = self.ladder(side);
        let best = match side {
            BookSide::Bid => ladder.last_key_value(),
            BookSide::Ask => ladder.first_key_value(),
        };
        best.map(|(&price, &size)| PriceLevel::new(price, size))
            .ok_or(OrderBookError::EmptyBook(side))
    }

    /// Resting size at `price`, bid ladder first, then ask ladder, else 0
    pub fn size_at(&self, price: Price) -> Size {
        self.bids
            .get(&price)
            .or_else(|| self.asks.get(&price))
            .copied()
            .unwrap_or(0)
    }

    /// Consume asks from the lowest price upward
    pub fn market_buy(&mut self, size: Size) {
        self.execute_market(MarketSide::Buy, size);
    }

    /// Consume bids from the highest price downward
    pub fn market_sell(&mut self, size: Size) {
        self.execute_market(MarketSide::Sell, size);
    }

    /// Walk the contra ladder in price priority until `size` is exhausted
    /// or the ladder is empty.
    ///
    /// Fully consumed levels are removed; a partially consumed level keeps
    /// its price with the reduced size. Any unfilled remainder is dropped.
    pub fn execute_market(&mut self, side: MarketSide, size: Size) {
        let contra = side.contra();
        let ladder = self.ladder_mut(contra);
        let mut remaining = size;

        while remaining > 0 {
            let best = match contra {
                BookSide::Bid => ladder.last_entry(),
                BookSide::Ask => ladder.first_entry(),
            };
            let Some(mut level) = best else {
                break;
            };

            let resting = *level.get();
            if resting <= remaining {
                remaining = remaining.saturating_sub(resting);
                level.remove();
            } else {
                *level.get_mut() = resting - remaining;
                remaining = 0;
            }
        }

        if remaining > 0 {
            tracing::debug!(%side, unfilled = remaining, "Contra ladder exhausted");
        }
    }

    /// Number of price levels on `side`
    pub fn level_count(&self, side: BookSide) -> usize {
        self.ladder(side).len()
    }

    /// Sum of resting size on `side`
    pub fn total_size(&self, side: BookSide) -> Size {
        self.ladder(side)
            .values()
            .fold(0, |total, &size| total.saturating_add(size))
    }

    /// Levels on `side`, best first
    pub fn levels(&self, side: BookSide) -> Vec<PriceLevel> {
        let to_level = |(&price, &size): (&Price, &Size)| PriceLevel::new(price, size);
        match side {
            BookSide::Bid => self.bids.iter().rev().map(to_level).collect(),
            BookSide::Ask => self.asks.iter().map(to_level).collect(),
        }
    }

    /// True when both ladders are empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
