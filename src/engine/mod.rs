//! Engine module
//!
//! Applies decoded commands to an owned [`OrderBook`] and drives runs from
//! a command source into a result sink

mod processor;
mod sink;
mod summary;

pub use processor::{ProcessError, Processor};
pub use sink::{LineSink, ResultSink};
pub use summary::RunSummary;

use crate::command::{Command, Query, QueryResult};
use crate::orderbook::{OrderBook, OrderBookError};
use serde::Serialize;

/// Per-kind command counts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub updates: u64,
    pub queries: u64,
    pub market_orders: u64,
    pub ignored: u64,
}

/// Single-book state machine
///
/// Not synchronized; the caller owns it and applies commands one at a time.
#[derive(Debug, Default, Clone)]
pub struct Engine {
    book: OrderBook,
    stats: EngineStats,
}

impl Engine {
    /// Create an engine with an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine around an existing book
    pub fn with_book(book: OrderBook) -> Self {
        Self {
            book,
            stats: EngineStats::default(),
        }
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// Apply one command. Queries produce a result; everything else
    /// mutates the book and produces nothing.
    pub fn apply(&mut self, command: Command) -> Result<Option<QueryResult>, OrderBookError> {
        match command {
            Command::Update { side, price, size } => {
                self.stats.updates += 1;
                self.book.update(side, price, size);
                Ok(None)
            }
            Command::Query(query) => {
                self.stats.queries += 1;
                self.query(query).map(Some)
            }
            Command::Market { side, size } => {
                self.stats.market_orders += 1;
                self.book.execute_market(side, size);
                Ok(None)
            }
            // Unrecognized keywords are accepted and do nothing
            Command::Ignored { keyword } => {
                self.stats.ignored += 1;
                tracing::trace!(%keyword, "Ignoring unrecognized keyword");
                Ok(None)
            }
        }
    }

    /// Answer a query without touching the book
    pub fn query(&self, query: Query) -> Result<QueryResult, OrderBookError> {
        match query {
            Query::BestBid => self.book.best_bid().map(QueryResult::Best),
            Query::BestAsk => self.book.best_ask().map(QueryResult::Best),
            Query::SizeAt(price) => Ok(QueryResult::Size(self.book.size_at(price))),
        }
    }
}
