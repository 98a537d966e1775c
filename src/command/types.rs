//! Command and result types

use crate::orderbook::{BookSide, MarketSide, Price, PriceLevel, Size};
use std::fmt;
use thiserror::Error;

/// A decoded input record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set resting size at a price on one ladder
    Update {
        side: BookSide,
        price: Price,
        size: Size,
    },
    /// Read from the book
    Query(Query),
    /// Consume resting liquidity on the contra ladder
    Market { side: MarketSide, size: Size },
    /// Unrecognized command, side or query keyword; applying it does nothing
    Ignored { keyword: String },
}

impl Command {
    pub(crate) fn ignored(keyword: &str) -> Self {
        Command::Ignored {
            keyword: keyword.to_string(),
        }
    }

    /// Short label used for logging and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Update { .. } => "update",
            Command::Query(_) => "query",
            Command::Market { .. } => "market",
            Command::Ignored { .. } => "ignored",
        }
    }
}

/// Book query variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    BestBid,
    BestAsk,
    SizeAt(Price),
}

/// Output of a query, one line of text per result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryResult {
    /// Best bid or best ask, encoded as `price,size`
    Best(PriceLevel),
    /// Size at a price, encoded as `size`
    Size(Size),
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryResult::Best(level) => write!(f, "{},{}", level.price, level.size),
            QueryResult::Size(size) => write!(f, "{size}"),
        }
    }
}

/// Malformed input record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A field the command needs is absent
    #[error("line {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },
    /// A numeric field did not parse as an integer
    #[error("line {line}: invalid integer {token:?} in {field} field")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        token: String,
    },
}

impl DecodeError {
    /// 1-based line number of the offending record
    pub fn line(&self) -> usize {
        match self {
            DecodeError::MissingField { line, .. } | DecodeError::InvalidInteger { line, .. } => {
                *line
            }
        }
    }
}

/// Failure to produce the next command from a source
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
