//! Text line decoding
//!
//! Records are comma separated:
//!
//! ```text
//! u,<price>,<size>,bid|ask
//! q,best_bid | q,best_ask | q,size,<price>
//! o,buy|sell,<size>
//! ```
//!
//! Numeric fields are read before the side keyword is examined, so a record
//! with a bad number fails even when its keyword is unknown.

use super::types::{Command, DecodeError, Query};
use crate::orderbook::{BookSide, MarketSide};

/// Comma-separated fields of one record
struct Fields<'a> {
    tokens: Vec<&'a str>,
    line: usize,
}

impl<'a> Fields<'a> {
    fn split(text: &'a str, line: usize) -> Self {
        let mut tokens: Vec<&str> = text.split(',').collect();
        // Trailing empty fields are not fields; a blank record keeps its single empty token
        if tokens.len() > 1 {
            while tokens.last() == Some(&"") {
                tokens.pop();
            }
        }
        Self { tokens, line }
    }

    fn required(&self, index: usize, field: &'static str) -> Result<&'a str, DecodeError> {
        self.tokens
            .get(index)
            .copied()
            .ok_or(DecodeError::MissingField {
                line: self.line,
                field,
            })
    }

    fn integer(&self, index: usize, field: &'static str) -> Result<i64, DecodeError> {
        let token = self.required(index, field)?;
        token.parse().map_err(|_| DecodeError::InvalidInteger {
            line: self.line,
            field,
            token: token.to_string(),
        })
    }
}

/// Decode one record. `line` is the 1-based line number used in errors.
pub fn decode_line(text: &str, line: usize) -> Result<Command, DecodeError> {
    let text = text.strip_suffix('\r').unwrap_or(text);
    let fields = Fields::split(text, line);

    let command = match fields.required(0, "command")? {
        "u" => {
            let price = fields.integer(1, "price")?;
            let size = fields.integer(2, "size")?;
            match fields.required(3, "side")? {
                "bid" => Command::Update {
                    side: BookSide::Bid,
                    price,
                    size,
                },
                "ask" => Command::Update {
                    side: BookSide::Ask,
                    price,
                    size,
                },
                other => Command::ignored(other),
            }
        }
        "q" => match fields.required(1, "query")? {
            "best_bid" => Command::Query(Query::BestBid),
            "best_ask" => Command::Query(Query::BestAsk),
            "size" => Command::Query(Query::SizeAt(fields.integer(2, "price")?)),
            other => Command::ignored(other),
        },
        "o" => {
            let side = fields.required(1, "side")?;
            let size = fields.integer(2, "size")?;
            match side {
                "buy" => Command::Market {
                    side: MarketSide::Buy,
                    size,
                },
                "sell" => Command::Market {
                    side: MarketSide::Sell,
                    size,
                },
                other => Command::ignored(other),
            }
        }
        other => Command::ignored(other),
    };

    Ok(command)
}
