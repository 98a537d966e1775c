//! ladder-book: single-instrument limit order book
//!
//! This library provides:
//! - Bid and ask price ladders with price-priority market order matching
//! - Decoding of line-oriented command records into typed commands
//! - A driver that runs a command source into a result sink
//! - Configuration, logging and run metrics

pub mod cli;
pub mod command;
pub mod config;
pub mod engine;
pub mod orderbook;
pub mod telemetry;
