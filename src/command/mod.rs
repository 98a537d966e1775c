//! Command codec
//!
//! Decodes text records into [`Command`] values and encodes
//! [`QueryResult`] values back into text

mod parser;
mod reader;
mod types;

pub use parser::decode_line;
pub use reader::CommandReader;
pub use types::{Command, DecodeError, Query, QueryResult, ReadError};
