//! Lazy command source over a line reader

use super::parser::decode_line;
use super::types::{Command, ReadError};
use std::io::BufRead;

/// Yields one decoded command per input line, reading on demand.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the line.
pub struct CommandReader<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = Result<Command, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line += 1;
                let bytes = self.buf.strip_suffix(b"\n").unwrap_or(self.buf.as_slice());
                let text = String::from_utf8_lossy(bytes);
                Some(decode_line(&text, self.line).map_err(ReadError::from))
            }
            Err(source) => Some(Err(ReadError::Io {
                line: self.line + 1,
                source,
            })),
        }
    }
}
