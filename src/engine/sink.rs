//! Result sinks

use crate::command::QueryResult;
use std::io::{self, Write};

/// Append-only destination for query results
pub trait ResultSink {
    /// Record one result
    fn emit(&mut self, result: &QueryResult) -> io::Result<()>;

    /// Push buffered results to their destination
    fn flush(&mut self) -> io::Result<()>;
}

/// Writes each result as one text line
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for LineSink<W> {
    fn emit(&mut self, result: &QueryResult) -> io::Result<()> {
        writeln!(self.writer, "{result}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Collects results in memory
impl ResultSink for Vec<QueryResult> {
    fn emit(&mut self, result: &QueryResult) -> io::Result<()> {
        self.push(*result);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
