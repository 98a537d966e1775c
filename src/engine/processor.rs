//! Command source to result sink driver

use super::sink::ResultSink;
use super::summary::RunSummary;
use super::Engine;
use crate::command::{Command, DecodeError, ReadError};
use crate::config::ErrorPolicy;
use crate::orderbook::{BookSide, OrderBookError};
use crate::telemetry::{self, CounterMetric};
use thiserror::Error;
use uuid::Uuid;

/// Errors that end a run
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The command source failed to produce a line
    #[error("failed to read input line {line}")]
    Input {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    /// A record could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// A query could not be answered
    #[error("line {line}: {source}")]
    Book {
        line: usize,
        #[source]
        source: OrderBookError,
    },
    /// The sink rejected a result
    #[error("failed to write results")]
    Output(#[source] std::io::Error),
}

impl ProcessError {
    fn kind(&self) -> &'static str {
        match self {
            ProcessError::Input { .. } => "input",
            ProcessError::Decode(_) => "decode",
            ProcessError::Book { .. } => "empty_book",
            ProcessError::Output(_) => "output",
        }
    }
}

/// Runs commands through an [`Engine`] one at a time, in order
pub struct Processor {
    engine: Engine,
    policy: ErrorPolicy,
    run_id: Uuid,
    lines_read: usize,
    results_written: u64,
    skipped_errors: u64,
}

impl Processor {
    /// Create a processor with an empty book
    pub fn new(policy: ErrorPolicy) -> Self {
        Self::with_engine(Engine::new(), policy)
    }

    pub fn with_engine(engine: Engine, policy: ErrorPolicy) -> Self {
        Self {
            engine,
            policy,
            run_id: Uuid::new_v4(),
            lines_read: 0,
            results_written: 0,
            skipped_errors: 0,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Drain `commands` into the engine, writing query results to `sink`.
    ///
    /// The sink is flushed before returning, on success and on failure, so
    /// results produced before a fatal record are kept.
    pub fn run<I, S>(&mut self, commands: I, sink: &mut S) -> Result<RunSummary, ProcessError>
    where
        I: IntoIterator<Item = Result<Command, ReadError>>,
        S: ResultSink,
    {
        let span = tracing::info_span!("run", run_id = %self.run_id);
        let _enter = span.enter();
        tracing::info!(policy = ?self.policy, "Processing commands");

        let outcome = self.drain(commands, sink);
        let flushed = sink.flush().map_err(ProcessError::Output);

        match outcome.and(flushed) {
            Ok(()) => {
                let summary = self.summary();
                tracing::info!(
                    lines = summary.lines_read,
                    results = summary.results_written,
                    skipped = summary.skipped_errors,
                    "Run complete"
                );
                Ok(summary)
            }
            Err(err) => {
                tracing::error!(error = %err, lines = self.lines_read, "Run aborted");
                Err(err)
            }
        }
    }

    fn drain<I, S>(&mut self, commands: I, sink: &mut S) -> Result<(), ProcessError>
    where
        I: IntoIterator<Item = Result<Command, ReadError>>,
        S: ResultSink,
    {
        for item in commands {
            let command = match item {
                Ok(command) => command,
                // A failed read consumed no line
                Err(ReadError::Io { line, source }) => {
                    telemetry::increment_kind(CounterMetric::Errors, "input");
                    return Err(ProcessError::Input { line, source });
                }
                Err(ReadError::Decode(err)) => {
                    self.lines_read += 1;
                    self.handle_failure(ProcessError::Decode(err))?;
                    continue;
                }
            };
            self.lines_read += 1;

            tracing::debug!(line = self.lines_read, ?command, "Applying command");
            telemetry::increment_kind(CounterMetric::Commands, command.kind());

            match self.engine.apply(command) {
                Ok(Some(result)) => {
                    sink.emit(&result).map_err(ProcessError::Output)?;
                    self.results_written += 1;
                    telemetry::increment(CounterMetric::Results);
                }
                Ok(None) => {}
                Err(source) => self.handle_failure(ProcessError::Book {
                    line: self.lines_read,
                    source,
                })?,
            }
        }
        Ok(())
    }

    /// Apply the error policy to a per-record failure
    fn handle_failure(&mut self, err: ProcessError) -> Result<(), ProcessError> {
        telemetry::increment_kind(CounterMetric::Errors, err.kind());
        match self.policy {
            ErrorPolicy::Abort => Err(err),
            ErrorPolicy::Skip => {
                tracing::warn!(error = %err, "Skipping record");
                self.skipped_errors += 1;
                Ok(())
            }
        }
    }

    /// Counters so far
    pub fn summary(&self) -> RunSummary {
        let book = self.engine.book();
        RunSummary {
            run_id: self.run_id,
            lines_read: self.lines_read,
            commands: self.engine.stats(),
            results_written: self.results_written,
            skipped_errors: self.skipped_errors,
            bid_levels: book.level_count(BookSide::Bid),
            ask_levels: book.level_count(BookSide::Ask),
        }
    }
}
