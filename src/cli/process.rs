//! Process command implementation

use crate::command::CommandReader;
use crate::config::Config;
use crate::engine::{LineSink, Processor, RunSummary};
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Command file to read (`-` for stdin)
    pub input: PathBuf,

    /// File to write query results to (`-` for stdout)
    pub output: PathBuf,

    /// Run summary printed to stderr when done
    #[arg(long, value_enum, default_value = "table")]
    pub summary: SummaryFormat,
}

/// Run summary output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryFormat {
    Table,
    Json,
    None,
}

impl ProcessArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let input = self.input.clone();
        let output = self.output.clone();
        let config = config.clone();

        // The book is owned by a single blocking task for the whole run
        let summary = tokio::task::spawn_blocking(move || process_files(&input, &output, &config))
            .await
            .context("processing task failed")??;

        match self.summary {
            SummaryFormat::Table => eprintln!("{}", summary.format_table()),
            SummaryFormat::Json => eprintln!("{}", summary.format_json()?),
            SummaryFormat::None => {}
        }
        Ok(())
    }
}

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

/// Run a command file through a fresh book, writing results to `output`
pub fn process_files(input: &Path, output: &Path, config: &Config) -> anyhow::Result<RunSummary> {
    let capacity = config.io.buffer_capacity.get();

    let reader: Box<dyn BufRead> = if is_stdio(input) {
        Box::new(BufReader::with_capacity(capacity, io::stdin().lock()))
    } else {
        let file = File::open(input)
            .with_context(|| format!("failed to open input {}", input.display()))?;
        Box::new(BufReader::with_capacity(capacity, file))
    };

    let writer: Box<dyn Write> = if is_stdio(output) {
        Box::new(io::stdout().lock())
    } else {
        let file = File::create(output)
            .with_context(|| format!("failed to create output {}", output.display()))?;
        Box::new(file)
    };

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        "Starting run"
    );

    let mut sink = LineSink::new(BufWriter::with_capacity(capacity, writer));
    let mut processor = Processor::new(config.engine.on_error);
    let summary = processor
        .run(CommandReader::new(reader), &mut sink)
        .with_context(|| format!("run {} failed", processor.run_id()))?;

    Ok(summary)
}
