use std::io::{self, BufWriter, Write};

use anyhow::Result;
use arrow::record_batch::RecordBatch;

use crate::format::OutputFormat;

pub trait RecordBatchWriter {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

/// Writer for `format` on locked stdout.
pub fn stdout_writer(format: OutputFormat) -> Box<dyn RecordBatchWriter> {
    match format {
        OutputFormat::Csv => Box::new(CsvWriter::new()),
        OutputFormat::Jsonl => Box::new(JsonlWriter::new()),
    }
}

fn stdout_dest() -> Box<dyn Write> {
    Box::new(BufWriter::new(io::stdout().lock()))
}

// --- JSON Lines ---

pub struct JsonlWriter {
    dest: Box<dyn Write>,
}

impl JsonlWriter {
    pub fn new() -> Self {
        Self {
            dest: stdout_dest(),
        }
    }
}

impl RecordBatchWriter for JsonlWriter {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        let mut json_writer = arrow::json::LineDelimitedWriter::new(&mut self.dest);
        json_writer.write(batch)?;
        json_writer.finish()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.dest.flush()?;
        Ok(())
    }
}

// --- CSV ---

pub struct CsvWriter {
    dest: Box<dyn Write>,
    header_written: bool,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self {
            dest: stdout_dest(),
            header_written: false,
        }
    }
}

impl RecordBatchWriter for CsvWriter {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        let mut csv_writer = arrow::csv::WriterBuilder::new()
            .with_header(!self.header_written)
            .build(&mut self.dest);
        csv_writer.write(batch)?;
        self.header_written = true;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.dest.flush()?;
        Ok(())
    }
}
