//! Reading and writing command files.
//!
//! Rows are `verb,action,value` with no header. Fields are quoted with `|`
//! only when they contain a delimiter, quote or line break.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::command::TestCommand;
use crate::error::Result;

/// One row of a command file, as written.
pub type CsvRow = [String; 3];

const QUOTE: u8 = b'|';

fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(b',')
        .quote(QUOTE)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .has_headers(false);
    builder
}

pub fn write_commands_to<W: Write>(writer: W, commands: &[TestCommand]) -> Result<()> {
    let mut wtr = writer_builder().from_writer(writer);
    for cmd in commands {
        wtr.write_record(cmd.to_record())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create or truncate `path` and write one row per command.
pub fn write_commands(path: &Path, commands: &[TestCommand]) -> Result<()> {
    let file = File::create(path)?;
    write_commands_to(file, commands)
}

pub fn read_commands(path: &Path) -> Result<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .quote(QUOTE)
        .has_headers(false)
        .flexible(false)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push([
            record.get(0).unwrap_or_default().to_string(),
            record.get(1).unwrap_or_default().to_string(),
            record.get(2).unwrap_or_default().to_string(),
        ]);
    }
    Ok(rows)
}
