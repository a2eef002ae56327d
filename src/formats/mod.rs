pub mod csv;
pub mod json;

use std::path::Path;

pub use self::csv::Format as CsvFormat;
pub use self::json::Format as JsonFormat;

use crate::{error::Error, tables::NameTable, traits::TableFile};

/// External table file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Json,
}

impl TableFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => CsvFormat::EXTENSION,
            TableFormat::Json => JsonFormat::EXTENSION,
        }
    }

    pub fn from_reader<R: std::io::BufRead>(&self, reader: R) -> Result<NameTable, Error> {
        match self {
            TableFormat::Csv => CsvFormat::from_reader(reader),
            TableFormat::Json => JsonFormat::from_reader(reader),
        }
    }

    pub fn to_writer<W: std::io::Write>(
        &self,
        table: &NameTable,
        writer: W,
    ) -> Result<(), Error> {
        match self {
            TableFormat::Csv => CsvFormat::to_writer(table, writer),
            TableFormat::Json => JsonFormat::to_writer(table, writer),
        }
    }
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableFormat::Csv => write!(f, "CSV"),
            TableFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Infers the table format from the file extension.
pub fn infer_format_from_extension<P: AsRef<Path>>(path: P) -> Result<TableFormat, Error> {
    match path.as_ref().extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(CsvFormat::EXTENSION) => Ok(TableFormat::Csv),
        Some(ext) if ext.eq_ignore_ascii_case(JsonFormat::EXTENSION) => Ok(TableFormat::Json),
        extension => Err(Error::UnsupportedFormat(format!(
            "Unsupported table file extension: {:?}.",
            extension
        ))),
    }
}

/// Reads a table file, choosing the format by extension, and validates it.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<NameTable, Error> {
    let table = match infer_format_from_extension(&path)? {
        TableFormat::Csv => CsvFormat::read_from(&path)?,
        TableFormat::Json => JsonFormat::read_from(&path)?,
    };
    log::debug!(
        "loaded {} name pairs from {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(table)
}

/// Writes a table file, choosing the format by extension.
pub fn write_table<P: AsRef<Path>>(table: &NameTable, path: P) -> Result<(), Error> {
    match infer_format_from_extension(&path)? {
        TableFormat::Csv => CsvFormat::write_to(table, path),
        TableFormat::Json => JsonFormat::write_to(table, path),
    }
}
