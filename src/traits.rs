use std::path::Path;

use crate::{error::Error, tables::NameTable};

/// A file format a [`NameTable`] can be loaded from and saved to.
pub trait TableFile {
    /// File extension, without the dot, this format is recognised by.
    const EXTENSION: &'static str;

    /// Parse a table from any reader. Pairs keep the order they appear in.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<NameTable, Error>;

    /// Write a table to any writer.
    fn to_writer<W: std::io::Write>(table: &NameTable, writer: W) -> Result<(), Error>;

    /// Parse a table from a file and check that it is a bijection.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<NameTable, Error> {
        let file = std::fs::File::open(path).map_err(Error::Io)?;
        let table = Self::from_reader(std::io::BufReader::new(file))?;
        table.validate()?;
        Ok(table)
    }

    fn write_to<P: AsRef<Path>>(table: &NameTable, path: P) -> Result<(), Error> {
        let file = std::fs::File::create(path)?;
        Self::to_writer(table, std::io::BufWriter::new(file))
    }
}
