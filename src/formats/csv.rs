// Two columns per row, forge name then fabric name. No header; `#` starts a comment line.
use std::io::BufRead;

use crate::{error::Error, tables::NameTable, traits::TableFile, types::NamePair};

pub struct Format;

impl TableFile for Format {
    const EXTENSION: &'static str = "csv";

    fn from_reader<R: BufRead>(reader: R) -> Result<NameTable, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut pairs = Vec::new();
        for result in rdr.deserialize() {
            let pair: NamePair = result?;
            pairs.push(pair);
        }
        Ok(NameTable::new(pairs))
    }

    fn to_writer<W: std::io::Write>(table: &NameTable, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for pair in table {
            wtr.serialize(pair)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
