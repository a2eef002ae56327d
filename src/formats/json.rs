use std::io::BufRead;

use crate::{error::Error, tables::NameTable, traits::TableFile};

/// A JSON array of `{"forge": ..., "fabric": ...}` objects.
pub struct Format;

impl TableFile for Format {
    const EXTENSION: &'static str = "json";

    fn from_reader<R: BufRead>(reader: R) -> Result<NameTable, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    fn to_writer<W: std::io::Write>(table: &NameTable, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, table).map_err(Error::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NamePair;

    #[test]
    fn test_parse_json_table() {
        let content = r#"[
            {"forge": "net.minecraft.core.BlockPos", "fabric": "net.minecraft.util.math.BlockPos"},
            {"forge": "screen.onClose", "fabric": "screen.close"}
        ]"#;
        let table = Format::from_reader(content.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.pairs[1], NamePair::new("screen.onClose", "screen.close"));
    }

    #[test]
    fn test_parse_json_rejects_missing_field() {
        let result = Format::from_reader(r#"[{"forge": "a"}]"#.as_bytes());
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
