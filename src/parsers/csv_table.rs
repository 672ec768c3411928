use std::collections::HashSet;
use std::io::Read;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{LocalizeError, Result};
use crate::model::header::Header;
use crate::model::locale_map::VERSION_KEY;
use crate::model::record::StringRecord;

/// The whole string table: header plus data rows in file order.
#[derive(Debug, Clone)]
pub struct StringTable {
    pub header: Header,
    pub records: Vec<StringRecord>,
}

impl StringTable {
    pub fn languages(&self) -> &[String] {
        self.header.languages()
    }
}

pub fn parse(text: &str) -> Result<StringTable> {
    parse_reader(text.as_bytes())
}

pub fn parse_reader<R: Read>(reader: R) -> Result<StringTable> {
    // Arity is checked here rather than by the csv crate so errors carry our
    // own line numbers and variants.
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = rdr.records();

    let header = match rows.next() {
        Some(first) => {
            let first = first?;
            Header::new(first.iter().map(str::to_string).collect())?
        }
        None => return Err(LocalizeError::InvalidHeader("input is empty".into())),
    };

    let expected = header.len();
    let mut records = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for row in rows {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() != expected {
            return Err(LocalizeError::MalformedRow {
                line,
                expected,
                found: row.len(),
            });
        }

        let cells: Vec<String> = row.iter().map(str::to_string).collect();

        if cells[0] == VERSION_KEY {
            return Err(LocalizeError::ReservedId { line });
        }

        if !seen_ids.insert(cells[0].clone()) {
            warn!(id = %cells[0], line, "duplicate string id, later row wins");
        }

        records.push(StringRecord::new(line, cells));
    }

    debug!(
        languages = header.languages().len(),
        strings = records.len(),
        "parsed string table"
    );

    Ok(StringTable { header, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "id,comment,en,fr\n\
                          greeting,a hello,Hello,Bonjour\n\
                          farewell,a bye,Bye,Au revoir\n";

    #[test]
    fn parses_header_and_rows_in_order() {
        let table = parse(SAMPLE).unwrap();

        assert_eq!(table.languages(), &["en".to_string(), "fr".to_string()]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].id(), "greeting");
        assert_eq!(table.records[0].line, 2);
        assert_eq!(table.records[1].id(), "farewell");
        assert_eq!(table.records[1].translation(1), Some("Au revoir"));
    }

    #[test]
    fn header_only_has_no_records() {
        let table = parse("id,comment,en\n").unwrap();
        assert_eq!(table.languages().len(), 1);
        assert!(table.records.is_empty());
    }

    #[test]
    fn quoted_cells_keep_commas_newlines_and_spaces() {
        let text = "id,comment,en\n\
                    list,\"a, b\",\"  one,\ntwo \"\n";
        let table = parse(text).unwrap();

        assert_eq!(table.records[0].comment(), "a, b");
        assert_eq!(table.records[0].translation(0), Some("  one,\ntwo "));
    }

    #[test]
    fn empty_input_is_invalid_header() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, LocalizeError::InvalidHeader(_)));
    }

    #[test]
    fn wrong_header_is_rejected() {
        let err = parse("name,note,en\nx,y,z\n").unwrap_err();
        assert!(matches!(err, LocalizeError::InvalidHeader(_)));
    }

    #[test]
    fn short_row_is_malformed() {
        let err = parse("id,comment,en,fr\nok,c,a,b\nshort,c,a\n").unwrap_err();
        match err {
            LocalizeError::MalformedRow {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn long_row_is_malformed() {
        let err = parse("id,comment,en\na,c,x,extra\n").unwrap_err();
        assert!(matches!(err, LocalizeError::MalformedRow { found: 4, .. }));
    }

    #[test]
    fn version_id_is_reserved() {
        let err = parse("id,comment,en\nversion,c,1\n").unwrap_err();
        assert!(matches!(err, LocalizeError::ReservedId { line: 2 }));
    }

    #[test]
    fn duplicate_ids_are_kept_for_the_pivot() {
        let table = parse("id,comment,en\na,c,1\na,c,2\n").unwrap();
        assert_eq!(table.records.len(), 2);
    }
}
