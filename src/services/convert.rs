use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{LocalizeError, Result};
use crate::model::locale_map::LocaleMap;
use crate::parsers::csv_table::{self, StringTable};
use crate::services::{encoding, writer};

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub input: PathBuf,
    /// Defaults to the directory containing `input`.
    pub out_dir: Option<PathBuf>,
    pub pretty: bool,
    /// Forced input encoding label; detected when `None`.
    pub encoding: Option<String>,
}

impl ConvertOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        ConvertOptions {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        match &self.out_dir {
            Some(dir) => dir.clone(),
            None => input_dir(&self.input),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConvertReport {
    pub encoding: String,
    pub languages: Vec<String>,
    pub files: Vec<PathBuf>,
    pub strings: usize,
}

/// Pivots the table into one locale map per language column, in column order.
pub fn build_locale_maps(table: &StringTable) -> Vec<(String, LocaleMap)> {
    table
        .languages()
        .iter()
        .enumerate()
        .map(|(i, lang)| {
            let mut map = LocaleMap::with_capacity(table.records.len());
            for record in &table.records {
                // Row arity is validated by the parser.
                let value = record.translation(i).unwrap_or_default();
                map.insert(record.id(), value);
            }
            (lang.clone(), map)
        })
        .collect()
}

/// Reads, parses and pivots `options.input`, then writes `<lang>.json` for
/// every language column. Nothing is written unless parsing succeeds; files
/// written before a later write failure are left in place.
pub fn run(options: &ConvertOptions) -> Result<ConvertReport> {
    let bytes = fs::read(&options.input).map_err(|e| LocalizeError::file_access(&options.input, e))?;

    let decoded = encoding::decode(&bytes, options.encoding.as_deref())?;
    let table = csv_table::parse(&decoded.text)?;
    let maps = build_locale_maps(&table);

    let out_dir = options.output_dir();
    let mut files = Vec::with_capacity(maps.len());

    for (lang, map) in &maps {
        let path = out_dir.join(format!("{lang}.json"));
        writer::write_locale(&path, map, options.pretty)?;
        files.push(path);
    }

    let strings = maps.first().map(|(_, m)| m.len()).unwrap_or(0);

    info!(
        input = %options.input.display(),
        languages = maps.len(),
        strings,
        "converted string table"
    );

    Ok(ConvertReport {
        encoding: decoded.encoding,
        languages: maps.into_iter().map(|(lang, _)| lang).collect(),
        files,
        strings,
    })
}

fn input_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivots_columns_into_maps() {
        let table = csv_table::parse(
            "id,comment,en,fr\n\
             greeting,a hello,Hello,Bonjour\n\
             farewell,a bye,Bye,Au revoir\n",
        )
        .unwrap();

        let maps = build_locale_maps(&table);
        assert_eq!(maps.len(), 2);

        let (en, en_map) = &maps[0];
        assert_eq!(en, "en");
        assert_eq!(
            serde_json::to_string(en_map).unwrap(),
            r#"{"version":100,"greeting":"Hello","farewell":"Bye"}"#
        );

        let (fr, fr_map) = &maps[1];
        assert_eq!(fr, "fr");
        assert_eq!(fr_map.get("farewell"), Some("Au revoir"));
    }

    #[test]
    fn duplicate_id_last_value_wins() {
        let table = csv_table::parse("id,comment,en\na,,1\nb,,2\na,,3\n").unwrap();
        let maps = build_locale_maps(&table);

        assert_eq!(
            serde_json::to_string(&maps[0].1).unwrap(),
            r#"{"version":100,"a":"3","b":"2"}"#
        );
    }

    #[test]
    fn no_language_columns_means_no_maps() {
        let table = csv_table::parse("id,comment\na,b\n").unwrap();
        assert!(build_locale_maps(&table).is_empty());
    }

    #[test]
    fn bare_file_name_resolves_to_current_dir() {
        assert_eq!(input_dir(Path::new("strings.csv")), PathBuf::from("."));
        assert_eq!(
            input_dir(Path::new("assets/strings/strings.csv")),
            PathBuf::from("assets/strings")
        );
    }

    #[test]
    fn explicit_out_dir_overrides_input_dir() {
        let mut options = ConvertOptions::new("assets/strings.csv");
        assert_eq!(options.output_dir(), PathBuf::from("assets"));

        options.out_dir = Some(PathBuf::from("build/locales"));
        assert_eq!(options.output_dir(), PathBuf::from("build/locales"));
    }
}
