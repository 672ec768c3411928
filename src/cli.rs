use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::{LocalizeError, Result};
use crate::services::convert::ConvertOptions;

pub const DEFAULT_PROGRAM: &str = "strings-localize";

#[derive(Debug, Parser)]
#[command(
    name = "strings-localize",
    version,
    about = "Convert a CSV string table into one JSON locale file per language"
)]
pub struct Cli {
    /// CSV file with `id,comment,<lang>...` columns
    pub file: PathBuf,

    /// Write locale files here instead of next to the CSV
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Input encoding label (detected when omitted)
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,
}

impl From<Cli> for ConvertOptions {
    fn from(cli: Cli) -> Self {
        ConvertOptions {
            input: cli.file,
            out_dir: cli.out_dir,
            pretty: cli.pretty,
            encoding: cli.encoding,
        }
    }
}

#[derive(Debug)]
pub enum Invocation {
    Convert(ConvertOptions),
    /// `--help` / `--version`: print and exit successfully.
    Print(clap::Error),
}

/// Parses the full argv (program name included).
///
/// Any argument error collapses into `LocalizeError::Usage`, so a missing
/// file, an extra positional and an unknown flag all get the same usage line.
pub fn parse_args<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(&args);

    match Cli::try_parse_from(&args) {
        Ok(cli) => Ok(Invocation::Convert(cli.into())),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(Invocation::Print(e)),
            _ => Err(LocalizeError::Usage { program }),
        },
    }
}

pub fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(|a| a.to_string_lossy().into_owned())
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}
