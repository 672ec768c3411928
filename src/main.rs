use std::process::ExitCode;

use strings_localize::cli::{self, Invocation};
use strings_localize::{services::convert, LocalizeError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = match cli::parse_args(std::env::args_os()) {
        Ok(Invocation::Convert(options)) => options,
        Ok(Invocation::Print(info)) => {
            let _ = info.print();
            return ExitCode::SUCCESS;
        }
        Err(e @ LocalizeError::Usage { .. }) => {
            println!("{e}");
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match convert::run(&options) {
        Ok(report) => {
            for file in &report.files {
                debug!(path = %file.display(), "written");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
