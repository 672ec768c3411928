//! Converts a CSV table of localized strings into one JSON locale file per
//! language column.

pub mod cli;
pub mod error;
pub mod model;
pub mod parsers;
pub mod services;

pub use error::{LocalizeError, Result};
pub use services::convert::{run, ConvertOptions, ConvertReport};
