pub mod convert;
pub mod encoding;
pub mod writer;
