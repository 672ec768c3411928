pub mod header;
pub mod locale_map;
pub mod record;
