pub mod catalog_source;
pub mod commands;
