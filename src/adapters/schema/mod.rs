pub mod file;

pub use file::{FileSchemaSource, SchemaFormat, parse_schema};
