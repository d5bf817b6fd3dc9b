pub mod policy;
pub mod schema;
