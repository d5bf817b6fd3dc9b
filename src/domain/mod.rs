pub mod node;
pub mod edge;
pub mod graph;
pub mod schema;
pub mod error;
pub mod builder;
pub mod path;
pub mod enumerator;
pub mod policy;
pub mod case;
pub mod check;
pub mod ports;
