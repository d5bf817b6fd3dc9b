use crate::domain::schema::SchemaInput;
use anyhow::Result;

/// Schema source port (implemented by Infrastructure)
pub trait SchemaSource {
    fn load(&self) -> Result<SchemaInput>;

    /// Human-readable origin, used in log lines and reports
    fn describe(&self) -> String;
}
