//! Mock implementations for integration tests.
#![allow(dead_code)]

use anyhow::{Result, anyhow};
use case_footprint::domain::ports::SchemaSource;
use case_footprint::domain::schema::SchemaInput;

/// Mock SchemaSource that serves an in-memory schema.
pub struct MockSchemaSource {
    schema: Option<SchemaInput>,
    name: String,
}

impl MockSchemaSource {
    pub fn new(schema: SchemaInput) -> Self {
        Self {
            schema: Some(schema),
            name: "memory".into(),
        }
    }

    /// A source whose load always fails, as an unreadable file would.
    pub fn failing() -> Self {
        Self {
            schema: None,
            name: "broken".into(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl SchemaSource for MockSchemaSource {
    fn load(&self) -> Result<SchemaInput> {
        self.schema
            .clone()
            .ok_or_else(|| anyhow!("schema {} could not be loaded", self.name))
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
