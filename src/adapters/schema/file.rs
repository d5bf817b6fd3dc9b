//! Questionnaire files as written by schema authors.
//!
//! Layout (YAML shown, JSON is the same shape):
//!
//! ```yaml
//! questions:
//!   - id: 0
//!     text: Do you live in the country?
//!     answers:
//!       - { id: 0, text: "Yes", short: Lives in the country }
//!       - { id: 1, text: "No", short: Lives abroad }
//!     parent_answers: null
//! documents:
//!   - { id: 1, text: Passport, linked_answers: [0] }
//! rejections:
//!   - { id: 1, text: Only residents may apply, linked_answers: [1] }
//! ```
//!
//! A flat `results` list whose entries carry an explicit `kind` is accepted as well and is
//! appended after documents and rejections.

use crate::domain::node::{AnswerId, ResultId, ResultKind};
use crate::domain::ports::SchemaSource;
use crate::domain::schema::{QuestionRecord, ResultRecord, SchemaInput};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Yaml,
    Json,
}

impl SchemaFormat {
    /// `.json` is JSON; anything else is read as YAML, which also accepts JSON text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SchemaFormat::Json,
            _ => SchemaFormat::Yaml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SchemaFile {
    questions: Vec<QuestionRecord>,
    #[serde(default)]
    documents: Vec<LinkedRecord>,
    #[serde(default, alias = "rejection_clauses")]
    rejections: Vec<LinkedRecord>,
    #[serde(default)]
    results: Vec<ResultRecord>,
}

#[derive(Debug, Deserialize)]
struct LinkedRecord {
    id: ResultId,
    text: String,
    #[serde(default)]
    linked_answers: Vec<AnswerId>,
}

impl LinkedRecord {
    fn into_result(self, kind: ResultKind) -> ResultRecord {
        ResultRecord {
            id: self.id,
            kind,
            text: self.text,
            linked_answers: self.linked_answers,
        }
    }
}

impl From<SchemaFile> for SchemaInput {
    fn from(file: SchemaFile) -> Self {
        let results = file
            .documents
            .into_iter()
            .map(|r| r.into_result(ResultKind::Document))
            .chain(
                file.rejections
                    .into_iter()
                    .map(|r| r.into_result(ResultKind::Rejection)),
            )
            .chain(file.results)
            .collect();
        SchemaInput::new(file.questions, results)
    }
}

/// Parse schema text in the given format
pub fn parse_schema(text: &str, format: SchemaFormat) -> Result<SchemaInput> {
    let file: SchemaFile = match format {
        SchemaFormat::Yaml => {
            serde_yaml::from_str(text).context("Failed to parse YAML questionnaire")?
        }
        SchemaFormat::Json => {
            serde_json::from_str(text).context("Failed to parse JSON questionnaire")?
        }
    };
    Ok(file.into())
}

/// File system schema source
pub struct FileSchemaSource {
    path: PathBuf,
    format: SchemaFormat,
}

impl FileSchemaSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = SchemaFormat::from_path(&path);
        Self { path, format }
    }
}

impl SchemaSource for FileSchemaSource {
    fn load(&self) -> Result<SchemaInput> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read questionnaire: {}", self.path.display()))?;
        parse_schema(&text, self.format)
            .with_context(|| format!("Invalid questionnaire file: {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
