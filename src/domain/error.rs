//! Error taxonomy of the audit pipeline.
//!
//! Every failure is a deterministic function of the schema and the requested mode, so nothing
//! here is retryable. Each error names the offending id or value and the pipeline stage that
//! detected it.

use crate::domain::node::{AnswerId, QuestionId, ResultKey, ResultKind};
use std::fmt;
use thiserror::Error;

/// Pipeline stage at which a failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Linking,
    Enumeration,
    PolicySelection,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Linking => "linking",
            Stage::Enumeration => "path enumeration",
            Stage::PolicySelection => "policy selection",
        };
        f.write_str(name)
    }
}

/// Kind of schema entity an id belongs to. Ids are unique per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Question,
    Answer,
    Result(ResultKind),
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Question => f.write_str("question"),
            EntityKind::Answer => f.write_str("answer"),
            EntityKind::Result(ResultKind::Document) => f.write_str("document result"),
            EntityKind::Result(ResultKind::Rejection) => f.write_str("rejection result"),
        }
    }
}

/// Structural defects of a questionnaire schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A cross-reference names an id that does not exist.
    #[error("{referrer} references unknown {kind} {id}")]
    DanglingReference {
        referrer: String,
        kind: EntityKind,
        id: u32,
    },
    /// An answer was declared as the parent of a second question.
    #[error(
        "answer {answer} already leads to question {existing}; question {attempted} cannot claim it too"
    )]
    DuplicateChildLink {
        answer: AnswerId,
        existing: QuestionId,
        attempted: QuestionId,
    },
    /// A question is reachable from itself.
    #[error("question {question} is its own ancestor (cycle through path {path:?})")]
    CycleDetected {
        question: QuestionId,
        path: Vec<AnswerId>,
    },
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: EntityKind, id: u32 },
    #[error("root question 0 is not declared")]
    MissingRoot,
    #[error("result {0} is not linked to any answer")]
    UnlinkedResult(ResultKey),
}

impl SchemaError {
    pub fn stage(&self) -> Stage {
        match self {
            SchemaError::CycleDetected { .. } => Stage::Enumeration,
            _ => Stage::Linking,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown rejection handling mode \"{0}\" (expected \"trim\" or \"collapse\")")]
    UnknownMode(String),
}

impl ConfigurationError {
    pub fn stage(&self) -> Stage {
        Stage::PolicySelection
    }
}

/// Fatal failure of an audit run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    #[error("schema error during {stage}: {0}", stage = .0.stage())]
    Schema(#[from] SchemaError),
    #[error("configuration error during {stage}: {0}", stage = .0.stage())]
    Configuration(#[from] ConfigurationError),
}

impl AuditError {
    pub fn stage(&self) -> Stage {
        match self {
            AuditError::Schema(e) => e.stage(),
            AuditError::Configuration(e) => e.stage(),
        }
    }
}
