//! Raw schema records: the contract between a schema-loading collaborator and the graph builder.
//!
//! Records carry ids only; no cross-reference is resolved here. See `GraphBuilder` for linking.

use crate::domain::node::{AnswerId, QuestionId, ResultId, ResultKind};
use serde::{Deserialize, Serialize};

/// A fully parsed, unlinked questionnaire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaInput {
    /// Questions in declaration order. Question 0 is the root.
    pub questions: Vec<QuestionRecord>,
    /// Results in declaration order.
    #[serde(default)]
    pub results: Vec<ResultRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub text: String,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
    /// Answers that lead to this question. `None` for the root.
    #[serde(default)]
    pub parent_answers: Option<Vec<AnswerId>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub id: AnswerId,
    pub text: String,
    #[serde(default)]
    pub short: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: ResultId,
    pub kind: ResultKind,
    pub text: String,
    #[serde(default)]
    pub linked_answers: Vec<AnswerId>,
}

impl SchemaInput {
    pub fn new(questions: Vec<QuestionRecord>, results: Vec<ResultRecord>) -> Self {
        Self { questions, results }
    }
}
