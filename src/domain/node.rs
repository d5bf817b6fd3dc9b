use serde::{Deserialize, Serialize};
use std::fmt;

/// Question identifier (the root question is always 0)
pub type QuestionId = u32;

/// Answer identifier, unique across the whole questionnaire
pub type AnswerId = u32;

/// Result identifier, unique within its kind
pub type ResultId = u32;

pub const ROOT_QUESTION: QuestionId = 0;

/// Result kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Document,
    Rejection,
}

/// Identity of a result. Document 3 and Rejection 3 are distinct results.
///
/// Ordering is by kind first (documents before rejections), then by id. This is the order used
/// for case footprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ResultKey {
    pub kind: ResultKind,
    pub id: ResultId,
}

impl ResultKey {
    pub fn document(id: ResultId) -> Self {
        Self {
            kind: ResultKind::Document,
            id,
        }
    }

    pub fn rejection(id: ResultId) -> Self {
        Self {
            kind: ResultKind::Rejection,
            id,
        }
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ResultKind::Document => write!(f, "{}", self.id),
            ResultKind::Rejection => write!(f, "{}r", self.id),
        }
    }
}

/// Question node
#[derive(Debug, Clone)]
pub struct QuestionNode {
    pub id: QuestionId,
    pub text: String,
    /// Answers in declaration order
    pub answers: Vec<AnswerId>,
}

/// Answer node
#[derive(Debug, Clone)]
pub struct AnswerNode {
    pub id: AnswerId,
    pub text: String,
    /// Describes the answer in the context of the whole questionnaire ("Lives abroad"),
    /// used when rendering paths.
    pub short: String,
    /// Question this answer belongs to
    pub question: QuestionId,
    pub child: Option<QuestionId>,
    /// Attached results in declaration order
    pub results: Vec<ResultKey>,
}

impl AnswerNode {
    pub fn new(id: AnswerId, text: String, short: String, question: QuestionId) -> Self {
        Self {
            id,
            text,
            short,
            question,
            child: None,
            results: Vec::new(),
        }
    }

    /// True iff any attached result is a rejection. Derived, never stored.
    pub fn is_rejection_clause(&self) -> bool {
        self.results
            .iter()
            .any(|key| key.kind == ResultKind::Rejection)
    }

    /// A rejection clause terminates a path even when a child question is declared.
    pub fn is_terminal(&self) -> bool {
        self.is_rejection_clause() || self.child.is_none()
    }
}

/// Attributes shared by every result kind
#[derive(Debug, Clone)]
pub struct ResultCore {
    pub id: ResultId,
    pub text: String,
    /// Triggering answers in declaration order
    pub answers: Vec<AnswerId>,
}

/// Polymorphic result
#[derive(Debug, Clone)]
pub enum ResultNode {
    /// A document the applicant must provide
    Document(ResultCore),
    /// A reason why the applicant cannot apply
    Rejection(ResultCore),
}

impl ResultNode {
    pub fn new(kind: ResultKind, core: ResultCore) -> Self {
        match kind {
            ResultKind::Document => ResultNode::Document(core),
            ResultKind::Rejection => ResultNode::Rejection(core),
        }
    }

    pub fn core(&self) -> &ResultCore {
        match self {
            ResultNode::Document(c) => c,
            ResultNode::Rejection(c) => c,
        }
    }

    pub fn kind(&self) -> ResultKind {
        match self {
            ResultNode::Document(_) => ResultKind::Document,
            ResultNode::Rejection(_) => ResultKind::Rejection,
        }
    }

    pub fn key(&self) -> ResultKey {
        ResultKey {
            kind: self.kind(),
            id: self.core().id,
        }
    }

    pub fn text(&self) -> &str {
        &self.core().text
    }

    pub fn answers(&self) -> &[AnswerId] {
        &self.core().answers
    }
}

/// Graph node
#[derive(Debug, Clone)]
pub enum Node {
    Question(QuestionNode),
    Answer(AnswerNode),
    Result(ResultNode),
}

impl Node {
    pub fn label(&self) -> &'static str {
        match self {
            Node::Question(_) => "question",
            Node::Answer(_) => "answer",
            Node::Result(_) => "result",
        }
    }
}
