//! Structural check of a linked questionnaire.
//!
//! Findings are advisory: the pipeline still runs on a graph that has them, except for cycles
//! on a reachable branch, which the enumerator rejects on its own.

use crate::domain::edge::EdgeKind;
use crate::domain::graph::QuestionnaireGraph;
use crate::domain::node::{AnswerId, Node, QuestionId};
use petgraph::algo::toposort;
use petgraph::visit::{Dfs, EdgeFiltered, EdgeRef};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "finding", rename_all = "snake_case")]
pub enum Finding {
    /// No answer sequence from the root reaches this question.
    Unreachable { question: QuestionId },
    /// Question offers no answers; every path into it vanishes.
    NoAnswers { question: QuestionId },
    /// Answer is a rejection clause, so its declared child is never visited.
    IgnoredChild {
        answer: AnswerId,
        question: QuestionId,
    },
    /// Parent links form a loop through this question.
    Cycle { question: QuestionId },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Unreachable { question } => {
                write!(f, "question {question} is unreachable from the root")
            }
            Finding::NoAnswers { question } => write!(f, "question {question} has no answers"),
            Finding::IgnoredChild { answer, question } => write!(
                f,
                "answer {answer} is a rejection clause; its child question {question} is never asked"
            ),
            Finding::Cycle { question } => {
                write!(f, "question {question} lies on a cycle of parent links")
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StructureReport {
    pub findings: Vec<Finding>,
}

impl StructureReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Runs every structural check and returns findings in a stable order.
pub fn check_structure(graph: &QuestionnaireGraph) -> StructureReport {
    let mut findings = Vec::new();

    for answer in graph.answers() {
        if let (true, Some(child)) = (answer.is_rejection_clause(), answer.child) {
            findings.push(Finding::IgnoredChild {
                answer: answer.id,
                question: child,
            });
        }
    }

    for question in graph.questions() {
        if question.answers.is_empty() {
            findings.push(Finding::NoAnswers {
                question: question.id,
            });
        }
    }

    // Follow only the links the enumerator follows.
    let routing = EdgeFiltered::from_fn(graph.inner(), |edge| match edge.weight() {
        EdgeKind::Offers => true,
        EdgeKind::LeadsTo => {
            matches!(graph.node(edge.source()), Node::Answer(a) if !a.is_rejection_clause())
        }
        EdgeKind::Triggers => false,
    });

    let mut reachable = HashSet::new();
    if let Some(root) = graph.root().and_then(|q| graph.question_index(q.id)) {
        let mut dfs = Dfs::new(&routing, root);
        while let Some(idx) = dfs.next(&routing) {
            reachable.insert(idx);
        }
    }
    for question in graph.questions() {
        let reached = graph
            .question_index(question.id)
            .is_some_and(|idx| reachable.contains(&idx));
        if !reached {
            findings.push(Finding::Unreachable {
                question: question.id,
            });
        }
    }

    if let Err(cycle) = toposort(&routing, None) {
        let question = match graph.node(cycle.node_id()) {
            Node::Question(q) => Some(q.id),
            Node::Answer(a) => Some(a.question),
            Node::Result(_) => None,
        };
        if let Some(question) = question {
            findings.push(Finding::Cycle { question });
        }
    }

    StructureReport { findings }
}
