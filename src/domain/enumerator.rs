use crate::domain::error::SchemaError;
use crate::domain::graph::QuestionnaireGraph;
use crate::domain::node::{AnswerNode, QuestionId, QuestionNode};
use crate::domain::path::{Path, PathSet};
use std::collections::HashSet;
use tracing::debug;

/// Path Enumerator - walks the questionnaire depth-first from the root question
#[derive(Debug, Default)]
pub struct PathEnumerator;

struct Frame<'g> {
    question: QuestionId,
    answers: Vec<&'g AnswerNode>,
    next: usize,
}

impl<'g> Frame<'g> {
    fn open(graph: &'g QuestionnaireGraph, question: &'g QuestionNode) -> Self {
        Self {
            question: question.id,
            answers: graph.answers_of(question).collect(),
            next: 0,
        }
    }
}

impl PathEnumerator {
    pub fn new() -> Self {
        Self
    }

    /// Every root-to-terminal answer sequence, in pre-order following each question's declared
    /// answer order.
    ///
    /// A terminal answer (see `AnswerNode::is_terminal`) ends a path. Descending into a question
    /// that is already on the current path is reported as `CycleDetected` instead of looping.
    pub fn enumerate<'g>(&self, graph: &'g QuestionnaireGraph) -> Result<PathSet<'g>, SchemaError> {
        let root = graph.root().ok_or(SchemaError::MissingRoot)?;

        let mut paths = PathSet::new();
        let mut stack = vec![Frame::open(graph, root)];
        // Answers taken so far; always one shorter than `stack`
        let mut current: Vec<&'g AnswerNode> = Vec::new();
        let mut ancestors: HashSet<QuestionId> = HashSet::from([root.id]);

        while let Some(frame) = stack.last_mut() {
            let Some(&answer) = frame.answers.get(frame.next) else {
                ancestors.remove(&frame.question);
                stack.pop();
                current.pop();
                continue;
            };
            frame.next += 1;

            let descend = if answer.is_terminal() {
                None
            } else {
                graph.child_of(answer)
            };
            let Some(child) = descend else {
                let mut answers = current.clone();
                answers.push(answer);
                paths.insert(Path::new(answers));
                continue;
            };

            if !ancestors.insert(child.id) {
                let mut path: Vec<_> = current.iter().map(|a| a.id).collect();
                path.push(answer.id);
                return Err(SchemaError::CycleDetected {
                    question: child.id,
                    path,
                });
            }
            current.push(answer);
            stack.push(Frame::open(graph, child));
        }

        debug!(paths = paths.len(), "paths enumerated");
        Ok(paths)
    }
}
