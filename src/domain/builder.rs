use crate::domain::edge::EdgeKind;
use crate::domain::error::{EntityKind, SchemaError};
use crate::domain::graph::QuestionnaireGraph;
use crate::domain::node::{AnswerNode, QuestionNode, ResultCore, ResultKey, ResultNode};
use crate::domain::schema::SchemaInput;
use std::collections::HashSet;
use tracing::debug;

/// Graph builder - Domain Service for constructing QuestionnaireGraph
#[derive(Debug, Default)]
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Two-pass build strategy.
    ///
    /// Pass 1 allocates every question, answer and result node with no cross-reference resolved.
    /// Pass 2 resolves parent answers and result links by id lookup against the completed arena.
    /// The graph is only handed out once both passes succeed.
    pub fn build(&self, schema: SchemaInput) -> Result<QuestionnaireGraph, SchemaError> {
        let mut graph = QuestionnaireGraph::new();

        // Pass 1: Node Allocation
        let mut question_nodes = Vec::with_capacity(schema.questions.len());
        let mut answer_ids = HashSet::new();
        for record in &schema.questions {
            if graph.question_index(record.id).is_some() {
                return Err(SchemaError::DuplicateId {
                    kind: EntityKind::Question,
                    id: record.id,
                });
            }
            let q_idx = graph.add_question(QuestionNode {
                id: record.id,
                text: record.text.clone(),
                answers: record.answers.iter().map(|a| a.id).collect(),
            });
            question_nodes.push(q_idx);

            for answer in &record.answers {
                if !answer_ids.insert(answer.id) {
                    return Err(SchemaError::DuplicateId {
                        kind: EntityKind::Answer,
                        id: answer.id,
                    });
                }
                let a_idx = graph.add_answer(AnswerNode::new(
                    answer.id,
                    answer.text.clone(),
                    answer.short.clone(),
                    record.id,
                ));
                graph.add_edge(q_idx, a_idx, EdgeKind::Offers);
            }
        }

        let mut result_nodes = Vec::with_capacity(schema.results.len());
        for record in &schema.results {
            let key = ResultKey {
                kind: record.kind,
                id: record.id,
            };
            if graph.result_index(key).is_some() {
                return Err(SchemaError::DuplicateId {
                    kind: EntityKind::Result(record.kind),
                    id: record.id,
                });
            }
            let r_idx = graph.add_result(ResultNode::new(
                record.kind,
                ResultCore {
                    id: record.id,
                    text: record.text.clone(),
                    answers: record.linked_answers.clone(),
                },
            ));
            result_nodes.push((key, r_idx));
        }

        if graph.root().is_none() {
            return Err(SchemaError::MissingRoot);
        }

        // Pass 2: Linking
        for (record, &q_idx) in schema.questions.iter().zip(&question_nodes) {
            let Some(parents) = &record.parent_answers else {
                continue;
            };
            for &aid in parents {
                let (a_idx, answer) = graph.answer_mut(aid).ok_or_else(|| {
                    SchemaError::DanglingReference {
                        referrer: format!("question {}", record.id),
                        kind: EntityKind::Answer,
                        id: aid,
                    }
                })?;
                if let Some(existing) = answer.child {
                    return Err(SchemaError::DuplicateChildLink {
                        answer: aid,
                        existing,
                        attempted: record.id,
                    });
                }
                answer.child = Some(record.id);
                graph.add_edge(a_idx, q_idx, EdgeKind::LeadsTo);
            }
        }

        for (record, &(key, r_idx)) in schema.results.iter().zip(&result_nodes) {
            if record.linked_answers.is_empty() {
                return Err(SchemaError::UnlinkedResult(key));
            }
            for &aid in &record.linked_answers {
                let (a_idx, answer) = graph.answer_mut(aid).ok_or_else(|| {
                    SchemaError::DanglingReference {
                        referrer: format!("result {key}"),
                        kind: EntityKind::Answer,
                        id: aid,
                    }
                })?;
                answer.results.push(key);
                graph.add_edge(a_idx, r_idx, EdgeKind::Triggers);
            }
        }

        let summary = graph.summary();
        debug!(
            questions = summary.questions,
            answers = summary.answers,
            documents = summary.documents,
            rejections = summary.rejections,
            "questionnaire graph linked"
        );

        Ok(graph)
    }
}
