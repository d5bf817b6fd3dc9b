use crate::domain::edge::EdgeKind;
use crate::domain::node::{
    AnswerId, AnswerNode, Node, QuestionId, QuestionNode, ROOT_QUESTION, ResultKey, ResultKind,
    ResultNode,
};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Questionnaire Graph - the core data structure.
///
/// Questions, answers and results live in a single petgraph arena. Node insertion order follows
/// declaration order, so iterating nodes of one kind yields them as the schema declared them.
/// Only `GraphBuilder` mutates a graph; once built it is read-only.
#[derive(Debug, Default)]
pub struct QuestionnaireGraph {
    graph: DiGraph<Node, EdgeKind>,
    question_to_node: HashMap<QuestionId, NodeIndex>,
    answer_to_node: HashMap<AnswerId, NodeIndex>,
    result_to_node: HashMap<ResultKey, NodeIndex>,
}

/// Node and edge counts by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct GraphSummary {
    pub questions: usize,
    pub answers: usize,
    pub documents: usize,
    pub rejections: usize,
    pub child_links: usize,
    pub result_links: usize,
}

impl QuestionnaireGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_question(&mut self, question: QuestionNode) -> NodeIndex {
        let id = question.id;
        let idx = self.graph.add_node(Node::Question(question));
        self.question_to_node.insert(id, idx);
        idx
    }

    pub(crate) fn add_answer(&mut self, answer: AnswerNode) -> NodeIndex {
        let id = answer.id;
        let idx = self.graph.add_node(Node::Answer(answer));
        self.answer_to_node.insert(id, idx);
        idx
    }

    pub(crate) fn add_result(&mut self, result: ResultNode) -> NodeIndex {
        let key = result.key();
        let idx = self.graph.add_node(Node::Result(result));
        self.result_to_node.insert(key, idx);
        idx
    }

    pub(crate) fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, kind: EdgeKind) {
        self.graph.add_edge(source, target, kind);
    }

    /// Answer by id together with its arena index
    pub(crate) fn answer_mut(&mut self, id: AnswerId) -> Option<(NodeIndex, &mut AnswerNode)> {
        let idx = *self.answer_to_node.get(&id)?;
        match &mut self.graph[idx] {
            Node::Answer(a) => Some((idx, a)),
            _ => None,
        }
    }

    pub fn question_index(&self, id: QuestionId) -> Option<NodeIndex> {
        self.question_to_node.get(&id).copied()
    }

    pub fn answer_index(&self, id: AnswerId) -> Option<NodeIndex> {
        self.answer_to_node.get(&id).copied()
    }

    pub fn result_index(&self, key: ResultKey) -> Option<NodeIndex> {
        self.result_to_node.get(&key).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.graph[idx]
    }

    pub fn question(&self, id: QuestionId) -> Option<&QuestionNode> {
        match self.node(self.question_index(id)?) {
            Node::Question(q) => Some(q),
            _ => None,
        }
    }

    pub fn answer(&self, id: AnswerId) -> Option<&AnswerNode> {
        match self.node(self.answer_index(id)?) {
            Node::Answer(a) => Some(a),
            _ => None,
        }
    }

    pub fn result(&self, key: ResultKey) -> Option<&ResultNode> {
        match self.node(self.result_index(key)?) {
            Node::Result(r) => Some(r),
            _ => None,
        }
    }

    pub fn root(&self) -> Option<&QuestionNode> {
        self.question(ROOT_QUESTION)
    }

    /// Questions in declaration order
    pub fn questions(&self) -> impl Iterator<Item = &QuestionNode> {
        self.graph.node_weights().filter_map(|n| match n {
            Node::Question(q) => Some(q),
            _ => None,
        })
    }

    /// Answers in declaration order
    pub fn answers(&self) -> impl Iterator<Item = &AnswerNode> {
        self.graph.node_weights().filter_map(|n| match n {
            Node::Answer(a) => Some(a),
            _ => None,
        })
    }

    /// Results in declaration order (documents first when loaded from a file)
    pub fn results(&self) -> impl Iterator<Item = &ResultNode> {
        self.graph.node_weights().filter_map(|n| match n {
            Node::Result(r) => Some(r),
            _ => None,
        })
    }

    /// Answers of a question, in the order the question declares them
    pub fn answers_of<'a>(
        &'a self,
        question: &'a QuestionNode,
    ) -> impl Iterator<Item = &'a AnswerNode> + 'a {
        question.answers.iter().filter_map(|&aid| self.answer(aid))
    }

    /// Question an answer leads to, if any
    pub fn child_of(&self, answer: &AnswerNode) -> Option<&QuestionNode> {
        answer.child.and_then(|id| self.question(id))
    }

    /// Outgoing links of a node, in insertion order
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, EdgeKind)> + '_ {
        let mut out: Vec<_> = self
            .graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .map(|e| (e.id(), e.target(), *e.weight()))
            .collect();
        // petgraph yields the most recent edge first
        out.sort_by_key(|(edge, _, _)| *edge);
        out.into_iter().map(|(_, target, kind)| (target, kind))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The raw arena, for graph algorithms
    pub fn inner(&self) -> &DiGraph<Node, EdgeKind> {
        &self.graph
    }

    pub fn summary(&self) -> GraphSummary {
        let mut summary = GraphSummary::default();
        for node in self.graph.node_weights() {
            match node {
                Node::Question(_) => summary.questions += 1,
                Node::Answer(_) => summary.answers += 1,
                Node::Result(r) => match r.kind() {
                    ResultKind::Document => summary.documents += 1,
                    ResultKind::Rejection => summary.rejections += 1,
                },
            }
        }
        for kind in self.graph.edge_weights() {
            match kind {
                EdgeKind::LeadsTo => summary.child_links += 1,
                EdgeKind::Triggers => summary.result_links += 1,
                EdgeKind::Offers => {}
            }
        }
        summary
    }
}
