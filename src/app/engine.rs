use crate::adapters::policy::policy_for;
use crate::adapters::schema::FileSchemaSource;
use crate::app::dto::*;
use crate::domain::builder::GraphBuilder;
use crate::domain::case::{CaseAggregator, CaseCollection};
use crate::domain::check::{StructureReport, check_structure};
use crate::domain::enumerator::PathEnumerator;
use crate::domain::error::AuditError;
use crate::domain::graph::QuestionnaireGraph;
use crate::domain::node::Node;
use crate::domain::path::PathSet;
use crate::domain::policy::RejectionMode;
use crate::domain::ports::SchemaSource;
use crate::domain::schema::SchemaInput;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::{info, warn};

/// Drives the audit pipeline over one linked questionnaire.
///
/// Stages run strictly forward: linked graph → enumerated paths → policy-filtered paths →
/// aggregated cases. Each stage borrows the immutable graph and produces new values; a failure at
/// any stage aborts the run with no partial output.
pub struct AuditEngine {
    origin: String,
    graph: QuestionnaireGraph,
}

impl AuditEngine {
    /// Construct an engine from already-parsed schema records.
    pub fn from_schema(origin: impl Into<String>, schema: SchemaInput) -> Result<Self, AuditError> {
        let origin = origin.into();
        let graph = GraphBuilder::new().build(schema)?;
        let summary = graph.summary();
        info!(
            origin = %origin,
            questions = summary.questions,
            answers = summary.answers,
            results = summary.documents + summary.rejections,
            "questionnaire linked"
        );
        Ok(Self { origin, graph })
    }

    pub fn load(source: &dyn SchemaSource) -> Result<Self> {
        let schema = source.load()?;
        Self::from_schema(source.describe(), schema)
            .with_context(|| format!("Failed to link questionnaire {}", source.describe()))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        Self::load(&FileSchemaSource::new(path))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn enumerate(&self) -> Result<PathSet<'_>, AuditError> {
        let paths = PathEnumerator::new().enumerate(&self.graph)?;
        info!(paths = paths.len(), "paths enumerated");
        Ok(paths)
    }

    /// Applies the rejection policy named by `mode` ("trim" or "collapse").
    pub fn apply_policy<'g>(
        &'g self,
        paths: PathSet<'g>,
        mode: &str,
    ) -> Result<PathSet<'g>, AuditError> {
        let mode: RejectionMode = mode.parse()?;
        let policy = policy_for(mode);
        let before = paths.len();
        let paths = policy.apply(paths);
        info!(mode = %policy.mode(), before, after = paths.len(), "rejection policy applied");
        Ok(paths)
    }

    pub fn aggregate<'g>(&'g self, paths: PathSet<'g>) -> CaseCollection<'g> {
        let cases = CaseAggregator::new().aggregate(&self.graph, paths);
        info!(cases = cases.len(), "cases aggregated");
        cases
    }

    /// Full pipeline: enumerate, apply the policy, aggregate.
    pub fn cases(&self, mode: &str) -> Result<CaseCollection<'_>, AuditError> {
        let paths = self.enumerate()?;
        let paths = self.apply_policy(paths, mode)?;
        Ok(self.aggregate(paths))
    }

    pub fn check(&self) -> StructureReport {
        let report = check_structure(&self.graph);
        for finding in &report.findings {
            warn!(origin = %self.origin, "{finding}");
        }
        report
    }

    pub fn summary(&self) -> SummaryResponse {
        SummaryResponse::new(
            self.origin.clone(),
            self.graph.node_count(),
            self.graph.edge_count(),
            self.graph.summary(),
        )
    }

    pub fn paths_report(&self) -> Result<PathsResponse, AuditError> {
        let paths = self.enumerate()?;
        Ok(PathsResponse {
            path_count: paths.len(),
            paths: paths.iter().map(PathRecord::from).collect(),
        })
    }

    pub fn cases_report(&self, mode: &str) -> Result<CasesResponse, AuditError> {
        let paths = self.enumerate()?;
        let enumerated_paths = paths.len();
        let parsed: RejectionMode = mode.parse()?;
        let paths = self.apply_policy(paths, parsed.as_str())?;
        let aggregated_paths = paths.len();
        let cases = self.aggregate(paths);
        Ok(CasesResponse {
            mode: parsed,
            enumerated_paths,
            aggregated_paths,
            cases: cases.iter().map(CaseRecord::from).collect(),
        })
    }

    pub fn check_report(&self) -> CheckResponse {
        CheckResponse::new(self.origin.clone(), &self.check().findings)
    }

    /// The linked graph as JSON: questions with their answers, links and results.
    pub fn debug_graph(&self) -> serde_json::Value {
        let graph = &self.graph;

        let questions: Vec<_> = graph
            .questions()
            .map(|q| {
                let answers: Vec<_> = graph
                    .answers_of(q)
                    .map(|a| {
                        serde_json::json!({
                            "id": a.id,
                            "text": a.text,
                            "short": a.short,
                            "child": a.child,
                            "results": a.results.iter().map(|k| k.to_string()).collect::<Vec<_>>(),
                            "is_rejection_clause": a.is_rejection_clause(),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "id": q.id,
                    "text": q.text,
                    "answers": answers,
                })
            })
            .collect();

        let results: Vec<_> = graph
            .results()
            .map(|r| {
                serde_json::json!({
                    "id": r.key().to_string(),
                    "kind": r.kind(),
                    "text": r.text(),
                    "linked_answers": r.answers(),
                })
            })
            .collect();

        let mut edges = Vec::new();
        for idx in graph.inner().node_indices() {
            for (target, kind) in graph.neighbors(idx) {
                edges.push(serde_json::json!({
                    "source": node_label(graph.node(idx)),
                    "target": node_label(graph.node(target)),
                    "kind": format!("{:?}", kind),
                }));
            }
        }

        serde_json::json!({
            "origin": self.origin,
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "questions": questions,
            "results": results,
            "edges": edges,
        })
    }
}

fn node_label(node: &Node) -> String {
    match node {
        Node::Question(q) => format!("{} {}", node.label(), q.id),
        Node::Answer(a) => format!("{} {}", node.label(), a.id),
        Node::Result(r) => format!("{} {}", node.label(), r.key()),
    }
}
