use crate::domain::case::Case;
use crate::domain::check::Finding;
use crate::domain::graph::GraphSummary;
use crate::domain::node::AnswerId;
use crate::domain::path::Path;
use crate::domain::policy::RejectionMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub origin: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub questions: usize,
    pub answers: usize,
    pub documents: usize,
    pub rejections: usize,
    pub child_links: usize,
    pub result_links: usize,
}

impl SummaryResponse {
    pub fn new(origin: String, node_count: usize, edge_count: usize, s: GraphSummary) -> Self {
        Self {
            origin,
            node_count,
            edge_count,
            questions: s.questions,
            answers: s.answers,
            documents: s.documents,
            rejections: s.rejections,
            child_links: s.child_links,
            result_links: s.result_links,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
    pub footprint: Vec<AnswerId>,
    /// Footprint rendered as `0 -> 3 -> 4`
    pub display: String,
    /// Answer short texts joined by arrows
    pub description: String,
    pub ends_in_rejection: bool,
}

impl From<&Path<'_>> for PathRecord {
    fn from(path: &Path<'_>) -> Self {
        Self {
            footprint: path.footprint().clone(),
            display: path.to_string(),
            description: path.describe(),
            ends_in_rejection: path.ends_in_rejection(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsResponse {
    pub path_count: usize,
    pub paths: Vec<PathRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Sorted result ids; rejections carry an `r` suffix (`3r`)
    pub footprint: Vec<String>,
    pub text: String,
    pub is_rejection: bool,
    pub paths: Vec<PathRecord>,
}

impl From<&Case<'_>> for CaseRecord {
    fn from(case: &Case<'_>) -> Self {
        Self {
            footprint: case.footprint().iter().map(|k| k.to_string()).collect(),
            text: case.text(),
            is_rejection: case.is_rejection_case(),
            paths: case.paths().iter().map(PathRecord::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasesResponse {
    pub mode: RejectionMode,
    /// Paths produced by enumeration, before the rejection policy
    pub enumerated_paths: usize,
    /// Paths that reached aggregation
    pub aggregated_paths: usize,
    pub cases: Vec<CaseRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub origin: String,
    pub findings: Vec<String>,
    pub clean: bool,
}

impl CheckResponse {
    pub fn new(origin: String, findings: &[Finding]) -> Self {
        Self {
            origin,
            findings: findings.iter().map(|f| f.to_string()).collect(),
            clean: findings.is_empty(),
        }
    }
}
