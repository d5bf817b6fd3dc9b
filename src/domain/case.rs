//! Case aggregation: merges paths that produce the same set of results.
//!
//! A case is identified by its sorted result footprint, which is the only lookup key for the
//! whole aggregation. The multipath footprint (the footprints of every contributing path) is a
//! derived value used for display and for ordering the final collection; it is recomputed when a
//! path joins a case and never used as a key.

use crate::domain::graph::QuestionnaireGraph;
use crate::domain::node::{ResultKey, ResultKind, ResultNode};
use crate::domain::path::{Footprint, Path, PathSet, write_footprint};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

/// Sorted, duplicate-free tuple of result keys
pub type CaseFootprint = Vec<ResultKey>;

/// Footprints of every path contributing to a case, in contribution order
pub type MultipathFootprint = Vec<Footprint>;

/// A deduplicated outcome
#[derive(Debug, Clone)]
pub struct Case<'g> {
    footprint: CaseFootprint,
    results: Vec<&'g ResultNode>,
    paths: Vec<Path<'g>>,
    multipath: MultipathFootprint,
}

impl<'g> Case<'g> {
    fn new(footprint: CaseFootprint, results: Vec<&'g ResultNode>, path: Path<'g>) -> Self {
        let mut case = Self {
            footprint,
            results,
            paths: Vec::new(),
            multipath: Vec::new(),
        };
        case.add_path(path);
        case
    }

    fn add_path(&mut self, path: Path<'g>) {
        self.paths.push(path);
        self.multipath = self.paths.iter().map(|p| p.footprint().clone()).collect();
    }

    pub fn footprint(&self) -> &CaseFootprint {
        &self.footprint
    }

    /// Distinct results, in the order they were first reached
    pub fn results(&self) -> &[&'g ResultNode] {
        &self.results
    }

    pub fn paths(&self) -> &[Path<'g>] {
        &self.paths
    }

    pub fn multipath_footprint(&self) -> &MultipathFootprint {
        &self.multipath
    }

    pub fn is_rejection_case(&self) -> bool {
        self.footprint
            .iter()
            .any(|key| key.kind == ResultKind::Rejection)
    }

    /// Result texts joined by commas
    pub fn text(&self) -> String {
        self.results
            .iter()
            .map(|r| r.text())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Case<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, footprint) in self.multipath.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            write_footprint(f, footprint)?;
            f.write_str("]")?;
        }
        write!(f, ": {}", self.text())
    }
}

/// Cases ordered by multipath footprint, ascending
#[derive(Debug, Clone, Default)]
pub struct CaseCollection<'g> {
    cases: Vec<Case<'g>>,
}

impl<'g> CaseCollection<'g> {
    pub fn iter(&self) -> std::slice::Iter<'_, Case<'g>> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn find(&self, footprint: &[ResultKey]) -> Option<&Case<'g>> {
        self.cases
            .iter()
            .find(|c| c.footprint.as_slice() == footprint)
    }

    pub fn path_count(&self) -> usize {
        self.cases.iter().map(|c| c.paths.len()).sum()
    }
}

impl<'a, 'g> IntoIterator for &'a CaseCollection<'g> {
    type Item = &'a Case<'g>;
    type IntoIter = std::slice::Iter<'a, Case<'g>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

/// Case Aggregator - canonicalizes paths into deduplicated cases
#[derive(Debug, Default)]
pub struct CaseAggregator;

impl CaseAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate<'g>(
        &self,
        graph: &'g QuestionnaireGraph,
        paths: PathSet<'g>,
    ) -> CaseCollection<'g> {
        let mut index: HashMap<CaseFootprint, usize> = HashMap::new();
        let mut cases: Vec<Case<'g>> = Vec::new();

        for path in paths {
            let (footprint, reached) = case_footprint(&path);
            match index.get(&footprint) {
                Some(&pos) => cases[pos].add_path(path),
                None => {
                    let results = reached
                        .into_iter()
                        .filter_map(|key| graph.result(key))
                        .collect();
                    index.insert(footprint.clone(), cases.len());
                    cases.push(Case::new(footprint, results, path));
                }
            }
        }

        cases.sort_by(|a, b| a.multipath.cmp(&b.multipath));
        debug!(cases = cases.len(), "cases aggregated");
        CaseCollection { cases }
    }
}

/// Sorted footprint of the results a path reaches, plus the distinct results in first-seen order
pub fn case_footprint(path: &Path<'_>) -> (CaseFootprint, Vec<ResultKey>) {
    let mut seen = HashSet::new();
    let reached: Vec<ResultKey> = path.results().filter(|key| seen.insert(*key)).collect();
    let mut footprint = reached.clone();
    footprint.sort();
    (footprint, reached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::policy::{CollapseRejections, TrimRejections, test_graph};
    use crate::domain::enumerator::PathEnumerator;
    use crate::domain::node::AnswerNode;
    use crate::domain::policy::RejectionPolicy;

    #[test]
    fn test_footprint_is_order_independent() {
        let mut a = AnswerNode::new(0, "a".into(), "a".into(), 0);
        a.results = vec![ResultKey::document(3)];
        let mut b = AnswerNode::new(1, "b".into(), "b".into(), 0);
        b.results = vec![ResultKey::document(1), ResultKey::document(3)];

        let (forward, reached) = case_footprint(&Path::new(vec![&a, &b]));
        let (backward, _) = case_footprint(&Path::new(vec![&b, &a]));
        assert_eq!(forward, vec![ResultKey::document(1), ResultKey::document(3)]);
        assert_eq!(forward, backward);
        assert_eq!(reached, vec![ResultKey::document(3), ResultKey::document(1)]);
    }

    #[test]
    fn test_trimmed_paths_merge_by_result_set() {
        let graph = test_graph::graph();
        let paths = PathEnumerator::new().enumerate(&graph).unwrap();
        let cases = CaseAggregator::new().aggregate(&graph, TrimRejections.apply(paths));

        assert_eq!(cases.len(), 2);
        assert_eq!(cases.path_count(), 4);
        let passport = cases.find(&[ResultKey::document(1)]).unwrap();
        assert_eq!(
            passport.multipath_footprint(),
            &vec![vec![0, 3], vec![1, 3]]
        );
        assert_eq!(passport.text(), "Passport");
        assert_eq!(passport.to_string(), "[0 -> 3], [1 -> 3]: Passport");
        assert!(!passport.is_rejection_case());
    }

    #[test]
    fn test_collapsed_rejections_become_one_case_each() {
        let graph = test_graph::graph();
        let paths = PathEnumerator::new().enumerate(&graph).unwrap();
        let cases = CaseAggregator::new().aggregate(&graph, CollapseRejections.apply(paths));

        let rejection_cases: Vec<_> = cases.iter().filter(|c| c.is_rejection_case()).collect();
        assert_eq!(rejection_cases.len(), 2);
        assert!(rejection_cases.iter().all(|c| c.paths().len() == 1));

        // Sorted by multipath footprint
        let order: Vec<_> = cases
            .iter()
            .map(|c| c.multipath_footprint().clone())
            .collect();
        assert_eq!(
            order,
            vec![
                vec![vec![0, 3], vec![1, 3]],
                vec![vec![0, 4], vec![1, 4]],
                vec![vec![2]],
                vec![vec![5]],
            ]
        );
    }

    #[test]
    fn test_path_without_results_forms_empty_case() {
        let a = AnswerNode::new(0, "a".into(), "a".into(), 0);
        let graph = QuestionnaireGraph::default();
        let paths: PathSet = [Path::new(vec![&a])].into_iter().collect();
        let cases = CaseAggregator::new().aggregate(&graph, paths);
        assert_eq!(cases.len(), 1);
        let case = cases.iter().next().unwrap();
        assert!(case.footprint().is_empty());
        assert_eq!(case.text(), "");
    }
}
