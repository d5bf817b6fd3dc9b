use crate::domain::node::{AnswerId, AnswerNode, ResultKey};
use std::collections::HashSet;
use std::fmt;

/// Ordered tuple of answer ids composing a path
pub type Footprint = Vec<AnswerId>;

/// Ordered answer sequence from the root to a terminal answer.
///
/// Borrows answers from the immutable graph it was enumerated from. A path is never empty.
#[derive(Debug, Clone)]
pub struct Path<'g> {
    answers: Vec<&'g AnswerNode>,
    footprint: Footprint,
}

impl<'g> Path<'g> {
    pub(crate) fn new(answers: Vec<&'g AnswerNode>) -> Self {
        debug_assert!(!answers.is_empty(), "paths are never empty");
        let footprint = answers.iter().map(|a| a.id).collect();
        Self { answers, footprint }
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    pub fn answers(&self) -> &[&'g AnswerNode] {
        &self.answers
    }

    pub fn terminal(&self) -> Option<&'g AnswerNode> {
        self.answers.last().copied()
    }

    pub fn ends_in_rejection(&self) -> bool {
        self.terminal().is_some_and(|a| a.is_rejection_clause())
    }

    /// Results attached along the path, in path order. May contain repeats.
    pub fn results(&self) -> impl Iterator<Item = ResultKey> + '_ {
        self.answers.iter().flat_map(|a| a.results.iter().copied())
    }

    /// Human-readable form: answer short texts joined by arrows
    pub fn describe(&self) -> String {
        self.answers
            .iter()
            .map(|a| a.short.as_str())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_footprint(f, &self.footprint)
    }
}

pub(crate) fn write_footprint(f: &mut fmt::Formatter<'_>, footprint: &[AnswerId]) -> fmt::Result {
    for (i, aid) in footprint.iter().enumerate() {
        if i > 0 {
            f.write_str(" -> ")?;
        }
        write!(f, "{aid}")?;
    }
    Ok(())
}

/// Paths keyed by footprint, in insertion order
#[derive(Debug, Clone, Default)]
pub struct PathSet<'g> {
    paths: Vec<Path<'g>>,
    seen: HashSet<Footprint>,
}

impl<'g> PathSet<'g> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path unless one with the same footprint is already present.
    /// Returns whether the path was added.
    pub fn insert(&mut self, path: Path<'g>) -> bool {
        if !self.seen.insert(path.footprint.clone()) {
            return false;
        }
        self.paths.push(path);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path<'g>> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn footprints(&self) -> Vec<Footprint> {
        self.paths.iter().map(|p| p.footprint.clone()).collect()
    }
}

impl<'g> IntoIterator for PathSet<'g> {
    type Item = Path<'g>;
    type IntoIter = std::vec::IntoIter<Path<'g>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a, 'g> IntoIterator for &'a PathSet<'g> {
    type Item = &'a Path<'g>;
    type IntoIter = std::slice::Iter<'a, Path<'g>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl<'g> FromIterator<Path<'g>> for PathSet<'g> {
    fn from_iter<I: IntoIterator<Item = Path<'g>>>(iter: I) -> Self {
        let mut set = PathSet::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}
