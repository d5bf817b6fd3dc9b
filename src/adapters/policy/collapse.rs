use crate::domain::path::{Path, PathSet};
use crate::domain::policy::{RejectionMode, RejectionPolicy};
use std::collections::HashSet;

/// Collapse policy
///
/// Every rejection-terminated path is replaced by a single-answer path holding only its terminal
/// answer. Deduplication is keyed by that answer's id, so a rejection reached through several
/// branches is represented once. Collapsed paths follow the surviving ones, in order of first
/// appearance.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapseRejections;

impl RejectionPolicy for CollapseRejections {
    fn apply<'g>(&self, paths: PathSet<'g>) -> PathSet<'g> {
        let mut kept = Vec::new();
        let mut collapsed = Vec::new();
        let mut terminals = HashSet::new();

        for path in paths {
            match path.terminal() {
                Some(terminal) if terminal.is_rejection_clause() => {
                    if terminals.insert(terminal.id) {
                        collapsed.push(Path::new(vec![terminal]));
                    }
                }
                _ => kept.push(path),
            }
        }

        kept.into_iter().chain(collapsed).collect()
    }

    fn mode(&self) -> RejectionMode {
        RejectionMode::Collapse
    }
}
