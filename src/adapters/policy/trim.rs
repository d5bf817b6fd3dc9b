use crate::domain::path::PathSet;
use crate::domain::policy::{RejectionMode, RejectionPolicy};

/// Trim policy
/// Rejection branches contribute no outcome at all
#[derive(Debug, Default, Clone, Copy)]
pub struct TrimRejections;

impl RejectionPolicy for TrimRejections {
    fn apply<'g>(&self, paths: PathSet<'g>) -> PathSet<'g> {
        paths
            .into_iter()
            .filter(|path| !path.ends_in_rejection())
            .collect()
    }

    fn mode(&self) -> RejectionMode {
        RejectionMode::Trim
    }
}
