//! Rejection handling policies
//!
//! Each policy consumes the enumerated path set and returns the set that case aggregation sees.

pub mod collapse;
pub mod trim;

pub use collapse::CollapseRejections;
pub use trim::TrimRejections;

use crate::domain::policy::{RejectionMode, RejectionPolicy};

/// Policy implementing a rejection mode
pub fn policy_for(mode: RejectionMode) -> Box<dyn RejectionPolicy> {
    match mode {
        RejectionMode::Trim => Box::new(TrimRejections),
        RejectionMode::Collapse => Box::new(CollapseRejections),
    }
}
