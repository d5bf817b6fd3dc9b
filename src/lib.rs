//! case-footprint library: questionnaire graph linking, path enumeration and case aggregation.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
