//! Clinical condition content scaffolding.
//!
//! Conditions are slug-named directories holding a structured metadata
//! record and a templated MDX document, generated from a fixed taxonomy.

pub mod domain;
pub use domain::{ConditionMetadata, Config, Entry, Slug};

pub mod report;
pub use report::{NullReporter, Reporter, Summary};

/// Filesystem storage and scaffolding for condition content.
pub mod storage;
pub use storage::{Census, ContentStore, ScaffoldError};

pub mod taxonomy;
pub use taxonomy::{Category, Taxonomy};
