/// The content store and its scaffold pass.
pub mod content;
/// Templated MDX document bodies.
pub mod document;

pub use content::{Census, ContentStore, ScaffoldError};
