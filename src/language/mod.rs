//! Language identities, detection and per-language style data

pub mod defaults;
pub mod id;
pub mod keywords;
pub mod registry;

// Public API re-exports
pub use defaults::{style_table, CategoryStyle};
pub use id::Language;
pub use keywords::keyword_sets;
pub use registry::{sniff_content, LanguageRegistry};
