//! Line-oriented CSS selector scoping.
//!
//! Rewrites the selectors of a stylesheet so every rule only applies inside a
//! wrapper element, e.g. `.card { }` becomes `.dashboard .card { }`.

pub mod error;
pub mod prefix;
pub mod scope;
pub mod scope_file;

pub use error::{Result, ScopeError};
pub use prefix::ScopePrefix;
pub use scope::{transform, transform_with_report, ScopeReport};
pub use scope_file::{scope_file, ScopeOptions, ScopeOutcome};
