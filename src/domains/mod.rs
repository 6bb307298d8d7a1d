//! Subject domain system for taskforge.
//!
//! This module provides the closed set of domains a theme can belong to and
//! the keyword classifier that maps arbitrary text onto one of them.

mod classifier;
mod taxonomy;

pub use classifier::{classify, DOMAIN_KEYWORDS};
pub use taxonomy::Domain;
