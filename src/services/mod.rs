//! Service modules wrapping retrieval around the analysis core.
//!
//! These are kept apart from the Genius client so the interactive and
//! concurrent flows can be tested against in-memory sources.

pub mod corpus;
pub mod disambiguation;
