//! storystacks - Personal media and reading log
//!
//! Keeps a list of finished movies, TV shows and books as a JSON array in a
//! key-value store and renders it filtered by category, year and free text,
//! pinned entries first.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::StacksError;
