//! One-way export of the knowledge graph
//!
//! Supports:
//! - Graphviz DOT (.dot)

pub mod dot;

use thiserror::Error;

pub use dot::{export_to_dot, render_dot, write_dot, DotOptions};

/// Export errors
///
/// The store is never touched by an export, so none of these leave it in a
/// different state.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error while writing the rendered graph
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The temporary file could not be moved onto the destination; it has
    /// already been removed
    #[error("Failed to finalize export: {0}")]
    Persist(std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
