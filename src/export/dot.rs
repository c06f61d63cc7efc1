//! Graphviz DOT export
//!
//! Output shape:
//!
//! ```text
//! digraph KnowledgeGraph {
//!   rankdir=LR;
//!   "ep_login" [label="Login\n(Endpoint)"];
//!   "vul_1" -> "ep_login" [label="located-at-endpoint"];
//! }
//! ```
//!
//! Nodes are written in insertion order, then relations in insertion order,
//! so the same store always renders to the same bytes.

use super::{ExportError, ExportResult};
use crate::graph::GraphStore;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// DOT rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    /// Name of the digraph block
    pub graph_name: String,
    /// Layout direction (`LR`, `TB`, ...); `None` omits the attribute
    pub rank_dir: Option<String>,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            graph_name: "KnowledgeGraph".to_string(),
            rank_dir: Some("LR".to_string()),
        }
    }
}

/// Render the store as a DOT document
pub fn render_dot(store: &GraphStore, options: &DotOptions) -> String {
    let mut output = format!("digraph {} {{\n", graph_id(&options.graph_name));

    if let Some(rank_dir) = &options.rank_dir {
        output.push_str(&format!("  rankdir={};\n", graph_id(rank_dir)));
    }

    for node in store.nodes() {
        output.push_str(&format!(
            "  \"{}\" [label=\"{}\\n({})\"];\n",
            escape(node.id().as_str()),
            escape(node.label()),
            escape(node.kind().as_str())
        ));
    }

    for relation in store.relations() {
        output.push_str(&format!(
            "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
            escape(relation.source.as_str()),
            escape(relation.target.as_str()),
            escape(relation.kind.as_str())
        ));
    }

    output.push_str("}\n");
    output
}

/// Write the DOT document to any writer
pub fn write_dot<W: Write>(store: &GraphStore, options: &DotOptions, writer: &mut W) -> ExportResult<()> {
    writer.write_all(render_dot(store, options).as_bytes())?;
    Ok(())
}

/// Export the store to a DOT file
///
/// The document is written to a temporary file next to `path` and renamed
/// onto it only once fully flushed. On failure the destination is left as it
/// was and the temporary file is removed.
pub fn export_to_dot(store: &GraphStore, path: impl AsRef<Path>, options: &DotOptions) -> ExportResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_dot(store, options, &mut writer)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    // Dropping the returned temp file deletes it before the error escapes
    tmp.persist(path).map_err(|e| ExportError::Persist(e.error))?;

    info!(
        "Exported {} nodes and {} relations to {:?}",
        store.node_count(),
        store.relation_count(),
        path
    );
    Ok(())
}

/// Escape a string for use inside a double-quoted DOT string
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

/// Bare DOT identifier when possible, quoted string otherwise
fn graph_id(s: &str) -> String {
    let mut chars = s.chars();
    let bare = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if bare {
        s.to_string()
    } else {
        format!("\"{}\"", escape(s))
    }
}
