use secgraph::export::{export_to_dot, render_dot, DotOptions, ExportError};
use secgraph::graph::GraphStore;
use secgraph::sample::build_sample_graph;
use tempfile::TempDir;

#[test]
fn test_export_writes_dot_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.dot");
    let store = build_sample_graph().unwrap();

    export_to_dot(&store, &path, &DotOptions::default()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("digraph KnowledgeGraph {\n  rankdir=LR;\n"));
    assert!(content.contains("  \"ep_login\" [label=\"Login\\n(Endpoint)\"];\n"));
    assert!(content.contains(
        "  \"vul_xss_product_search\" -> \"imp_session_theft\" [label=\"generates-impact\"];\n"
    ));
    assert!(content.ends_with("}\n"));

    let vertex_lines = content.lines().filter(|l| l.contains("[label=") && !l.contains("->")).count();
    let edge_lines = content.lines().filter(|l| l.contains(" -> ")).count();
    assert_eq!(vertex_lines, store.node_count());
    assert_eq!(edge_lines, store.relation_count());
}

#[test]
fn test_export_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.dot");
    let second = temp_dir.path().join("second.dot");
    let store = build_sample_graph().unwrap();
    let options = DotOptions::default();

    export_to_dot(&store, &first, &options).unwrap();
    export_to_dot(&store, &second, &options).unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
    assert_eq!(render_dot(&store, &options), render_dot(&store, &options));
}

#[test]
fn test_export_replaces_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.dot");
    std::fs::write(&path, "stale").unwrap();

    export_to_dot(&GraphStore::new(), &path, &DotOptions::default()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "digraph KnowledgeGraph {\n  rankdir=LR;\n}\n");
}

#[test]
fn test_export_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("graph.dot");
    let store = build_sample_graph().unwrap();

    let result = export_to_dot(&store, &path, &DotOptions::default());
    assert!(matches!(result, Err(ExportError::Io(_))));
    assert!(!path.exists());
    assert_eq!(store.node_count(), 24);
}

#[test]
fn test_failed_finalize_leaves_no_partial_file() {
    let temp_dir = TempDir::new().unwrap();
    // A non-empty directory sits where the file should go, so the rename fails
    let blocked = temp_dir.path().join("graph.dot");
    std::fs::create_dir(&blocked).unwrap();
    std::fs::write(blocked.join("keep"), "x").unwrap();

    // The error is still held while the directory is inspected
    let result = export_to_dot(&build_sample_graph().unwrap(), &blocked, &DotOptions::default());
    let err = result.unwrap_err();
    assert!(matches!(err, ExportError::Persist(_)));
    assert!(err.to_string().starts_with("Failed to finalize export: "));

    let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("graph.dot")]);
    assert!(blocked.is_dir());
    drop(err);
}
