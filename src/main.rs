use anyhow::Context;
use secgraph::report::{attack_report, endpoint_vulnerability_report, format_label_list};
use secgraph::sample::build_sample_graph;
use secgraph::{export_to_dot, AppConfig};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level()?)
        .init();

    println!("Secgraph v{}", secgraph::version());
    println!("==========================================");
    println!();

    let graph = build_sample_graph().context("building sample graph")?;
    info!(
        "Sample graph ready: {} nodes, {} relations",
        graph.node_count(),
        graph.relation_count()
    );

    print!("{}", endpoint_vulnerability_report(&graph, "ep_login", "login"));
    println!();
    print!("{}", endpoint_vulnerability_report(&graph, "ep_product", "product"));
    println!();

    println!("Impacts of the reflected XSS in search");
    let impacts = graph.impacts_of_vulnerability("vul_xss_product_search");
    println!("   {}", format_label_list(&impacts));
    println!();

    for attack in graph.find_nodes_by_kind(secgraph::graph::kinds::node::ATTACK) {
        print!("{}", attack_report(&graph, attack.id().as_str()));
    }

    export_to_dot(&graph, &config.output_path, &config.dot)
        .with_context(|| format!("exporting to {}", config.output_path.display()))?;
    println!();
    println!("✓ Wrote {}", config.output_path.display());

    Ok(())
}
