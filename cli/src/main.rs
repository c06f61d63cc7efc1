//! Secgraph CLI: browse the security knowledge graph from a terminal
//!
//! Loads the demonstration dataset and answers questions through the
//! read-only query API, rendering results as a table, JSON or CSV.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use secgraph::graph::kinds::relation;
use secgraph::sample::build_sample_graph;
use secgraph::{export_to_dot, AppConfig, GraphStore, Node};
use serde_json::json;
use std::error::Error;
use std::path::PathBuf;

type CliResult = Result<(), Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "secgraph", version, about = "Secgraph knowledge graph CLI")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// One line typed into the interactive shell
#[derive(Parser)]
#[command(no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Vulnerabilities located at an endpoint
    Endpoint {
        /// Endpoint node id
        id: String,
    },
    /// Vulnerabilities affecting a parameter
    Parameter {
        /// Parameter node id
        id: String,
    },
    /// Types, impacts, attacks and tools of a vulnerability
    Vulnerability {
        /// Vulnerability node id
        id: String,
    },
    /// Impacts generated by a vulnerability or produced by an attack
    Impacts {
        /// Vulnerability or attack node id
        id: String,
    },
    /// Vulnerabilities exploited and impacts produced by an attack
    Attack {
        /// Attack node id
        id: String,
    },
    /// Nodes of a kind
    Kind {
        /// Node kind, e.g. Endpoint
        kind: String,
    },
    /// Targets of a node's outgoing relations
    Neighbors {
        /// Node id
        id: String,

        /// Only follow relations of this kind
        #[arg(long)]
        relation: Option<String>,
    },
    /// Node and relation counts
    Stats,
    /// Write the graph as a Graphviz DOT file
    Export {
        /// Destination (defaults to the configured output path)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Start an interactive shell
    Shell,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult {
    let config = AppConfig::load(cli.config.as_deref())?;
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level()?)
        .with_writer(std::io::stderr)
        .init();

    let graph = build_sample_graph()?;
    execute(&graph, &config, &cli.format, cli.command)
}

fn execute(graph: &GraphStore, config: &AppConfig, format: &OutputFormat, command: Commands) -> CliResult {
    match command {
        Commands::Endpoint { id } => {
            print_vulnerabilities(graph, &graph.vulnerabilities_of_endpoint(&id), format)
        }
        Commands::Parameter { id } => {
            print_vulnerabilities(graph, &graph.vulnerabilities_of_parameter(&id), format)
        }
        Commands::Vulnerability { id } => {
            let mut rows = Vec::new();
            rows.extend(tag(relation::IS_OF_TYPE, graph.types_of_vulnerability(&id)));
            rows.extend(tag(relation::GENERATES_IMPACT, graph.impacts_of_vulnerability(&id)));
            rows.extend(tag(relation::FOUND_WITH, graph.tools_that_found_vulnerability(&id)));
            rows.extend(tag(
                relation::EXPLOITS_VULNERABILITY,
                graph.attacks_exploiting_vulnerability(&id),
            ));
            print_related(&rows, format)
        }
        Commands::Impacts { id } => print_related(&impact_rows(graph, &id), format),
        Commands::Attack { id } => {
            let mut rows = Vec::new();
            rows.extend(tag(
                relation::EXPLOITS_VULNERABILITY,
                graph.vulnerabilities_exploited_by_attack(&id),
            ));
            rows.extend(tag(relation::PRODUCES_IMPACT, graph.impacts_of_attack(&id)));
            print_related(&rows, format)
        }
        Commands::Kind { kind } => print_nodes(&graph.find_nodes_by_kind(&kind), format),
        Commands::Neighbors { id, relation } => {
            print_nodes(&graph.neighbors(&id, relation.as_deref()), format)
        }
        Commands::Stats => print_stats(graph, format),
        Commands::Export { output } => {
            let path = output.unwrap_or_else(|| config.output_path.clone());
            export_to_dot(graph, &path, &config.dot)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        Commands::Shell => run_shell(graph, config, format),
    }
}

fn run_shell(graph: &GraphStore, config: &AppConfig, format: &OutputFormat) -> CliResult {
    println!("Secgraph Interactive Shell");
    println!("Type a command (e.g. `endpoint ep_login`), :help for commands, :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("secgraph> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            ":quit" | ":exit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  endpoint <id>        Vulnerabilities at an endpoint");
                println!("  parameter <id>       Vulnerabilities affecting a parameter");
                println!("  vulnerability <id>   Types, impacts, tools and attacks");
                println!("  impacts <id>         Impacts of a vulnerability or attack");
                println!("  attack <id>          Exploited vulnerabilities and impacts");
                println!("  kind <kind>          Nodes of a kind");
                println!("  neighbors <id> [--relation <kind>]");
                println!("  stats                Node and relation counts");
                println!("  export [--output <path>]");
                println!("  :quit                Exit shell");
            }
            input => match ShellLine::try_parse_from(input.split_whitespace()) {
                Ok(ShellLine { command: Commands::Shell }) => {
                    println!("Already in the shell");
                }
                Ok(ShellLine { command }) => {
                    if let Err(e) = execute(graph, config, format, command) {
                        eprintln!("Error: {}", e);
                    }
                }
                Err(e) => eprintln!("{}", e),
            },
        }
    }

    println!("Bye!");
    Ok(())
}

/// Impacts reached from `id` through either impact relation
fn impact_rows<'a>(graph: &'a GraphStore, id: &str) -> Vec<(&'a str, &'a Node)> {
    tag(relation::GENERATES_IMPACT, graph.impacts_of_vulnerability(id))
        .chain(tag(relation::PRODUCES_IMPACT, graph.impacts_of_attack(id)))
        .collect()
}

fn tag<'a>(relation: &'a str, nodes: Vec<&'a Node>) -> impl Iterator<Item = (&'a str, &'a Node)> {
    nodes.into_iter().map(move |n| (relation, n))
}

fn print_nodes(nodes: &[&Node], format: &OutputFormat) -> CliResult {
    let rows: Vec<Vec<String>> = nodes
        .iter()
        .map(|n| {
            vec![
                n.id().to_string(),
                n.kind().to_string(),
                n.label().to_string(),
                format_properties(n),
            ]
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(nodes)?),
        _ => print_rows(&["id", "kind", "label", "properties"], &rows, format),
    }
    Ok(())
}

fn print_vulnerabilities(graph: &GraphStore, vulns: &[&Node], format: &OutputFormat) -> CliResult {
    let entries: Vec<(&Node, String, String)> = vulns
        .iter()
        .map(|v| {
            let id = v.id().as_str();
            (
                *v,
                secgraph::report::format_label_list(&graph.types_of_vulnerability(id)),
                secgraph::report::format_label_list(&graph.impacts_of_vulnerability(id)),
            )
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let value: Vec<serde_json::Value> = entries
                .iter()
                .map(|(v, types, impacts)| {
                    json!({
                        "id": v.id(),
                        "label": v.label(),
                        "type": types,
                        "impact": impacts,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => {
            let rows: Vec<Vec<String>> = entries
                .iter()
                .map(|(v, types, impacts)| {
                    vec![v.id().to_string(), v.label().to_string(), types.clone(), impacts.clone()]
                })
                .collect();
            print_rows(&["id", "label", "type", "impact"], &rows, format);
        }
    }
    Ok(())
}

fn print_related(rows: &[(&str, &Node)], format: &OutputFormat) -> CliResult {
    match format {
        OutputFormat::Json => {
            let value: Vec<serde_json::Value> = rows
                .iter()
                .map(|(rel, n)| json!({ "relation": rel, "node": n }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => {
            let rows: Vec<Vec<String>> = rows
                .iter()
                .map(|(rel, n)| {
                    vec![
                        rel.to_string(),
                        n.id().to_string(),
                        n.kind().to_string(),
                        n.label().to_string(),
                    ]
                })
                .collect();
            print_rows(&["relation", "id", "kind", "label"], &rows, format);
        }
    }
    Ok(())
}

fn print_stats(graph: &GraphStore, format: &OutputFormat) -> CliResult {
    let stats = graph.statistics();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => {
            let mut rows = vec![
                vec!["nodes".to_string(), "*".to_string(), stats.node_count.to_string()],
                vec!["relations".to_string(), "*".to_string(), stats.relation_count.to_string()],
            ];
            for (kind, count) in &stats.nodes_by_kind {
                rows.push(vec!["nodes".to_string(), kind.clone(), count.to_string()]);
            }
            for (kind, count) in &stats.relations_by_kind {
                rows.push(vec!["relations".to_string(), kind.clone(), count.to_string()]);
            }
            print_rows(&["scope", "kind", "count"], &rows, format);
        }
    }
    Ok(())
}

fn print_rows(header: &[&str], rows: &[Vec<String>], format: &OutputFormat) {
    if let OutputFormat::Csv = format {
        println!("{}", header.join(","));
        for row in rows {
            let cells: Vec<String> = row.iter().map(|c| format_csv_value(c)).collect();
            println!("{}", cells.join(","));
        }
        return;
    }

    if rows.is_empty() {
        println!("(no results)");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    for row in rows {
        table.add_row(row.clone());
    }

    println!("{}", table);
    println!("{} row(s)", rows.len());
}

fn format_properties(node: &Node) -> String {
    node.properties()
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
