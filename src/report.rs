//! Plain-text reports built on the read-only query API

use crate::graph::{GraphStore, Node};

/// Placeholder for an empty label list
pub const NOT_MAPPED: &str = "not mapped";

/// Comma-separated labels, or [`NOT_MAPPED`] when there are none
pub fn format_label_list(nodes: &[&Node]) -> String {
    if nodes.is_empty() {
        return NOT_MAPPED.to_string();
    }
    nodes.iter().map(|n| n.label()).collect::<Vec<_>>().join(", ")
}

/// Vulnerabilities at an endpoint with their types and impacts
pub fn endpoint_vulnerability_report(store: &GraphStore, endpoint_id: &str, friendly_name: &str) -> String {
    let mut out = format!("Vulnerabilities at endpoint {}\n\n", friendly_name);

    let vulnerabilities = store.vulnerabilities_of_endpoint(endpoint_id);
    if vulnerabilities.is_empty() {
        out.push_str("No vulnerabilities recorded for this endpoint\n\n");
        return out;
    }

    for vul in vulnerabilities {
        let types = store.types_of_vulnerability(vul.id().as_str());
        let impacts = store.impacts_of_vulnerability(vul.id().as_str());

        out.push_str(&format!(
            "• {}\n   id: {}\n   type: {}\n   impact: {}\n\n",
            vul.label(),
            vul.id(),
            format_label_list(&types),
            format_label_list(&impacts)
        ));
    }
    out
}

/// Vulnerabilities an attack exploits and the impacts it produces
pub fn attack_report(store: &GraphStore, attack_id: &str) -> String {
    let title = store.get_node(attack_id).map_or(attack_id, |n| n.label());
    format!(
        "Attack {}\n   exploits: {}\n   impact: {}\n",
        title,
        format_label_list(&store.vulnerabilities_exploited_by_attack(attack_id)),
        format_label_list(&store.impacts_of_attack(attack_id))
    )
}
