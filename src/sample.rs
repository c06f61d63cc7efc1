//! Demonstration dataset: a small online shop and its findings
//!
//! Built only through [`GraphStore::add_node`] and [`GraphStore::add_relation`],
//! so any other loader can replace it.

use crate::graph::kinds::{node as kind, relation as rel};
use crate::graph::{GraphResult, GraphStore, Node};

/// Build the reference e-commerce graph
pub fn build_sample_graph() -> GraphResult<GraphStore> {
    let mut g = GraphStore::new();

    // Application
    g.add_node(Node::new("app_shop", kind::APPLICATION, "OnlineShop"))?;

    // Endpoints
    g.add_node(Node::new("ep_login", kind::ENDPOINT, "Login").with_property("path", "/login"))?;
    g.add_node(Node::new("ep_product", kind::ENDPOINT, "Product").with_property("path", "/product"))?;
    g.add_node(Node::new("ep_cart", kind::ENDPOINT, "Cart").with_property("path", "/cart"))?;
    g.add_node(Node::new("ep_checkout", kind::ENDPOINT, "Checkout").with_property("path", "/checkout"))?;

    // Parameters
    g.add_node(Node::new("param_username", kind::PARAMETER, "username"))?;
    g.add_node(Node::new("param_password", kind::PARAMETER, "password"))?;
    g.add_node(Node::new("param_search", kind::PARAMETER, "search"))?;
    g.add_node(Node::new("param_product_id", kind::PARAMETER, "product_id"))?;
    g.add_node(Node::new("param_quantity", kind::PARAMETER, "quantity"))?;

    // Vulnerability types
    g.add_node(Node::new("vt_sqli", kind::VULNERABILITY_TYPE, "SQL Injection"))?;
    g.add_node(Node::new("vt_reflected_xss", kind::VULNERABILITY_TYPE, "Reflected XSS"))?;
    g.add_node(Node::new("vt_idor", kind::VULNERABILITY_TYPE, "IDOR"))?;

    // Vulnerabilities
    g.add_node(Node::new("vul_sqli_login_username", kind::VULNERABILITY, "SQLi in login username"))?;
    g.add_node(Node::new("vul_sqli_product_search", kind::VULNERABILITY, "SQLi in search parameter"))?;
    g.add_node(Node::new("vul_xss_product_search", kind::VULNERABILITY, "Reflected XSS in search"))?;
    g.add_node(Node::new("vul_idor_cart_product_id", kind::VULNERABILITY, "IDOR in cart"))?;

    // Impacts
    g.add_node(Node::new("imp_customer_data_exposure", kind::IMPACT, "Customer data exposure"))?;
    g.add_node(Node::new("imp_session_theft", kind::IMPACT, "Session theft"))?;
    g.add_node(Node::new("imp_order_tampering", kind::IMPACT, "Order tampering"))?;

    // Tools
    g.add_node(Node::new("tool_burp", kind::TOOL, "Burp Suite"))?;
    g.add_node(Node::new("tool_nmap", kind::TOOL, "Nmap"))?;

    // Composite attacks
    g.add_node(Node::new("atk_login_bypass", kind::ATTACK, "Login bypass"))?;
    g.add_node(Node::new("atk_customer_session_theft", kind::ATTACK, "Customer session theft"))?;

    // Application -> endpoints
    for ep in ["ep_login", "ep_product", "ep_cart", "ep_checkout"] {
        g.add_relation("app_shop", ep, rel::HAS_ENDPOINT)?;
    }

    // Endpoint -> parameters
    g.add_relation("ep_login", "param_username", rel::HAS_PARAMETER)?;
    g.add_relation("ep_login", "param_password", rel::HAS_PARAMETER)?;
    g.add_relation("ep_product", "param_search", rel::HAS_PARAMETER)?;
    g.add_relation("ep_product", "param_product_id", rel::HAS_PARAMETER)?;
    g.add_relation("ep_cart", "param_product_id", rel::HAS_PARAMETER)?;
    g.add_relation("ep_cart", "param_quantity", rel::HAS_PARAMETER)?;

    // Vulnerability context
    let findings = [
        ("vul_sqli_login_username", "ep_login", "param_username", "vt_sqli", "imp_customer_data_exposure"),
        ("vul_sqli_product_search", "ep_product", "param_search", "vt_sqli", "imp_customer_data_exposure"),
        ("vul_xss_product_search", "ep_product", "param_search", "vt_reflected_xss", "imp_session_theft"),
        ("vul_idor_cart_product_id", "ep_cart", "param_product_id", "vt_idor", "imp_order_tampering"),
    ];
    for (vul, endpoint, parameter, vuln_type, impact) in findings {
        g.add_relation(vul, endpoint, rel::LOCATED_AT_ENDPOINT)?;
        g.add_relation(vul, parameter, rel::AFFECTS_PARAMETER)?;
        g.add_relation(vul, vuln_type, rel::IS_OF_TYPE)?;
        g.add_relation(vul, impact, rel::GENERATES_IMPACT)?;
    }

    // Tools used
    for (vul, ..) in findings {
        g.add_relation(vul, "tool_burp", rel::FOUND_WITH)?;
    }

    // Composite attacks
    g.add_relation("atk_login_bypass", "vul_sqli_login_username", rel::EXPLOITS_VULNERABILITY)?;
    g.add_relation("atk_login_bypass", "imp_customer_data_exposure", rel::PRODUCES_IMPACT)?;

    g.add_relation("atk_customer_session_theft", "vul_xss_product_search", rel::EXPLOITS_VULNERABILITY)?;
    g.add_relation("atk_customer_session_theft", "imp_session_theft", rel::PRODUCES_IMPACT)?;

    Ok(g)
}
