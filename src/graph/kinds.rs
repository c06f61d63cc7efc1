//! Well-known node and relation kinds of the security domain
//!
//! These are plain strings. The store accepts any other kind as well.

pub mod node {
    pub const APPLICATION: &str = "Application";
    pub const ENDPOINT: &str = "Endpoint";
    pub const PARAMETER: &str = "Parameter";
    pub const VULNERABILITY_TYPE: &str = "VulnerabilityType";
    pub const VULNERABILITY: &str = "Vulnerability";
    pub const IMPACT: &str = "Impact";
    pub const TOOL: &str = "Tool";
    pub const ATTACK: &str = "Attack";
}

pub mod relation {
    pub const HAS_ENDPOINT: &str = "has-endpoint";
    pub const HAS_PARAMETER: &str = "has-parameter";
    pub const LOCATED_AT_ENDPOINT: &str = "located-at-endpoint";
    pub const AFFECTS_PARAMETER: &str = "affects-parameter";
    pub const IS_OF_TYPE: &str = "is-of-type";
    pub const GENERATES_IMPACT: &str = "generates-impact";
    pub const FOUND_WITH: &str = "found-with";
    pub const EXPLOITS_VULNERABILITY: &str = "exploits-vulnerability";
    pub const PRODUCES_IMPACT: &str = "produces-impact";
}
