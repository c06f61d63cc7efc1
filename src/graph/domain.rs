//! Security-domain queries
//!
//! Each query is one call to [`GraphStore::one_hop`] with a fixed relation
//! kind and direction, so all of them share the same ordering and the same
//! handling of relations whose far end has gone away.

use super::kinds::relation;
use super::node::Node;
use super::store::GraphStore;
use super::types::Direction;

impl GraphStore {
    /// Vulnerabilities located at an endpoint
    pub fn vulnerabilities_of_endpoint(&self, endpoint_id: &str) -> Vec<&Node> {
        self.one_hop(endpoint_id, Direction::Incoming, relation::LOCATED_AT_ENDPOINT)
    }

    /// Vulnerabilities affecting a parameter
    pub fn vulnerabilities_of_parameter(&self, parameter_id: &str) -> Vec<&Node> {
        self.one_hop(parameter_id, Direction::Incoming, relation::AFFECTS_PARAMETER)
    }

    /// Impacts a vulnerability generates
    pub fn impacts_of_vulnerability(&self, vulnerability_id: &str) -> Vec<&Node> {
        self.one_hop(vulnerability_id, Direction::Outgoing, relation::GENERATES_IMPACT)
    }

    /// Types a vulnerability is classified as
    pub fn types_of_vulnerability(&self, vulnerability_id: &str) -> Vec<&Node> {
        self.one_hop(vulnerability_id, Direction::Outgoing, relation::IS_OF_TYPE)
    }

    /// Attacks exploiting a vulnerability
    pub fn attacks_exploiting_vulnerability(&self, vulnerability_id: &str) -> Vec<&Node> {
        self.one_hop(vulnerability_id, Direction::Incoming, relation::EXPLOITS_VULNERABILITY)
    }

    /// Vulnerabilities an attack exploits
    pub fn vulnerabilities_exploited_by_attack(&self, attack_id: &str) -> Vec<&Node> {
        self.one_hop(attack_id, Direction::Outgoing, relation::EXPLOITS_VULNERABILITY)
    }

    /// Impacts an attack produces
    pub fn impacts_of_attack(&self, attack_id: &str) -> Vec<&Node> {
        self.one_hop(attack_id, Direction::Outgoing, relation::PRODUCES_IMPACT)
    }

    /// Tools a vulnerability was found with
    pub fn tools_that_found_vulnerability(&self, vulnerability_id: &str) -> Vec<&Node> {
        self.one_hop(vulnerability_id, Direction::Outgoing, relation::FOUND_WITH)
    }

    pub fn endpoints_of_application(&self, application_id: &str) -> Vec<&Node> {
        self.one_hop(application_id, Direction::Outgoing, relation::HAS_ENDPOINT)
    }

    pub fn parameters_of_endpoint(&self, endpoint_id: &str) -> Vec<&Node> {
        self.one_hop(endpoint_id, Direction::Outgoing, relation::HAS_PARAMETER)
    }
}
