//! Launch descriptors for the auxiliary MCP services powerset agents use.
//!
//! Two services back every agent: STARLOG for session logging and waypoint
//! for curriculum navigation. Both run as stdio subprocesses started by the
//! agent runtime; this module only describes how to launch them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;

/// Subprocess launch specification for one MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerConfig {
    pub transport: String,
    pub command: String,
    pub args: Vec<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl McpServerConfig {
    fn stdio(command: &str, args: &[&str]) -> Self {
        Self {
            transport: "stdio".into(),
            command: command.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            env: BTreeMap::new(),
        }
    }

    fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

/// The fixed table of MCP servers available to powerset agents.
pub fn default_mcp_servers() -> BTreeMap<String, McpServerConfig> {
    let mut servers = BTreeMap::new();
    servers.insert(
        "starlog".to_string(),
        McpServerConfig::stdio("python", &["-m", "starlog_mcp.starlog_mcp"])
            .with_env("HEAVEN_DATA_DIR", "/tmp/heaven_data"),
    );
    servers.insert(
        "waypoint".to_string(),
        McpServerConfig::stdio("python", &["-m", "payload_discovery.mcp_server_v2"]),
    );
    servers
}

/// Filter the default table down to the requested server names. Names with
/// no entry in the table are omitted with a warning.
pub fn resolve_mcp_servers(
    names: &[String],
    diagnostics: &dyn Diagnostics,
) -> BTreeMap<String, McpServerConfig> {
    let table = default_mcp_servers();
    let mut resolved = BTreeMap::new();
    for name in names {
        match table.get(name) {
            Some(server) => {
                resolved.insert(name.clone(), server.clone());
            }
            None => diagnostics.warning(&format!("unknown MCP server: {name}")),
        }
    }
    resolved
}
