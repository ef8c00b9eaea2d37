//! Logical tool names and their concrete capability handles.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;

/// Concrete tool capability the agent runtime knows how to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolHandle {
    /// Read, write and edit files.
    NetworkEdit,
    /// Run shell commands.
    Bash,
}

impl ToolHandle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolHandle::NetworkEdit => "network_edit",
            ToolHandle::Bash => "bash",
        }
    }
}

fn lookup(name: &str) -> Option<ToolHandle> {
    match name.to_lowercase().as_str() {
        "networkedittool" => Some(ToolHandle::NetworkEdit),
        "bashtool" => Some(ToolHandle::Bash),
        _ => None,
    }
}

/// Resolve logical tool names to handles, preserving input order and
/// duplicates. Unknown names are dropped with a warning each; a partial
/// tool set is acceptable, the agent just runs with fewer capabilities.
pub fn resolve_tools(names: &[String], diagnostics: &dyn Diagnostics) -> Vec<ToolHandle> {
    let mut handles = Vec::with_capacity(names.len());
    for name in names {
        match lookup(name) {
            Some(handle) => handles.push(handle),
            None => diagnostics.warning(&format!("unknown tool: {name}")),
        }
    }
    handles
}
