//! Factory turning a declarative [`LibraryAgentConfig`] into the fully
//! resolved configuration the agent runtime consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::LibraryAgentConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::Result;
use crate::mcp::{resolve_mcp_servers, McpServerConfig};
use crate::prompt::library_learning_prompt;
use crate::provider::Provider;
use crate::tools::{resolve_tools, ToolHandle};

/// Agent configuration with every logical name resolved.
///
/// This is what gets handed to the external agent runtime: concrete tool
/// handles, a provider for the model, and launch descriptors for the MCP
/// servers. Nothing in here needs further lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAgentConfig {
    pub name: String,
    pub system_prompt: String,
    pub tools: Vec<ToolHandle>,
    pub provider: Provider,
    pub model: String,
    pub mcp_servers: BTreeMap<String, McpServerConfig>,
}

/// Build a resolved configuration for a library-learning agent.
///
/// Validation of required fields is the only failure mode; resolution of
/// tools, provider and MCP servers always completes, dropping or defaulting
/// anything it does not recognize. Warnings go to the `tracing` facade.
pub fn create_library_agent(config: LibraryAgentConfig) -> Result<ResolvedAgentConfig> {
    create_library_agent_with(config, &TracingDiagnostics)
}

/// Same as [`create_library_agent`] but with an injected diagnostic sink.
pub fn create_library_agent_with(
    config: LibraryAgentConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<ResolvedAgentConfig> {
    config.validate()?;
    diagnostics.debug(&format!(
        "creating library powerset agent config: {} for package: {}",
        config.agent.name, config.pkg_path
    ));

    let system_prompt = match &config.agent.custom_system_prompt {
        Some(custom) => custom.clone(),
        None => library_learning_prompt(&config),
    };
    let provider = Provider::for_model(&config.agent.model, diagnostics);
    let tools = resolve_tools(&config.agent.tools, diagnostics);
    let mcp_servers = resolve_mcp_servers(&config.agent.mcp_servers, diagnostics);

    Ok(ResolvedAgentConfig {
        name: config.agent.name,
        system_prompt,
        tools,
        provider,
        model: config.agent.model,
        mcp_servers,
    })
}
