//! Configuration factory for library-learning powerset agents.
//!
//! The crate assembles the data an agent runtime needs to spin up an agent
//! that learns a target library and then completes user tasks with it:
//! - Declarative specification records (`LibraryAgentConfig` and friends).
//! - Table-driven resolvers for model providers, tool names and MCP servers.
//! - A deterministic system-prompt template.
//! - `create_library_agent`, the factory composing all of the above.
//!
//! Execution of the agent, model inference, and the curriculum content live
//! in external collaborators; nothing here performs I/O beyond optionally
//! reading a TOML configuration file.

mod config;
mod diagnostics;
mod error;
mod factory;
mod mcp;
mod prompt;
mod provider;
mod tools;

pub mod presets;

pub use config::{AgentConfig, CurriculumConfig, LibraryAgentConfig};
pub use diagnostics::{CollectingDiagnostics, Diagnostics, TracingDiagnostics};
pub use error::{PowersetError, Result};
pub use factory::{create_library_agent, create_library_agent_with, ResolvedAgentConfig};
pub use mcp::{default_mcp_servers, McpServerConfig};
pub use prompt::library_learning_prompt;
pub use provider::Provider;
pub use tools::{resolve_tools, ToolHandle};
