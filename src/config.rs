use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PowersetError, Result};

/// Reference to the curriculum a learning agent should walk through.
///
/// The curriculum itself lives in the navigation service; this only carries
/// where to find it (a path and/or a pre-loaded document) plus the free-text
/// instructions telling the agent when and how to use it. Content is opaque
/// here and never validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurriculumConfig {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub document: Option<Value>,
    pub instructions: String,
}

impl CurriculumConfig {
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            path: None,
            document: None,
            instructions: instructions.into(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_document(mut self, document: Value) -> Self {
        self.document = Some(document);
        self
    }
}

/// Base configuration shared by every powerset agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// Directory the session-logging (STARLOG) service tracks this run under.
    pub starlog_path: String,
    #[serde(default = "default_workspace_path")]
    pub workspace_path: String,
    #[serde(default = "default_mcp_servers")]
    pub mcp_servers: Vec<String>,
    #[serde(default = "default_tools")]
    pub tools: Vec<String>,
    #[serde(default)]
    pub custom_system_prompt: Option<String>,
}

fn default_model() -> String {
    "gpt-5-mini".into()
}

fn default_max_iterations() -> u32 {
    50
}

fn default_workspace_path() -> String {
    "/tmp".into()
}

fn default_mcp_servers() -> Vec<String> {
    vec!["waypoint".into(), "starlog".into()]
}

fn default_tools() -> Vec<String> {
    vec!["networkedittool".into(), "bashtool".into()]
}

impl AgentConfig {
    pub fn new(name: impl Into<String>, starlog_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            model: default_model(),
            max_iterations: default_max_iterations(),
            starlog_path: starlog_path.into(),
            workspace_path: default_workspace_path(),
            mcp_servers: default_mcp_servers(),
            tools: default_tools(),
            custom_system_prompt: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PowersetError::Validation("`name` must not be empty".into()));
        }
        if self.starlog_path.trim().is_empty() {
            return Err(PowersetError::Validation(
                "`starlog_path` must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for an agent that learns one target library.
///
/// Embeds the base [`AgentConfig`] and adds the library identity, the shell
/// command used to introspect it, and the curriculum reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryAgentConfig {
    #[serde(flatten)]
    pub agent: AgentConfig,
    pub pkg_path: String,
    pub help_command: String,
    pub curriculum: CurriculumConfig,
}

impl LibraryAgentConfig {
    /// Required fields up front; everything else defaults and can be
    /// adjusted through the `with_*` methods.
    pub fn new(
        pkg_path: impl Into<String>,
        help_command: impl Into<String>,
        curriculum: CurriculumConfig,
        name: impl Into<String>,
        starlog_path: impl Into<String>,
    ) -> Self {
        Self {
            agent: AgentConfig::new(name, starlog_path),
            pkg_path: pkg_path.into(),
            help_command: help_command.into(),
            curriculum,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.agent.description = Some(description.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.agent.model = model.into();
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.agent.max_iterations = max_iterations;
        self
    }

    pub fn with_workspace_path(mut self, workspace_path: impl Into<String>) -> Self {
        self.agent.workspace_path = workspace_path.into();
        self
    }

    pub fn with_mcp_servers(mut self, mcp_servers: Vec<String>) -> Self {
        self.agent.mcp_servers = mcp_servers;
        self
    }

    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.agent.tools = tools;
        self
    }

    pub fn with_custom_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.agent.custom_system_prompt = Some(prompt.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.agent.validate()?;
        if self.pkg_path.trim().is_empty() {
            return Err(PowersetError::Validation(
                "`pkg_path` must not be empty".into(),
            ));
        }
        if self.help_command.trim().is_empty() {
            return Err(PowersetError::Validation(
                "`help_command` must not be empty".into(),
            ));
        }
        if self.curriculum.instructions.trim().is_empty() {
            return Err(PowersetError::Validation(
                "`curriculum.instructions` must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&raw)
            .map_err(|err| PowersetError::Config(format!("failed to parse configuration: {err}")))?;
        Ok(cfg)
    }

    pub fn from_env_or_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut cfg = Self::from_file(path)?;
        if let Ok(model) = env::var("POWERSET_MODEL") {
            cfg.agent.model = model;
        }
        if let Ok(workspace) = env::var("POWERSET_WORKSPACE") {
            cfg.agent.workspace_path = workspace;
        }
        if let Ok(iterations) = env::var("POWERSET_MAX_ITERATIONS") {
            if let Ok(parsed) = iterations.parse::<u32>() {
                cfg.agent.max_iterations = parsed;
            }
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn minimal() -> LibraryAgentConfig {
        LibraryAgentConfig::new(
            "foo_lib",
            "help(foo_lib)",
            CurriculumConfig::new("learn foo_lib"),
            "TestAgent",
            "/tmp/x",
        )
    }

    #[test]
    fn defaults_apply() {
        let cfg = minimal();
        assert_eq!(cfg.agent.model, "gpt-5-mini");
        assert_eq!(cfg.agent.max_iterations, 50);
        assert_eq!(cfg.agent.workspace_path, "/tmp");
        assert_eq!(cfg.agent.mcp_servers, vec!["waypoint", "starlog"]);
        assert_eq!(cfg.agent.tools, vec!["networkedittool", "bashtool"]);
        assert!(cfg.agent.custom_system_prompt.is_none());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut cfg = minimal();
        cfg.agent.name = "  ".into();
        assert!(matches!(
            cfg.validate(),
            Err(PowersetError::Validation(msg)) if msg.contains("name")
        ));
    }

    #[test]
    fn empty_starlog_path_is_rejected() {
        let mut cfg = minimal();
        cfg.agent.starlog_path = String::new();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_instructions_are_rejected() {
        let mut cfg = minimal();
        cfg.curriculum.instructions = String::new();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn loads_from_toml_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "name = 'TomlAgent'\nstarlog_path = '/tmp/toml_session'\npkg_path = 'toml_lib'\nhelp_command = 'help(toml_lib)'\n[curriculum]\ninstructions = 'learn toml_lib'"
        )
        .unwrap();

        let cfg = LibraryAgentConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.agent.name, "TomlAgent");
        assert_eq!(cfg.agent.max_iterations, 50);
        assert_eq!(cfg.pkg_path, "toml_lib");
        assert!(cfg.curriculum.path.is_none());
    }

    #[test]
    fn env_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "name = 'EnvAgent'\nstarlog_path = '/tmp/env_session'\npkg_path = 'env_lib'\nhelp_command = 'help(env_lib)'\nmodel = 'gpt-5-mini'\n[curriculum]\ninstructions = 'learn env_lib'"
        )
        .unwrap();

        env::set_var("POWERSET_MODEL", "claude-3-opus");
        env::set_var("POWERSET_MAX_ITERATIONS", "12");
        let cfg = LibraryAgentConfig::from_env_or_file(file.path()).unwrap();
        env::remove_var("POWERSET_MODEL");
        env::remove_var("POWERSET_MAX_ITERATIONS");

        assert_eq!(cfg.agent.model, "claude-3-opus");
        assert_eq!(cfg.agent.max_iterations, 12);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name = ").unwrap();
        assert!(matches!(
            LibraryAgentConfig::from_file(file.path()),
            Err(PowersetError::Config(_))
        ));
    }
}
