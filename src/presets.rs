//! Ready-made agent configurations for the two libraries powerset agents
//! most commonly learn.

use crate::config::{CurriculumConfig, LibraryAgentConfig};
use crate::error::Result;
use crate::factory::{create_library_agent, ResolvedAgentConfig};

/// Generic library-learning curriculum shared by both presets.
const LIBRARY_LEARNING_CURRICULUM: &str = "/tmp/understand_powerset_library.json";

pub const DEFAULT_METASTACK_STARLOG_PATH: &str = "/tmp/metastack_agent_starlog";
pub const DEFAULT_PAYLOAD_DISCOVERY_STARLOG_PATH: &str = "/tmp/payloaddiscovery_agent_starlog";

/// Agent that learns `pydantic_stack_core` and can build any Pydantic model
/// system producing string output.
pub fn create_metastack_agent(starlog_path: impl Into<String>) -> Result<ResolvedAgentConfig> {
    let curriculum = CurriculumConfig::new(
        "Learn pydantic_stack_core library to build Pydantic models that generate string outputs",
    )
    .with_path(LIBRARY_LEARNING_CURRICULUM);

    let config = LibraryAgentConfig::new(
        "pydantic_stack_core",
        "python -c 'import pydantic_stack_core; help(pydantic_stack_core)'",
        curriculum,
        "MetaStackPowersetAgent",
        starlog_path,
    )
    .with_description(
        "Specialized agent for learning pydantic_stack_core and building Pydantic model systems",
    );

    create_library_agent(config)
}

/// Agent that learns `payload_discovery` and can author waypoint curricula.
pub fn create_payload_discovery_agent(
    starlog_path: impl Into<String>,
) -> Result<ResolvedAgentConfig> {
    let curriculum = CurriculumConfig::new(
        "Learn payload_discovery library to build prompt injection sequences and learning curricula",
    )
    .with_path(LIBRARY_LEARNING_CURRICULUM);

    let config = LibraryAgentConfig::new(
        "payload_discovery",
        "python -c 'import payload_discovery; help(payload_discovery)'",
        curriculum,
        "PayloadDiscoveryPowersetAgent",
        starlog_path,
    )
    .with_description(
        "Specialized agent for learning payload_discovery and building learning curricula",
    );

    create_library_agent(config)
}
