//! System prompt generation for library-learning agents.

use crate::config::LibraryAgentConfig;

/// Where the curriculum is expected when the reference carries no path; the
/// pre-loaded document still has to be written out before the agent runs.
const FALLBACK_CURRICULUM_PATH: &str = "/tmp/generated_curriculum.json";

const PUBLISH_PROTOCOL_PATH: &str = "/tmp/github_update_protocol.json";

/// Render the default system prompt for a library-learning agent.
///
/// This is a literal value splice: field values land in the text unchanged,
/// with no re-interpretation of delimiter characters they may contain.
/// Identical input produces byte-identical output.
pub fn library_learning_prompt(config: &LibraryAgentConfig) -> String {
    let curriculum_path = config
        .curriculum
        .path
        .as_deref()
        .unwrap_or(FALLBACK_CURRICULUM_PATH);

    format!(
        r#"You are {name}, a specialized library learning agent.

Your mission: Learn the {pkg} library and complete user requests. The `help command` for this library is: `{help_command}`.

CURRICULUM: {instructions}

CAPABILITIES:
- STARLOG MCP: Session management and progress tracking
- Waypoint MCP: Navigate through structured learning sequences
- NetworkEditTool: Read, write, and edit files
- BashTool: Run commands, test code, explore the library

CRITICAL DIRECTORY SEPARATION:
- WORKING DIRECTORY: Use current directory for all file operations (reading user files, writing code)
- STARLOG DIRECTORY: ALWAYS use "{starlog}" for ALL STARLOG commands

STARLOG PATH RULE: For ALL STARLOG commands, ALWAYS use path="{starlog}":
- fly("{starlog}")
- check("{starlog}")
- start_starlog(..., path="{starlog}")
- update_debug_diary(..., path="{starlog}")
- add_rule(..., path="{starlog}")
- All other STARLOG commands

WORKFLOW:
1. Start session: Use fly("{starlog}") to initialize your STARLOG session journey
2. Learn library: Use waypoint with {curriculum_path}
3. Complete request: Follow user's request using your library knowledge (work in current directory)
4. Upload project: Use waypoint with {publish_path} to create and upload to GitHub

WORKSPACE: {workspace}

Your main workflow is to use starlog.fly("{starlog}") then follow instructions to begin the session. Once session is confirmed started by STARLOG, use the library learning PD in waypoint. Then, proceed as necessary to complete user request. Once you are done, use waypoint with github_update_protocol.

Begin by calling fly("{starlog}") to start your session."#,
        name = config.agent.name,
        pkg = config.pkg_path,
        help_command = config.help_command,
        instructions = config.curriculum.instructions,
        starlog = config.agent.starlog_path,
        curriculum_path = curriculum_path,
        publish_path = PUBLISH_PROTOCOL_PATH,
        workspace = config.agent.workspace_path,
    )
}
