use powerset_agents_core::{
    create_library_agent, create_library_agent_with, CollectingDiagnostics, CurriculumConfig,
    LibraryAgentConfig, PowersetError, Provider, ToolHandle,
};

fn foo_lib_config() -> LibraryAgentConfig {
    LibraryAgentConfig::new(
        "foo_lib",
        "help(foo_lib)",
        CurriculumConfig::new("learn foo_lib"),
        "TestAgent",
        "/tmp/x",
    )
}

#[test]
fn gpt_model_resolves_to_openai_with_default_tools() {
    let config = foo_lib_config().with_model("gpt-5-mini");
    let agent = create_library_agent(config).unwrap();

    assert_eq!(agent.provider, Provider::OpenAi);
    assert_eq!(agent.model, "gpt-5-mini");
    assert_eq!(agent.tools, vec![ToolHandle::NetworkEdit, ToolHandle::Bash]);
    for literal in ["TestAgent", "foo_lib", "help(foo_lib)", "/tmp/x"] {
        assert!(
            agent.system_prompt.contains(literal),
            "prompt missing {literal:?}"
        );
    }
}

#[test]
fn claude_model_resolves_to_anthropic() {
    let config = foo_lib_config().with_model("claude-3-opus");
    let agent = create_library_agent(config).unwrap();
    assert_eq!(agent.provider, Provider::Anthropic);
    assert_eq!(agent.model, "claude-3-opus");
}

#[test]
fn unknown_tool_is_dropped_with_warning() {
    let sink = CollectingDiagnostics::new();
    let config = foo_lib_config().with_tools(vec![
        "networkedittool".to_string(),
        "nonexistenttool".to_string(),
    ]);
    let agent = create_library_agent_with(config, &sink).unwrap();

    assert_eq!(agent.tools, vec![ToolHandle::NetworkEdit]);
    let warnings = sink.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("nonexistenttool"));
}

#[test]
fn missing_name_yields_validation_error() {
    let mut config = foo_lib_config();
    config.agent.name = String::new();
    match create_library_agent(config) {
        Err(PowersetError::Validation(msg)) => assert!(msg.contains("name")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn all_defaults_build_successfully() {
    let config = foo_lib_config();
    assert_eq!(config.agent.max_iterations, 50);
    assert_eq!(config.agent.workspace_path, "/tmp");

    let agent = create_library_agent(config).unwrap();
    assert_eq!(agent.name, "TestAgent");
    assert_eq!(agent.mcp_servers.len(), 2);
    let starlog = &agent.mcp_servers["starlog"];
    assert_eq!(starlog.command, "python");
    assert_eq!(starlog.transport, "stdio");
}

#[test]
fn unknown_model_family_falls_back_to_openai() {
    // Default sink routes warnings to `tracing`; the build still completes.
    let _ = tracing_subscriber::fmt()
        .with_env_filter("powerset_agents_core=warn")
        .try_init();
    let config = foo_lib_config().with_model("command-light");
    let agent = create_library_agent(config).unwrap();
    assert_eq!(agent.provider, Provider::OpenAi);
    assert_eq!(agent.model, "command-light");
}

#[test]
fn resolved_config_serializes_to_json() {
    let agent = create_library_agent(foo_lib_config()).unwrap();
    let json = serde_json::to_value(&agent).unwrap();
    assert_eq!(json["provider"], "openai");
    assert_eq!(json["tools"][0], "network_edit");
    assert_eq!(json["mcp_servers"]["waypoint"]["transport"], "stdio");
}
