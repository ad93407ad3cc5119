use super::*;

#[test]
fn test_definition_new() {
    let def = ToolDefinition::new("webmail_list_recent", "List Recent", "List inbox rows");
    assert_eq!(def.id, "webmail_list_recent");
    assert_eq!(def.risk_level, RiskLevel::Low);
    assert!(def.parameters_schema.is_none());
}

#[test]
fn test_definition_builders() {
    let def = ToolDefinition::new("browser_open_url", "Open URL", "Open a URL")
        .with_risk_level(RiskLevel::Medium)
        .with_parameters_schema(serde_json::json!({"type": "object"}));
    assert_eq!(def.risk_level, RiskLevel::Medium);
    assert!(def.parameters_schema.is_some());
}

#[test]
fn test_to_openai_function_without_schema() {
    let def = ToolDefinition::new("browser_go_back", "Back", "Go back");
    let func = def.to_openai_function();
    assert_eq!(func["type"], "function");
    assert_eq!(func["function"]["name"], "browser_go_back");
    assert_eq!(func["function"]["parameters"]["type"], "object");
}

#[test]
fn test_to_anthropic_tool_with_schema() {
    let schema = serde_json::json!({
        "type": "object",
        "properties": {"limit": {"type": "integer"}}
    });
    let def = ToolDefinition::new("webmail_list_recent", "List", "List")
        .with_parameters_schema(schema.clone());
    let tool = def.to_anthropic_tool();
    assert_eq!(tool["name"], "webmail_list_recent");
    assert_eq!(tool["input_schema"], schema);
}
