use super::*;

#[test]
fn test_tool_result_success() {
    let result = ToolResult::success("OK");
    assert!(result.success);
    assert_eq!(result.content, "OK");
    assert!(result.error.is_none());
    assert!(result.structured_output.is_none());
}

#[test]
fn test_tool_result_success_json() {
    let output = serde_json::json!({"count": 2});
    let result = ToolResult::success_json("2 threads", output);
    assert!(result.success);
    assert_eq!(result.structured_output.as_ref().unwrap()["count"], 2);
}

#[test]
fn test_tool_result_error() {
    let result = ToolResult::error("Something went wrong");
    assert!(!result.success);
    assert!(result.content.is_empty());
    assert_eq!(result.error, Some("Something went wrong".to_string()));
}

#[test]
fn test_tool_result_with_metadata() {
    let result = ToolResult::success("OK").with_metadata("url", serde_json::json!("https://a.b"));
    assert_eq!(result.metadata.get("url").unwrap(), &serde_json::json!("https://a.b"));
}

#[test]
fn test_tool_result_serialization_skips_empty_fields() {
    let json = serde_json::to_string(&ToolResult::success("OK")).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(!json.contains("structured_output"));
    assert!(!json.contains("\"error\""));
}
