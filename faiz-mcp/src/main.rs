//! Faiz MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdio.
//!
//! Tools:
//! - list_formulas: List the available calculations
//! - describe_formula: Input fields and result of one calculation
//! - calculate: Run a calculation and render the result

use faiz::{DisplayConfig, Faiz, Session};
use faiz_core::FaizError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "faiz";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const DISPLAY_NOTE: &str = "\n\nShow the calculated markdown to the user exactly as received, then explain.";

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: -32602,
            message: message.into(),
            data: None,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Faiz MCP Server started");
    debug!(
        stdin_terminal = io::stdin().is_terminal(),
        stdout_terminal = io::stdout().is_terminal(),
        "stdio"
    );

    let faiz = create_faiz(DisplayConfig::from_env());

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    info!(formulas = faiz.registry().kinds().count(), "Server ready, waiting for requests");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let Some(response) = process_line(&faiz, &line) else {
                    continue;
                };
                if let Err(e) = write_response(&response) {
                    error!(error = %e, "Error writing response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "Error reading input");
                break;
            }
        }
    }

    info!("Server shutting down");
}

/// Create Faiz with the standard formulas and the given display settings
fn create_faiz(display_config: DisplayConfig) -> Faiz {
    let faiz = Faiz::with_standard_library().with_display(display_config);
    info!(currency = %faiz.display().currency_suffix, "display configured");
    faiz
}

/// Handle one input line. Blank lines and notifications produce no response.
fn process_line(faiz: &Faiz, line: &str) -> Option<McpResponse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    debug!(bytes = line.len(), "Received");

    let request: McpRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Error parsing request");
            return Some(McpResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(McpError {
                    code: -32700,
                    message: format!("Parse error: {}", e),
                    data: None,
                }),
            });
        }
    };

    debug!(method = %request.method, "Processing");
    let response = handle_request(faiz, &request);

    // Notifications (no id) should NOT receive a response
    if request.id.is_none() {
        debug!(method = %request.method, "Notification processed (no response)");
        return None;
    }
    Some(response)
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let response_json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response_json)?;
    stdout.flush()
}

fn handle_request(faiz: &Faiz, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(faiz, &request.params),

        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "Client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Simple financial calculator: interest, loans, deposits, discounting"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Faiz computes simple and compound interest, loan installments, real return, present value, net deposit return and commercial discount. Use 'list_formulas' to see the calculations and 'describe_formula' for their input fields. Rates are percentages (4.5 means 4.5%). Always show the calculated markdown to the user."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "list_formulas",
                "description": "List all available calculations with their required input keys.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "describe_formula",
                "description": "Get the title, description, result and input fields of one calculation.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "kind": {
                            "type": "string",
                            "description": "Calculation identifier, e.g. SIMPLE_INTEREST or LOAN_PMT"
                        }
                    },
                    "required": ["kind"]
                }
            },
            {
                "name": "calculate",
                "description": "Run a calculation. Returns the rendered result with its secondary value and chart.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "kind": {
                            "type": "string",
                            "description": "Calculation identifier, e.g. SIMPLE_INTEREST or LOAN_PMT"
                        },
                        "inputs": {
                            "type": "object",
                            "description": "Field values keyed by input key. Numbers, or text with a comma decimal separator (\"4,5\").",
                            "additionalProperties": { "type": ["number", "string"] }
                        }
                    },
                    "required": ["kind", "inputs"]
                }
            }
        ]
    }))
}

fn handle_tool_call(faiz: &Faiz, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref()
        .ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "list_formulas" => tool_list_formulas(faiz),
        "describe_formula" => tool_describe_formula(faiz, args),
        "calculate" => tool_calculate(faiz, args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

/// Tool result for a calculation-level failure
fn tool_error(err: &FaizError) -> JsonValue {
    debug!(code = %err.code, fields = ?err.fields, "tool call rejected");
    json!({
        "content": [{ "type": "text", "text": err.to_string() }],
        "error": err,
        "isError": true
    })
}

fn tool_list_formulas(faiz: &Faiz) -> Result<JsonValue, McpError> {
    let mut text = String::from("| Kind | Hesaplama | Alanlar |\n|------|-----------|---------|\n");
    for d in faiz.registry().descriptors() {
        text.push_str(&format!(
            "| {} | {} | {} |\n",
            d.kind,
            d.title,
            d.keys().collect::<Vec<_>>().join(", ")
        ));
    }

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "data": faiz.list_formulas()
    }))
}

fn tool_describe_formula(faiz: &Faiz, args: JsonValue) -> Result<JsonValue, McpError> {
    let name = args.get("kind")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing kind argument"))?;

    let help = match faiz.help(Some(name)) {
        Ok(h) => h,
        Err(e) => return Ok(tool_error(&e)),
    };

    Ok(json!({
        "content": [{ "type": "text", "text": format_help(&help) }],
        "data": help
    }))
}

fn format_help(help: &JsonValue) -> String {
    let mut out = String::new();
    if let Some(t) = help.get("title").and_then(|v| v.as_str()) {
        out.push_str(&format!("# {}\n\n", t));
    }
    if let Some(d) = help.get("description").and_then(|v| v.as_str()) {
        out.push_str(&format!("{}\n\n", d));
    }
    if let Some(inputs) = help.get("inputs").and_then(|v| v.as_array()) {
        out.push_str("| Key | Alan | Örnek |\n|-----|------|-------|\n");
        for field in inputs {
            let get = |k: &str| field.get(k).and_then(|v| v.as_str()).unwrap_or_default();
            out.push_str(&format!("| {} | {} | {} |\n", get("key"), get("label"), get("placeholder")));
        }
        out.push('\n');
    }
    if let Some(r) = help.get("result_label").and_then(|v| v.as_str()) {
        out.push_str(&format!("**Sonuç:** {}\n", r));
    }
    out
}

fn tool_calculate(faiz: &Faiz, args: JsonValue) -> Result<JsonValue, McpError> {
    let name = args.get("kind")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing kind argument"))?;

    let inputs = match args.get("inputs") {
        None | Some(JsonValue::Null) => serde_json::Map::new(),
        Some(JsonValue::Object(obj)) => obj.clone(),
        Some(_) => return Err(McpError::invalid_params("inputs must be an object")),
    };

    let kind = match faiz.registry().resolve(name) {
        Ok(k) => k,
        Err(e) => return Ok(tool_error(&e)),
    };

    let mut session = faiz.session();
    session.select(kind);
    if let Err(e) = fill_session(&mut session, &inputs) {
        return Ok(tool_error(&e));
    }

    let renderer = faiz.renderer();
    if let Err(e) = session.calculate() {
        let mut result = tool_error(&e);
        result["content"] = json!([
            { "type": "text", "text": format!("{}\n\n{}", renderer.render(&session), e) }
        ]);
        return Ok(result);
    }

    let markdown = renderer.render(&session);
    let Some(summary) = session.summary() else {
        return Err(McpError {
            code: -32603,
            message: "Calculation produced no result".to_string(),
            data: None,
        });
    };

    let display = renderer.config();
    Ok(json!({
        "content": [{ "type": "text", "text": format!("{}{}", markdown, DISPLAY_NOTE) }],
        "kind": summary.kind,
        "result": summary.result,
        "formatted": display.format_result(summary.result, summary.unit),
        "secondary": summary.secondary.as_ref().map(|s| json!({
            "label": s.label,
            "value": s.value,
            "formatted": display.format_result(s.value, summary.unit),
        })),
        "chart": summary.chart,
        "isError": false
    }))
}

/// Copy JSON inputs into the session: numbers as values, strings as typed text
fn fill_session(session: &mut Session, inputs: &serde_json::Map<String, JsonValue>) -> Result<(), FaizError> {
    for (key, value) in inputs {
        match value {
            JsonValue::Number(n) => match n.as_f64() {
                Some(v) => session.set_value(key, v)?,
                None => return Err(FaizError::invalid_input(key, "number out of range")),
            },
            JsonValue::String(s) => session.set_input(key, s)?,
            _ => return Err(FaizError::invalid_input(key, "expected a number or a string")),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faiz_core::codes;

    fn request(method: &str, params: JsonValue) -> McpRequest {
        McpRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params: Some(params),
        }
    }

    fn call(tool: &str, arguments: JsonValue) -> JsonValue {
        let faiz = Faiz::default();
        let response = handle_request(&faiz, &request("tools/call", json!({ "name": tool, "arguments": arguments })));
        assert!(response.error.is_none(), "{:?}", response.error);
        response.result.unwrap()
    }

    #[test]
    fn test_create_faiz_keeps_display() {
        let faiz = create_faiz(DisplayConfig::default().with_currency("EUR"));
        assert_eq!(faiz.display().currency_suffix, "EUR");
        assert_eq!(faiz.registry().kinds().count(), 8);
    }

    #[test]
    fn test_initialize_echoes_protocol() {
        let faiz = Faiz::default();
        let response = handle_request(&faiz, &request("initialize", json!({ "protocolVersion": "2024-11-05" })));
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
    }

    #[test]
    fn test_unknown_method() {
        let faiz = Faiz::default();
        let response = handle_request(&faiz, &request("resources/list", json!({})));
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[test]
    fn test_parse_error_and_notifications() {
        let faiz = Faiz::default();
        let response = process_line(&faiz, "{not json").unwrap();
        assert_eq!(response.error.unwrap().code, -32700);

        assert!(process_line(&faiz, r#"{"jsonrpc":"2.0","method":"initialized"}"#).is_none());
        assert!(process_line(&faiz, "   \n").is_none());
        assert!(process_line(&faiz, r#"{"jsonrpc":"2.0","id":7,"method":"ping"}"#).is_some());
    }

    #[test]
    fn test_tools_list_names() {
        let tools = handle_tools_list().unwrap();
        let names: Vec<&str> = tools["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["list_formulas", "describe_formula", "calculate"]);
    }

    #[test]
    fn test_list_formulas() {
        let result = call("list_formulas", json!({}));
        assert_eq!(result["data"].as_array().unwrap().len(), 8);
        assert!(result["content"][0]["text"].as_str().unwrap().contains("LOAN_PMT"));
    }

    #[test]
    fn test_describe_formula() {
        let result = call("describe_formula", json!({ "kind": "deposit_return" }));
        assert_eq!(result["data"]["kind"], "DEPOSIT_RETURN");
        assert!(result["content"][0]["text"].as_str().unwrap().contains("| taxRate |"));
    }

    #[test]
    fn test_describe_unknown_formula_suggests() {
        let result = call("describe_formula", json!({ "kind": "loan" }));
        assert_eq!(result["isError"], true);
        assert_eq!(result["error"]["code"], codes::UNKNOWN_FORMULA);
        assert!(result["error"]["suggestion"].as_str().unwrap().contains("LOAN_PMT"));
    }

    #[test]
    fn test_calculate_with_numbers_and_text() {
        let result = call(
            "calculate",
            json!({ "kind": "SIMPLE_INTEREST", "inputs": { "principal": 100000, "rate": "4,5", "time": 12 } }),
        );
        assert_eq!(result["isError"], false);
        assert!((result["result"].as_f64().unwrap() - 54000.0).abs() < 1e-6);
        assert_eq!(result["formatted"], "54.000,00 TL");
        assert_eq!(result["secondary"]["formatted"], "154.000,00 TL");
        assert_eq!(result["chart"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_calculate_incomplete() {
        let result = call("calculate", json!({ "kind": "NPV", "inputs": { "cashFlow": 100000 } }));
        assert_eq!(result["isError"], true);
        assert_eq!(result["error"]["code"], codes::INCOMPLETE_INPUT);
        assert_eq!(result["error"]["fields"], json!(["discountRate", "year"]));
    }

    #[test]
    fn test_calculate_rejects_bad_values() {
        let result = call("calculate", json!({ "kind": "NPV", "inputs": { "year": true } }));
        assert_eq!(result["error"]["code"], codes::INVALID_INPUT);

        let result = call("calculate", json!({ "kind": "NPV", "inputs": { "months": 3 } }));
        assert_eq!(result["error"]["code"], codes::UNKNOWN_FIELD);
    }

    #[test]
    fn test_calculate_missing_kind_is_invalid_params() {
        let faiz = Faiz::default();
        let response = handle_request(
            &faiz,
            &request("tools/call", json!({ "name": "calculate", "arguments": { "inputs": {} } })),
        );
        assert_eq!(response.error.unwrap().code, -32602);
    }
}
