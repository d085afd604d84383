//! Request dispatch and tool handlers

use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};
use unitconv::{format_result, Category, ConversionRequest, Notice, Renderer, Session};
use unitconv_units::{list_categories, list_units, parse_category, to_base, UNITS};
use crate::protocol::{McpError, McpRequest, McpResponse, METHOD_NOT_FOUND};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "unitconv";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle one input line. Returns the serialized response, or `None` for
/// notifications.
pub fn handle_line(session: &mut Session, line: &str) -> Option<String> {
    let request: McpRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "unparsable request");
            return serialize(&McpResponse::parse_error(e));
        }
    };

    debug!(method = %request.method, "processing");
    let response = handle_request(session, &request);

    // Notifications (no id) should NOT receive a response
    if request.id.is_none() {
        debug!(method = %request.method, "notification processed");
        return None;
    }
    serialize(&response)
}

fn serialize(response: &McpResponse) -> Option<String> {
    match serde_json::to_string(response) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(error = %e, "failed to serialize response");
            None
        }
    }
}

pub fn handle_request(session: &mut Session, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(session, &request.params),

        _ => Err(McpError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    McpResponse::from_result(request.id.clone(), result)
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

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion for length, weight, temperature, speed and area"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use list_categories and list_units to discover valid units, then convert or convert_query. Results are shown at fixed precision; history keeps the conversions of this session."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    let categories: Vec<&str> = list_categories().iter().map(|c| c.name()).collect();
    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value between two units of the same category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "enum": categories },
                        "value": { "type": "number" },
                        "from": { "type": "string", "description": "Source unit (name, symbol or alias)" },
                        "to": { "type": "string", "description": "Target unit (name, symbol or alias)" }
                    },
                    "required": ["category", "value", "from", "to"]
                }
            },
            {
                "name": "convert_query",
                "description": "Convert using free text such as \"12.5 km to mi\" or \"Temperature: 100 C -> F\".",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": { "type": "string" }
                    },
                    "required": ["query"]
                }
            },
            {
                "name": "list_categories",
                "description": "List conversion categories in display order.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "list_units",
                "description": "List the units of a category, base unit first.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "enum": categories }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "to_base",
                "description": "Convert a value to its category's base unit.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "enum": categories },
                        "value": { "type": "number" },
                        "unit": { "type": "string" }
                    },
                    "required": ["category", "value", "unit"]
                }
            },
            {
                "name": "history",
                "description": "Show the most recent conversions of this session, newest first.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "limit": { "type": "integer", "minimum": 0 }
                    }
                }
            }
        ]
    }))
}

fn handle_tool_call(session: &mut Session, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref()
        .ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "convert" => tool_convert(session, &args),
        "convert_query" => tool_convert_query(session, &args),
        "list_categories" => Ok(tool_list_categories()),
        "list_units" => tool_list_units(&args),
        "to_base" => tool_to_base(session, &args),
        "history" => Ok(tool_history(session, &args)),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn tool_convert(session: &mut Session, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = match arg_category(args)? {
        Ok(c) => c,
        Err(notice) => return Ok(notice_result(&notice)),
    };
    let value = arg_number(args, "value")?;
    let from = arg_str(args, "from")?;
    let to = arg_str(args, "to")?;

    let request = ConversionRequest::new(category, value, from, to);
    Ok(conversion_result(session.convert(&request)))
}

fn tool_convert_query(session: &mut Session, args: &JsonValue) -> Result<JsonValue, McpError> {
    let query = arg_str(args, "query")?;
    Ok(conversion_result(session.convert_query(query)))
}

fn tool_list_categories() -> JsonValue {
    let names: Vec<&str> = list_categories().iter().map(|c| c.name()).collect();
    json!({
        "content": [{ "type": "text", "text": names.join("\n") }],
        "structuredContent": { "categories": names }
    })
}

fn tool_list_units(args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = match arg_category(args)? {
        Ok(c) => c,
        Err(notice) => return Ok(notice_result(&notice)),
    };
    let units: Vec<JsonValue> = UNITS.units_for(category).iter()
        .map(|u| json!({ "name": u.name, "symbol": u.symbol }))
        .collect();
    Ok(json!({
        "content": [{ "type": "text", "text": Renderer::new().render_units(category) }],
        "structuredContent": { "category": category, "units": units, "names": list_units(category) }
    }))
}

fn tool_to_base(session: &Session, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = match arg_category(args)? {
        Ok(c) => c,
        Err(notice) => return Ok(notice_result(&notice)),
    };
    let value = arg_number(args, "value")?;
    let unit = arg_str(args, "unit")?;

    let converted = unitconv_units::resolve_unit(category, unit)
        .and_then(|name| to_base(category, value, &name));
    match converted {
        Ok(base_value) => {
            let base = UNITS.base_unit(category).map(|u| u.name.as_str()).unwrap_or_default();
            if !base_value.is_finite() {
                return Ok(notice_result(&Notice::out_of_range(value, unit, base)));
            }
            let text = format_result(base_value, base, session.config().precision);
            Ok(json!({
                "content": [{ "type": "text", "text": text }],
                "structuredContent": { "value": base_value, "unit": base }
            }))
        }
        Err(e) => Ok(notice_result(&Notice::from(e))),
    }
}

fn tool_history(session: &Session, args: &JsonValue) -> JsonValue {
    let limit = args.get("limit")
        .and_then(|v| v.as_u64())
        .map(|n| n as usize)
        .unwrap_or(session.config().history_display);
    let records = session.history().recent(limit);
    let text = if records.is_empty() {
        "No conversions yet.".to_string()
    } else {
        Renderer::new().render_history(&records)
    };
    json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": { "records": records, "total": session.history().len() }
    })
}

fn conversion_result(outcome: Result<unitconv::Conversion, Notice>) -> JsonValue {
    match outcome {
        Ok(conversion) => json!({
            "content": [{ "type": "text", "text": Renderer::new().render_conversion(&conversion) }],
            "structuredContent": conversion
        }),
        Err(notice) => notice_result(&notice),
    }
}

fn notice_result(notice: &Notice) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": Renderer::new().render_notice(notice) }],
        "structuredContent": { "notice": notice },
        "isError": !notice.is_warning()
    })
}

fn arg_str<'a>(args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))
}

fn arg_number(args: &JsonValue, name: &str) -> Result<f64, McpError> {
    args.get(name)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| McpError::invalid_params(format!("Missing or non-numeric {} argument", name)))
}

/// Outer error: the argument is missing. Inner error: it names no category.
fn arg_category(args: &JsonValue) -> Result<Result<Category, Notice>, McpError> {
    let text = arg_str(args, "category")?;
    Ok(parse_category(text).map_err(Notice::from))
}
