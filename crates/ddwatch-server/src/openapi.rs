//! OpenAPI 3 description of the HTTP surface, built once at startup.

use ddwatch_core::field::Field;
use serde_json::{json, Map, Value};

pub const TITLE: &str = "DDClient API";
pub const VERSION: &str = "1.0.0";
pub const DESCRIPTION: &str = "API for interacting with the ddclient service.";

fn string_object(key: &str) -> Value {
    json!({
        "type": "object",
        "properties": { key: { "type": "string" } },
        "required": [key],
    })
}

fn operation(summary: &str, key: &str) -> Value {
    json!({
        "summary": summary,
        "responses": {
            "200": {
                "description": "Successful Response",
                "content": {
                    "application/json": { "schema": string_object(key) }
                }
            }
        }
    })
}

fn summary(field: Field) -> &'static str {
    match field {
        Field::UpdateStatus => "Status of the last ddclient update",
        Field::UpdateTimestamp => "Timestamp of the last ddclient update",
        Field::UpdateIp => "IP address set by the last ddclient update",
        Field::HealthcheckStatus => "Status of the last health check",
        Field::HealthcheckTimestamp => "Timestamp of the last health check",
        Field::LegacyHealthcheckStatus => {
            "Status of the last health check, `[TS] | STATUS` log layout"
        }
    }
}

/// Build the document served at `/openapi.json`.
pub fn document() -> Value {
    let mut paths = Map::new();

    for &field in Field::all() {
        let key = field.json_key();
        paths.insert(
            format!("/{key}"),
            json!({ "get": operation(summary(field), key) }),
        );
    }

    let legacy = Field::LegacyHealthcheckStatus;
    paths.insert(
        format!("/{}", legacy.json_key()),
        json!({ "get": operation(summary(legacy), legacy.json_key()) }),
    );

    let mut status_props = Map::new();
    for &field in Field::all() {
        status_props.insert(field.json_key().to_string(), json!({ "type": "string" }));
    }
    paths.insert(
        "/status".to_string(),
        json!({
            "get": {
                "summary": "All status fields at once",
                "responses": {
                    "200": {
                        "description": "Successful Response",
                        "content": {
                            "application/json": {
                                "schema": { "type": "object", "properties": status_props }
                            }
                        }
                    }
                }
            }
        }),
    );

    paths.insert(
        "/run_ddclient".to_string(),
        json!({ "post": operation("Run ddclient once and record its output", "output") }),
    );

    json!({
        "openapi": "3.1.0",
        "info": {
            "title": TITLE,
            "version": VERSION,
            "description": DESCRIPTION,
        },
        "paths": paths,
    })
}
