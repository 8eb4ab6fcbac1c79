use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    response::{Html, Redirect},
};
use serde_json::{Value, json};

use loadsim_auth::TokenCodec;

pub async fn redirect_to_docs() -> Redirect {
    Redirect::temporary("/docs")
}

pub async fn docs(Extension(codec): Extension<Arc<TokenCodec>>) -> Html<String> {
    Html(render_docs(codec.ttl().num_minutes()))
}

fn render_docs(ttl_minutes: i64) -> String {
    DOCS_PAGE.replace(TTL_PLACEHOLDER, &ttl_minutes.to_string())
}

const TTL_PLACEHOLDER: &str = "{ttl_minutes}";

pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

const DOCS_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Load Testing API [Simulation]</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; color: #222; }
    code { background: #f3f3f3; padding: 0 .25rem; border-radius: 3px; }
    table { border-collapse: collapse; width: 100%; }
    td, th { border-bottom: 1px solid #ddd; padding: .4rem; text-align: left; }
  </style>
</head>
<body>
  <h1>Load Testing API [Simulation]</h1>
  <p>
    Call <code>POST /auth</code> to receive an <code>access_token</code>, then send it
    verbatim in the <code>Authorization</code> header (no <code>Bearer</code> prefix).
    Tokens expire after {ttl_minutes} minutes. <code>{kind}</code> is <code>users</code> or
    <code>posts</code>. Machine-readable description: <a href="/openapi.json">/openapi.json</a>.
  </p>
  <table>
    <tr><th>Method</th><th>Path</th><th>Input</th><th>Returns</th></tr>
    <tr><td>POST</td><td>/auth</td><td></td><td><code>{access_token}</code></td></tr>
    <tr><td>GET</td><td>/me</td><td></td><td><code>{id_user}</code></td></tr>
    <tr><td>GET</td><td>/data</td><td></td><td><code>{id, data: {users, posts}}</code></td></tr>
    <tr><td>GET</td><td>/data/{kind}</td><td></td><td><code>{id, data: [...]}</code></td></tr>
    <tr><td>POST</td><td>/data/{kind}</td><td><code>?value=int</code></td><td>201 <code>{id, data: [...]}</code></td></tr>
    <tr><td>PUT</td><td>/data/{kind}</td><td><code>{"old": int, "new": int}</code></td><td><code>{id, data: [...]}</code> or 404</td></tr>
    <tr><td>DELETE</td><td>/data/{kind}</td><td><code>?value=int</code></td><td><code>{id, data: [...]}</code> or 404</td></tr>
    <tr><td>GET</td><td>/sample</td><td></td><td><code>sample.txt</code> download</td></tr>
  </table>
</body>
</html>
"#;

fn openapi_document() -> Value {
    let kind_param = json!({
        "name": "kind",
        "in": "path",
        "required": true,
        "schema": { "type": "string", "enum": ["users", "posts"] }
    });
    let value_param = json!({
        "name": "value",
        "in": "query",
        "required": true,
        "schema": { "type": "integer" }
    });
    let auth = json!([{ "APIKeyHeader": [] }]);
    let list = json!({ "$ref": "#/components/schemas/DataResponse" });
    let error = |description: &str| {
        json!({
            "description": description,
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } }
        })
    };
    let ok = |status_description: &str| {
        json!({
            "description": status_description,
            "content": { "application/json": { "schema": list } }
        })
    };

    json!({
        "openapi": "3.0.3",
        "info": { "title": "Load Testing API [Simulation]", "version": env!("CARGO_PKG_VERSION") },
        "paths": {
            "/auth": {
                "post": {
                    "summary": "Issue an access token for a new identity",
                    "responses": { "200": {
                        "description": "Token issued",
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Token" } } }
                    } }
                }
            },
            "/me": {
                "get": {
                    "summary": "Identity behind the presented token",
                    "security": auth,
                    "responses": {
                        "200": {
                            "description": "Caller identity",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/User" } } }
                        },
                        "401": error("Not authenticated")
                    }
                }
            },
            "/data": {
                "get": {
                    "summary": "Both collections",
                    "security": auth,
                    "responses": { "200": ok("All collections"), "401": error("Not authenticated") }
                }
            },
            "/data/{kind}": {
                "parameters": [kind_param],
                "get": {
                    "summary": "One collection",
                    "security": auth,
                    "responses": {
                        "200": ok("Collection contents"),
                        "400": error("Unknown kind"),
                        "401": error("Not authenticated")
                    }
                },
                "post": {
                    "summary": "Append a value",
                    "security": auth,
                    "parameters": [value_param],
                    "responses": {
                        "201": ok("Updated collection"),
                        "400": error("Unknown kind"),
                        "401": error("Not authenticated"),
                        "422": error("Invalid value")
                    }
                },
                "put": {
                    "summary": "Replace the first occurrence of a value",
                    "security": auth,
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ToReplace" } } }
                    },
                    "responses": {
                        "200": ok("Updated collection"),
                        "400": error("Unknown kind"),
                        "401": error("Not authenticated"),
                        "404": error("Not found"),
                        "422": error("Invalid body")
                    }
                },
                "delete": {
                    "summary": "Remove the first occurrence of a value",
                    "security": auth,
                    "parameters": [value_param],
                    "responses": {
                        "200": ok("Updated collection"),
                        "400": error("Unknown kind"),
                        "401": error("Not authenticated"),
                        "404": error("Not found"),
                        "422": error("Invalid value")
                    }
                }
            },
            "/sample": {
                "get": {
                    "summary": "Download a generated text file",
                    "responses": { "200": { "description": "sample.txt", "content": { "text/plain": {} } } }
                }
            }
        },
        "components": {
            "securitySchemes": {
                "APIKeyHeader": { "type": "apiKey", "in": "header", "name": "Authorization" }
            },
            "schemas": {
                "Token": {
                    "type": "object",
                    "required": ["access_token"],
                    "properties": { "access_token": { "type": "string" } }
                },
                "User": {
                    "type": "object",
                    "properties": { "id_user": { "type": "string" } }
                },
                "ToReplace": {
                    "type": "object",
                    "required": ["old", "new"],
                    "properties": { "old": { "type": "integer" }, "new": { "type": "integer" } }
                },
                "DataResponse": {
                    "type": "object",
                    "required": ["id", "data"],
                    "properties": {
                        "id": { "type": "string" },
                        "data": {
                            "oneOf": [
                                { "type": "array", "items": { "type": "integer" } },
                                {
                                    "type": "object",
                                    "properties": {
                                        "users": { "type": "array", "items": { "type": "integer" } },
                                        "posts": { "type": "array", "items": { "type": "integer" } }
                                    }
                                }
                            ]
                        }
                    }
                },
                "Error": {
                    "type": "object",
                    "properties": { "detail": { "type": "string" } }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docs_show_the_configured_token_lifetime() {
        let page = render_docs(15);
        assert!(page.contains("Tokens expire after 15 minutes."));
        assert!(!page.contains(TTL_PLACEHOLDER));
    }

    #[test]
    fn openapi_lists_every_route() {
        let doc = openapi_document();
        for path in ["/auth", "/me", "/data", "/data/{kind}", "/sample"] {
            assert!(doc["paths"].get(path).is_some(), "missing {path}");
        }
        let kinds = &doc["paths"]["/data/{kind}"]["parameters"][0]["schema"]["enum"];
        assert_eq!(kinds, &json!(["users", "posts"]));
    }
}
