//! Hand-built OpenAPI document plus a small HTML page that renders it.
//! Kept in code so the doc never drifts behind an annotation framework.

use axum::Json;
use axum::response::Html;
use serde_json::{Value, json};

// `r##` because the inline script contains a `"#` sequence.
const DOCS_PAGE: &str = r##"<!doctype html>
<html>
<head>
  <title>Portfolio API</title>
  <meta charset="utf-8"/>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css"/>
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    SwaggerUIBundle({ url: "openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>"##;

pub async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

pub async fn openapi_json() -> Json<Value> {
    Json(build_document())
}

fn crud_paths(doc: &mut Value, collection: &str, tag: &str) {
    let paths = &mut doc["paths"];
    paths[format!("/{collection}")] = json!({
        "get": { "tags": [tag], "summary": format!("List {collection}"),
                 "responses": { "200": { "description": "OK" } } },
        "post": { "tags": [tag], "summary": format!("Create one of {collection}"),
                  "security": [{ "session": [] }],
                  "responses": { "201": { "description": "Created" },
                                 "400": { "description": "Validation failed" } } }
    });
    paths[format!("/{collection}/{{id}}")] = json!({
        "get": { "tags": [tag], "summary": "Fetch by id",
                 "responses": { "200": { "description": "OK" },
                                "404": { "description": "Not found" } } },
        "patch": { "tags": [tag], "summary": "Update by id",
                   "security": [{ "session": [] }],
                   "responses": { "200": { "description": "OK" },
                                  "404": { "description": "Not found" } } },
        "delete": { "tags": [tag], "summary": "Delete by id",
                    "security": [{ "session": [] }],
                    "responses": { "204": { "description": "Deleted" },
                                   "404": { "description": "Not found" } } }
    });
}

fn build_document() -> Value {
    let mut doc = json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Portfolio API",
            "description": "Backend for the portfolio site: content CRUD, OTP login, contact and hire flows, analytics.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "components": {
            "securitySchemes": {
                "session": {
                    "type": "apiKey",
                    "in": "cookie",
                    "name": "access_token",
                    "description": "HTTP-only session cookie set by /auth/verify-otp. A Bearer token is accepted as well."
                }
            }
        },
        "paths": {
            "/auth/login": { "post": {
                "tags": ["auth"], "summary": "Password check, then email an OTP",
                "responses": { "200": { "description": "OTP sent" },
                               "401": { "description": "Invalid credentials" } } } },
            "/auth/verify-otp": { "post": {
                "tags": ["auth"], "summary": "Exchange the OTP for a session",
                "responses": { "200": { "description": "Session issued; cookie set" },
                               "400": { "description": "No active or expired code" },
                               "401": { "description": "Wrong code" } } } },
            "/auth/resend-otp": { "post": {
                "tags": ["auth"], "summary": "Issue a fresh OTP, superseding the prior one",
                "responses": { "200": { "description": "OTP sent" } } } },
            "/profile": {
                "get": { "tags": ["profile"], "summary": "Fetch the profile singleton",
                         "responses": { "200": { "description": "OK" } } },
                "patch": { "tags": ["profile"], "summary": "Upsert the profile singleton",
                           "security": [{ "session": [] }],
                           "responses": { "200": { "description": "OK" } } } },
            "/messages": {
                "get": { "tags": ["messages"], "summary": "List messages",
                         "security": [{ "session": [] }],
                         "responses": { "200": { "description": "OK" } } },
                "post": { "tags": ["messages"], "summary": "Leave a message (public)",
                          "responses": { "201": { "description": "Created; emails enqueued" } } } },
            "/messages/{id}/status": { "patch": {
                "tags": ["messages"], "summary": "Move a message between unread/read/archived",
                "security": [{ "session": [] }],
                "responses": { "200": { "description": "OK" } } } },
            "/hire-requests": {
                "get": { "tags": ["hire"], "summary": "List hire requests",
                         "security": [{ "session": [] }],
                         "responses": { "200": { "description": "OK" } } },
                "post": { "tags": ["hire"], "summary": "Open a hire request (public)",
                          "responses": { "201": { "description": "Created in `inprocess`" } } } },
            "/hire-requests/{id}": {
                "get": { "tags": ["hire"], "summary": "Fetch with attached files",
                         "security": [{ "session": [] }],
                         "responses": { "200": { "description": "OK" } } },
                "patch": { "tags": ["hire"], "summary": "Complete the form (public); first completion flips status to `unread` and emails both sides",
                           "responses": { "200": { "description": "OK" } } },
                "delete": { "tags": ["hire"], "summary": "Delete with its CDN files",
                            "security": [{ "session": [] }],
                            "responses": { "204": { "description": "Deleted" } } } },
            "/hire-requests/{id}/status": { "patch": {
                "tags": ["hire"], "summary": "Set the request status",
                "security": [{ "session": [] }],
                "responses": { "200": { "description": "OK" } } } },
            "/hire-requests/{id}/files": { "post": {
                "tags": ["hire"], "summary": "Attach files (multipart, public)",
                "responses": { "201": { "description": "Uploaded to the CDN" } } } },
            "/analytics/track": { "post": {
                "tags": ["analytics"], "summary": "Record a page view (public, visitor cookie)",
                "responses": { "204": { "description": "Recorded" } } } },
            "/analytics/summary": { "get": {
                "tags": ["analytics"], "summary": "Site totals",
                "security": [{ "session": [] }],
                "responses": { "200": { "description": "OK" } } } },
            "/analytics/pages": { "get": {
                "tags": ["analytics"], "summary": "Per-page views and unique visitors",
                "security": [{ "session": [] }],
                "responses": { "200": { "description": "OK" } } } },
            "/analytics/dashboard": { "get": {
                "tags": ["analytics"], "summary": "Totals plus per-page stats",
                "security": [{ "session": [] }],
                "responses": { "200": { "description": "OK" } } } },
            "/uploads": { "post": {
                "tags": ["uploads"], "summary": "Upload a file to the CDN (multipart)",
                "security": [{ "session": [] }],
                "responses": { "201": { "description": "Uploaded" } } } },
            "/uploads/{publicId}": { "delete": {
                "tags": ["uploads"], "summary": "Delete a CDN file",
                "security": [{ "session": [] }],
                "responses": { "204": { "description": "Deleted" } } } },
            "/users": {
                "get": { "tags": ["users"], "summary": "List users",
                         "security": [{ "session": [] }],
                         "responses": { "200": { "description": "OK" } } },
                "post": { "tags": ["users"], "summary": "Register (public)",
                          "responses": { "201": { "description": "Created; welcome email enqueued" },
                                         "409": { "description": "Email already registered" } } } },
            "/users/{id}": {
                "get": { "tags": ["users"], "summary": "Fetch by id",
                         "security": [{ "session": [] }],
                         "responses": { "200": { "description": "OK" } } },
                "patch": { "tags": ["users"], "summary": "Update by id",
                           "security": [{ "session": [] }],
                           "responses": { "200": { "description": "OK" } } },
                "delete": { "tags": ["users"], "summary": "Delete by id",
                            "security": [{ "session": [] }],
                            "responses": { "204": { "description": "Deleted" } } } },
        }
    });

    for (collection, tag) in [
        ("projects", "projects"),
        ("blogs", "blogs"),
        ("experiences", "experiences"),
        ("educations", "educations"),
        ("awards", "awards"),
        ("reviews", "reviews"),
        ("faqs", "faqs"),
        ("services", "services"),
        ("socials", "socials"),
        ("npm-packages", "npm-packages"),
        ("skills", "skills"),
    ] {
        crud_paths(&mut doc, collection, tag);
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_every_resource_collection() {
        let doc = build_document();
        let paths = doc["paths"].as_object().unwrap();
        for collection in [
            "/projects",
            "/blogs",
            "/experiences",
            "/educations",
            "/awards",
            "/reviews",
            "/faqs",
            "/services",
            "/socials",
            "/npm-packages",
            "/skills",
            "/auth/login",
            "/hire-requests",
            "/analytics/track",
        ] {
            assert!(paths.contains_key(collection), "missing {collection}");
        }
    }

    #[test]
    fn should_embed_the_swagger_bootstrap() {
        assert!(DOCS_PAGE.contains(r##"dom_id: "#swagger-ui""##));
        assert!(DOCS_PAGE.contains(r#"url: "openapi.json""#));
        assert!(DOCS_PAGE.trim_end().ends_with("</html>"));
    }

    #[test]
    fn should_mark_writes_as_session_protected() {
        let doc = build_document();
        let create = &doc["paths"]["/projects"]["post"];
        assert_eq!(create["security"][0]["session"], json!([]));
        // Public endpoints carry no security requirement.
        assert!(doc["paths"]["/auth/login"]["post"]["security"].is_null());
    }
}
