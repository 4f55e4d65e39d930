//! Callable request builders for testing handlers

use actix_web::http::header;
use actix_web::test::TestRequest;
use serde_json::{json, Map, Value};

/// Builder for `POST /{name}` requests
pub struct CallableRequestBuilder {
    name: String,
    id_token: Option<String>,
    body: Option<Value>,
    raw_body: Option<String>,
}

impl CallableRequestBuilder {
    /// Request for callable `name` with a `{"data": null}` body
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id_token: None,
            body: Some(json!({ "data": null })),
            raw_body: None,
        }
    }

    /// Send `Authorization: Bearer <token>`
    #[must_use]
    pub fn with_id_token(mut self, token: &str) -> Self {
        self.id_token = Some(token.to_string());
        self
    }

    /// Wrap `data` in the request envelope
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        let mut envelope = Map::new();
        envelope.insert("data".to_string(), data);
        self.body = Some(Value::Object(envelope));
        self.raw_body = None;
        self
    }

    /// Replace the whole JSON body, envelope included
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self.raw_body = None;
        self
    }

    /// Send `payload` verbatim
    #[must_use]
    pub fn with_raw_body(mut self, payload: &str) -> Self {
        self.body = None;
        self.raw_body = Some(payload.to_string());
        self
    }

    /// Finish as an actix `TestRequest`; call `.to_request()` to hand it to a service
    #[must_use]
    pub fn build(self) -> TestRequest {
        let mut request = TestRequest::post().uri(&format!("/{}", self.name));
        if let Some(token) = self.id_token {
            request = request.insert_header((header::AUTHORIZATION, format!("Bearer {token}")));
        }
        if let Some(body) = self.body {
            request = request.set_json(body);
        } else if let Some(raw) = self.raw_body {
            request = request
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload(raw);
        }
        request
    }
}
