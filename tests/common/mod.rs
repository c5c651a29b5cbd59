//! Shared fixtures for integration tests
//!
//! Conversation payloads are reduced versions of a real gateway response;
//! only the fields the board pipeline reads are kept.

#![allow(dead_code)]

use serde_json::{json, Value};

use deskboard::config::GatewayConfig;
use deskboard::credentials::Session;
use deskboard::gateway::HttpGateway;

/// Account id used across the integration suite
pub const ACCOUNT_ID: &str = "74";

/// Access token used across the integration suite
pub const TOKEN: &str = "test-token";

/// A minimal conversation payload with the given id and status
pub fn conversation_json(id: u64, status: &str) -> Value {
    json!({
        "id": id,
        "account_id": 74,
        "status": status,
        "created_at": 1754567203,
        "meta": {
            "sender": {
                "name": format!("Contact {}", id),
                "email": null,
                "phone_number": "+553131576027"
            }
        },
        "messages": [{
            "id": id * 1000,
            "content": format!("message for {}", id),
            "processed_message_content": format!("message for {}", id),
            "created_at": 1758986898,
            "sender_type": "Contact"
        }]
    })
}

/// Wrap a list in the nested `data.payload` envelope
pub fn envelope_data_payload(list: Vec<Value>) -> Value {
    json!({ "data": { "meta": { "all_count": list.len() }, "payload": list } })
}

/// Wrap a list in the flat `data` envelope
pub fn envelope_data(list: Vec<Value>) -> Value {
    json!({ "data": list })
}

/// Wrap a list in the flat `payload` envelope
pub fn envelope_payload(list: Vec<Value>) -> Value {
    json!({ "payload": list })
}

/// Gateway client pointed at a mock server
pub fn make_gateway(base_url: &str) -> HttpGateway {
    let config = GatewayConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
    };
    let session = Session {
        access_token: TOKEN.to_string(),
        account_id: ACCOUNT_ID.to_string(),
    };
    HttpGateway::new(&config, session).expect("gateway construction")
}
