
use serde_json::{json, Value};

use crate::api::ZoneAccess;
use crate::config::Config;

pub const ZONE_ID: &str = "zone123";
pub const API_KEY: &str = "test_token";

pub fn access() -> ZoneAccess {
    ZoneAccess {
        api_key: API_KEY.to_string(),
        zone_id: ZONE_ID.to_string(),
    }
}

pub fn configured() -> Config {
    Config {
        api_key: API_KEY.to_string(),
        zone_id: ZONE_ID.to_string(),
        domain: "example.com".to_string(),
        per_page: 50,
    }
}

pub fn records_path() -> String {
    format!("/zones/{}/dns_records", ZONE_ID)
}

pub fn record_json(id: &str, r#type: &str, name: &str, content: &str) -> Value {
    json!({
        "id": id,
        "type": r#type,
        "name": name,
        "content": content,
        "ttl": 1,
        "proxiable": true,
        "proxied": false
    })
}

pub fn list_page(records: Vec<Value>, page: u32, total_pages: u32) -> Value {
    let count = records.len();
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": records,
        "result_info": {
            "page": page,
            "per_page": 100,
            "count": count,
            "total_pages": total_pages
        }
    })
}

pub fn single(result: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result
    })
}

pub fn failed(messages: &[&str]) -> Value {
    let errors: Vec<Value> = messages
        .iter()
        .enumerate()
        .map(|(i, m)| json!({ "code": 1000 + i, "message": m }))
        .collect();
    json!({
        "success": false,
        "errors": errors,
        "messages": [],
        "result": null
    })
}
