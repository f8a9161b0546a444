//! Alert header pairs attached to successful mutating responses, for
//! client-side notification display. Header names and message keys are a
//! UI convention, not part of the API contract.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

const APPLICATION_NAME: &str = "friendsApi";

const ALERT_HEADER: HeaderName = HeaderName::from_static("x-friends-api-alert");
const PARAMS_HEADER: HeaderName = HeaderName::from_static("x-friends-api-params");

fn alert_headers(message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(message) {
        headers.insert(ALERT_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(param) {
        headers.insert(PARAMS_HEADER, value);
    }
    headers
}

pub fn entity_creation_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert_headers(
        &format!("{APPLICATION_NAME}.{entity_name}.created"),
        &id.to_string(),
    )
}

pub fn entity_update_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert_headers(
        &format!("{APPLICATION_NAME}.{entity_name}.updated"),
        &id.to_string(),
    )
}

pub fn entity_deletion_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert_headers(
        &format!("{APPLICATION_NAME}.{entity_name}.deleted"),
        &id.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_alert_carries_message_key_and_id() {
        let headers = entity_creation_alert("friends", 42);
        assert_eq!(
            headers.get("x-friends-api-alert").unwrap(),
            "friendsApi.friends.created"
        );
        assert_eq!(headers.get("x-friends-api-params").unwrap(), "42");
    }
}
