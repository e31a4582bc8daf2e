//! Response Envelope
//!
//! Every API answer is a JSON object carrying a success flag and, on
//! failure, a human-readable message. Shared by the native and web clients.

use serde_json::Value;

/// Success flag of an envelope: `success: true`, or `status: "success"`
/// on the account endpoints. An envelope with neither flag counts as
/// success since the HTTP status already passed.
pub fn is_success(body: &Value) -> bool {
    if let Some(flag) = body.get("success").and_then(Value::as_bool) {
        return flag;
    }
    match body.get("status").and_then(Value::as_str) {
        Some(status) => status.eq_ignore_ascii_case("success"),
        None => true,
    }
}

/// Server message, looked up as `message`, then `error`, then `detail`
pub fn message_of(body: &Value) -> Option<String> {
    ["message", "error", "detail"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_flags() {
        assert!(is_success(&json!({"success": true})));
        assert!(!is_success(&json!({"success": false, "message": "no"})));
        assert!(is_success(&json!({"status": "success", "token": "t"})));
        assert!(is_success(&json!({"status": "SUCCESS"})));
        assert!(!is_success(&json!({"status": "failed"})));
        assert!(is_success(&json!({"posts": []})));
    }

    #[test]
    fn test_message_lookup_order() {
        assert_eq!(message_of(&json!({"message": "a", "error": "b"})).as_deref(), Some("a"));
        assert_eq!(message_of(&json!({"error": "b", "detail": "c"})).as_deref(), Some("b"));
        assert_eq!(message_of(&json!({"detail": "Invalid token."})).as_deref(), Some("Invalid token."));
        assert_eq!(message_of(&json!({"message": 3})), None);
        assert_eq!(message_of(&json!({})), None);
    }
}
