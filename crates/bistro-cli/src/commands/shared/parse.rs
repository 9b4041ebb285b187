use anyhow::Context;
use bistro_core::errors::ValidationError;
use serde_json::Value;

/// Parse a `--data` argument.
///
/// Accepts a bare record object or one wrapped under `envelope`
/// (`{"employee": {...}}`), matching what the commands print.
pub fn parse_payload(raw: &str, envelope: &str) -> anyhow::Result<Value> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|_| ValidationError::new("data", "must be valid JSON"))
        .with_context(|| format!("invalid --data JSON: {raw}"))?;
    Ok(match value {
        Value::Object(mut map)
            if map.len() == 1 && map.get(envelope).is_some_and(Value::is_object) =>
        {
            map.remove(envelope).unwrap_or_default()
        }
        other => other,
    })
}

/// Force the parent id of a scoped payload, overriding any id it carries.
///
/// Non-object payloads are left alone for record validation to reject.
pub fn with_scope(mut payload: Value, key: &str, id: i64) -> Value {
    if let Value::Object(map) = &mut payload {
        map.insert(key.to_string(), Value::from(id));
    }
    payload
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{parse_payload, with_scope};

    #[test]
    fn parses_bare_object() {
        let value = parse_payload(r#"{"title":"Brunch"}"#, "menu").expect("should parse");
        assert_eq!(value, json!({ "title": "Brunch" }));
    }

    #[test]
    fn unwraps_envelope() {
        let value =
            parse_payload(r#"{"menu":{"title":"Brunch"}}"#, "menu").expect("should parse");
        assert_eq!(value, json!({ "title": "Brunch" }));
    }

    #[test]
    fn errors_on_invalid_json() {
        let err = parse_payload("{title", "menu").expect_err("should fail");
        assert!(err.to_string().contains("invalid --data JSON"));
    }

    #[test]
    fn scope_overrides_payload_parent() {
        let scoped = with_scope(json!({ "hours": 1, "employeeId": 9 }), "employeeId", 2);
        assert_eq!(scoped, json!({ "hours": 1, "employeeId": 2 }));

        assert_eq!(with_scope(json!([1]), "employeeId", 2), json!([1]));
    }
}
