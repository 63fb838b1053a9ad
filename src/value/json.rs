//! Conversion from JSON documents.

use super::{List, Object, Value};
use serde_json::Value as Json;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::from(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect::<List>()),
            Json::Object(fields) => Value::Object(Object::from_fields(
                fields.into_iter().map(|(k, v)| (k, Value::from(v))),
            )),
        }
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        Value::from(json.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert!(matches!(Value::from(json!(null)), Value::Null));
        assert!(matches!(Value::from(json!(true)), Value::Bool(true)));
        assert_eq!(Value::from(json!(4624)).as_number(), Some(4624.0));
        assert_eq!(Value::from(json!("4624")).as_text(), Some("4624"));
    }

    #[test]
    fn test_nested_document() {
        let event = json!({
            "EventID": 4624,
            "Users": [{"Name": "Alice"}, {"Name": "Bob"}]
        });
        let value = Value::from(&event);
        assert_eq!(value.kind(), Kind::Structural);

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        let users = object.get("Users").unwrap();
        let users = users.as_list().unwrap();
        assert_eq!(users.len(), 2);
        let bob = users.get(1);
        assert_eq!(
            bob.as_object().unwrap().get("Name").unwrap().as_text(),
            Some("Bob")
        );
    }
}
