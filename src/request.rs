use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    List,
    Echo,
    Ping,
}

impl Operation {
    pub fn from_tag(tag: &str) -> Option<Operation> {
        match tag {
            "create" => Some(Operation::Create),
            "read" => Some(Operation::Read),
            "update" => Some(Operation::Update),
            "delete" => Some(Operation::Delete),
            "list" => Some(Operation::List),
            "echo" => Some(Operation::Echo),
            "ping" => Some(Operation::Ping),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RequestEvent {
    pub operation: String,
    #[serde(rename = "tableName")]
    pub table_name: Option<String>,
    pub payload: Option<Value>,
}

#[cfg(test)]
mod tests {
    use crate::request::{Operation, RequestEvent};
    use serde_json::json;

    #[test]
    fn test_from_tag() {
        assert_eq!(Operation::from_tag("create"), Some(Operation::Create));
        assert_eq!(Operation::from_tag("read"), Some(Operation::Read));
        assert_eq!(Operation::from_tag("update"), Some(Operation::Update));
        assert_eq!(Operation::from_tag("delete"), Some(Operation::Delete));
        assert_eq!(Operation::from_tag("list"), Some(Operation::List));
        assert_eq!(Operation::from_tag("echo"), Some(Operation::Echo));
        assert_eq!(Operation::from_tag("ping"), Some(Operation::Ping));
        assert_eq!(Operation::from_tag("delete_everything"), None);
        assert_eq!(Operation::from_tag(""), None);
    }

    #[test]
    fn test_deserialize_event() {
        let event: RequestEvent = serde_json::from_value(json!({
            "operation": "read",
            "tableName": "lambda-apigateway",
            "payload": {"Key": {"id": "1234ABCD"}}
        }))
        .unwrap();

        assert_eq!(event.operation, "read");
        assert_eq!(event.table_name.as_deref(), Some("lambda-apigateway"));
        assert_eq!(event.payload, Some(json!({"Key": {"id": "1234ABCD"}})));
    }

    #[test]
    fn test_deserialize_event_without_optional_fields() {
        let event: RequestEvent = serde_json::from_value(json!({"operation": "ping"})).unwrap();

        assert_eq!(event.operation, "ping");
        assert_eq!(event.table_name, None);
        assert_eq!(event.payload, None);
    }

    #[test]
    fn test_deserialize_event_requires_operation() {
        let result = serde_json::from_value::<RequestEvent>(json!({
            "tableName": "lambda-apigateway"
        }));

        assert!(result.is_err());
    }
}
