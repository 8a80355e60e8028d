use std::collections::HashMap;

use rusoto_dynamodb::AttributeValue;
use serde_json::{Map, Number, Value};

use crate::error::TableApiError;

pub fn to_attribute_map(
    object: Map<String, Value>,
) -> Result<HashMap<String, AttributeValue>, TableApiError> {
    let mut attributes = HashMap::with_capacity(object.len());
    for (name, value) in object {
        attributes.insert(name, to_attribute_value(value)?);
    }
    Ok(attributes)
}

pub fn to_attribute_value(value: Value) -> Result<AttributeValue, TableApiError> {
    let attribute = match value {
        Value::Null => AttributeValue {
            null: Some(true),
            ..AttributeValue::default()
        },
        Value::Bool(flag) => AttributeValue {
            bool: Some(flag),
            ..AttributeValue::default()
        },
        Value::Number(number) => AttributeValue {
            n: Some(number.to_string()),
            ..AttributeValue::default()
        },
        Value::String(text) => AttributeValue {
            s: Some(text),
            ..AttributeValue::default()
        },
        Value::Array(values) => AttributeValue {
            l: Some(
                values
                    .into_iter()
                    .map(to_attribute_value)
                    .collect::<Result<Vec<AttributeValue>, TableApiError>>()?,
            ),
            ..AttributeValue::default()
        },
        Value::Object(object) => AttributeValue {
            m: Some(to_attribute_map(object)?),
            ..AttributeValue::default()
        },
    };
    Ok(attribute)
}

pub fn from_attribute_map(
    attributes: HashMap<String, AttributeValue>,
) -> Result<Value, TableApiError> {
    let mut object = Map::new();
    for (name, attribute) in attributes {
        object.insert(name, from_attribute_value(attribute)?);
    }
    Ok(Value::Object(object))
}

pub fn from_attribute_value(attribute: AttributeValue) -> Result<Value, TableApiError> {
    if let Some(text) = attribute.s {
        return Ok(Value::String(text));
    }
    if let Some(number) = attribute.n {
        return Ok(Value::Number(parse_number(&number)?));
    }
    if let Some(flag) = attribute.bool {
        return Ok(Value::Bool(flag));
    }
    if attribute.null.unwrap_or(false) {
        return Ok(Value::Null);
    }
    if let Some(object) = attribute.m {
        return from_attribute_map(object);
    }
    if let Some(values) = attribute.l {
        return Ok(Value::Array(
            values
                .into_iter()
                .map(from_attribute_value)
                .collect::<Result<Vec<Value>, TableApiError>>()?,
        ));
    }
    if let Some(texts) = attribute.ss {
        return Ok(Value::Array(texts.into_iter().map(Value::String).collect()));
    }
    if let Some(numbers) = attribute.ns {
        let mut values = Vec::with_capacity(numbers.len());
        for number in numbers {
            values.push(Value::Number(parse_number(&number)?));
        }
        return Ok(Value::Array(values));
    }
    if let Some(binary) = attribute.b {
        return Ok(Value::String(base64::encode(&binary)));
    }
    if let Some(binaries) = attribute.bs {
        return Ok(Value::Array(
            binaries
                .iter()
                .map(|binary| Value::String(base64::encode(binary)))
                .collect(),
        ));
    }
    Err(TableApiError::InvalidAttribute(
        "attribute value has no data".to_string(),
    ))
}

fn parse_number(number: &str) -> Result<Number, TableApiError> {
    if let Ok(integer) = number.parse::<i64>() {
        return Ok(Number::from(integer));
    }
    if let Ok(unsigned) = number.parse::<u64>() {
        return Ok(Number::from(unsigned));
    }
    number
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| TableApiError::InvalidAttribute(format!("unparseable number: {}", number)))
}

#[cfg(test)]
mod tests {
    use crate::attribute::{
        from_attribute_map, from_attribute_value, to_attribute_map, to_attribute_value,
    };
    use crate::error::TableApiError;
    use rusoto_dynamodb::AttributeValue;
    use serde_json::{json, Value};

    fn as_object(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(object) => object,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_to_attribute_value_scalars() {
        assert_eq!(
            to_attribute_value(json!("1234ABCD")).unwrap(),
            AttributeValue {
                s: Some("1234ABCD".to_string()),
                ..AttributeValue::default()
            }
        );
        assert_eq!(
            to_attribute_value(json!(5)).unwrap(),
            AttributeValue {
                n: Some("5".to_string()),
                ..AttributeValue::default()
            }
        );
        assert_eq!(
            to_attribute_value(json!(1.5)).unwrap(),
            AttributeValue {
                n: Some("1.5".to_string()),
                ..AttributeValue::default()
            }
        );
        assert_eq!(
            to_attribute_value(json!(true)).unwrap(),
            AttributeValue {
                bool: Some(true),
                ..AttributeValue::default()
            }
        );
        assert_eq!(
            to_attribute_value(Value::Null).unwrap(),
            AttributeValue {
                null: Some(true),
                ..AttributeValue::default()
            }
        );
    }

    #[test]
    fn test_round_trip_document() {
        let document = json!({
            "id": "1234ABCD",
            "number": 5,
            "active": true,
            "comment": null,
            "tags": ["a", "b"],
            "nested": {"depth": 2, "values": [1, 2.5]}
        });

        let attributes = to_attribute_map(as_object(document.clone())).unwrap();
        let restored = from_attribute_map(attributes).unwrap();

        assert_eq!(restored, document);
    }

    #[test]
    fn test_from_attribute_value_number_parsing() {
        let integer = AttributeValue {
            n: Some("42".to_string()),
            ..AttributeValue::default()
        };
        assert_eq!(from_attribute_value(integer).unwrap(), json!(42));

        let float = AttributeValue {
            n: Some("3.5".to_string()),
            ..AttributeValue::default()
        };
        assert_eq!(from_attribute_value(float).unwrap(), json!(3.5));

        let unsigned = AttributeValue {
            n: Some("18446744073709551615".to_string()),
            ..AttributeValue::default()
        };
        assert_eq!(
            from_attribute_value(unsigned).unwrap(),
            json!(18446744073709551615u64)
        );

        let invalid = AttributeValue {
            n: Some("not-a-number".to_string()),
            ..AttributeValue::default()
        };
        assert_eq!(
            from_attribute_value(invalid).err().unwrap(),
            TableApiError::InvalidAttribute("unparseable number: not-a-number".to_string())
        );
    }

    #[test]
    fn test_from_attribute_value_sets() {
        let string_set = AttributeValue {
            ss: Some(vec!["a".to_string(), "b".to_string()]),
            ..AttributeValue::default()
        };
        assert_eq!(from_attribute_value(string_set).unwrap(), json!(["a", "b"]));

        let number_set = AttributeValue {
            ns: Some(vec!["1".to_string(), "2.5".to_string()]),
            ..AttributeValue::default()
        };
        assert_eq!(from_attribute_value(number_set).unwrap(), json!([1, 2.5]));
    }

    #[test]
    fn test_from_attribute_value_binary() {
        let binary = AttributeValue {
            b: Some(b"hello".as_ref().into()),
            ..AttributeValue::default()
        };
        assert_eq!(from_attribute_value(binary).unwrap(), json!("aGVsbG8="));
    }

    #[test]
    fn test_from_attribute_value_empty() {
        let result = from_attribute_value(AttributeValue::default());
        assert_eq!(
            result.err().unwrap(),
            TableApiError::InvalidAttribute("attribute value has no data".to_string())
        );
    }
}
