use std::collections::HashMap;

use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_dynamodb::{
    AttributeValue, DeleteItemInput, DynamoDb, DynamoDbClient, GetItemInput, PutItemInput,
    ScanInput, UpdateItemInput,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::attribute::{from_attribute_map, to_attribute_map};
use crate::error::TableApiError;

#[derive(Clone)]
pub struct DynamoTableClient {
    client: DynamoDbClient,
}

#[async_trait]
pub trait ItemStore {
    async fn create(&self, table_name: &str, payload: Value) -> Result<Value, TableApiError>;
    async fn read(&self, table_name: &str, payload: Value) -> Result<Value, TableApiError>;
    async fn update(&self, table_name: &str, payload: Value) -> Result<Value, TableApiError>;
    async fn delete(&self, table_name: &str, payload: Value) -> Result<Value, TableApiError>;
    async fn list(&self, table_name: &str, payload: Value) -> Result<Value, TableApiError>;
}

#[async_trait]
impl ItemStore for DynamoTableClient {
    async fn create(&self, table_name: &str, payload: Value) -> Result<Value, TableApiError> {
        let params: PutParams = parse_params(payload)?;
        let input = PutItemInput {
            table_name: table_name.to_string(),
            item: to_attribute_map(params.item)?,
            condition_expression: params.condition_expression,
            expression_attribute_names: params.expression_attribute_names,
            expression_attribute_values: convert_values(params.expression_attribute_values)?,
            return_values: params.return_values,
            ..PutItemInput::default()
        };
        let output = self.client.put_item(input).await?;
        attributes_response(output.attributes)
    }

    async fn read(&self, table_name: &str, payload: Value) -> Result<Value, TableApiError> {
        let params: GetParams = parse_params(payload)?;
        let input = GetItemInput {
            table_name: table_name.to_string(),
            key: to_attribute_map(params.key)?,
            projection_expression: params.projection_expression,
            expression_attribute_names: params.expression_attribute_names,
            consistent_read: params.consistent_read,
            ..GetItemInput::default()
        };
        let output = self.client.get_item(input).await?;
        match output.item {
            Some(item) => Ok(json!({ "Item": from_attribute_map(item)? })),
            None => Ok(json!({})),
        }
    }

    async fn update(&self, table_name: &str, payload: Value) -> Result<Value, TableApiError> {
        let params: UpdateParams = parse_params(payload)?;
        let input = UpdateItemInput {
            table_name: table_name.to_string(),
            key: to_attribute_map(params.key)?,
            update_expression: params.update_expression,
            condition_expression: params.condition_expression,
            expression_attribute_names: params.expression_attribute_names,
            expression_attribute_values: convert_values(params.expression_attribute_values)?,
            return_values: params.return_values,
            ..UpdateItemInput::default()
        };
        let output = self.client.update_item(input).await?;
        attributes_response(output.attributes)
    }

    async fn delete(&self, table_name: &str, payload: Value) -> Result<Value, TableApiError> {
        let params: DeleteParams = parse_params(payload)?;
        let input = DeleteItemInput {
            table_name: table_name.to_string(),
            key: to_attribute_map(params.key)?,
            condition_expression: params.condition_expression,
            expression_attribute_names: params.expression_attribute_names,
            expression_attribute_values: convert_values(params.expression_attribute_values)?,
            return_values: params.return_values,
            ..DeleteItemInput::default()
        };
        let output = self.client.delete_item(input).await?;
        attributes_response(output.attributes)
    }

    async fn list(&self, table_name: &str, payload: Value) -> Result<Value, TableApiError> {
        let params: ScanParams = parse_params(payload)?;
        let input = ScanInput {
            table_name: table_name.to_string(),
            limit: params.limit,
            exclusive_start_key: convert_values(params.exclusive_start_key)?,
            filter_expression: params.filter_expression,
            projection_expression: params.projection_expression,
            expression_attribute_names: params.expression_attribute_names,
            expression_attribute_values: convert_values(params.expression_attribute_values)?,
            consistent_read: params.consistent_read,
            ..ScanInput::default()
        };
        let output = self.client.scan(input).await?;

        let mut items = Vec::new();
        for item in output.items.unwrap_or_default() {
            items.push(from_attribute_map(item)?);
        }
        let count = output.count.unwrap_or(items.len() as i64);
        let scanned_count = output.scanned_count.unwrap_or(count);

        let mut response = Map::new();
        response.insert("Items".to_string(), Value::Array(items));
        response.insert("Count".to_string(), json!(count));
        response.insert("ScannedCount".to_string(), json!(scanned_count));
        if let Some(last_evaluated_key) = output.last_evaluated_key {
            response.insert(
                "LastEvaluatedKey".to_string(),
                from_attribute_map(last_evaluated_key)?,
            );
        }
        Ok(Value::Object(response))
    }
}

impl DynamoTableClient {
    pub fn new(region: Region) -> Self {
        DynamoTableClient {
            client: DynamoDbClient::new(region),
        }
    }

    pub fn new_with_client(client: DynamoDbClient) -> Self {
        DynamoTableClient { client }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PutParams {
    item: Map<String, Value>,
    condition_expression: Option<String>,
    expression_attribute_names: Option<HashMap<String, String>>,
    expression_attribute_values: Option<Map<String, Value>>,
    return_values: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetParams {
    key: Map<String, Value>,
    projection_expression: Option<String>,
    expression_attribute_names: Option<HashMap<String, String>>,
    consistent_read: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct UpdateParams {
    key: Map<String, Value>,
    update_expression: Option<String>,
    condition_expression: Option<String>,
    expression_attribute_names: Option<HashMap<String, String>>,
    expression_attribute_values: Option<Map<String, Value>>,
    return_values: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DeleteParams {
    key: Map<String, Value>,
    condition_expression: Option<String>,
    expression_attribute_names: Option<HashMap<String, String>>,
    expression_attribute_values: Option<Map<String, Value>>,
    return_values: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ScanParams {
    limit: Option<i64>,
    exclusive_start_key: Option<Map<String, Value>>,
    filter_expression: Option<String>,
    projection_expression: Option<String>,
    expression_attribute_names: Option<HashMap<String, String>>,
    expression_attribute_values: Option<Map<String, Value>>,
    consistent_read: Option<bool>,
}

fn parse_params<T: DeserializeOwned>(payload: Value) -> Result<T, TableApiError> {
    serde_json::from_value(payload).map_err(|error| TableApiError::InvalidPayload(error.to_string()))
}

fn convert_values(
    values: Option<Map<String, Value>>,
) -> Result<Option<HashMap<String, AttributeValue>>, TableApiError> {
    values.map(to_attribute_map).transpose()
}

fn attributes_response(
    attributes: Option<HashMap<String, AttributeValue>>,
) -> Result<Value, TableApiError> {
    match attributes {
        Some(attributes) => Ok(json!({ "Attributes": from_attribute_map(attributes)? })),
        None => Ok(json!({})),
    }
}
