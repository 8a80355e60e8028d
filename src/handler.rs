use serde_json::{json, Value};
use tracing::info;

use crate::dynamo_table_client::ItemStore;
use crate::error::TableApiError;
use crate::request::{Operation, RequestEvent};

pub async fn dispatch<S>(store: &S, event: Value) -> Result<Value, TableApiError>
where
    S: ItemStore + Sync,
{
    let event: RequestEvent = serde_json::from_value(event)
        .map_err(|error| TableApiError::InvalidRequest(error.to_string()))?;
    let RequestEvent {
        operation: tag,
        table_name,
        payload,
    } = event;

    let operation = Operation::from_tag(&tag)
        .ok_or_else(|| TableApiError::UnrecognizedOperation(tag.clone()))?;
    info!(operation = %tag, "dispatching request");

    let payload = payload.unwrap_or_else(|| json!({}));
    match operation {
        Operation::Create => {
            store
                .create(require_table_name(&table_name, &tag)?, payload)
                .await
        }
        Operation::Read => {
            store
                .read(require_table_name(&table_name, &tag)?, payload)
                .await
        }
        Operation::Update => {
            store
                .update(require_table_name(&table_name, &tag)?, payload)
                .await
        }
        Operation::Delete => {
            store
                .delete(require_table_name(&table_name, &tag)?, payload)
                .await
        }
        Operation::List => {
            store
                .list(require_table_name(&table_name, &tag)?, payload)
                .await
        }
        Operation::Echo => Ok(payload),
        Operation::Ping => Ok(Value::String("pong".to_string())),
    }
}

fn require_table_name<'a>(
    table_name: &'a Option<String>,
    operation: &str,
) -> Result<&'a str, TableApiError> {
    table_name
        .as_deref()
        .ok_or_else(|| TableApiError::MissingTableName(operation.to_string()))
}
