mod attribute;
mod dynamo_table_client;
mod error;
mod handler;
mod request;

use lambda_runtime::{handler_fn, Context, Error};
use rusoto_core::Region;
use serde_json::Value;
use tracing::info;

use crate::dynamo_table_client::DynamoTableClient;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        // CloudWatch stamps ingestion time on every line.
        .without_time()
        .init();

    let client = DynamoTableClient::new(dynamo_region());
    info!("table api handler starting");

    lambda_runtime::run(handler_fn(move |event: Value, _context: Context| {
        let client = client.clone();
        async move {
            let response = handler::dispatch(&client, event).await?;
            Ok::<Value, Error>(response)
        }
    }))
    .await?;
    Ok(())
}

// DYNAMODB_ENDPOINT points the client at DynamoDB Local.
fn dynamo_region() -> Region {
    match std::env::var("DYNAMODB_ENDPOINT") {
        Ok(endpoint) => Region::Custom {
            name: Region::default().name().to_string(),
            endpoint,
        },
        Err(_) => Region::default(),
    }
}
