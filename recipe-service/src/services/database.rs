use crate::config::MongoConfig;
use mongodb::{bson::doc, options::ClientOptions, Client as MongoClient, Database};
use service_core::error::AppError;

/// Name of the only collection this service touches.
pub const RECIPES_COLLECTION: &str = "recipes";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Build the shared client and ping the primary. An unreachable server is
    /// an error here rather than on the first request.
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        tracing::info!(database = %config.database, "Connecting to MongoDB");

        let mut client_options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.server_selection_timeout = Some(config.timeout());
        client_options.connect_timeout = Some(config.timeout());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(&config.database);

        let mongo = Self { client, db };
        mongo.health_check().await?;

        tracing::info!(database = %config.database, "Successfully connected to MongoDB database");
        Ok(mongo)
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
