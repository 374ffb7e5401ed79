use mongodb::{Client, Database};

use crate::config::AppConfig;

const EXPECTED_COLLECTIONS: [&str; 4] = ["teams", "players", "matches", "news"];

pub async fn get_db_client(config: &AppConfig) -> Database {
    let client = Client::with_uri_str(&config.database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&config.database_name);

    // Verify the database is reachable by listing collections
    match db.list_collection_names().await {
        Ok(collections) => {
            tracing::info!("✅ Connected to database: {}", config.database_name);
            tracing::info!("📂 Collections found: {:?}", collections);

            for name in EXPECTED_COLLECTIONS {
                if !collections.iter().any(|c| c == name) {
                    tracing::warn!("⚠️ Collection '{}' not found in database", name);
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Database '{}' may not exist or is inaccessible: {}",
                config.database_name,
                e
            );
        }
    }

    db
}
