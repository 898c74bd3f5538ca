use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::services::database_service::sync_schema;

/// Fresh in-memory SQLite database with the schema applied. A single
/// connection keeps every query on the same memory database.
pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("in-memory sqlite should open");
    sync_schema(&db).await.expect("schema should apply");
    db
}
