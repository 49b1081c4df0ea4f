use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Pooled handle to the relational store shared by every request.
///
/// Opened once at startup and handed to the HTTP layer as app data. Each
/// statement borrows a pooled connection for its own duration only.
#[derive(Clone)]
pub struct DbService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DbService {
    pub async fn new(uri: &str, max_connections: u32) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let mut options = ConnectOptions::new(uri.to_owned());
        options
            .max_connections(max_connections.max(1))
            .min_connections(1)
            .sqlx_logging(false);

        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Connected to database.");
        Ok(Self { database_connection })
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.database_connection.ping().await
    }

    pub async fn close(self) -> Result<(), DbErr> {
        info!("Closing database pool.");
        self.database_connection.close().await
    }
}
