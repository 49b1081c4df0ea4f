use std::sync::Arc;
use item_auth::db::DbService;
use tempfile::TempDir;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
    pub _dir: Option<TempDir>,
}

impl TestContext {
    /// Fresh in-memory database per test. One pooled connection keeps every
    /// query on the same memory database.
    pub async fn new() -> TestContext {
        let db = Arc::new(
            DbService::new("sqlite::memory:", 1)
                .await
                .expect("Failed to initialize DbService")
        );

        TestContext { db, _dir: None }
    }

    /// On-disk database with a real pool, for tests that need several
    /// connections writing at once.
    #[allow(dead_code)]
    pub async fn file_backed(max_connections: u32) -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("items.db").display());

        let db = Arc::new(
            DbService::new(&db_url, max_connections)
                .await
                .expect("Failed to initialize DbService")
        );

        TestContext { db, _dir: Some(dir) }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use item_auth::types::{item::ItemPayload, user::Credentials};

    pub fn item(title: &str, description: &str) -> ItemPayload {
        ItemPayload {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}
