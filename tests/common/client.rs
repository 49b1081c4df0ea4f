use actix_web::{web, App};
use std::sync::Arc;
use item_auth::{
    db::DbService,
    types::error::AppError,
    utils::password::hash_password,
};

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(item_auth::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str, password: &str) -> Result<i32, AppError> {
        let hashed = hash_password(password)?;
        let user = self.db.create_user(username.to_string(), hashed).await?;
        Ok(user.id)
    }
}
