use actix_web::{get, web};
use std::sync::Arc;

use crate::db::DbService;
use crate::types::item::{Item, ListQuery};
use crate::types::response::{ApiResponse, ApiResult};

#[get("/")]
async fn list_items(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    query: web::Query<ListQuery>,
) -> ApiResult<Vec<Item>> {
    let items = db.list_items(query.skip, query.limit).await?;
    Ok(ApiResponse::Ok(items))
}
