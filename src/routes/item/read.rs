use actix_web::{get, web};
use std::sync::Arc;

use crate::db::DbService;
use crate::types::item::Item;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{item_id}")]
async fn read_item(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    item_id: web::Path<i32>,
) -> ApiResult<Item> {
    let item = db.get_item(item_id.into_inner()).await?;
    Ok(ApiResponse::Ok(item))
}
