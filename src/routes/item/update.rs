use actix_web::{put, web};
use std::sync::Arc;

use crate::db::DbService;
use crate::types::item::{Item, ItemPayload};
use crate::types::response::{ApiResponse, ApiResult};

#[put("/{item_id}")]
async fn update_item(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    item_id: web::Path<i32>,
    data: web::Json<ItemPayload>,
) -> ApiResult<Item> {
    let item = db.update_item(item_id.into_inner(), data.into_inner()).await?;
    Ok(ApiResponse::Ok(item))
}
