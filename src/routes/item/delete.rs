use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::DbService;
use crate::types::item::Item;
use crate::types::response::{ApiResponse, ApiResult};

// Responds with the row as it was right before removal.
#[delete("/{item_id}")]
async fn delete_item(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    item_id: web::Path<i32>,
) -> ApiResult<Item> {
    let item = db.delete_item(item_id.into_inner()).await?;
    Ok(ApiResponse::Ok(item))
}
