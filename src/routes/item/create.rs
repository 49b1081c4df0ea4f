use actix_web::{post, web};
use std::sync::Arc;

use crate::db::DbService;
use crate::types::item::{Item, ItemPayload};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/")]
async fn create_item(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    data: web::Json<ItemPayload>,
) -> ApiResult<Item> {
    let item = db.create_item(data.into_inner()).await?;
    Ok(ApiResponse::Ok(item))
}
