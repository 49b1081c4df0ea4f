use crate::db::db_service::DbService;
use crate::types::{error::AppError, item::ItemPayload};
use entity::item::{ActiveModel as ItemActive, Entity as ItemData, Model as ItemModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, QuerySelect, Set};
use tracing::debug;

// sqlite binds offset/limit as signed integers
fn clamp_bound(value: u64) -> u64 {
    value.min(i64::MAX as u64)
}

impl DbService {
    pub async fn list_items(&self, skip: u64, limit: u64) -> Result<Vec<ItemModel>, AppError> {
        Ok(ItemData::find()
            .order_by_asc(entity::item::Column::Id)
            .offset(clamp_bound(skip))
            .limit(clamp_bound(limit))
            .all(&self.database_connection)
            .await?)
    }

    pub async fn create_item(&self, payload: ItemPayload) -> Result<ItemModel, AppError> {
        let item = ItemActive {
            title: Set(payload.title),
            description: Set(payload.description),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;

        debug!(item_id = item.id, "item created");
        Ok(item)
    }

    pub async fn get_item(&self, id: i32) -> Result<ItemModel, AppError> {
        ItemData::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound("Item"))
    }

    // Read then a single-statement write; concurrent writers are left to the
    // engine's own statement-level locking.
    pub async fn update_item(&self, id: i32, payload: ItemPayload) -> Result<ItemModel, AppError> {
        let current = self.get_item(id).await?;

        let mut am: ItemActive = current.into();
        am.title = Set(payload.title);
        am.description = Set(payload.description);
        let updated = am.update(&self.database_connection).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => AppError::NotFound("Item"),
            other => other.into(),
        })?;

        debug!(item_id = id, "item updated");
        Ok(updated)
    }

    /// Removes the row and hands back its last state.
    pub async fn delete_item(&self, id: i32) -> Result<ItemModel, AppError> {
        let snapshot = self.get_item(id).await?;

        let res = ItemData::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Item"));
        }

        debug!(item_id = id, "item deleted");
        Ok(snapshot)
    }
}
