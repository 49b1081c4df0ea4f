use crate::db::db_service::DbService;
use crate::types::error::AppError;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use tracing::info;

impl DbService {
    pub async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.database_connection)
            .await?)
    }

    /// Signup: create user. A duplicate username is rejected, never overwritten.
    ///
    /// The pre-check gives the common case a clean error; two concurrent
    /// signups that both pass it are settled by the unique index, whose
    /// violation also surfaces as `AlreadyExists`.
    pub async fn create_user(&self, username: String, hashed_password: String) -> Result<UserModel, AppError> {
        if self.username_exists(&username).await? {
            return Err(AppError::AlreadyExists);
        }

        let user = UserActive {
            username: Set(username),
            hashed_password: Set(hashed_password),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;

        info!(user_id = user.id, "user registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Skips the username pre-check so the unique index has to reject the row.
    #[actix_web::test]
    async fn unique_index_violation_is_already_exists() {
        let db = DbService::new("sqlite::memory:", 1).await.unwrap();
        db.create_user("alice".to_string(), "hash-a".to_string()).await.unwrap();

        let err = UserActive {
            username: Set("alice".to_string()),
            hashed_password: Set("hash-b".to_string()),
            ..Default::default()
        }
        .insert(&db.database_connection)
        .await
        .unwrap_err();

        assert!(matches!(AppError::from(err), AppError::AlreadyExists));

        let stored = db.get_user_by_username("alice").await.unwrap().unwrap();
        assert_eq!(stored.hashed_password, "hash-a");
    }
}
