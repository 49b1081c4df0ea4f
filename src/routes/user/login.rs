use actix_web::{post, web};
use std::sync::Arc;
use tracing::debug;

use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenRes;
use crate::types::user::Credentials;
use crate::utils::{password::verify_password, token::issue_token};

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    form: web::Form<Credentials>,
) -> ApiResult<TokenRes> {
    let Credentials { username, password } = form.into_inner();

    // Unknown user and wrong password must be indistinguishable to the caller.
    let Some(user) = db.get_user_by_username(&username).await? else {
        debug!("login rejected: unknown user");
        return Err(AppError::InvalidCredentials);
    };

    let hash = user.hashed_password.clone();
    if !web::block(move || verify_password(&password, &hash)).await?? {
        debug!(user_id = user.id, "login rejected: bad password");
        return Err(AppError::InvalidCredentials);
    }

    Ok(ApiResponse::Ok(issue_token(&user)))
}
