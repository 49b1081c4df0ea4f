use actix_web::get;
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::WhoAmIRes;

// Echo only: the token is not looked up or checked.
#[get("/me")]
async fn read_users_me(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
) -> ApiResult<WhoAmIRes> {
    Ok(ApiResponse::Ok(WhoAmIRes { token: auth.token().to_string() }))
}
