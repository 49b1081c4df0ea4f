use actix_web::{get, post, web, Either};
use std::sync::Arc;

use crate::db::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{Credentials, UserRes};
use crate::utils::password::hash_password;

const REGISTER_FORM: &str = r#"<html>
<body>
<h1>User registration</h1>
<form action="/register/" method="post">
<label for="username">Username:</label>
<input type="text" id="username" name="username"><br><br>
<label for="password">Password:</label>
<input type="password" id="password" name="password"><br><br>
<input type="submit" value="Register">
</form>
</body>
</html>
"#;

#[get("/")]
async fn register_form(_req: actix_web::HttpRequest) -> ApiResult<()> {
    Ok(ApiResponse::Html(REGISTER_FORM))
}

/// Takes the HTML form post or the same fields as JSON.
#[post("/")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: Either<web::Json<Credentials>, web::Form<Credentials>>,
) -> ApiResult<UserRes> {
    let Credentials { username, password } = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    // hashing is CPU bound, run it on the blocking pool
    let hashed_password = web::block(move || hash_password(&password)).await??;

    let user = db.create_user(username, hashed_password).await?;
    Ok(ApiResponse::Ok(user.into()))
}
