use actix_web::{http::header, web, HttpRequest, HttpResponse};

use crate::types::error::{form_error_handler, json_error_handler, query_error_handler};

pub mod health;
pub mod item;
pub mod user;

// `/items` -> `/items/`, keeping the query string and the method.
async fn add_trailing_slash(req: HttpRequest) -> HttpResponse {
    let location = match req.uri().query() {
        Some(query) => format!("{}/?{}", req.path(), query),
        None => format!("{}/", req.path()),
    };
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    cfg.service(
        web::scope("/health").service(health::health)
    );
    // must come before the scopes, which also match the bare prefix
    cfg.service(web::resource("/items").to(add_trailing_slash));
    cfg.service(web::resource("/register").to(add_trailing_slash));
    cfg.service(
        web::scope("/items")
            .service(item::list::list_items)
            .service(item::create::create_item)
            .service(item::read::read_item)
            .service(item::update::update_item)
            .service(item::delete::delete_item)
    );
    cfg.service(
        web::scope("/register")
            .service(user::register::register_form)
            .service(user::register::register)
    );
    cfg.service(
        web::scope("/token").service(user::login::login)
    );
    cfg.service(
        web::scope("/users").service(user::me::read_users_me)
    );
}
