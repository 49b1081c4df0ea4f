pub mod db_service;
pub mod item;
pub mod user;

pub use db_service::DbService;
