use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Public view of a user row. The password hash never leaves the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRes {
    pub id: i32,
    pub username: String,
}

impl From<entity::user::Model> for UserRes {
    fn from(user: entity::user::Model) -> Self {
        Self { id: user.id, username: user.username }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WhoAmIRes {
    pub token: String,
}
