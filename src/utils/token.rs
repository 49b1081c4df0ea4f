use crate::types::token::{TokenRes, TokenType};
use entity::user::Model as UserModel;

// Placeholder issuer: the token is the bare username and carries no integrity.
// Swap this for a signed, expiring token before trusting it for anything.
pub fn issue_token(user: &UserModel) -> TokenRes {
    TokenRes {
        access_token: user.username.clone(),
        token_type: TokenType::Bearer,
    }
}
