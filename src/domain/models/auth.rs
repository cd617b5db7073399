use serde::{Deserialize, Serialize};

use crate::domain::models::user::Role;

/// JWT payload carried by every bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

/// The authenticated user behind the current request.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: String,
    pub role: Role,
}
