use crate::model::{User, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user. The password hash never leaves the model layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            name: value.name,
            email: value.email,
            role: value.role,
        }
    }
}
