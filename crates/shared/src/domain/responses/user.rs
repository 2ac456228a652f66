use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Option<String>,
    pub address_city: Option<String>,
    pub birth_date: Option<String>,
}

// password never leaves the service layer
impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            address: value.address,
            address_city: value.address_city,
            birth_date: value.birth_date.map(|d| d.to_string()),
        }
    }
}
