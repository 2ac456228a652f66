use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    /// Email address of the account.
    #[validate(email(message = "Username must be a valid email"))]
    #[schema(example = "jan@example.com")]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,

    #[validate(email(message = "Email is not valid"))]
    pub email: String,

    pub address: Option<String>,

    pub address_city: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "1990-05-17")]
    pub birth_date: Option<NaiveDate>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}
