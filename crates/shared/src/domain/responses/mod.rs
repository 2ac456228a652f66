mod api;
mod auth;
mod cart;
mod checkout;
mod opinion;
mod order;
mod product;
mod user;

pub use self::api::{ApiResponse, MessageResponse};
pub use self::auth::{TokenResponse, VerifyTokenResponse};
pub use self::cart::CartItemResponse;
pub use self::checkout::CheckoutResponse;
pub use self::opinion::{OpinionResponse, ProductGradeResponse};
pub use self::order::{OrderLineResponse, OrderResponse};
pub use self::product::ProductResponse;
pub use self::user::UserResponse;
