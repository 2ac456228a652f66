mod auth;
mod cart;
mod checkout;
mod discount;
mod opinion;
mod order;
mod user;

pub use self::auth::{AdminLoginRequest, LoginRequest, RegisterRequest};
pub use self::cart::AddToCartRequest;
pub use self::checkout::CheckoutRequest;
pub use self::discount::CheckDiscountCode;
pub use self::opinion::CreateOpinionRequest;
pub use self::order::UpdateOrderStatusRequest;
pub use self::user::UpdateUserRequest;
