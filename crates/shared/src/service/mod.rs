mod auth;
mod cart;
mod checkout;
mod discount;
mod opinion;
mod order;
mod product;
mod user;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::cart::CartService;
pub use self::checkout::CheckoutService;
pub use self::discount::DiscountService;
pub use self::opinion::OpinionService;
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::product::ProductService;
pub use self::user::UserService;
