mod admin;
mod cart;
mod checkout;
mod discount;
mod opinion;
mod order;
mod product;
mod user;

pub use self::admin::AdminRepository;
pub use self::cart::CartRepository;
pub use self::checkout::{CheckoutRepository, PgCheckoutUnitOfWork};
pub use self::discount::DiscountRepository;
pub use self::opinion::OpinionRepository;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::user::UserRepository;
