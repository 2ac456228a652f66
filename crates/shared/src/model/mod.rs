mod admin;
mod cart;
mod discount;
mod opinion;
mod order;
mod product;
mod user;

pub use self::admin::Admin;
pub use self::cart::{CartEntry, CartEntryWithProduct};
pub use self::discount::DiscountCode;
pub use self::opinion::{Opinion, ProductGrade};
pub use self::order::{Order, OrderLine, OrderStatus};
pub use self::product::Product;
pub use self::user::User;
