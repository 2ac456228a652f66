mod admin;
mod auth;
mod cart;
mod checkout;
mod discount;
mod hashing;
mod jwt;
mod opinion;
mod order;
mod product;
mod user;

pub use self::admin::{AdminRepositoryTrait, DynAdminRepository};
pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::cart::{CartRepositoryTrait, CartServiceTrait, DynCartRepository, DynCartService};
pub use self::checkout::{
    CheckoutRepositoryTrait, CheckoutServiceTrait, CheckoutUnitOfWork, DynCheckoutRepository,
    DynCheckoutService,
};
pub use self::discount::{
    DiscountRepositoryTrait, DiscountServiceTrait, DynDiscountRepository, DynDiscountService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::opinion::{
    DynOpinionRepository, DynOpinionService, OpinionRepositoryTrait, OpinionServiceTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
pub use self::user::{DynUserRepository, DynUserService, UserRepositoryTrait, UserServiceTrait};
