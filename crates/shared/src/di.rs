use crate::{
    abstract_trait::{
        DynAdminRepository, DynAuthService, DynCartRepository, DynCartService,
        DynCheckoutRepository, DynCheckoutService, DynDiscountRepository, DynDiscountService,
        DynHashing, DynJwtService, DynOpinionRepository, DynOpinionService, DynProductRepository,
        DynProductService, DynUserRepository, DynUserService,
    },
    config::ConnectionPool,
    repository::{
        AdminRepository, CartRepository, CheckoutRepository, DiscountRepository,
        OpinionRepository, OrderRepository, ProductRepository, UserRepository,
    },
    service::{
        AuthService, AuthServiceDeps, CartService, CheckoutService, DiscountService,
        OpinionService, OrderService, OrderServiceDeps, ProductService, UserService,
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub cart_service: DynCartService,
    pub checkout_service: DynCheckoutService,
    pub order_service: OrderService,
    pub product_service: DynProductService,
    pub opinion_service: DynOpinionService,
    pub discount_service: DynDiscountService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("user_service", &"<UserService>")
            .field("cart_service", &"<CartService>")
            .field("checkout_service", &"<CheckoutService>")
            .field("order_service", &self.order_service)
            .field("product_service", &"<ProductService>")
            .field("opinion_service", &"<OpinionService>")
            .field("discount_service", &"<DiscountService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            registry,
        } = deps;

        let users = Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let admins = Arc::new(AdminRepository::new(pool.clone())) as DynAdminRepository;
        let carts = Arc::new(CartRepository::new(pool.clone())) as DynCartRepository;
        let checkout = Arc::new(CheckoutRepository::new(pool.clone())) as DynCheckoutRepository;
        let products = Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository;
        let opinions = Arc::new(OpinionRepository::new(pool.clone())) as DynOpinionRepository;
        let discounts = Arc::new(DiscountRepository::new(pool.clone())) as DynDiscountRepository;
        let orders = OrderRepository::new(pool);

        let auth_service = Arc::new(
            AuthService::new(AuthServiceDeps {
                hash,
                jwt: jwt_config,
                users: users.clone(),
                admins,
                registry: registry.clone(),
            })
            .await,
        ) as DynAuthService;

        let user_service =
            Arc::new(UserService::new(users, registry.clone()).await) as DynUserService;

        let cart_service =
            Arc::new(CartService::new(carts, registry.clone()).await) as DynCartService;

        let checkout_service =
            Arc::new(CheckoutService::new(checkout, registry.clone()).await) as DynCheckoutService;

        let order_service = OrderService::new(OrderServiceDeps {
            query: orders.query,
            command: orders.command,
            registry: registry.clone(),
        })
        .await;

        let product_service =
            Arc::new(ProductService::new(products, registry.clone()).await) as DynProductService;

        let opinion_service =
            Arc::new(OpinionService::new(opinions, registry.clone()).await) as DynOpinionService;

        let discount_service =
            Arc::new(DiscountService::new(discounts, registry).await) as DynDiscountService;

        Self {
            auth_service,
            user_service,
            cart_service,
            checkout_service,
            order_service,
            product_service,
            opinion_service,
            discount_service,
        }
    }
}
