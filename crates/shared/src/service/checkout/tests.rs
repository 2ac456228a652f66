use super::*;
use crate::{abstract_trait::CheckoutRepositoryTrait, model::OrderStatus};
use chrono::Utc;
use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{
        Mutex as StdMutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    InsertOrder,
    CopyLines,
    ClearCart,
    Commit,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    users: BTreeSet<i32>,
    discount_codes: BTreeSet<String>,
    /// client_id -> product_id -> amount
    carts: BTreeMap<i32, BTreeMap<i32, i32>>,
    orders: Vec<Order>,
    lines: Vec<OrderLine>,
    next_order_id: i32,
}

/// Transactional in-memory store. A unit of work snapshots the tables once it
/// holds the row lock and publishes the snapshot on commit.
#[derive(Default)]
struct MemoryStore {
    tables: Arc<StdMutex<Tables>>,
    row_lock: Arc<AsyncMutex<()>>,
    fail_at: StdMutex<Option<Step>>,
    rollbacks: Arc<AtomicUsize>,
}

impl MemoryStore {
    fn with_user(client_id: i32) -> Self {
        let store = Self::default();
        store.tables.lock().unwrap().users.insert(client_id);
        store
    }

    fn add_to_cart(&self, client_id: i32, product_id: i32, amount: i32) {
        self.tables
            .lock()
            .unwrap()
            .carts
            .entry(client_id)
            .or_default()
            .insert(product_id, amount);
    }

    fn add_discount_code(&self, code: &str) {
        self.tables
            .lock()
            .unwrap()
            .discount_codes
            .insert(code.to_string());
    }

    fn fail_at(&self, step: Step) {
        *self.fail_at.lock().unwrap() = Some(step);
    }

    fn cart(&self, client_id: i32) -> Vec<(i32, i32)> {
        self.tables
            .lock()
            .unwrap()
            .carts
            .get(&client_id)
            .map(|items| items.iter().map(|(p, a)| (*p, *a)).collect())
            .unwrap_or_default()
    }

    fn orders(&self) -> Vec<Order> {
        self.tables.lock().unwrap().orders.clone()
    }

    fn lines_of(&self, order_id: i32) -> Vec<(i32, i32)> {
        self.tables
            .lock()
            .unwrap()
            .lines
            .iter()
            .filter(|line| line.order_id == order_id)
            .map(|line| (line.product_id, line.amount))
            .collect()
    }

    fn all_lines(&self) -> usize {
        self.tables.lock().unwrap().lines.len()
    }
}

struct MemoryUnitOfWork {
    tables: Arc<StdMutex<Tables>>,
    row_lock: Arc<AsyncMutex<()>>,
    fail_at: Option<Step>,
    rollbacks: Arc<AtomicUsize>,
    staged: Option<Tables>,
    _guard: Option<OwnedMutexGuard<()>>,
}

impl MemoryUnitOfWork {
    fn check(&self, step: Step) -> Result<(), RepositoryError> {
        if self.fail_at == Some(step) {
            return Err(RepositoryError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    fn staged(&mut self) -> Result<&mut Tables, RepositoryError> {
        self.staged
            .as_mut()
            .ok_or_else(|| RepositoryError::Custom("client row not locked".into()))
    }
}

#[async_trait]
impl CheckoutUnitOfWork for MemoryUnitOfWork {
    async fn lock_client(&mut self, client_id: i32) -> Result<(), RepositoryError> {
        let guard = self.row_lock.clone().lock_owned().await;
        let snapshot = self.tables.lock().unwrap().clone();
        if !snapshot.users.contains(&client_id) {
            return Err(RepositoryError::NotFound);
        }
        self._guard = Some(guard);
        self.staged = Some(snapshot);
        Ok(())
    }

    async fn insert_order(
        &mut self,
        client_id: i32,
        discount_code: Option<&str>,
        address: &str,
        city: &str,
    ) -> Result<Order, RepositoryError> {
        self.check(Step::InsertOrder)?;
        let tables = self.staged()?;

        if let Some(code) = discount_code {
            if !tables.discount_codes.contains(code) {
                return Err(RepositoryError::ForeignKey("order_discount_code_fkey".into()));
            }
        }

        tables.next_order_id += 1;
        let order = Order {
            order_id: tables.next_order_id,
            client_id,
            created_at: Utc::now().naive_utc(),
            status: OrderStatus::Packing,
            discount_code: discount_code.map(str::to_string),
            shipping_address: address.to_string(),
            shipping_city: city.to_string(),
        };
        tables.orders.push(order.clone());
        Ok(order)
    }

    async fn copy_cart_lines(
        &mut self,
        order_id: i32,
        client_id: i32,
    ) -> Result<Vec<OrderLine>, RepositoryError> {
        self.check(Step::CopyLines)?;
        let tables = self.staged()?;

        let lines: Vec<OrderLine> = tables
            .carts
            .get(&client_id)
            .into_iter()
            .flatten()
            .map(|(product_id, amount)| OrderLine {
                order_id,
                product_id: *product_id,
                amount: *amount,
            })
            .collect();
        tables.lines.extend(lines.iter().cloned());
        Ok(lines)
    }

    async fn clear_cart(&mut self, client_id: i32) -> Result<u64, RepositoryError> {
        self.check(Step::ClearCart)?;
        let tables = self.staged()?;
        Ok(tables
            .carts
            .remove(&client_id)
            .map(|items| items.len() as u64)
            .unwrap_or(0))
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        self.check(Step::Commit)?;
        let mut this = *self;
        let staged = this.staged.take().ok_or(RepositoryError::NotFound)?;
        *this.tables.lock().unwrap() = staged;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        self.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl CheckoutRepositoryTrait for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn CheckoutUnitOfWork>, RepositoryError> {
        Ok(Box::new(MemoryUnitOfWork {
            tables: self.tables.clone(),
            row_lock: self.row_lock.clone(),
            fail_at: *self.fail_at.lock().unwrap(),
            rollbacks: self.rollbacks.clone(),
            staged: None,
            _guard: None,
        }))
    }
}

async fn service_for(store: Arc<MemoryStore>) -> CheckoutService {
    let registry = Arc::new(Mutex::new(Registry::default()));
    CheckoutService::new(store as DynCheckoutRepository, registry).await
}

fn request(code: &str) -> CheckoutRequest {
    CheckoutRequest {
        code: Some(code.to_string()),
        address: "Main St".into(),
        city: "Springfield".into(),
    }
}

#[tokio::test]
async fn checkout_moves_cart_into_new_order() {
    let store = Arc::new(MemoryStore::with_user(42));
    store.add_to_cart(42, 7, 2);
    store.add_to_cart(42, 9, 1);
    let service = service_for(store.clone()).await;

    let response = service.create_order(42, &request("")).await.unwrap();

    assert!(store.cart(42).is_empty());
    let orders = store.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_id, response.data.order_id);
    assert_eq!(orders[0].status, OrderStatus::Packing);
    assert_eq!(orders[0].discount_code, None);
    assert_eq!(store.lines_of(response.data.order_id), vec![(7, 2), (9, 1)]);
    assert_eq!(
        response.data.lines,
        vec![
            OrderLineResponse {
                product_id: 7,
                amount: 2
            },
            OrderLineResponse {
                product_id: 9,
                amount: 1
            },
        ]
    );
}

#[tokio::test]
async fn failing_line_copy_leaves_no_order_behind() {
    let store = Arc::new(MemoryStore::with_user(42));
    store.add_to_cart(42, 7, 2);
    store.fail_at(Step::CopyLines);
    let service = service_for(store.clone()).await;

    let err = service.create_order(42, &request("")).await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::PoolClosed))
    ));
    assert!(store.orders().is_empty());
    assert_eq!(store.all_lines(), 0);
    assert_eq!(store.cart(42), vec![(7, 2)]);
    assert_eq!(store.rollbacks.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failing_cart_clear_or_commit_rolls_back_everything() {
    for step in [Step::ClearCart, Step::Commit] {
        let store = Arc::new(MemoryStore::with_user(42));
        store.add_to_cart(42, 7, 2);
        store.fail_at(step);
        let service = service_for(store.clone()).await;

        assert!(service.create_order(42, &request("")).await.is_err());
        assert!(store.orders().is_empty(), "order persisted after {step:?} failed");
        assert_eq!(store.all_lines(), 0);
        assert_eq!(store.cart(42), vec![(7, 2)]);
    }
}

#[tokio::test]
async fn empty_cart_creates_orders_without_lines() {
    let store = Arc::new(MemoryStore::with_user(42));
    let service = service_for(store.clone()).await;

    let first = service.create_order(42, &request("")).await.unwrap();
    let second = service.create_order(42, &request("  ")).await.unwrap();

    assert_ne!(first.data.order_id, second.data.order_id);
    assert!(first.data.lines.is_empty());
    assert!(second.data.lines.is_empty());
    assert_eq!(store.orders().len(), 2);
    assert_eq!(store.all_lines(), 0);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let store = Arc::new(MemoryStore::with_user(42));
    let service = service_for(store.clone()).await;

    let err = service.create_order(7, &request("")).await.unwrap_err();

    assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    assert!(store.orders().is_empty());
}

#[tokio::test]
async fn discount_code_must_exist() {
    let store = Arc::new(MemoryStore::with_user(42));
    store.add_discount_code("SPRING10");
    store.add_to_cart(42, 7, 2);
    let service = service_for(store.clone()).await;

    let err = service.create_order(42, &request("WINTER")).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::ForeignKey(_))
    ));
    assert_eq!(store.cart(42), vec![(7, 2)]);

    service
        .create_order(42, &request(" SPRING10 "))
        .await
        .unwrap();
    assert_eq!(store.orders()[0].discount_code.as_deref(), Some("SPRING10"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_checkouts_never_duplicate_lines() {
    let store = Arc::new(MemoryStore::with_user(42));
    store.add_to_cart(42, 7, 2);
    store.add_to_cart(42, 9, 1);
    let service = Arc::new(service_for(store.clone()).await);

    let a = tokio::spawn({
        let service = service.clone();
        async move { service.create_order(42, &request("")).await }
    });
    let b = tokio::spawn({
        let service = service.clone();
        async move { service.create_order(42, &request("")).await }
    });

    let a = a.await.unwrap().unwrap();
    let b = b.await.unwrap().unwrap();

    let mut line_counts = [a.data.lines.len(), b.data.lines.len()];
    line_counts.sort();
    assert_eq!(line_counts, [0, 2]);
    assert_eq!(store.orders().len(), 2);
    assert_eq!(store.all_lines(), 2);
    assert!(store.cart(42).is_empty());
}

#[tokio::test]
async fn outcomes_are_recorded_in_metrics() {
    let store = Arc::new(MemoryStore::with_user(42));
    let service = service_for(store.clone()).await;

    service.create_order(42, &request("")).await.unwrap();
    service.create_order(1, &request("")).await.unwrap_err();

    let counter = &service.tracer.metrics().request_counter;
    let ok = crate::utils::Labels {
        method: Method::Put,
        status: crate::utils::Status::Success,
    };
    let failed = crate::utils::Labels {
        method: Method::Put,
        status: crate::utils::Status::Error,
    };
    assert_eq!(counter.get_or_create(&ok).get(), 1);
    assert_eq!(counter.get_or_create(&failed).get(), 1);
}
