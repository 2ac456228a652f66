use crate::{
    abstract_trait::{DynUserRepository, UserServiceTrait},
    domain::{
        requests::UpdateUserRequest,
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct UserService {
    repository: DynUserRepository,
    tracer: ServiceTracer,
}

impl UserService {
    pub async fn new(repository: DynUserRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let tracer = ServiceTracer::new("user_service", registry).await;
        Self { repository, tracer }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_me(&self, id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "find_me",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("user.id", id.to_string()),
            ],
        );

        match self.repository.find_by_id(id).await {
            Ok(Some(user)) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Fetched user");
                Ok(ApiResponse::success(
                    "User retrieved successfully",
                    UserResponse::from(user),
                ))
            }
            Ok(None) => {
                self.tracer.error(&tracing_ctx, Method::Get, "User not found");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Get, "Failed to fetch user");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn update_me(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start(
            "update_me",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("user.id", id.to_string()),
            ],
        );

        match self.repository.update_user(id, req).await {
            Ok(Some(user)) => {
                self.tracer
                    .success(&tracing_ctx, Method::Put, "Updated user");
                Ok(ApiResponse::success(
                    "Successfully updated user data!",
                    UserResponse::from(user),
                ))
            }
            Ok(None) => {
                self.tracer
                    .error(&tracing_ctx, Method::Put, "Failed to update user data");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, Method::Put, "Failed to update user");
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::UserRepositoryTrait, domain::requests::RegisterRequest, model::User};
    use std::sync::Mutex as StdMutex;

    struct FakeUsers {
        rows: StdMutex<Vec<User>>,
    }

    impl FakeUsers {
        fn with_jan() -> Self {
            Self {
                rows: StdMutex::new(vec![User {
                    user_id: 42,
                    first_name: "Jan".into(),
                    last_name: "Kowalski".into(),
                    email: "jan@example.com".into(),
                    address: None,
                    address_city: None,
                    birth_date: None,
                    password: "$2b$04$hash".into(),
                }]),
            }
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for FakeUsers {
        async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|user| user.user_id == id)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|user| user.email == email)
                .cloned())
        }

        async fn create_user(&self, _req: &RegisterRequest) -> Result<User, RepositoryError> {
            Err(RepositoryError::Custom("not used".into()))
        }

        async fn update_user(
            &self,
            id: i32,
            req: &UpdateUserRequest,
        ) -> Result<Option<User>, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|user| user.user_id == id).map(|user| {
                user.first_name = req.first_name.clone();
                user.last_name = req.last_name.clone();
                user.address = req.address.clone();
                user.address_city = req.address_city.clone();
                user.clone()
            }))
        }
    }

    async fn service() -> UserService {
        let registry = Arc::new(Mutex::new(Registry::default()));
        UserService::new(Arc::new(FakeUsers::with_jan()), registry).await
    }

    #[tokio::test]
    async fn update_me_changes_profile_and_missing_rows_are_not_found() {
        let service = service().await;
        let req = UpdateUserRequest {
            first_name: "Janek".into(),
            last_name: "Kowalski".into(),
            address: Some("Marszalkowska 1".into()),
            address_city: Some("Warsaw".into()),
        };

        let updated = service.update_me(42, &req).await.unwrap().data;
        assert_eq!(updated.first_name, "Janek");
        assert_eq!(updated.address_city.as_deref(), Some("Warsaw"));
        assert_eq!(service.find_me(42).await.unwrap().data.first_name, "Janek");

        let err = service.update_me(7, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    }
}
