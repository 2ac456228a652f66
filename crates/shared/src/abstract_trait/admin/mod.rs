use crate::{errors::RepositoryError, model::Admin};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAdminRepository = Arc<dyn AdminRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AdminRepositoryTrait {
    async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, RepositoryError>;
}
