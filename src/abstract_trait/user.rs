use crate::{
    domain::{requests::RegisterRequest, responses::{ApiResponse, UserResponse}},
    errors::{RepositoryError, ServiceError},
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn find_suppliers(&self) -> Result<Vec<User>, RepositoryError>;
}

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(
        &self,
        req: &RegisterRequest,
        hashed_password: &str,
    ) -> Result<User, RepositoryError>;
}

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn find_suppliers(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError>;
}
