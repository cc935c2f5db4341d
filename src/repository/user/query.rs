use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::{User, UserRole},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, email, password, role, created_at, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, email, password, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user by email: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result)
    }

    async fn find_suppliers(&self) -> Result<Vec<User>, RepositoryError> {
        info!("🔍 Fetching supplier directory");

        let suppliers = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, email, password, role, created_at, updated_at
            FROM users
            WHERE role = $1
            ORDER BY name
            "#,
        )
        .bind(UserRole::Supplier)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch suppliers: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(suppliers)
    }
}
