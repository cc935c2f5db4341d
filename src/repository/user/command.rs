use crate::{
    abstract_trait::UserCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::RegisterRequest, errors::RepositoryError, model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(
        &self,
        req: &RegisterRequest,
        hashed_password: &str,
    ) -> Result<User, RepositoryError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING user_id, name, email, password, role, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(hashed_password)
        .bind(req.role)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db_err) = &err {
                if db_err.is_unique_violation() {
                    return RepositoryError::AlreadyExists(
                        "Email is already registered".to_string(),
                    );
                }
            }
            error!("❌ Failed to create user: {err:?}");
            RepositoryError::from(err)
        })?;

        info!("✅ Created user ID {} ({})", result.user_id, result.role);
        Ok(result)
    }
}
