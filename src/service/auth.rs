use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    domain::{
        requests::{AuthRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            query,
            command,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("📝 Registering {:?} account for {}", req.role, req.email);

        if self.query.find_by_email(&req.email).await?.is_some() {
            error!("❌ Registration rejected, email already in use: {}", req.email);
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "Email is already registered".to_string(),
            )));
        }

        let hashed_password = self.hashing.hash_password(&req.password).await?;
        let user = self.command.create_user(req, &hashed_password).await?;
        let access_token = self.jwt.generate_token(user.user_id as i64, "access")?;

        info!("✅ Registered user ID {} ({})", user.user_id, user.email);
        Ok(ApiResponse::success(
            "Registration successful",
            TokenResponse {
                access_token,
                user: UserResponse::from(user),
            },
        ))
    }

    async fn login(&self, req: &AuthRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("🔐 Login attempt for {}", req.email);

        // Unknown email and wrong password are indistinguishable to the caller.
        let user = self
            .query
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password, &req.password)
            .await?;

        let access_token = self.jwt.generate_token(user.user_id as i64, "access")?;

        info!("✅ User ID {} logged in", user.user_id);
        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse {
                access_token,
                user: UserResponse::from(user),
            },
        ))
    }

    async fn me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "Profile retrieved successfully",
            UserResponse::from(user),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Hashing, JwtConfig},
        model::UserRole,
        service::test_support::InMemoryStore,
    };
    use std::sync::Arc;

    fn service(store: &Arc<InMemoryStore>) -> AuthService {
        AuthService::new(
            store.clone(),
            store.clone(),
            Arc::new(Hashing::new()),
            Arc::new(JwtConfig::new("test-secret")),
        )
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Test Supplier".into(),
            email: email.into(),
            password: "123456".into(),
            role: UserRole::Supplier,
        }
    }

    #[tokio::test]
    async fn register_then_login_round_trips() {
        let store = Arc::new(InMemoryStore::new());
        let auth = service(&store);

        let registered = auth
            .register(&register_request("supplier@example.com"))
            .await
            .unwrap();
        assert_eq!(registered.data.user.email, "supplier@example.com");
        assert!(!registered.data.access_token.is_empty());

        let logged_in = auth
            .login(&AuthRequest {
                email: "supplier@example.com".into(),
                password: "123456".into(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.data.user.id, registered.data.user.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = Arc::new(InMemoryStore::new());
        let auth = service(&store);

        auth.register(&register_request("dup@example.com"))
            .await
            .unwrap();
        let result = auth.register(&register_request("dup@example.com")).await;

        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::AlreadyExists(_)))
        ));
        assert_eq!(store.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let store = Arc::new(InMemoryStore::new());
        let auth = service(&store);
        auth.register(&register_request("user@example.com"))
            .await
            .unwrap();

        let result = auth
            .login(&AuthRequest {
                email: "user@example.com".into(),
                password: "654321".into(),
            })
            .await;

        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let store = Arc::new(InMemoryStore::new());
        let result = service(&store)
            .login(&AuthRequest {
                email: "ghost@example.com".into(),
                password: "123456".into(),
            })
            .await;

        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn me_returns_the_stored_profile() {
        let store = Arc::new(InMemoryStore::new());
        store.add_user(9, "Corner Shop", "shop@example.com", UserRole::Retailer);

        let response = service(&store).me(9).await.unwrap();
        assert_eq!(response.data.name, "Corner Shop");
        assert_eq!(response.data.role, UserRole::Retailer);
    }
}
