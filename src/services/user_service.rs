use std::sync::Arc;

use crate::{
    auth::{hash_password, verify_password},
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::request::{LoginRequest, SignupRequest},
    },
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn signup(&self, request: SignupRequest) -> AppResult<User> {
        if self
            .repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(&request.email, &password_hash, request.full_name);

        let created = self.repository.create(user).await?;
        log::info!("New user registered: {}", created.id);
        Ok(created)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        let user = self.repository.find_by_email(&request.email).await?;

        // Same error for unknown email and bad password; no account probing.
        let user = user.filter(|u| verify_password(&request.password, &u.password_hash));
        user.ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))
    }

    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))
    }
}
