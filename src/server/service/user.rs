//! User service for business logic.
//!
//! This module provides the `UserService` for read access to users.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository, error::AppError, model::user::User, service::USERNAME_NOT_FOUND,
};

/// Service providing read access to users.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by username.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Retrieves a user by username.
    ///
    /// # Arguments
    /// - `username` - Exact username to look up
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that username
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(USERNAME_NOT_FOUND.to_string()))
    }
}
