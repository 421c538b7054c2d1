//! User store: the repository behind both the JSON API and the HTML pages.
//!
//! Every operation is one unit of work. Writes run their existence and
//! uniqueness checks on the same transaction as the mutation and commit
//! before returning; an early return drops the transaction, which rolls it
//! back. The unique indexes on `code` and `email` remain the final word
//! when two requests race, and their violations are reported as the same
//! duplicate errors the pre-checks produce.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity, Model};
use common::{AppError, AppResult};
use domain::{User, UserDetails};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups match `code` exactly (case-sensitive). Field validation is the
/// caller's job; the store only enforces existence and uniqueness.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user in storage order
    async fn get_all(&self) -> AppResult<Vec<User>>;

    /// Find a user by business code
    async fn get_by_code(&self, code: &str) -> AppResult<Option<User>>;

    /// Persist a new user.
    ///
    /// Fails with `DuplicateCode` or `DuplicateEmail` when either value is
    /// already taken.
    async fn add(&self, user: UserDetails) -> AppResult<User>;

    /// Overwrite every mutable field of the user identified by `user.code`.
    ///
    /// Fails with `UserNotFound` if no such user exists, or `DuplicateEmail`
    /// if the new email belongs to another user.
    async fn update(&self, user: UserDetails) -> AppResult<User>;

    /// Permanently remove a user. Fails with `UserNotFound` if absent.
    async fn delete(&self, code: &str) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`UserRepository`].
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_by_code<C: ConnectionTrait>(conn: &C, code: &str) -> Result<Option<Model>, DbErr> {
        UserEntity::find()
            .filter(user::Column::Code.eq(code))
            .one(conn)
            .await
    }

    /// Whether `email` is held by any user other than `except_code`
    async fn email_taken<C: ConnectionTrait>(
        conn: &C,
        email: &str,
        except_code: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query = UserEntity::find().filter(user::Column::Email.eq(email));
        if let Some(code) = except_code {
            query = query.filter(user::Column::Code.ne(code));
        }
        Ok(query.one(conn).await?.is_some())
    }

    async fn insert_user(&self, user: UserDetails) -> AppResult<User> {
        let txn = self.db.begin().await?;

        if Self::find_by_code(&txn, &user.code).await?.is_some() {
            return Err(AppError::DuplicateCode(user.code));
        }

        if Self::email_taken(&txn, &user.email, None).await? {
            return Err(AppError::DuplicateEmail(user.email));
        }

        let active_model = ActiveModel {
            code: Set(user.code.clone()),
            full_name: Set(user.full_name.clone()),
            date_of_birth: Set(user.date_of_birth),
            email: Set(user.email.clone()),
            phone_number: Set(user.phone_number.clone()),
            address: Set(user.address.clone()),
            ..Default::default()
        };

        let model = active_model
            .insert(&txn)
            .await
            .map_err(|e| write_error(e, &user))?;

        txn.commit().await?;
        Ok(User::from(model))
    }

    async fn overwrite_user(&self, user: UserDetails) -> AppResult<User> {
        let txn = self.db.begin().await?;

        let existing = Self::find_by_code(&txn, &user.code)
            .await?
            .ok_or_else(|| AppError::UserNotFound(user.code.clone()))?;

        if existing.email != user.email
            && Self::email_taken(&txn, &user.email, Some(&user.code)).await?
        {
            return Err(AppError::DuplicateEmail(user.email));
        }

        // id and code stay as stored
        let mut active: ActiveModel = existing.into();
        active.full_name = Set(user.full_name.clone());
        active.date_of_birth = Set(user.date_of_birth);
        active.email = Set(user.email.clone());
        active.phone_number = Set(user.phone_number.clone());
        active.address = Set(user.address.clone());

        let model = active
            .update(&txn)
            .await
            .map_err(|e| write_error(e, &user))?;

        txn.commit().await?;
        Ok(User::from(model))
    }
}

/// Translate a failed write, reporting unique-index violations as duplicates.
fn write_error(err: DbErr, user: &UserDetails) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            if detail.to_lowercase().contains("email") {
                AppError::DuplicateEmail(user.email.clone())
            } else {
                AppError::DuplicateCode(user.code.clone())
            }
        }
        _ => AppError::Database(err),
    }
}

/// Log a failed operation; rejected input is a warning, anything else an error.
fn log_failure(operation: &str, code: &str, err: &AppError) {
    if err.is_client_error() {
        tracing::warn!("Error {} user {}: {}", operation, code, err);
    } else {
        tracing::error!("Error {} user {}: {:?}", operation, code, err);
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn get_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!("Error getting all users: {:?}", e);
                AppError::from(e)
            })?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get_by_code(&self, code: &str) -> AppResult<Option<User>> {
        let result = Self::find_by_code(&self.db, code).await.map_err(|e| {
            tracing::error!("Error getting user by code {}: {:?}", code, e);
            AppError::from(e)
        })?;

        Ok(result.map(User::from))
    }

    async fn add(&self, user: UserDetails) -> AppResult<User> {
        let code = user.code.clone();
        match self.insert_user(user).await {
            Ok(created) => {
                tracing::info!("User added: {}", created.code);
                Ok(created)
            }
            Err(e) => {
                log_failure("adding", &code, &e);
                Err(e)
            }
        }
    }

    async fn update(&self, user: UserDetails) -> AppResult<User> {
        let code = user.code.clone();
        match self.overwrite_user(user).await {
            Ok(updated) => {
                tracing::info!("User updated: {}", updated.code);
                Ok(updated)
            }
            Err(e) => {
                log_failure("updating", &code, &e);
                Err(e)
            }
        }
    }

    async fn delete(&self, code: &str) -> AppResult<()> {
        // Single statement, so it is its own unit of work
        let result = UserEntity::delete_many()
            .filter(user::Column::Code.eq(code))
            .exec(&self.db)
            .await
            .map_err(AppError::from);

        match result {
            Ok(res) if res.rows_affected == 0 => {
                let err = AppError::UserNotFound(code.to_string());
                log_failure("deleting", code, &err);
                Err(err)
            }
            Ok(_) => {
                tracing::info!("User deleted: {}", code);
                Ok(())
            }
            Err(e) => {
                log_failure("deleting", code, &e);
                Err(e)
            }
        }
    }
}
