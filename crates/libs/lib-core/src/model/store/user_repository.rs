//! # User Repository
//!
//! Database access layer for user documents, a thin abstraction over the
//! `users` collection.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::model::store::{self, UserRepository};
//! # async fn example() -> mongodb::error::Result<()> {
//! let client = store::connect("mongodb://localhost:27017/jwt-auth-db").await?;
//! let db = store::database(&client);
//!
//! let user = UserRepository::create(&db, "alice", "alice@example.com", "hashed").await?;
//! let found = UserRepository::find_by_email(&db, "alice@example.com").await?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, DateTime};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::models::User;
use super::Db;

const USERS_COLLECTION: &str = "users";

/// User repository for database operations.
///
/// All methods are async and return the driver's `Result` so callers decide
/// how failures map onto responses.
pub struct UserRepository;

impl UserRepository {
    fn collection(db: &Db) -> Collection<User> {
        db.collection(USERS_COLLECTION)
    }

    /// Create unique indexes on `email` and `username`.
    ///
    /// Idempotent; safe to run on every startup.
    pub async fn ensure_indexes(db: &Db) -> mongodb::error::Result<()> {
        let collection = Self::collection(db);
        let unique = IndexOptions::builder().unique(true).build();

        collection
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "email": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await?;
        collection
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "username": 1 })
                    .options(unique)
                    .build(),
            )
            .await?;

        Ok(())
    }

    /// Find a user by their email address.
    pub async fn find_by_email(db: &Db, email: &str) -> mongodb::error::Result<Option<User>> {
        Self::collection(db).find_one(doc! { "email": email }).await
    }

    /// Find a user by their username.
    pub async fn find_by_username(
        db: &Db,
        username: &str,
    ) -> mongodb::error::Result<Option<User>> {
        Self::collection(db)
            .find_one(doc! { "username": username })
            .await
    }

    /// Find a user by their document id.
    pub async fn find_by_id(db: &Db, id: ObjectId) -> mongodb::error::Result<Option<User>> {
        Self::collection(db).find_one(doc! { "_id": id }).await
    }

    /// Insert a new user document.
    ///
    /// # Errors
    ///
    /// Returns a driver error on duplicate email or username (unique index
    /// violation) or when the write cannot be acknowledged.
    pub async fn create(
        db: &Db,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> mongodb::error::Result<User> {
        let mut user = User {
            id: None,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: DateTime::now(),
            last_login: None,
            is_active: true,
        };

        let result = Self::collection(db).insert_one(&user).await?;
        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// Set the `last_login` timestamp to now.
    ///
    /// Does not verify the user exists; an unknown id updates nothing.
    pub async fn update_last_login(db: &Db, id: ObjectId) -> mongodb::error::Result<()> {
        Self::collection(db)
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "last_login": DateTime::now() } },
            )
            .await?;

        Ok(())
    }
}
