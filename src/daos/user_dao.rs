// src/daos/user_dao.rs

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::models::user::User;

/// Data access for user records.
///
/// The service layer depends on this trait rather than a concrete store so
/// that tests can substitute an in-memory double.
#[async_trait]
pub trait UserDao: Send + Sync {
    /// Returns every stored username, in collection order.
    async fn find_all_usernames(&self) -> mongodb::error::Result<Vec<String>>;

    /// Persists a new user. Fails loudly on any storage error; no partial
    /// writes are observable.
    async fn save(&self, user: User) -> mongodb::error::Result<()>;
}

/// MongoDB-backed implementation of [`UserDao`].
#[derive(Clone)]
pub struct MongoUserDao {
    collection: Collection<User>,
}

impl MongoUserDao {
    pub fn new(collection: Collection<User>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl UserDao for MongoUserDao {
    async fn find_all_usernames(&self) -> mongodb::error::Result<Vec<String>> {
        let mut cursor = self.collection.find(doc! {}, None).await?;
        let mut usernames = Vec::new();
        while let Some(user) = cursor.try_next().await? {
            usernames.push(user.username);
        }
        Ok(usernames)
    }

    async fn save(&self, user: User) -> mongodb::error::Result<()> {
        self.collection.insert_one(&user, None).await?;
        Ok(())
    }
}
