//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

/// Stored shape of a user. The hash lives under `password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(rename = "password", default)]
    password_hash: String,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            username: doc.username,
            email: doc.email,
            password_hash: doc.password_hash,
        }
    }
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: None,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
        }
    }
}

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create a repository over `db.<collection_name>`
    ///
    /// # Example
    /// ```ignore
    /// let db = client.database("service");
    /// let repo = MongoUserRepository::new(&db, "users");
    /// ```
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<UserDocument>(collection_name),
        }
    }

    fn parse_id(id: &str) -> UserResult<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| UserError::Validation(format!("invalid user id: {id}")))
    }

    fn id_filter(oid: ObjectId) -> Document {
        doc! { "_id": oid }
    }

    /// `$set` body holding only the non-empty fields
    fn build_patch(user: &User) -> Document {
        let mut set = doc! {};

        if !user.email.is_empty() {
            set.insert("email", user.email.as_str());
        }

        if !user.username.is_empty() {
            set.insert("username", user.username.as_str());
        }

        if !user.password_hash.is_empty() {
            set.insert("password", user.password_hash.as_str());
        }

        set
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: User) -> UserResult<String> {
        let document = UserDocument::from(user);
        let result = self.collection.insert_one(&document).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| {
                UserError::Internal(format!(
                    "failed to convert inserted id to hex: {}",
                    result.inserted_id
                ))
            })?;

        tracing::debug!(user_id = %id, "User created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_one(&self, id: &str) -> UserResult<User> {
        let oid = Self::parse_id(id)?;

        self.collection
            .find_one(Self::id_filter(oid))
            .await?
            .map(User::from)
            .ok_or(UserError::NotFound)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<UserDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: User) -> UserResult<()> {
        let oid = Self::parse_id(&user.id)?;
        let patch = Self::build_patch(&user);

        // An empty `$set` is rejected by the server; only existence matters then.
        if patch.is_empty() {
            let count = self
                .collection
                .count_documents(Self::id_filter(oid))
                .await?;
            return if count == 0 {
                Err(UserError::NotFound)
            } else {
                Ok(())
            };
        }

        let result = self
            .collection
            .update_one(Self::id_filter(oid), doc! { "$set": patch })
            .await?;

        if result.matched_count == 0 {
            return Err(UserError::NotFound);
        }

        tracing::debug!(
            matched = result.matched_count,
            modified = result.modified_count,
            "User updated"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> UserResult<()> {
        let oid = Self::parse_id(id)?;
        let result = self.collection.delete_one(Self::id_filter(oid)).await?;

        if result.deleted_count == 0 {
            return Err(UserError::NotFound);
        }

        tracing::debug!(user_id = %id, "User deleted");
        Ok(())
    }
}
