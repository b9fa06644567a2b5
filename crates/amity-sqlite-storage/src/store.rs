//! The SQLite implementation of [`SocialGraphStore`].

use amity_core::FriendProfile;
use amity_core::FriendshipStatus;
use amity_core::SocialGraphError;
use amity_core::SocialGraphStore;
use amity_core::UserId;
use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::debug;

use crate::config::StoreConfig;
use crate::queries;

/// Friendship graph store backed by a SQLite pool.
///
/// Cheap to clone; all clones share the pool.
#[derive(Debug, Clone)]
pub struct SqliteSocialGraph {
    pool: SqlitePool,
}

/// Row shape of the profile query.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: String,
    full_name: String,
    phone_number: String,
    total_friend_count: i64,
    mutual_friend_count: i64,
}

fn storage_err(err: sqlx::Error) -> SocialGraphError {
    SocialGraphError::Storage {
        reason: err.to_string(),
    }
}

impl SqliteSocialGraph {
    /// Open (or create) the database described by `config` and bootstrap
    /// the schema.
    pub async fn connect(config: &StoreConfig) -> Result<Self, SocialGraphError> {
        let options = match &config.path {
            Some(path) => SqliteConnectOptions::new().filename(path).create_if_missing(true),
            None => SqliteConnectOptions::new().in_memory(true),
        }
        .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.effective_max_connections())
            .connect_with(options)
            .await
            .map_err(storage_err)?;

        sqlx::raw_sql(queries::SQL_CREATE_SCHEMA)
            .execute(&pool)
            .await
            .map_err(storage_err)?;

        debug!(
            path = ?config.path,
            connections = config.effective_max_connections(),
            "friendship store ready"
        );
        Ok(SqliteSocialGraph { pool })
    }

    /// The underlying pool, for embedding and test assertions.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a user row.
    ///
    /// User provisioning is owned by the surrounding system; this exists
    /// for wiring and test fixtures, not for the RPC surface.
    pub async fn insert_user(
        &self,
        user_id: &UserId,
        full_name: &str,
        phone_number: &str,
    ) -> Result<(), SocialGraphError> {
        sqlx::query(queries::SQL_INSERT_USER)
            .bind(user_id.as_str())
            .bind(full_name)
            .bind(phone_number)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }
}

#[async_trait]
impl SocialGraphStore for SqliteSocialGraph {
    async fn user_exists(&self, user_id: &UserId) -> Result<bool, SocialGraphError> {
        let exists: i64 = sqlx::query_scalar(queries::SQL_USER_EXISTS)
            .bind(user_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(exists != 0)
    }

    async fn edge_status(
        &self,
        user_id: &UserId,
        friend_user_id: &UserId,
    ) -> Result<Option<FriendshipStatus>, SocialGraphError> {
        let status: Option<String> = sqlx::query_scalar(queries::SQL_EDGE_STATUS)
            .bind(user_id.as_str())
            .bind(friend_user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        status.as_deref().map(FriendshipStatus::parse).transpose()
    }

    async fn has_pending_request(
        &self,
        requester: &UserId,
        recipient: &UserId,
    ) -> Result<bool, SocialGraphError> {
        let exists: i64 = sqlx::query_scalar(queries::SQL_PENDING_REQUEST_EXISTS)
            .bind(requester.as_str())
            .bind(recipient.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(exists != 0)
    }

    async fn upsert_friend_request(
        &self,
        caller: &UserId,
        target: &UserId,
    ) -> Result<(), SocialGraphError> {
        sqlx::query(queries::SQL_UPSERT_FRIEND_REQUEST)
            .bind(caller.as_str())
            .bind(target.as_str())
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        debug!(caller = %caller, target = %target, "friend request recorded");
        Ok(())
    }

    async fn accept_friend_request(
        &self,
        recipient: &UserId,
        requester: &UserId,
    ) -> Result<(), SocialGraphError> {
        let mut tx = self.pool.begin().await.map_err(storage_err)?;

        let updated = sqlx::query(queries::SQL_ACCEPT_PENDING_EDGE)
            .bind(requester.as_str())
            .bind(recipient.as_str())
            .execute(&mut *tx)
            .await
            .map_err(storage_err)?;
        if updated.rows_affected() == 0 {
            // Dropping the transaction rolls it back; the pending edge
            // vanished between the caller's guard and this statement.
            return Err(SocialGraphError::NoPendingRequest {
                requester: requester.to_string(),
                recipient: recipient.to_string(),
            });
        }

        sqlx::query(queries::SQL_UPSERT_RECIPROCAL_ACCEPTED)
            .bind(recipient.as_str())
            .bind(requester.as_str())
            .execute(&mut *tx)
            .await
            .map_err(storage_err)?;

        tx.commit().await.map_err(storage_err)?;
        debug!(recipient = %recipient, requester = %requester, "friend request accepted");
        Ok(())
    }

    async fn decline_friend_request(
        &self,
        recipient: &UserId,
        requester: &UserId,
    ) -> Result<(), SocialGraphError> {
        let updated = sqlx::query(queries::SQL_DECLINE_PENDING_EDGE)
            .bind(requester.as_str())
            .bind(recipient.as_str())
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        if updated.rows_affected() == 0 {
            return Err(SocialGraphError::NoPendingRequest {
                requester: requester.to_string(),
                recipient: recipient.to_string(),
            });
        }
        debug!(recipient = %recipient, requester = %requester, "friend request declined");
        Ok(())
    }

    async fn friend_profile(
        &self,
        caller: &UserId,
        friend: &UserId,
    ) -> Result<Option<FriendProfile>, SocialGraphError> {
        let sql = queries::friend_profile_query();
        let row: Option<ProfileRow> = sqlx::query_as(&sql)
            .bind(caller.as_str())
            .bind(friend.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let id = UserId::parse(row.id).map_err(|err| SocialGraphError::Storage {
            reason: format!("stored user id failed validation: {}", err),
        })?;
        Ok(Some(FriendProfile {
            id,
            full_name: row.full_name,
            phone_number: row.phone_number,
            total_friend_count: row.total_friend_count,
            mutual_friend_count: row.mutual_friend_count,
        }))
    }
}
