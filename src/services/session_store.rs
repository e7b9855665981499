//! Authentication session store
//!
//! Server-side authentication state is process-external: an opaque token is
//! handed to the client as a cookie, and only a hash of it keys the Redis
//! entry. Expiry is enforced by the store itself through a TTL, so a token
//! that outlives its entry simply stops resolving.

use async_trait::async_trait;
use chrono::Duration;
use redis::{AsyncCommands, aio::ConnectionManager};
use uuid::Uuid;

use crate::{error::AppResult, utils::crypto::hash_string};

/// Store for cookie-correlated authentication sessions
#[async_trait]
pub trait AuthSessionStore: Send + Sync {
    /// Persist a token for a user with the given time-to-live
    async fn create(&self, token: &str, user_id: Uuid, ttl: Duration) -> AppResult<()>;

    /// Resolve a token to a user id, if the session is still live
    async fn get(&self, token: &str) -> AppResult<Option<Uuid>>;

    /// Destroy a session (logout); destroying an unknown token is a no-op
    async fn destroy(&self, token: &str) -> AppResult<()>;
}

/// Redis-backed session store with TTL expiry
#[derive(Clone)]
pub struct RedisSessionStore {
    redis: ConnectionManager,
}

impl RedisSessionStore {
    /// Create a new Redis-backed session store
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }

    /// Redis key for a token; only the token hash is stored
    fn session_key(token: &str) -> String {
        format!("auth_session:{}", hash_string(token))
    }
}

#[async_trait]
impl AuthSessionStore for RedisSessionStore {
    async fn create(&self, token: &str, user_id: Uuid, ttl: Duration) -> AppResult<()> {
        let mut redis = self.redis.clone();
        redis
            .set_ex::<_, _, ()>(
                Self::session_key(token),
                user_id.to_string(),
                ttl.num_seconds().max(1) as u64,
            )
            .await?;

        Ok(())
    }

    async fn get(&self, token: &str) -> AppResult<Option<Uuid>> {
        let mut redis = self.redis.clone();
        let value: Option<String> = redis.get(Self::session_key(token)).await?;

        Ok(value.and_then(|v| Uuid::parse_str(&v).ok()))
    }

    async fn destroy(&self, token: &str) -> AppResult<()> {
        let mut redis = self.redis.clone();
        redis.del::<_, ()>(Self::session_key(token)).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_keys_are_stable_and_opaque() {
        let token = "abcdef0123456789";
        let key1 = RedisSessionStore::session_key(token);
        let key2 = RedisSessionStore::session_key(token);

        assert_eq!(key1, key2);
        assert!(key1.starts_with("auth_session:"));
        // The raw token never appears in the key
        assert!(!key1.contains(token));
    }

    #[test]
    fn test_distinct_tokens_get_distinct_keys() {
        assert_ne!(
            RedisSessionStore::session_key("token-a"),
            RedisSessionStore::session_key("token-b")
        );
    }
}
