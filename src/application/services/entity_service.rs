//! Cache-aside CRUD service shared by every entity.

use metrics::counter;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::references::ReferenceCheck;
use crate::domain::entities::Entity;
use crate::domain::repositories::Repository;
use crate::infrastructure::cache::CacheService;

use crate::error::AppError;

/// Which cache keys a successful write removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidationPolicy {
    /// Only `all_<collection>`. A cached `<entity>_<id>` may stay stale for one TTL.
    CollectionOnly,
    /// `all_<collection>` and, on update/delete, `<entity>_<id>`.
    CollectionAndItem,
}

/// Read-through, invalidate-on-write service over one repository.
///
/// Reads check the cache first and populate it on a miss. Writes go to the
/// store first and then drop the affected keys. A store miss on `get_one` is
/// never cached.
///
/// Cache failures never fail a request: read errors and undecodable values
/// count as misses, write and delete errors are logged and ignored.
pub struct EntityService<E: Entity> {
    repository: Arc<dyn Repository<E>>,
    cache: Arc<dyn CacheService>,
    references: Arc<dyn ReferenceCheck<E>>,
    ttl: Duration,
    policy: InvalidationPolicy,
}

impl<E: Entity> EntityService<E> {
    pub fn new(
        repository: Arc<dyn Repository<E>>,
        cache: Arc<dyn CacheService>,
        references: Arc<dyn ReferenceCheck<E>>,
        ttl: Duration,
        policy: InvalidationPolicy,
    ) -> Self {
        Self {
            repository,
            cache,
            references,
            ttl,
            policy,
        }
    }

    /// Returns every record, served from `all_<collection>` when cached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store query fails.
    pub async fn get_all(&self) -> Result<Vec<E>, AppError> {
        let key = E::collection_key();
        if let Some(all) = self.cached::<Vec<E>>(&key).await {
            return Ok(all);
        }

        let all = self.repository.list().await?;
        self.remember(&key, &all).await;
        Ok(all)
    }

    /// Returns the record with `id`, served from `<entity>_<id>` when cached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store query fails.
    pub async fn get_one(&self, id: E::Id) -> Result<Option<E>, AppError> {
        let key = E::item_key(id);
        if let Some(item) = self.cached::<E>(&key).await {
            return Ok(Some(item));
        }

        let item = self.repository.find_by_id(id).await?;
        if let Some(ref found) = item {
            self.remember(&key, found).await;
        }
        Ok(item)
    }

    /// Inserts a record and drops the collection key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced record does not exist.
    /// Returns [`AppError::Conflict`] on store constraint violations.
    pub async fn create(&self, new: E::New) -> Result<E, AppError> {
        self.references.check_new(&new).await?;

        let created = self.repository.create(new).await?;
        self.forget(&E::collection_key()).await;

        debug!("Created {} {}", E::NAME, created.id());
        Ok(created)
    }

    /// Applies a partial update and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has `id`.
    /// Returns [`AppError::Validation`] if a referenced record does not exist.
    pub async fn update(&self, id: E::Id, patch: E::Patch) -> Result<E, AppError> {
        // A missing target wins over a missing reference
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(self.not_found(id));
        }
        self.references.check_patch(&patch).await?;

        let affected = self.repository.update(id, patch).await?;
        if affected == 0 {
            return Err(self.not_found(id));
        }
        self.invalidate(id).await;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    /// Deletes the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has `id`.
    /// Returns [`AppError::Conflict`] if other records still reference it.
    pub async fn delete(&self, id: E::Id) -> Result<(), AppError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(self.not_found(id));
        }
        self.invalidate(id).await;

        debug!("Deleted {} {}", E::NAME, id);
        Ok(())
    }

    fn not_found(&self, id: E::Id) -> AppError {
        AppError::not_found(
            format!("{} {} not found", E::NAME, id),
            json!({"entity": E::NAME, "id": id.to_string()}),
        )
    }

    async fn invalidate(&self, id: E::Id) {
        self.forget(&E::collection_key()).await;
        if self.policy == InvalidationPolicy::CollectionAndItem {
            self.forget(&E::item_key(id)).await;
        }
    }

    async fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = match self.cache.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Discarding undecodable cache value for {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Cache read failed for {}: {}", key, e);
                None
            }
        };

        let result = if value.is_some() { "hit" } else { "miss" };
        counter!("cache_lookups_total", "entity" => E::NAME, "result" => result).increment(1);
        debug!("Cache {} for {}", result, key);

        value
    }

    async fn remember<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to encode {} for cache: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.cache.set(key, &raw, Some(self.ttl)).await {
            warn!("Cache write failed for {}: {}", key, e);
        }
    }

    async fn forget(&self, key: &str) {
        match self.cache.delete(key).await {
            Ok(()) => debug!("Invalidated {}", key),
            Err(e) => warn!("Cache delete failed for {}: {}", key, e),
        }
    }
}
