//! Short link creation, resolution and deletion.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::application::validation::{CreateRules, validate_new_link};
use crate::domain::entities::{Attribute, Expiry, KeySpace, LinkRecord, NewLink, ShortLink};
use crate::domain::repositories::RecordStore;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_code};

/// Service owning the business rules of the shortener.
///
/// Holds no per-request state; share it behind an `Arc`.
///
/// # Storage protocol
///
/// Each code owns three keys (see [`KeySpace`]): `full`, `expire` and `hits`.
/// They are written together on create and removed together on delete.
/// Concurrent delete and resolve of the same code may observe a partially
/// removed record.
pub struct ShortenerService {
    store: Arc<dyn RecordStore>,
    keys: KeySpace,
    rules: CreateRules,
    backend_ttl: bool,
}

impl ShortenerService {
    /// Creates a service with the default [`CreateRules`].
    pub fn new(store: Arc<dyn RecordStore>, keys: KeySpace) -> Self {
        Self {
            store,
            keys,
            rules: CreateRules::default(),
            backend_ttl: false,
        }
    }

    /// Replaces the validation ruleset.
    pub fn with_rules(mut self, rules: CreateRules) -> Self {
        self.rules = rules;
        self
    }

    /// When enabled, keys are also given a backend TTL equal to the link's
    /// remaining lifetime. Expiry is still checked on every resolve.
    pub fn with_backend_ttl(mut self, enabled: bool) -> Self {
        self.backend_ttl = enabled;
        self
    }

    pub fn keys(&self) -> &KeySpace {
        &self.keys
    }

    /// Validates the request, derives the code and writes the three attributes.
    ///
    /// Creating the same URL twice yields the same code; the second write
    /// replaces the first record's expiry and hit budget.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the request breaks a [`CreateRules`] rule.
    /// Returns [`AppError::Storage`] if the write fails. Keys already written
    /// before a failure are not rolled back by this service.
    pub async fn create(&self, new_link: NewLink) -> Result<ShortLink, AppError> {
        let now = Utc::now().timestamp();
        validate_new_link(&self.rules, &new_link, now)?;

        let full_url = new_link.full_url.trim().to_string();
        let code = generate_code(&full_url);

        let entries = vec![
            (
                self.keys.key(&code, Attribute::Expire),
                new_link.expire_at.to_string(),
            ),
            (self.keys.key(&code, Attribute::Full), full_url.clone()),
            (
                self.keys.key(&code, Attribute::Hits),
                new_link.hit_budget.to_string(),
            ),
        ];

        let ttl_seconds = if self.backend_ttl {
            u64::try_from(new_link.expire_at - now).unwrap_or(0)
        } else {
            0
        };

        self.store.put_many(&entries, ttl_seconds).await?;

        info!(code = %code, "Short link created");

        Ok(ShortLink {
            code,
            full_url,
            expire_at: new_link.expire_at,
            hit_budget: new_link.hit_budget,
        })
    }

    /// Resolves a code to its destination URL.
    ///
    /// # Order of checks
    ///
    /// 1. `expire` is read first; a passed expiry wins even if `full` exists
    /// 2. `full` is read; missing or empty means not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failure.
    /// Returns [`AppError::Expired`] if the stored expiry has passed.
    /// Returns [`AppError::NotFound`] if no destination is stored.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let expire = self
            .store
            .get(&self.keys.key(code, Attribute::Expire))
            .await?;

        let now = Utc::now().timestamp();
        if Expiry::parse(expire.as_deref()).has_passed(now) {
            return Err(AppError::expired(code));
        }

        let full_url = self.store.get(&self.keys.key(code, Attribute::Full)).await?;

        match full_url {
            Some(url) if !url.trim().is_empty() => {
                debug!(code = %code, "Short link resolved");
                Ok(url)
            }
            _ => Err(AppError::not_found(code)),
        }
    }

    /// Deletes every key of `code` in one store call.
    ///
    /// Succeeds whether or not anything was stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `code` contains characters outside
    /// the code alphabet (this keeps glob characters out of the key pattern).
    /// Returns [`AppError::Storage`] on backend failure.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if !is_valid_code(code) {
            return Err(AppError::invalid_parameter(
                "code",
                format!("Invalid parameter code ({})", code),
            ));
        }

        let removed = self.store.delete(&self.keys.pattern(code)).await?;
        info!(code = %code, removed, "Short link deleted");

        Ok(())
    }

    /// Reads the raw stored attributes of a code without the expiry check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no destination is stored.
    /// Returns [`AppError::Storage`] on backend failure.
    pub async fn inspect(&self, code: &str) -> Result<LinkRecord, AppError> {
        let full_url = self.store.get(&self.keys.key(code, Attribute::Full)).await?;
        let expire = self
            .store
            .get(&self.keys.key(code, Attribute::Expire))
            .await?;
        let hits = self.store.get(&self.keys.key(code, Attribute::Hits)).await?;

        if full_url.as_deref().is_none_or(|u| u.trim().is_empty()) {
            return Err(AppError::not_found(code));
        }

        Ok(LinkRecord {
            code: code.to_string(),
            full_url,
            expire,
            hits,
        })
    }

    /// Checks if the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        self.store.ping().await
    }
}
