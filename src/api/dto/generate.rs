//! DTOs for the link generation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::NewLink;
use crate::error::AppError;

/// Request body for `POST /generate`.
///
/// Presence of every field except `short_code` is checked by `validate()`;
/// value rules (URL scheme, future expiry, non-negative budget) are applied
/// by [`crate::application::services::ShortenerService::create`].
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateRequest {
    /// Client label echoed back in the response. Does not affect the code.
    #[serde(default)]
    pub short_code: Option<String>,

    #[validate(required)]
    pub full_url: Option<String>,

    /// Unix timestamp in seconds.
    #[validate(required)]
    pub expire_date: Option<i64>,

    #[validate(required)]
    pub number_of_hits: Option<i64>,
}

impl GenerateRequest {
    /// Splits the request into the echoed label and the core input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the first absent field.
    pub fn into_new_link(self) -> Result<(String, NewLink), AppError> {
        let full_url = self
            .full_url
            .ok_or_else(|| AppError::missing_field("full_url"))?;
        let expire_at = self
            .expire_date
            .ok_or_else(|| AppError::missing_field("expire_date"))?;
        let hit_budget = self
            .number_of_hits
            .ok_or_else(|| AppError::missing_field("number_of_hits"))?;

        Ok((
            self.short_code.unwrap_or_default(),
            NewLink {
                full_url,
                expire_at,
                hit_budget,
            },
        ))
    }
}

/// `data` payload of a successful generate response.
#[derive(Debug, Serialize)]
pub struct GenerateData {
    pub short_code: String,
    pub full_url: String,
    pub short_url: String,
}
