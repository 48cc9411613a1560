//! One-shot notices shown on the next rendered page.
//!
//! Pending notices travel in a `flash` cookie holding a JSON list. The cookie
//! jar percent-encodes the value, so messages may contain spaces and quotes.

use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Flash {
    pub category: FlashCategory,
    #[schema(example = "Venue The Musical Hop was successfully listed!")]
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: message.into(),
        }
    }
}

/// Remove and return every pending notice.
///
/// An unreadable cookie is dropped rather than failing the page.
pub fn take(jar: CookieJar) -> (CookieJar, Vec<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, Vec::new());
    };
    let flashes = serde_json::from_str(cookie.value()).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Discarding unreadable flash cookie");
        Vec::new()
    });
    let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/"));
    (jar, flashes)
}

/// Queue a notice for the next rendered page.
pub fn push(jar: CookieJar, flash: Flash) -> CookieJar {
    let mut pending: Vec<Flash> = jar
        .get(FLASH_COOKIE)
        .and_then(|c| serde_json::from_str(c.value()).ok())
        .unwrap_or_default();
    pending.push(flash);

    let value = match serde_json::to_string(&pending) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode flash messages");
            return jar;
        }
    };
    jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}
